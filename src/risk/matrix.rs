//! Severity x probability risk matrix.
//!
//! The grid is keyed by the (severity, probability) pair; row/column
//! orientation only matters when rendering, where [`RiskMatrix::display_rows`]
//! yields severity 5 down to 1. Entities with factors outside 1..=5 are not
//! placed and are listed in [`RiskMatrix::skipped`] instead.

use super::classifier::RiskClassifier;
use crate::core::{Factor, MatrixPlacement, RatedEntity, RiskRating, FACTOR_MAX};
use crate::error::Result;
use serde::Serialize;

const SIZE: usize = FACTOR_MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskMatrixCell {
    pub severity: Factor,
    pub probability: Factor,
    /// Classified level for populated cells. Empty cells render as `Low`.
    pub level: RiskRating,
    pub count: usize,
}

impl RiskMatrixCell {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntity {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskMatrix {
    /// Indexed `[severity - 1][probability - 1]`.
    cells: [[RiskMatrixCell; SIZE]; SIZE],
    skipped: Vec<SkippedEntity>,
}

impl RiskMatrix {
    fn empty() -> Self {
        let mut cells = [[RiskMatrixCell {
            severity: Factor::MIN,
            probability: Factor::MIN,
            level: RiskRating::Low,
            count: 0,
        }; SIZE]; SIZE];

        for severity in Factor::all() {
            for probability in Factor::all() {
                let cell = &mut cells[severity.index()][probability.index()];
                cell.severity = severity;
                cell.probability = probability;
            }
        }

        Self {
            cells,
            skipped: Vec::new(),
        }
    }

    /// Count entities per (severity, probability) pair.
    ///
    /// The result depends only on the multiset of inputs, not their order,
    /// except for the order of `skipped` which follows the input.
    pub fn build<'a, T, I>(entities: I, classifier: &RiskClassifier) -> Self
    where
        T: MatrixPlacement + RatedEntity + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut matrix = Self::empty();

        for entity in entities {
            match placement(entity) {
                Ok((severity, probability)) => {
                    matrix.cells[severity.index()][probability.index()].count += 1;
                }
                Err(e) => {
                    tracing::debug!(id = entity.id(), "Skipping entity from risk matrix: {}", e);
                    matrix.skipped.push(SkippedEntity {
                        id: entity.id().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        for cell in matrix.cells.iter_mut().flatten() {
            if cell.count > 0 {
                cell.level = classifier.classify_factors(cell.severity, cell.probability);
            }
        }

        matrix
    }

    pub fn get(&self, severity: Factor, probability: Factor) -> &RiskMatrixCell {
        &self.cells[severity.index()][probability.index()]
    }

    /// Look up a cell by raw coordinates.
    pub fn cell(&self, severity: i64, probability: i64) -> Result<&RiskMatrixCell> {
        let severity = Factor::severity(severity)?;
        let probability = Factor::probability(probability)?;
        Ok(self.get(severity, probability))
    }

    /// All 25 cells, severity ascending then probability ascending.
    pub fn cells(&self) -> impl Iterator<Item = &RiskMatrixCell> {
        self.cells.iter().flatten()
    }

    /// Rows as displayed: severity 5 first, probability 1..=5 within a row.
    pub fn display_rows(&self) -> impl Iterator<Item = &[RiskMatrixCell; SIZE]> {
        self.cells.iter().rev()
    }

    pub fn skipped(&self) -> &[SkippedEntity] {
        &self.skipped
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Number of entities placed on the grid.
    pub fn total_count(&self) -> usize {
        self.cells().map(|c| c.count).sum()
    }

    /// Placed entities whose cell level is at least `level`.
    pub fn count_at_or_above(&self, level: RiskRating) -> usize {
        self.cells()
            .filter(|c| c.count > 0 && c.level >= level)
            .map(|c| c.count)
            .sum()
    }
}

fn placement<T: MatrixPlacement>(entity: &T) -> Result<(Factor, Factor)> {
    Ok((
        Factor::severity(entity.severity())?,
        Factor::probability(entity.probability())?,
    ))
}

/// Build a matrix with the default classifier.
pub fn build_matrix<'a, T, I>(entities: I) -> RiskMatrix
where
    T: MatrixPlacement + RatedEntity + 'a,
    I: IntoIterator<Item = &'a T>,
{
    RiskMatrix::build(entities, &RiskClassifier::default())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::testkit::failure_mode;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn counts_sum_to_valid_inputs(factors in prop::collection::vec((-1i64..8, -1i64..8), 0..60)) {
            let modes: Vec<_> = factors
                .iter()
                .enumerate()
                .map(|(i, (s, p))| failure_mode(&format!("FM-{i}"), "x", *s, *p))
                .collect();
            let matrix = build_matrix(&modes);
            prop_assert_eq!(matrix.total_count() + matrix.skipped_count(), modes.len());
        }

        #[test]
        fn counts_are_order_independent(factors in prop::collection::vec((1i64..=5, 1i64..=5), 0..40)) {
            let modes: Vec<_> = factors
                .iter()
                .enumerate()
                .map(|(i, (s, p))| failure_mode(&format!("FM-{i}"), "x", *s, *p))
                .collect();
            let mut reversed = modes.clone();
            reversed.reverse();
            prop_assert_eq!(build_matrix(&modes), build_matrix(&reversed));
        }
    }
}

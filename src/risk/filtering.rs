//! Table-view helpers: row projection, filtering and sorting of failure modes.

use super::badge::{to_display_token, DisplayToken};
use super::classifier::RiskClassifier;
use super::rpn::failure_mode_rpn;
use crate::core::{FailureMode, RatedEntity, RiskRating};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFilter {
    /// Exact, case-sensitive category match.
    pub category: Option<String>,
    /// Keep entities rated at or above this level.
    pub min_rating: Option<RiskRating>,
    /// Case-insensitive substring over id, name and category.
    pub search: Option<String>,
    /// Keep unclassified entities even when `min_rating` is set.
    pub include_unclassified: bool,
}

impl EntityFilter {
    pub fn matches<T: RatedEntity>(&self, entity: &T) -> bool {
        self.matches_category(entity) && self.matches_rating(entity) && self.matches_search(entity)
    }

    fn matches_category<T: RatedEntity>(&self, entity: &T) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| entity.category() == category)
    }

    fn matches_rating<T: RatedEntity>(&self, entity: &T) -> bool {
        match (self.min_rating, entity.risk_rating()) {
            (None, _) => true,
            (Some(min), Some(rating)) => rating >= min,
            (Some(_), None) => self.include_unclassified,
        }
    }

    fn matches_search<T: RatedEntity>(&self, entity: &T) -> bool {
        let Some(needle) = self.search.as_deref().map(str::to_lowercase) else {
            return true;
        };
        [entity.id(), entity.name(), entity.category()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a, T: RatedEntity>(&self, entities: &'a [T]) -> Vec<&'a T> {
        entities.iter().filter(|e| self.matches(*e)).collect()
    }
}

/// One failure mode as shown in the list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureModeRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub severity: i64,
    pub probability: i64,
    pub detection: Option<i64>,
    /// Recomputed RPN; `None` when a factor is out of range.
    pub rpn: Option<u32>,
    /// Rating carried by the record.
    pub rating: Option<RiskRating>,
    /// Band of the recomputed RPN.
    pub rpn_band: Option<RiskRating>,
    pub token: DisplayToken,
}

impl FailureModeRow {
    pub fn from_mode(mode: &FailureMode, classifier: &RiskClassifier) -> Self {
        let rpn = failure_mode_rpn(mode).ok();
        let rpn_band = rpn.and_then(|value| classifier.classify(f64::from(value)).ok());
        Self {
            id: mode.id.clone(),
            name: mode.name.clone(),
            category: mode.category.clone(),
            severity: mode.severity,
            probability: mode.probability,
            detection: mode.detection,
            rpn,
            rating: mode.risk_rating,
            rpn_band,
            token: to_display_token(mode.risk_rating),
        }
    }
}

pub fn failure_mode_rows<'a, I>(modes: I, classifier: &RiskClassifier) -> Vec<FailureModeRow>
where
    I: IntoIterator<Item = &'a FailureMode>,
{
    modes
        .into_iter()
        .map(|mode| FailureModeRow::from_mode(mode, classifier))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Rpn,
    Severity,
    Id,
}

/// Descending by key, ties broken by id; rows with invalid factors sink.
pub fn sort_rows(rows: &mut [FailureModeRow], key: SortKey) {
    rows.sort_by(|a, b| compare_rows(a, b, key));
}

fn compare_rows(a: &FailureModeRow, b: &FailureModeRow, key: SortKey) -> Ordering {
    let validity = b.rpn.is_some().cmp(&a.rpn.is_some());
    let primary = match key {
        SortKey::Rpn => b.rpn.cmp(&a.rpn),
        SortKey::Severity => b.severity.cmp(&a.severity),
        SortKey::Id => Ordering::Equal,
    };
    validity.then(primary).then_with(|| a.id.cmp(&b.id))
}

/// The `n` highest-RPN rows with valid factors.
pub fn top_risks(rows: &[FailureModeRow], n: usize) -> Vec<FailureModeRow> {
    let mut ranked: Vec<FailureModeRow> = rows.iter().filter(|r| r.rpn.is_some()).cloned().collect();
    sort_rows(&mut ranked, SortKey::Rpn);
    ranked.truncate(n);
    ranked
}

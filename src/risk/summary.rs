//! Dashboard rollups over a rated-entity snapshot.
//!
//! Counts are recomputed from the snapshot on every call and are independent
//! of input order.

use crate::core::{RatedEntity, RiskRating};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-level counts with an explicit bucket for records lacking a rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskLevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
    pub unclassified: usize,
}

impl RiskLevelCounts {
    pub fn record(&mut self, rating: Option<RiskRating>) {
        match rating {
            Some(RiskRating::Low) => self.low += 1,
            Some(RiskRating::Medium) => self.medium += 1,
            Some(RiskRating::High) => self.high += 1,
            Some(RiskRating::Critical) => self.critical += 1,
            None => self.unclassified += 1,
        }
    }

    pub fn get(&self, rating: Option<RiskRating>) -> usize {
        match rating {
            Some(RiskRating::Low) => self.low,
            Some(RiskRating::Medium) => self.medium,
            Some(RiskRating::High) => self.high,
            Some(RiskRating::Critical) => self.critical,
            None => self.unclassified,
        }
    }

    pub fn high_critical(&self) -> usize {
        self.high + self.critical
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical + self.unclassified
    }
}

impl FromIterator<Option<RiskRating>> for RiskLevelCounts {
    fn from_iter<I: IntoIterator<Item = Option<RiskRating>>>(iter: I) -> Self {
        let mut counts = Self::default();
        for rating in iter {
            counts.record(rating);
        }
        counts
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub total: usize,
    /// Exact, case-sensitive category labels.
    pub by_category: BTreeMap<String, usize>,
    pub by_risk_level: RiskLevelCounts,
    pub high_critical_count: usize,
}

pub fn summarize<'a, T, I>(entities: I) -> SummaryCounts
where
    T: RatedEntity + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_risk_level = RiskLevelCounts::default();

    for entity in entities {
        *by_category.entry(entity.category().to_string()).or_default() += 1;
        by_risk_level.record(entity.risk_rating());
    }

    SummaryCounts {
        total: by_risk_level.total(),
        high_critical_count: by_risk_level.high_critical(),
        by_category,
        by_risk_level,
    }
}

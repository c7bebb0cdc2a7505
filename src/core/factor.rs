//! Validated FMEA factor (severity, probability or detection).
//!
//! Raw factors arrive as signed integers from the snapshot so that bad data
//! survives loading. [`Factor::new`] is the single place where the 1..=5 range
//! is enforced; everything downstream works with the refined type.

use crate::error::{FactorKind, Result, RiskError};
use serde::Serialize;
use std::fmt;

pub const FACTOR_MIN: u8 = 1;
pub const FACTOR_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Factor(u8);

impl Factor {
    pub const MIN: Factor = Factor(FACTOR_MIN);
    pub const MAX: Factor = Factor(FACTOR_MAX);

    /// Validate a raw factor value. Out-of-range input is an error, never clamped.
    pub fn new(kind: FactorKind, value: i64) -> Result<Self> {
        if (FACTOR_MIN as i64..=FACTOR_MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RiskError::invalid_factor(kind, value))
        }
    }

    pub fn severity(value: impl Into<i64>) -> Result<Self> {
        Self::new(FactorKind::Severity, value.into())
    }

    pub fn probability(value: impl Into<i64>) -> Result<Self> {
        Self::new(FactorKind::Probability, value.into())
    }

    pub fn detection(value: impl Into<i64>) -> Result<Self> {
        Self::new(FactorKind::Detection, value.into())
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index for 5-element lookup tables.
    pub const fn index(self) -> usize {
        (self.0 - FACTOR_MIN) as usize
    }

    /// Every valid factor, ascending.
    pub fn all() -> impl DoubleEndedIterator<Item = Factor> {
        (FACTOR_MIN..=FACTOR_MAX).map(Factor)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_inclusive_range() {
        assert_eq!(Factor::severity(1).unwrap().get(), 1);
        assert_eq!(Factor::severity(5).unwrap().get(), 5);
    }

    #[test]
    fn rejects_out_of_range_without_clamping() {
        assert_eq!(
            Factor::severity(6),
            Err(RiskError::invalid_factor(FactorKind::Severity, 6))
        );
        assert_eq!(
            Factor::probability(0),
            Err(RiskError::invalid_factor(FactorKind::Probability, 0))
        );
        assert!(Factor::detection(-3).is_err());
    }

    #[test]
    fn index_is_zero_based() {
        let indices: Vec<usize> = Factor::all().map(Factor::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }
}

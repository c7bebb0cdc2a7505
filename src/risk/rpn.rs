//! Risk priority number.
//!
//! The RPN is always recomputed from the factors: `S x P x D` when detection is
//! known, `S x P` otherwise. A stored `rpn` on a record is legacy input and is
//! only compared against the recomputed value, never trusted.

use crate::core::{Factor, FailureMode};
use crate::error::Result;
use serde::Serialize;

/// Compute the RPN from raw factors. Every supplied factor must be in 1..=5.
pub fn compute_rpn(severity: i64, probability: i64, detection: Option<i64>) -> Result<u32> {
    let severity = Factor::severity(severity)?;
    let probability = Factor::probability(probability)?;
    let detection = detection.map(Factor::detection).transpose()?;
    Ok(rpn_from_factors(severity, probability, detection))
}

pub fn rpn_from_factors(severity: Factor, probability: Factor, detection: Option<Factor>) -> u32 {
    let base = u32::from(severity.get()) * u32::from(probability.get());
    match detection {
        Some(d) => base * u32::from(d.get()),
        None => base,
    }
}

/// Canonical RPN for a failure mode.
pub fn failure_mode_rpn(mode: &FailureMode) -> Result<u32> {
    compute_rpn(mode.severity, mode.probability, mode.detection)
}

/// Outcome of comparing a stored RPN with the recomputed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RpnCheck {
    /// No stored value.
    Absent,
    Consistent { rpn: u32 },
    /// Stored value is the 2-factor product although detection is present.
    LegacyTwoFactor { stored: i64, computed: u32 },
    Stale { stored: i64, computed: u32 },
}

impl RpnCheck {
    pub fn is_consistent(&self) -> bool {
        matches!(self, RpnCheck::Absent | RpnCheck::Consistent { .. })
    }
}

pub fn check_rpn(mode: &FailureMode) -> Result<RpnCheck> {
    let computed = failure_mode_rpn(mode)?;
    let Some(stored) = mode.rpn else {
        return Ok(RpnCheck::Absent);
    };

    if stored == i64::from(computed) {
        return Ok(RpnCheck::Consistent { rpn: computed });
    }

    let two_factor = compute_rpn(mode.severity, mode.probability, None)?;
    if mode.detection.is_some() && stored == i64::from(two_factor) {
        Ok(RpnCheck::LegacyTwoFactor { stored, computed })
    } else {
        Ok(RpnCheck::Stale { stored, computed })
    }
}

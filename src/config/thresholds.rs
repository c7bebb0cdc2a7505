use crate::core::RiskRating;
use crate::error::{Result, RiskError};
use serde::{Deserialize, Serialize};

/// Upper bounds of the low, medium and high bands. Anything above
/// `high_max` is critical.
///
/// ```toml
/// [thresholds.rpn]
/// low_max = 31
/// medium_max = 62
/// high_max = 93
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low_max: f64,
    pub medium_max: f64,
    pub high_max: f64,
}

impl RiskThresholds {
    pub fn new(low_max: f64, medium_max: f64, high_max: f64) -> Result<Self> {
        let thresholds = Self {
            low_max,
            medium_max,
            high_max,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Quartile bands over the 3-factor RPN scale (1..=125).
    pub const fn rpn_defaults() -> Self {
        Self {
            low_max: 31.0,
            medium_max: 62.0,
            high_max: 93.0,
        }
    }

    /// Classic 5x5 matrix bands over severity x probability (1..=25).
    pub const fn matrix_defaults() -> Self {
        Self {
            low_max: 4.0,
            medium_max: 9.0,
            high_max: 16.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let bounds = [self.low_max, self.medium_max, self.high_max];
        if bounds.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(RiskError::InvalidThresholds(format!(
                "bounds must be finite and positive, got {:?}",
                bounds
            )));
        }
        if !(self.low_max < self.medium_max && self.medium_max < self.high_max) {
            return Err(RiskError::InvalidThresholds(format!(
                "bounds must be strictly ascending (low_max < medium_max < high_max), got {} / {} / {}",
                self.low_max, self.medium_max, self.high_max
            )));
        }
        Ok(())
    }

    /// Band lookup. Callers validate `value` first.
    pub fn band(&self, value: f64) -> RiskRating {
        if value <= self.low_max {
            RiskRating::Low
        } else if value <= self.medium_max {
            RiskRating::Medium
        } else if value <= self.high_max {
            RiskRating::High
        } else {
            RiskRating::Critical
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "RiskThresholds::rpn_defaults")]
    pub rpn: RiskThresholds,

    #[serde(default = "RiskThresholds::matrix_defaults")]
    pub matrix: RiskThresholds,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            rpn: RiskThresholds::rpn_defaults(),
            matrix: RiskThresholds::matrix_defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RiskThresholds::rpn_defaults().validate().is_ok());
        assert!(RiskThresholds::matrix_defaults().validate().is_ok());
    }

    #[test]
    fn band_boundaries_are_inclusive_upper_bounds() {
        let t = RiskThresholds::matrix_defaults();
        assert_eq!(t.band(4.0), RiskRating::Low);
        assert_eq!(t.band(5.0), RiskRating::Medium);
        assert_eq!(t.band(9.0), RiskRating::Medium);
        assert_eq!(t.band(10.0), RiskRating::High);
        assert_eq!(t.band(16.0), RiskRating::High);
        assert_eq!(t.band(20.0), RiskRating::Critical);
    }

    #[test]
    fn rejects_non_ascending_bounds() {
        assert!(RiskThresholds::new(10.0, 10.0, 20.0).is_err());
        assert!(RiskThresholds::new(30.0, 20.0, 40.0).is_err());
    }

    #[test]
    fn rejects_non_finite_or_non_positive_bounds() {
        assert!(RiskThresholds::new(f64::NAN, 10.0, 20.0).is_err());
        assert!(RiskThresholds::new(0.0, 10.0, 20.0).is_err());
        assert!(RiskThresholds::new(1.0, 10.0, f64::INFINITY).is_err());
    }
}

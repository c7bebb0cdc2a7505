//! Risk level classification.
//!
//! Two entry points share one band lookup: [`RiskClassifier::classify`] for an
//! RPN value and [`RiskClassifier::classify_from_matrix`] for a
//! severity/probability pair. Both are total over valid input and pure.

use crate::config::{RiskThresholds, ThresholdsConfig};
use crate::core::{Factor, RiskRating};
use crate::error::{Result, RiskError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskClassifier {
    rpn: RiskThresholds,
    matrix: RiskThresholds,
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self {
            rpn: RiskThresholds::rpn_defaults(),
            matrix: RiskThresholds::matrix_defaults(),
        }
    }
}

impl RiskClassifier {
    pub fn new(rpn: RiskThresholds, matrix: RiskThresholds) -> Result<Self> {
        rpn.validate()?;
        matrix.validate()?;
        Ok(Self { rpn, matrix })
    }

    pub fn from_config(config: &ThresholdsConfig) -> Result<Self> {
        Self::new(config.rpn, config.matrix)
    }

    pub fn rpn_thresholds(&self) -> &RiskThresholds {
        &self.rpn
    }

    pub fn matrix_thresholds(&self) -> &RiskThresholds {
        &self.matrix
    }

    /// Classify a risk priority number. `rpn` must be finite and at least 1.
    pub fn classify(&self, rpn: f64) -> Result<RiskRating> {
        if !rpn.is_finite() || rpn < 1.0 {
            return Err(RiskError::InvalidRating { value: rpn });
        }
        Ok(self.rpn.band(rpn))
    }

    /// Classify a matrix coordinate by its severity x probability product.
    pub fn classify_from_matrix(&self, severity: i64, probability: i64) -> Result<RiskRating> {
        let severity = Factor::severity(severity)?;
        let probability = Factor::probability(probability)?;
        Ok(self.classify_factors(severity, probability))
    }

    /// Infallible variant for already-validated factors.
    pub fn classify_factors(&self, severity: Factor, probability: Factor) -> RiskRating {
        let product = f64::from(severity.get()) * f64::from(probability.get());
        self.matrix.band(product)
    }
}

/// Classify with the default RPN bands.
pub fn classify(rpn: f64) -> Result<RiskRating> {
    RiskClassifier::default().classify(rpn)
}

/// Classify with the default matrix bands.
pub fn classify_from_matrix(severity: i64, probability: i64) -> Result<RiskRating> {
    RiskClassifier::default().classify_from_matrix(severity, probability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactorKind;

    #[test]
    fn classify_uses_quartile_bands_by_default() {
        assert_eq!(classify(1.0).unwrap(), RiskRating::Low);
        assert_eq!(classify(31.0).unwrap(), RiskRating::Low);
        assert_eq!(classify(31.5).unwrap(), RiskRating::Medium);
        assert_eq!(classify(62.0).unwrap(), RiskRating::Medium);
        assert_eq!(classify(80.0).unwrap(), RiskRating::High);
        assert_eq!(classify(100.0).unwrap(), RiskRating::Critical);
        assert_eq!(classify(125.0).unwrap(), RiskRating::Critical);
    }

    #[test]
    fn classify_rejects_zero_negative_and_non_finite() {
        for bad in [0.0, -1.0, 0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(classify(bad), Err(RiskError::InvalidRating { .. })),
                "expected InvalidRating for {bad}"
            );
        }
    }

    #[test]
    fn classify_from_matrix_reproduces_classic_grid() {
        assert_eq!(classify_from_matrix(1, 1).unwrap(), RiskRating::Low);
        assert_eq!(classify_from_matrix(2, 2).unwrap(), RiskRating::Low);
        assert_eq!(classify_from_matrix(5, 1).unwrap(), RiskRating::Medium);
        assert_eq!(classify_from_matrix(3, 3).unwrap(), RiskRating::Medium);
        assert_eq!(classify_from_matrix(2, 5).unwrap(), RiskRating::High);
        assert_eq!(classify_from_matrix(4, 4).unwrap(), RiskRating::High);
        assert_eq!(classify_from_matrix(5, 4).unwrap(), RiskRating::Critical);
        assert_eq!(classify_from_matrix(5, 5).unwrap(), RiskRating::Critical);
    }

    #[test]
    fn classify_from_matrix_rejects_out_of_range_factors() {
        assert_eq!(
            classify_from_matrix(6, 1),
            Err(RiskError::invalid_factor(FactorKind::Severity, 6))
        );
        assert_eq!(
            classify_from_matrix(3, 0),
            Err(RiskError::invalid_factor(FactorKind::Probability, 0))
        );
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let classifier = RiskClassifier::new(
            RiskThresholds::new(10.0, 20.0, 30.0).unwrap(),
            RiskThresholds::matrix_defaults(),
        )
        .unwrap();
        assert_eq!(classifier.classify(15.0).unwrap(), RiskRating::Medium);
        assert_eq!(classifier.classify(31.0).unwrap(), RiskRating::Critical);
    }

    #[test]
    fn new_rejects_invalid_thresholds() {
        let bad = RiskThresholds {
            low_max: 50.0,
            medium_max: 10.0,
            high_max: 90.0,
        };
        assert!(RiskClassifier::new(bad, RiskThresholds::matrix_defaults()).is_err());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn classify_is_monotonic(a in 1.0..200.0f64, b in 1.0..200.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(lo).unwrap() <= classify(hi).unwrap());
        }

        #[test]
        fn classify_from_matrix_is_deterministic(s in 1i64..=5, p in 1i64..=5) {
            prop_assert_eq!(classify_from_matrix(s, p).unwrap(), classify_from_matrix(s, p).unwrap());
        }

        #[test]
        fn classify_from_matrix_is_total_over_valid_input(s in 1i64..=5, p in 1i64..=5) {
            prop_assert!(classify_from_matrix(s, p).is_ok());
        }
    }
}

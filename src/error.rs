//! Error types for risk computations and their I/O edges.
//!
//! Library functions return [`RiskError`] for validation failures. Loading
//! configuration and snapshots has its own error enums so callers can tell a
//! bad file apart from a bad rating. The binary wraps all of them in `anyhow`.
//!
//! # Error Codes
//!
//! - E020-E029: Configuration errors
//! - E030-E039: Snapshot loading errors
//! - E050-E059: Validation errors

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - file not found
    pub const CONFIG_FILE_NOT_FOUND: ErrorCode = ErrorCode("E022");
    /// Config error - generic
    pub const CONFIG_GENERIC: ErrorCode = ErrorCode("E029");

    /// Snapshot error - unreadable file
    pub const SNAPSHOT_IO: ErrorCode = ErrorCode("E030");
    /// Snapshot error - malformed document
    pub const SNAPSHOT_PARSE: ErrorCode = ErrorCode("E031");
    /// Snapshot error - unsupported extension
    pub const SNAPSHOT_FORMAT: ErrorCode = ErrorCode("E032");

    /// Validation error - factor outside 1..=5
    pub const VALIDATION_FACTOR: ErrorCode = ErrorCode("E050");
    /// Validation error - rpn not a positive finite number
    pub const VALIDATION_RATING: ErrorCode = ErrorCode("E051");
    /// Validation error - thresholds not ascending
    pub const VALIDATION_THRESHOLDS: ErrorCode = ErrorCode("E052");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which FMEA factor a value was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Severity,
    Probability,
    Detection,
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorKind::Severity => write!(f, "severity"),
            FactorKind::Probability => write!(f, "probability"),
            FactorKind::Detection => write!(f, "detection"),
        }
    }
}

/// Validation failures raised by the classifier, RPN calculator and matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("invalid {factor} factor {value}: must be an integer in 1..=5")]
    InvalidFactor { factor: FactorKind, value: i64 },

    #[error("invalid rpn {value}: must be a finite number >= 1")]
    InvalidRating { value: f64 },

    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),
}

impl RiskError {
    pub fn invalid_factor(factor: FactorKind, value: impl Into<i64>) -> Self {
        Self::InvalidFactor {
            factor,
            value: value.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidFactor { .. } => ErrorCode::VALIDATION_FACTOR,
            Self::InvalidRating { .. } => ErrorCode::VALIDATION_RATING,
            Self::InvalidThresholds(_) => ErrorCode::VALIDATION_THRESHOLDS,
        }
    }
}

/// Result type alias for risk computations.
pub type Result<T> = std::result::Result<T, RiskError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid [thresholds.{section}] section: {source}")]
    Thresholds {
        section: &'static str,
        #[source]
        source: RiskError,
    },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::CONFIG_FILE_NOT_FOUND,
            Self::Read { .. } => ErrorCode::CONFIG_GENERIC,
            Self::Parse(_) | Self::Thresholds { .. } => ErrorCode::CONFIG_INVALID,
        }
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported snapshot format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("malformed JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SnapshotError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } => ErrorCode::SNAPSHOT_IO,
            Self::UnsupportedFormat(_) => ErrorCode::SNAPSHOT_FORMAT,
            Self::Json(_) | Self::Yaml(_) => ErrorCode::SNAPSHOT_PARSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_factor_message_names_the_factor() {
        let err = RiskError::invalid_factor(FactorKind::Severity, 6);
        assert_eq!(
            err.to_string(),
            "invalid severity factor 6: must be an integer in 1..=5"
        );
        assert_eq!(err.code(), ErrorCode::VALIDATION_FACTOR);
    }

    #[test]
    fn error_codes_are_distinct_per_variant() {
        let codes = [
            RiskError::invalid_factor(FactorKind::Detection, 0).code(),
            RiskError::InvalidRating { value: -1.0 }.code(),
            RiskError::InvalidThresholds("x".into()).code(),
        ];
        assert_eq!(codes[0].as_str(), "E050");
        assert_eq!(codes[1].as_str(), "E051");
        assert_eq!(codes[2].as_str(), "E052");
    }
}

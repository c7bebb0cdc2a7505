//! Risk classification and aggregation for FMEA dashboards.
//!
//! The library turns a snapshot of failure modes, assets and spare parts into
//! dashboard projections: risk levels, a 5x5 severity/probability matrix,
//! per-level summary counts and display tokens. All projections are pure and
//! rebuilt on demand.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod risk;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    Asset, Factor, FailureMode, PartStatus, RiskRating, Snapshot, SparePart,
};

pub use crate::error::{ConfigError, ErrorCode, RiskError, SnapshotError};

pub use crate::config::{DashboardConfig, RiskThresholds, ThresholdsConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::risk::{
    build_matrix, classify, classify_from_matrix, compute_rpn, summarize, to_display_token,
    DashboardOverview, DisplayToken, RiskClassifier, RiskMatrix, RiskMatrixCell, SummaryCounts,
};

//! Risk classification and aggregation.
//!
//! Every function here is a pure projection over an immutable snapshot:
//! classification, RPN computation, the risk matrix, summary counts and the
//! display-token mapping. Nothing is cached; views are rebuilt on each call.

pub mod badge;
pub mod classifier;
pub mod filtering;
pub mod insights;
pub mod matrix;
pub mod rpn;
pub mod stock;
pub mod summary;

pub use badge::{to_display_token, DisplayToken, TokenColor};
pub use classifier::{classify, classify_from_matrix, RiskClassifier};
pub use filtering::{
    failure_mode_rows, sort_rows, top_risks, EntityFilter, FailureModeRow, SortKey,
};
pub use insights::{rpn_findings, DashboardOverview, RpnFinding, RpnIssue};
pub use matrix::{build_matrix, RiskMatrix, RiskMatrixCell, SkippedEntity};
pub use rpn::{check_rpn, compute_rpn, failure_mode_rpn, RpnCheck};
pub use stock::{low_stock, stock_status_counts, StockStatusCounts};
pub use summary::{summarize, RiskLevelCounts, SummaryCounts};

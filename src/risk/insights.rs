//! Dashboard landing-page projection.
//!
//! Combines summaries, the risk matrix, top risks, stock status and RPN
//! findings from a single snapshot. Rebuilt from scratch on every call.

use super::classifier::RiskClassifier;
use super::filtering::{failure_mode_rows, top_risks, FailureModeRow};
use super::matrix::RiskMatrix;
use super::rpn::{check_rpn, RpnCheck};
use super::stock::{low_stock, stock_status_counts, StockStatusCounts};
use super::summary::{summarize, SummaryCounts};
use crate::core::{FailureMode, Snapshot, SparePart};
use serde::Serialize;

/// A failure mode whose stored RPN disagrees with its factors, or whose
/// factors cannot produce an RPN at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpnFinding {
    pub id: String,
    #[serde(flatten)]
    pub issue: RpnIssue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum RpnIssue {
    Mismatch { check: RpnCheck },
    InvalidFactors { reason: String },
}

pub fn rpn_findings(modes: &[FailureMode]) -> Vec<RpnFinding> {
    modes
        .iter()
        .filter_map(|mode| {
            let issue = match check_rpn(mode) {
                Ok(check) if check.is_consistent() => return None,
                Ok(check) => RpnIssue::Mismatch { check },
                Err(e) => RpnIssue::InvalidFactors {
                    reason: e.to_string(),
                },
            };
            Some(RpnFinding {
                id: mode.id.clone(),
                issue,
            })
        })
        .collect()
}

/// Everything the dashboard landing page shows, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub failure_modes: SummaryCounts,
    pub components: SummaryCounts,
    pub equipment: SummaryCounts,
    pub matrix: RiskMatrix,
    pub top_risks: Vec<FailureModeRow>,
    pub low_stock: Vec<SparePart>,
    pub stock_status: StockStatusCounts,
    pub rpn_findings: Vec<RpnFinding>,
}

impl DashboardOverview {
    pub fn build(snapshot: &Snapshot, classifier: &RiskClassifier, top_n: usize) -> Self {
        let _span = tracing::info_span!("overview").entered();

        let rows = failure_mode_rows(&snapshot.failure_modes, classifier);
        let overview = Self {
            failure_modes: summarize(&snapshot.failure_modes),
            components: summarize(&snapshot.components),
            equipment: summarize(&snapshot.equipment),
            matrix: RiskMatrix::build(&snapshot.failure_modes, classifier),
            top_risks: top_risks(&rows, top_n),
            low_stock: low_stock(&snapshot.spare_parts).into_iter().cloned().collect(),
            stock_status: stock_status_counts(&snapshot.spare_parts),
            rpn_findings: rpn_findings(&snapshot.failure_modes),
        };

        tracing::debug!(
            failure_modes = overview.failure_modes.total,
            skipped = overview.matrix.skipped_count(),
            low_stock = overview.low_stock.len(),
            rpn_findings = overview.rpn_findings.len(),
            "Overview built"
        );
        overview
    }

    /// Unclassified records across every rated collection.
    pub fn unclassified_total(&self) -> usize {
        self.failure_modes.by_risk_level.unclassified
            + self.components.by_risk_level.unclassified
            + self.equipment.by_risk_level.unclassified
    }
}

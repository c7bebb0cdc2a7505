//! Snapshot-backed dashboard views.
//!
//! Each command follows the same pipeline: resolve config, build the
//! classifier, load the snapshot, project it, then hand the projection to
//! an [`OutputWriter`](crate::io::OutputWriter).

use crate::config::{load_config, DashboardConfig};
use crate::core::{RiskRating, Snapshot};
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, load_snapshot, OutputFormat, OutputWriter};
use crate::observability::{set_phase, set_snapshot, Phase};
use crate::risk::{
    failure_mode_rows, low_stock, sort_rows, DashboardOverview, EntityFilter, RiskClassifier,
    RiskMatrix, SortKey,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Inputs shared by every report command.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub snapshot: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

#[derive(Debug, Clone, Default)]
pub struct FailureModeQuery {
    pub category: Option<String>,
    pub min_rating: Option<RiskRating>,
    pub search: Option<String>,
    pub include_unclassified: bool,
    pub sort: SortKey,
    pub top: Option<usize>,
}

impl FailureModeQuery {
    fn filter(&self) -> EntityFilter {
        EntityFilter {
            category: self.category.clone(),
            min_rating: self.min_rating,
            search: self.search.clone(),
            include_unclassified: self.include_unclassified,
        }
    }
}

struct Prepared {
    config: DashboardConfig,
    classifier: RiskClassifier,
    snapshot: Snapshot,
}

fn prepare(report: &ReportConfig) -> Result<Prepared> {
    let config = {
        let _phase = set_phase(Phase::ConfigLoading);
        load_config(report.config.as_deref()).context("Failed to load configuration")?
    };
    let classifier = RiskClassifier::from_config(&config.thresholds)
        .context("Configured thresholds are invalid")?;

    let snapshot = {
        let _phase = set_phase(Phase::SnapshotLoading);
        load_snapshot(&report.snapshot)
            .with_context(|| format!("Failed to load snapshot {}", report.snapshot.display()))?
    };

    Ok(Prepared {
        config,
        classifier,
        snapshot,
    })
}

/// CLI flag first, then the config's default, then terminal.
fn resolve_format(flag: Option<OutputFormat>, config: &DashboardConfig) -> OutputFormat {
    flag.or(config.output.default_format)
        .unwrap_or(OutputFormat::Terminal)
}

fn with_writer<F>(report: &ReportConfig, config: &DashboardConfig, render: F) -> Result<()>
where
    F: FnOnce(&mut dyn OutputWriter) -> Result<()>,
{
    let _phase = set_phase(Phase::OutputGeneration);
    let format = resolve_format(report.format, config);
    let destination = io::open_destination(report.output.as_deref())?;
    let mut writer = create_writer(format, destination, report.formatting);
    render(writer.as_mut())?;
    writer.flush().context("Failed to flush output")?;

    if let Some(path) = &report.output {
        tracing::info!("Report written to {}", path.display());
    }
    Ok(())
}

pub fn run_overview(report: ReportConfig, top: Option<usize>) -> Result<()> {
    let _snapshot = set_snapshot(&report.snapshot);
    let Prepared {
        config,
        classifier,
        snapshot,
    } = prepare(&report)?;

    let overview = {
        let _phase = set_phase(Phase::Aggregation);
        let top_n = top.unwrap_or(config.output.top_risks);
        DashboardOverview::build(&snapshot, &classifier, top_n)
    };
    tracing::debug!(
        unclassified = overview.unclassified_total(),
        skipped = overview.matrix.skipped_count(),
        "Overview aggregated"
    );

    with_writer(&report, &config, |writer| writer.write_overview(&overview))
}

pub fn run_matrix(report: ReportConfig) -> Result<()> {
    let _snapshot = set_snapshot(&report.snapshot);
    let Prepared {
        config,
        classifier,
        snapshot,
    } = prepare(&report)?;

    let matrix = {
        let _phase = set_phase(Phase::Aggregation);
        RiskMatrix::build(&snapshot.failure_modes, &classifier)
    };
    for skipped in matrix.skipped() {
        tracing::warn!("Skipping {} in risk matrix: {}", skipped.id, skipped.reason);
    }

    with_writer(&report, &config, |writer| writer.write_matrix(&matrix))
}

pub fn run_failure_modes(report: ReportConfig, query: FailureModeQuery) -> Result<()> {
    let _snapshot = set_snapshot(&report.snapshot);
    let Prepared {
        config,
        classifier,
        snapshot,
    } = prepare(&report)?;

    let rows = {
        let _phase = set_phase(Phase::Aggregation);
        let selected = query.filter().apply(&snapshot.failure_modes);
        let mut rows = failure_mode_rows(selected, &classifier);
        sort_rows(&mut rows, query.sort);
        if let Some(n) = query.top {
            rows.truncate(n);
        }
        rows
    };
    tracing::debug!(
        "{} of {} failure modes selected",
        rows.len(),
        snapshot.failure_modes.len()
    );

    with_writer(&report, &config, |writer| writer.write_failure_modes(&rows))
}

pub fn run_low_stock(report: ReportConfig) -> Result<()> {
    let _snapshot = set_snapshot(&report.snapshot);
    let Prepared {
        config, snapshot, ..
    } = prepare(&report)?;

    let parts = low_stock(&snapshot.spare_parts);
    with_writer(&report, &config, |writer| writer.write_low_stock(&parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::testkit::sample_snapshot;
    use tempfile::TempDir;

    fn report_for(dir: &TempDir, output: &str) -> ReportConfig {
        let snapshot_path = dir.path().join("plant.json");
        let json = serde_json::to_string(&sample_snapshot()).unwrap();
        std::fs::write(&snapshot_path, json).unwrap();

        let config_path = dir.path().join("fmeadash.toml");
        std::fs::write(&config_path, "").unwrap();

        ReportConfig {
            snapshot: snapshot_path,
            config: Some(config_path),
            format: Some(OutputFormat::Json),
            output: Some(dir.path().join(output)),
            formatting: FormattingConfig::plain(),
        }
    }

    #[test]
    fn format_flag_beats_config_default() {
        let config = DashboardConfig {
            output: OutputConfig {
                default_format: Some(OutputFormat::Markdown),
                ..OutputConfig::default()
            },
            ..DashboardConfig::default()
        };
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), &config),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, &config), OutputFormat::Markdown);
        assert_eq!(
            resolve_format(None, &DashboardConfig::default()),
            OutputFormat::Terminal
        );
    }

    #[test]
    fn failure_modes_report_applies_filter_and_sort() {
        let dir = TempDir::new().unwrap();
        let report = report_for(&dir, "rows.json");
        let out = report.output.clone().unwrap();

        let query = FailureModeQuery {
            min_rating: Some(RiskRating::Medium),
            sort: SortKey::Rpn,
            ..FailureModeQuery::default()
        };
        run_failure_modes(report, query).unwrap();

        let rows: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        let ids: Vec<&str> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["FM-001", "FM-002"]);
    }

    #[test]
    fn missing_snapshot_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let mut report = report_for(&dir, "out.json");
        report.snapshot = dir.path().join("absent.json");

        let err = run_low_stock(report).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }
}

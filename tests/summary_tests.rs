//! Summary counts across the collections of one snapshot.

mod common;

use fmeadash::io::load_snapshot;
use fmeadash::risk::{summarize, DashboardOverview, RiskClassifier, RiskLevelCounts};
use fmeadash::testkit::sample_snapshot;
use fmeadash::RiskRating;
use pretty_assertions::assert_eq;

#[test]
fn unclassified_records_are_counted_in_every_collection() {
    let snapshot = sample_snapshot();

    let modes = summarize(&snapshot.failure_modes);
    assert_eq!(modes.total, 4);
    assert_eq!(modes.by_risk_level.unclassified, 1);
    assert_eq!(modes.by_risk_level.total(), modes.total);

    let components = summarize(&snapshot.components);
    assert_eq!(
        components.by_risk_level,
        RiskLevelCounts {
            low: 1,
            medium: 0,
            high: 1,
            critical: 0,
            unclassified: 1,
        }
    );
    assert_eq!(components.high_critical_count, 1);
    assert_eq!(components.by_category.get("Pump"), Some(&2));
}

#[test]
fn unknown_rating_strings_fall_into_unclassified() {
    let snapshot = load_snapshot(&common::fixture("plant.yaml")).unwrap();
    let summary = summarize(&snapshot.failure_modes);

    assert_eq!(summary.by_risk_level.get(Some(RiskRating::High)), 1);
    assert_eq!(summary.by_risk_level.get(Some(RiskRating::Critical)), 1);
    assert_eq!(summary.by_risk_level.get(None), 2);
    assert_eq!(summary.high_critical_count, 2);
}

#[test]
fn summaries_ignore_input_order() {
    let snapshot = sample_snapshot();
    let mut reversed = snapshot.components.clone();
    reversed.reverse();
    assert_eq!(summarize(&snapshot.components), summarize(&reversed));
}

#[test]
fn overview_totals_match_collection_sizes() {
    let snapshot = sample_snapshot();
    let overview = DashboardOverview::build(&snapshot, &RiskClassifier::default(), 2);

    assert_eq!(overview.failure_modes.total, snapshot.failure_modes.len());
    assert_eq!(overview.components.total, snapshot.components.len());
    assert_eq!(overview.equipment.total, snapshot.equipment.len());
    assert_eq!(overview.unclassified_total(), 2);
    assert_eq!(overview.top_risks.len(), 2);
    assert_eq!(overview.top_risks[0].id, "FM-001");
    assert_eq!(overview.low_stock.len(), 1);
    assert!(overview.rpn_findings.is_empty());
}

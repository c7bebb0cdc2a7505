//! Builders for test fixtures.
//!
//! Short constructors for the snapshot records so unit tests, integration
//! tests and benches can describe scenarios in one line each.
//!
//! ```rust
//! use fmeadash::testkit::{failure_mode, spare_part};
//! use fmeadash::risk::{build_matrix, low_stock};
//!
//! let modes = vec![failure_mode("FM-1", "Mechanical", 5, 5)];
//! assert_eq!(build_matrix(&modes).total_count(), 1);
//!
//! let parts = vec![spare_part("SP-1", 2, 5)];
//! assert_eq!(low_stock(&parts).len(), 1);
//! ```

use crate::core::{Asset, FailureMode, RiskRating, Snapshot, SparePart};

pub fn failure_mode(
    id: impl Into<String>,
    category: impl Into<String>,
    severity: i64,
    probability: i64,
) -> FailureMode {
    FailureMode::new(id, category, severity, probability)
}

pub fn asset(
    id: impl Into<String>,
    category: impl Into<String>,
    rating: Option<RiskRating>,
) -> Asset {
    Asset {
        risk_rating: rating,
        ..Asset::new(id, category)
    }
}

pub fn spare_part(id: impl Into<String>, current_stock: u32, min_stock: u32) -> SparePart {
    SparePart::new(id, current_stock, min_stock)
}

/// A small plant: a handful of failure modes across two categories, rated
/// and unrated components, and one part below its minimum.
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        failure_modes: vec![
            failure_mode("FM-001", "Mechanical", 5, 4)
                .with_name("Bearing seizure")
                .with_detection(3)
                .with_rating(RiskRating::Critical),
            failure_mode("FM-002", "Mechanical", 3, 3)
                .with_name("Seal leakage")
                .with_detection(2)
                .with_stored_rpn(18)
                .with_rating(RiskRating::Medium),
            failure_mode("FM-003", "Electrical", 2, 1)
                .with_name("Connector corrosion")
                .with_rating(RiskRating::Low),
            failure_mode("FM-004", "Electrical", 4, 2).with_name("Winding insulation breakdown"),
        ],
        components: vec![
            asset("CMP-1", "Pump", Some(RiskRating::High)),
            asset("CMP-2", "Pump", Some(RiskRating::Low)),
            asset("CMP-3", "Motor", None),
        ],
        equipment: vec![asset("EQ-1", "Compressor", Some(RiskRating::Medium))],
        spare_parts: vec![spare_part("SP-1", 2, 5), spare_part("SP-2", 10, 3)],
    }
}

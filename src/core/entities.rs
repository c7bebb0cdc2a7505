//! Read-model records supplied by the backend or local store.
//!
//! These are immutable snapshots: nothing in this crate mutates them. Factor
//! fields are kept raw (`i64`) and validated where they are used.

use super::rating::{deserialize_lenient_rating, RiskRating};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Any record carrying a category and an optional risk classification.
pub trait RatedEntity {
    fn id(&self) -> &str;
    fn category(&self) -> &str;
    fn name(&self) -> &str {
        ""
    }
    /// `None` means unclassified. It must never be read as `Low`.
    fn risk_rating(&self) -> Option<RiskRating>;
}

/// Records that can be placed on the severity x probability matrix.
pub trait MatrixPlacement {
    fn severity(&self) -> i64;
    fn probability(&self) -> i64;
}

impl<T: RatedEntity + ?Sized> RatedEntity for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
    fn category(&self) -> &str {
        (**self).category()
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn risk_rating(&self) -> Option<RiskRating> {
        (**self).risk_rating()
    }
}

impl<T: MatrixPlacement + ?Sized> MatrixPlacement for &T {
    fn severity(&self) -> i64 {
        (**self).severity()
    }
    fn probability(&self) -> i64 {
        (**self).probability()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureMode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Component or module the failure mode belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    pub severity: i64,
    pub probability: i64,
    /// Lower means harder to detect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection: Option<i64>,
    /// Legacy stored RPN. Only ever checked against the recomputed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpn: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_rating: Option<RiskRating>,
}

impl FailureMode {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        severity: i64,
        probability: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category: category.into(),
            component_id: None,
            mechanism: None,
            cause: None,
            severity,
            probability,
            detection: None,
            rpn: None,
            risk_rating: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_detection(mut self, detection: i64) -> Self {
        self.detection = Some(detection);
        self
    }

    pub fn with_stored_rpn(mut self, rpn: i64) -> Self {
        self.rpn = Some(rpn);
        self
    }

    pub fn with_rating(mut self, rating: RiskRating) -> Self {
        self.risk_rating = Some(rating);
        self
    }
}

impl RatedEntity for FailureMode {
    fn id(&self) -> &str {
        &self.id
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn risk_rating(&self) -> Option<RiskRating> {
        self.risk_rating
    }
}

impl MatrixPlacement for FailureMode {
    fn severity(&self) -> i64 {
        self.severity
    }
    fn probability(&self) -> i64 {
        self.probability
    }
}

/// A component or a piece of equipment. Both share the same rated shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_rating: Option<RiskRating>,
}

impl Asset {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category: category.into(),
            risk_rating: None,
        }
    }

    pub fn with_rating(mut self, rating: RiskRating) -> Self {
        self.risk_rating = Some(rating);
        self
    }
}

impl RatedEntity for Asset {
    fn id(&self) -> &str {
        &self.id
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn risk_rating(&self) -> Option<RiskRating> {
        self.risk_rating
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartStatus {
    Approved,
    Pending,
    Rejected,
}

impl fmt::Display for PartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartStatus::Approved => write!(f, "approved"),
            PartStatus::Pending => write!(f, "pending"),
            PartStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub material_no: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub status: PartStatus,
}

impl SparePart {
    pub fn new(id: impl Into<String>, current_stock: u32, min_stock: u32) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            material_no: String::new(),
            current_stock,
            min_stock,
            status: PartStatus::Approved,
        }
    }

    pub fn with_status(mut self, status: PartStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_below_minimum(&self) -> bool {
        self.current_stock < self.min_stock
    }
}

/// One fully materialised load from the collaborator layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub failure_modes: Vec<FailureMode>,
    #[serde(default)]
    pub components: Vec<Asset>,
    #[serde(default)]
    pub equipment: Vec<Asset>,
    #[serde(default)]
    pub spare_parts: Vec<SparePart>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.failure_modes.is_empty()
            && self.components.is_empty()
            && self.equipment.is_empty()
            && self.spare_parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_mode_reads_camel_case_fields() {
        let json = r#"{
            "id": "FM-1",
            "name": "Bearing seizure",
            "category": "Mechanical",
            "componentId": "CMP-7",
            "severity": 4,
            "probability": 3,
            "detection": 2,
            "rpn": 24,
            "riskRating": "high"
        }"#;
        let fm: FailureMode = serde_json::from_str(json).unwrap();
        assert_eq!(fm.component_id.as_deref(), Some("CMP-7"));
        assert_eq!(fm.detection, Some(2));
        assert_eq!(fm.rpn, Some(24));
        assert_eq!(fm.risk_rating, Some(RiskRating::High));
    }

    #[test]
    fn missing_rating_stays_unclassified() {
        let json = r#"{"id": "C-1", "category": "Pump"}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.risk_rating(), None);
    }

    #[test]
    fn out_of_range_factors_survive_loading() {
        let json = r#"{"id": "FM-9", "severity": 7, "probability": -1}"#;
        let fm: FailureMode = serde_json::from_str(json).unwrap();
        assert_eq!(fm.severity(), 7);
        assert_eq!(fm.probability(), -1);
    }

    #[test]
    fn spare_part_below_minimum_is_strict() {
        let mut part = SparePart {
            id: "SP-1".into(),
            description: "Seal kit".into(),
            material_no: "MAT-001".into(),
            current_stock: 5,
            min_stock: 5,
            status: PartStatus::Approved,
        };
        assert!(!part.is_below_minimum());
        part.current_stock = 4;
        assert!(part.is_below_minimum());
    }
}

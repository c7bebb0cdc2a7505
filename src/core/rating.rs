//! Risk rating scale shared by every rated record.
//!
//! Ratings are totally ordered `Low < Medium < High < Critical`. Absence of a
//! rating is modelled as `Option<RiskRating>::None` everywhere and surfaces as
//! the explicit `unclassified` bucket in aggregations.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskRating {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskRating {
    /// All ratings in ascending order.
    pub const ALL: [RiskRating; 4] = [
        RiskRating::Low,
        RiskRating::Medium,
        RiskRating::High,
        RiskRating::Critical,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskRating::Low => "low",
            RiskRating::Medium => "medium",
            RiskRating::High => "high",
            RiskRating::Critical => "critical",
        }
    }

    /// True for the two levels that feed the high/critical KPI.
    pub const fn is_high_or_critical(&self) -> bool {
        matches!(self, RiskRating::High | RiskRating::Critical)
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown risk rating '{0}' (expected low, medium, high or critical)")]
pub struct UnknownRating(pub String);

impl FromStr for RiskRating {
    type Err = UnknownRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskRating::Low),
            "medium" => Ok(RiskRating::Medium),
            "high" => Ok(RiskRating::High),
            "critical" => Ok(RiskRating::Critical),
            _ => Err(UnknownRating(s.to_string())),
        }
    }
}

/// Deserialize an optional rating without ever failing the surrounding record.
///
/// `null`, missing, empty and unrecognised values all become `None`, as do
/// non-string values such as numbers or booleans. Anything dropped is logged
/// so bad upstream data stays visible.
pub fn deserialize_lenient_rating<'de, D>(deserializer: D) -> Result<Option<RiskRating>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(name) => rating_from_name(&name),
        other => {
            tracing::warn!(value = %other, "non-string risk rating; treating record as unclassified");
            None
        }
    }))
}

fn rating_from_name(name: &str) -> Option<RiskRating> {
    if name.trim().is_empty() {
        return None;
    }
    match name.parse::<RiskRating>() {
        Ok(rating) => Some(rating),
        Err(e) => {
            tracing::warn!(value = %name, "{}; treating record as unclassified", e);
            None
        }
    }
}

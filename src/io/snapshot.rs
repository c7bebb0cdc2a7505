use crate::core::Snapshot;
use crate::error::SnapshotError;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(SnapshotError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Pure function to parse a snapshot document
pub fn parse_snapshot(contents: &str, format: SnapshotFormat) -> Result<Snapshot, SnapshotError> {
    let snapshot = match format {
        SnapshotFormat::Json => serde_json::from_str(contents)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    Ok(snapshot)
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let format = SnapshotFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = parse_snapshot(&contents, format)?;

    tracing::info!(
        path = %path.display(),
        failure_modes = snapshot.failure_modes.len(),
        components = snapshot.components.len(),
        equipment = snapshot.equipment.len(),
        spare_parts = snapshot.spare_parts.len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PartStatus, RiskRating};
    use indoc::indoc;
    use std::path::PathBuf;

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(SnapshotFormat::from_path(&PathBuf::from("a.json")).unwrap(), SnapshotFormat::Json);
        assert_eq!(SnapshotFormat::from_path(&PathBuf::from("a.YML")).unwrap(), SnapshotFormat::Yaml);
        assert!(matches!(
            SnapshotFormat::from_path(&PathBuf::from("a.csv")),
            Err(SnapshotError::UnsupportedFormat(ext)) if ext == "csv"
        ));
    }

    #[test]
    fn parses_yaml_snapshot() {
        let yaml = indoc! {"
            failureModes:
              - id: FM-1
                category: Mechanical
                severity: 4
                probability: 2
                riskRating: High
            components:
              - id: C-1
                category: Pump
            spareParts:
              - id: SP-1
                description: Seal kit
                materialNo: MAT-1
                currentStock: 1
                minStock: 4
                status: pending
        "};
        let snapshot = parse_snapshot(yaml, SnapshotFormat::Yaml).unwrap();
        assert_eq!(snapshot.failure_modes[0].risk_rating, Some(RiskRating::High));
        assert_eq!(snapshot.components[0].risk_rating, None);
        assert!(snapshot.equipment.is_empty());
        assert_eq!(snapshot.spare_parts[0].status, PartStatus::Pending);
    }

    #[test]
    fn unknown_rating_does_not_fail_the_snapshot() {
        let json = r#"{"components": [{"id": "C-1", "category": "Pump", "riskRating": "extreme"}]}"#;
        let snapshot = parse_snapshot(json, SnapshotFormat::Json).unwrap();
        assert_eq!(snapshot.components[0].risk_rating, None);
    }

    #[test]
    fn non_string_ratings_do_not_fail_the_snapshot() {
        let json = r#"{
            "components": [
                {"id": "C-1", "category": "Pump", "riskRating": 3},
                {"id": "C-2", "category": "Pump", "riskRating": true},
                {"id": "C-3", "category": "Pump", "riskRating": "high"}
            ]
        }"#;
        let snapshot = parse_snapshot(json, SnapshotFormat::Json).unwrap();
        let ratings: Vec<_> = snapshot.components.iter().map(|c| c.risk_rating).collect();
        assert_eq!(ratings, vec![None, None, Some(RiskRating::High)]);
    }

    #[test]
    fn non_string_ratings_in_yaml_are_unclassified() {
        let yaml = indoc! {"
            failureModes:
              - id: FM-1
                category: Mechanical
                severity: 4
                probability: 2
                riskRating: 4
              - id: FM-2
                category: Mechanical
                severity: 2
                probability: 2
                riskRating: false
        "};
        let snapshot = parse_snapshot(yaml, SnapshotFormat::Yaml).unwrap();
        assert_eq!(snapshot.failure_modes.len(), 2);
        assert!(snapshot.failure_modes.iter().all(|fm| fm.risk_rating.is_none()));
    }

    #[test]
    fn empty_object_is_an_empty_snapshot() {
        assert!(parse_snapshot("{}", SnapshotFormat::Json).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_snapshot("{\"failureModes\": [", SnapshotFormat::Json),
            Err(SnapshotError::Json(_))
        ));
    }
}

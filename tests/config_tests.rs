//! Config file discovery and validation.

use fmeadash::config::{
    load_config, load_config_from, loader::discover_config, RiskThresholds, CONFIG_FILE_NAME,
};
use fmeadash::error::{ConfigError, ErrorCode};
use fmeadash::io::OutputFormat;
use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn discovery_walks_up_to_the_project_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [thresholds.rpn]
            low_max = 20
            medium_max = 40
            high_max = 80

            [output]
            default_format = "markdown"
        "#},
    )
    .unwrap();
    let nested = dir.path().join("reports").join("2026");
    std::fs::create_dir_all(&nested).unwrap();

    let config = discover_config(nested);
    assert_eq!(
        config.thresholds.rpn,
        RiskThresholds {
            low_max: 20.0,
            medium_max: 40.0,
            high_max: 80.0,
        }
    );
    assert_eq!(config.thresholds.matrix, RiskThresholds::matrix_defaults());
    assert_eq!(config.output.default_format, Some(OutputFormat::Markdown));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
    assert_eq!(err.code(), ErrorCode::CONFIG_FILE_NOT_FOUND);
}

#[test]
fn descending_thresholds_name_their_section() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        indoc! {"
            [thresholds.matrix]
            low_max = 9
            medium_max = 4
            high_max = 16
        "},
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Thresholds {
            section: "matrix",
            ..
        }
    ));
    assert!(err.to_string().contains("[thresholds.matrix]"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[thresholds.rpn\nlow_max = ").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CONFIG_INVALID);
}

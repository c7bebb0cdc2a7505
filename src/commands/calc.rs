//! One-off calculations: `classify` and `rpn`.

use crate::config::load_config;
use crate::core::RiskRating;
use crate::formatting::{paint_token, FormattingConfig};
use crate::io::OutputFormat;
use crate::risk::{compute_rpn, to_display_token, DisplayToken, RiskClassifier};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifyInput {
    Rpn(f64),
    Matrix { severity: i64, probability: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ClassifyOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    rpn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    probability: Option<i64>,
    level: RiskRating,
    token: DisplayToken,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct RpnOutcome {
    severity: i64,
    probability: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    detection: Option<i64>,
    rpn: u32,
    level: RiskRating,
    token: DisplayToken,
}

fn classify_outcome(input: ClassifyInput, classifier: &RiskClassifier) -> Result<ClassifyOutcome> {
    let outcome = match input {
        ClassifyInput::Rpn(rpn) => {
            let level = classifier.classify(rpn)?;
            ClassifyOutcome {
                rpn: Some(rpn),
                severity: None,
                probability: None,
                level,
                token: to_display_token(Some(level)),
            }
        }
        ClassifyInput::Matrix {
            severity,
            probability,
        } => {
            let level = classifier.classify_from_matrix(severity, probability)?;
            ClassifyOutcome {
                rpn: None,
                severity: Some(severity),
                probability: Some(probability),
                level,
                token: to_display_token(Some(level)),
            }
        }
    };
    Ok(outcome)
}

fn rpn_outcome(
    severity: i64,
    probability: i64,
    detection: Option<i64>,
    classifier: &RiskClassifier,
) -> Result<RpnOutcome> {
    let rpn = compute_rpn(severity, probability, detection)?;
    let level = classifier.classify(f64::from(rpn))?;
    Ok(RpnOutcome {
        severity,
        probability,
        detection,
        rpn,
        level,
        token: to_display_token(Some(level)),
    })
}

fn configured_classifier(config: Option<&Path>) -> Result<RiskClassifier> {
    let config = load_config(config).context("Failed to load configuration")?;
    RiskClassifier::from_config(&config.thresholds).context("Configured thresholds are invalid")
}

fn emit<T: Serialize, W: Write>(
    out: &mut W,
    value: &T,
    text: String,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
        OutputFormat::Terminal | OutputFormat::Markdown => writeln!(out, "{text}")?,
    }
    out.flush()?;
    Ok(())
}

pub fn classify_value(
    input: ClassifyInput,
    config: Option<&Path>,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<()> {
    let classifier = configured_classifier(config)?;
    let outcome = classify_outcome(input, &classifier)?;
    let use_color = formatting.apply();

    let subject = match input {
        ClassifyInput::Rpn(rpn) => format!("RPN {rpn}"),
        ClassifyInput::Matrix {
            severity,
            probability,
        } => format!("S{severity} x P{probability}"),
    };
    let text = format!(
        "{subject}: {} ({})",
        paint_token(outcome.token, use_color),
        outcome.token
    );
    emit(&mut std::io::stdout().lock(), &outcome, text, format)
}

pub fn compute_rpn_value(
    severity: i64,
    probability: i64,
    detection: Option<i64>,
    config: Option<&Path>,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<()> {
    let classifier = configured_classifier(config)?;
    let outcome = rpn_outcome(severity, probability, detection, &classifier)?;
    let use_color = formatting.apply();

    let text = format!(
        "RPN {}: {} ({})",
        outcome.rpn,
        paint_token(outcome.token, use_color),
        outcome.token
    );
    emit(&mut std::io::stdout().lock(), &outcome, text, format)
}

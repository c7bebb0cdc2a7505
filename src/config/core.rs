use super::thresholds::ThresholdsConfig;
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given on the command line.
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// How many failure modes the overview lists as top risks.
    #[serde(default = "default_top_risks")]
    pub top_risks: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: None,
            top_risks: default_top_risks(),
        }
    }
}

fn default_top_risks() -> usize {
    5
}

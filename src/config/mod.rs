//! Dashboard configuration (`.fmeadash.toml`).

mod core;
pub mod loader;
mod thresholds;

pub use self::core::{DashboardConfig, OutputConfig};
pub use loader::{load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};
pub use thresholds::{RiskThresholds, ThresholdsConfig};

/// Template written by `fmeadash init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# fmeadash configuration

# Bands for classify(rpn). A value maps to the first band whose upper bound
# it does not exceed; anything above high_max is critical.
[thresholds.rpn]
low_max = 31
medium_max = 62
high_max = 93

# Bands for severity x probability on the 5x5 risk matrix.
[thresholds.matrix]
low_max = 4
medium_max = 9
high_max = 16

[output]
# terminal, json or markdown
default_format = "terminal"
top_risks = 5
"#;

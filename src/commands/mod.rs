//! CLI command implementations.
//!
//! - **overview**, **matrix**, **failure-modes**, **low-stock**: load a
//!   snapshot and render a dashboard view
//! - **classify**, **rpn**: one-off calculations on the command line
//! - **init**: write a default `.fmeadash.toml`

pub mod calc;
pub mod init;
pub mod report;

pub use calc::{classify_value, compute_rpn_value, ClassifyInput};
pub use init::init_config;
pub use report::{
    run_failure_modes, run_low_stock, run_matrix, run_overview, FailureModeQuery, ReportConfig,
};

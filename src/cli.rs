use crate::core::RiskRating;
use crate::io::OutputFormat;
use crate::risk::SortKey;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fmeadash")]
#[command(about = "Risk classification and aggregation for FMEA dashboards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .fmeadash.toml)
    #[arg(long, global = true, env = "FMEADASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (defaults to the config's default_format, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dashboard overview: summaries, risk matrix, top risks, low stock
    Overview {
        /// Snapshot file (.json, .yaml or .yml)
        snapshot: PathBuf,

        /// Number of top failure modes to list
        #[arg(long)]
        top: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Severity x probability risk matrix of the failure modes
    Matrix {
        /// Snapshot file (.json, .yaml or .yml)
        snapshot: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Filtered, sorted failure-mode table
    FailureModes {
        /// Snapshot file (.json, .yaml or .yml)
        snapshot: PathBuf,

        /// Exact category to keep
        #[arg(long)]
        category: Option<String>,

        /// Minimum risk rating (low, medium, high, critical)
        #[arg(long = "min-rating")]
        min_rating: Option<RiskRating>,

        /// Case-insensitive text search over id, name and category
        #[arg(long)]
        search: Option<String>,

        /// Keep unclassified records when --min-rating is set
        #[arg(long = "include-unclassified")]
        include_unclassified: bool,

        /// Sort order
        #[arg(long, value_enum, default_value = "rpn")]
        sort: SortKey,

        /// Show only the first N rows
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Spare parts below their minimum stock
    LowStock {
        /// Snapshot file (.json, .yaml or .yml)
        snapshot: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Classify an RPN or a severity/probability pair
    Classify {
        /// Risk priority number
        #[arg(
            long,
            allow_negative_numbers = true,
            conflicts_with_all = ["severity", "probability"],
            required_unless_present_all = ["severity", "probability"]
        )]
        rpn: Option<f64>,

        /// Severity 1-5
        #[arg(long, short = 's', requires = "probability", allow_negative_numbers = true)]
        severity: Option<i64>,

        /// Probability 1-5
        #[arg(long, short = 'p', requires = "severity", allow_negative_numbers = true)]
        probability: Option<i64>,

        /// Output format (json prints a machine-readable object)
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Compute a risk priority number
    Rpn {
        /// Severity 1-5
        #[arg(long, short = 's', allow_negative_numbers = true)]
        severity: i64,

        /// Probability 1-5
        #[arg(long, short = 'p', allow_negative_numbers = true)]
        probability: i64,

        /// Detection 1-5 (omit for the 2-factor product)
        #[arg(long, short = 'd', allow_negative_numbers = true)]
        detection: Option<i64>,

        /// Output format (json prints a machine-readable object)
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

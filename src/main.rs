use anyhow::Result;
use clap::Parser;
use fmeadash::cli::{Cli, Commands, OutputArgs};
use fmeadash::commands::{self, ClassifyInput, FailureModeQuery, ReportConfig};
use fmeadash::formatting::FormattingConfig;
use fmeadash::observability::{init_logging, install_panic_hook};
use std::path::PathBuf;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let formatting = if cli.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let config = cli.config;

    let report = |snapshot: PathBuf, output: OutputArgs| ReportConfig {
        snapshot,
        config: config.clone(),
        format: output.format,
        output: output.output,
        formatting,
    };

    match cli.command {
        Commands::Overview {
            snapshot,
            top,
            output,
        } => commands::run_overview(report(snapshot, output), top),
        Commands::Matrix { snapshot, output } => commands::run_matrix(report(snapshot, output)),
        Commands::FailureModes {
            snapshot,
            category,
            min_rating,
            search,
            include_unclassified,
            sort,
            top,
            output,
        } => {
            let query = FailureModeQuery {
                category,
                min_rating,
                search,
                include_unclassified,
                sort,
                top,
            };
            commands::run_failure_modes(report(snapshot, output), query)
        }
        Commands::LowStock { snapshot, output } => commands::run_low_stock(report(snapshot, output)),
        Commands::Classify {
            rpn,
            severity,
            probability,
            format,
        } => {
            let input = match (rpn, severity, probability) {
                (Some(rpn), _, _) => ClassifyInput::Rpn(rpn),
                (None, Some(severity), Some(probability)) => ClassifyInput::Matrix {
                    severity,
                    probability,
                },
                _ => anyhow::bail!("Provide --rpn or both --severity and --probability"),
            };
            commands::classify_value(input, config.as_deref(), format, formatting)
        }
        Commands::Rpn {
            severity,
            probability,
            detection,
            format,
        } => commands::compute_rpn_value(
            severity,
            probability,
            detection,
            config.as_deref(),
            format,
            formatting,
        ),
        Commands::Init { force } => commands::init_config(&std::env::current_dir()?, force),
    }
}

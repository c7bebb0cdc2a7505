//! Logging setup and crash-report context.
//!
//! Logs go to stderr through `tracing-subscriber` so stdout stays clean for
//! JSON and markdown output. `RUST_LOG` takes precedence over `-v` flags.

pub mod context;
pub mod panic_hook;

pub use context::{get_current_context, set_phase, set_snapshot, ContextGuard, Phase, RunContext};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

/// Map `-v` repetitions to a default filter directive.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Panic hook that prints a short crash report with the run context.

use super::context::{get_current_context, RunContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", crash_report(info, &get_current_context()));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>, context: &RunContext) -> String {
    let mut lines = vec![
        "════════ FMEADASH CRASH REPORT ════════".to_string(),
        format!("Version: {}  Platform: {}", VERSION, std::env::consts::OS),
        format!("Time: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")),
        format!("Panic: {}", extract_panic_message(info)),
    ];
    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    lines.push(match context.phase {
        Some(phase) => format!("Phase: {phase}"),
        None => "Phase: (not set)".to_string(),
    });
    if let Some(snapshot) = &context.snapshot {
        lines.push(format!("Snapshot: {}", snapshot.display()));
    }
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("Run with RUST_BACKTRACE=1 for stack trace".to_string());
    }
    lines.join("\n")
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

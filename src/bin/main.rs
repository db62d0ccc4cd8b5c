use std::io;
use std::process::ExitCode;

use colored::Colorize;
use design_patterns::{demo, DemoConfig};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // stdout carries the demo output, so diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// Exit status is always 0; a failed write is only reported on stderr.
fn main() -> ExitCode {
    init_logging();

    let config = DemoConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = demo::run(&mut out, &config) {
        eprintln!("{} {err}", "error:".red().bold());
    }
    ExitCode::SUCCESS
}

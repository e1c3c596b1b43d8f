//! peekfetch entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use peekfetch::cli::Cli;
use peekfetch::{tui, Config};

fn main() {
    // Load .env.local if it exists (PEEKFETCH_* overrides)
    let _ = dotenvy::from_filename(".env.local");

    let _cli = Cli::parse();

    init_tracing();

    let config = Config::from_env();

    if let Err(e) = tui::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber, only when `RUST_LOG` asks for one.
///
/// The dashboard owns the terminal, so logging is opt-in and meant to be
/// redirected: `RUST_LOG=debug peekfetch 2>peekfetch.log`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

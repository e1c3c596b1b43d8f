//! Command-line interface definition using clap.
//!
//! The dashboard takes no options; the parser only provides `--help` and
//! `--version`.

use clap::Parser;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// peekfetch - interactive system information dashboard
///
/// Keys: ↑/k ↓/j move or scroll, PgUp/Ctrl+U PgDn/Ctrl+D half-page scroll,
/// Enter/Space expand, L live mode, Q/Ctrl+C quit.
#[derive(Parser, Debug)]
#[command(name = "peekfetch")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {}

//! Error types for the dashboard shell.

use thiserror::Error;

/// Errors that can end the dashboard.
///
/// Only terminal setup and teardown can fail; the interactive core never
/// produces an error.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal I/O error.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// Signal handler registration failed.
    #[error("failed to register signal handler: {0}")]
    Signal(std::io::Error),
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, TuiError>;

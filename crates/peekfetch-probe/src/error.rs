//! Error types for telemetry collection.

use thiserror::Error;

/// Errors that can occur while reading one telemetry value.
///
/// Collectors never surface these to the dashboard; a failed read means the
/// field is left out.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a procfs/sysfs file or command output.
    #[error("parse error: {0}")]
    Parse(String),

    /// External command exited unsuccessfully.
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// No source produced a usable value.
    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

/// Result type alias for telemetry reads.
pub type Result<T> = std::result::Result<T, ProbeError>;

//! peekfetch library.
//!
//! This crate provides the command-line surface, configuration and the
//! interactive dashboard for peekfetch.

pub mod cli;
pub mod config;
pub mod error;
pub mod tui;

pub use config::Config;
pub use error::{Result, TuiError};

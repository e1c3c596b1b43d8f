//! Core data models for peekfetch.
//!
//! This crate provides the section model shown by the dashboard and the
//! capability traits the dashboard uses to obtain host telemetry.

pub mod fields;
pub mod provider;
pub mod section;

// Re-export main types
pub use fields::{Field, Fields};
pub use provider::{LiveValueProvider, SectionProvider, UNAVAILABLE};
pub use section::{Section, SectionBody, SectionKind, TreeItem};

//! Interactive dashboard.
//!
//! The dashboard is a single serial loop:
//! - key presses, resizes and refresh ticks become [`Event`]s
//! - [`update()`] applies each event to the [`NavigationState`] and returns a
//!   [`Command`]
//! - [`App`] carries out the command (arming the timer, merging live values)
//! - [`ui::draw`] renders the resulting state
//!
//! Everything except [`run`] is free of terminal I/O and is driven directly
//! in tests.

mod app;
mod events;
pub mod layout;
mod refresh;
mod scheduler;
mod state;
pub mod theme;
pub mod ui;
mod update;

pub use app::App;
pub use events::{map_key, run};
pub use refresh::merge_live;
pub use scheduler::{RefreshScheduler, TickHandle, REFRESH_INTERVAL};
pub use state::{viewport_for, NavigationState, MIN_VIEWPORT_HEIGHT, RESERVED_ROWS};
pub use update::{content_lines, update, Command, Event};

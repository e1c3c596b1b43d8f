//! Runtime configuration.
//!
//! Settings come from the environment (optionally seeded from a
//! `.env.local` file in the working directory):
//!
//! - `PEEKFETCH_CPU_SAMPLE_MS`: longest time a CPU usage sample may block
//! - `PEEKFETCH_INPUT_POLL_MS`: input poll timeout of the event loop

use std::time::Duration;

use tracing::warn;

/// Environment variable for the CPU sample window.
pub const CPU_SAMPLE_ENV: &str = "PEEKFETCH_CPU_SAMPLE_MS";

/// Environment variable for the input poll timeout.
pub const INPUT_POLL_ENV: &str = "PEEKFETCH_INPUT_POLL_MS";

const CPU_SAMPLE_RANGE: (u64, u64) = (10, 250);
const INPUT_POLL_RANGE: (u64, u64) = (10, 1000);

/// Configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Longest time the first CPU usage sample may block a tick.
    pub cpu_sample_window: Duration,
    /// How long the event loop waits for input before checking timers.
    pub input_poll: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cpu_sample_window: Duration::from_millis(100),
            input_poll: Duration::from_millis(100),
        }
    }
}

impl Config {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CPU sample window, clamped to 10..=250 ms.
    pub fn with_cpu_sample_window(mut self, window: Duration) -> Self {
        self.cpu_sample_window = clamp_millis(window, CPU_SAMPLE_RANGE);
        self
    }

    /// Sets the input poll timeout, clamped to 10..=1000 ms.
    pub fn with_input_poll(mut self, poll: Duration) -> Self {
        self.input_poll = clamp_millis(poll, INPUT_POLL_RANGE);
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`; invalid values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(ms) = millis_var(&lookup, CPU_SAMPLE_ENV) {
            config = config.with_cpu_sample_window(ms);
        }
        if let Some(ms) = millis_var(&lookup, INPUT_POLL_ENV) {
            config = config.with_input_poll(ms);
        }

        config
    }
}

fn millis_var<F>(lookup: &F, name: &str) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring invalid millisecond value");
            None
        }
    }
}

fn clamp_millis(value: Duration, (min, max): (u64, u64)) -> Duration {
    value.clamp(Duration::from_millis(min), Duration::from_millis(max))
}

//! Host telemetry collectors for peekfetch.
//!
//! [`HostProbe`] implements the dashboard's provider traits on top of
//! `sysinfo`, with a few Linux procfs/sysfs reads for figures sysinfo does
//! not report:
//!
//! - **system**: host, OS, kernel, uptime, shell, desktop, load
//! - **cpu**: model, cores, temperature, usage sampling
//! - **memory**: RAM, page cache, swap
//! - **disk**: mounted filesystems
//! - **network**: interfaces and traffic totals
//!
//! Every collector degrades by omission: a value that cannot be read is
//! left out of its section rather than failing the section.

pub mod cpu;
pub mod disk;
pub mod error;
pub mod format;
pub mod memory;
pub mod network;
pub mod system;

use std::time::Duration;

use peekfetch_models::{LiveValueProvider, Section, SectionKind, SectionProvider, UNAVAILABLE};
use sysinfo::System;
use tracing::debug;

pub use cpu::{CpuSampler, MAX_SAMPLE_WINDOW};
pub use error::{ProbeError, Result};
pub use memory::MemoryReading;

/// Default blocking window for the first CPU usage sample.
pub const DEFAULT_CPU_SAMPLE_WINDOW: Duration = Duration::from_millis(100);

/// Provider backed by the local host.
pub struct HostProbe {
    cpu: CpuSampler,
    memory: System,
}

impl HostProbe {
    /// Creates a probe with the default CPU sample window.
    pub fn new() -> Self {
        Self::with_cpu_sample_window(DEFAULT_CPU_SAMPLE_WINDOW)
    }

    /// Creates a probe with a custom CPU sample window.
    ///
    /// The window is clamped to [`MAX_SAMPLE_WINDOW`].
    pub fn with_cpu_sample_window(window: Duration) -> Self {
        Self {
            cpu: CpuSampler::new(window),
            memory: System::new(),
        }
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionProvider for HostProbe {
    fn system(&mut self) -> Section {
        system::collect()
    }

    fn cpu(&mut self) -> Section {
        self.cpu.collect()
    }

    fn memory(&mut self) -> Section {
        MemoryReading::take(&mut self.memory).to_section()
    }

    fn disk(&mut self) -> Section {
        disk::collect()
    }

    fn network(&mut self) -> Section {
        network::collect()
    }
}

impl LiveValueProvider for HostProbe {
    fn live_value(&mut self, kind: SectionKind, key: &str) -> String {
        self.live_values(kind, &[key.to_string()])
            .pop()
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    fn live_values(&mut self, kind: SectionKind, keys: &[String]) -> Vec<String> {
        match kind {
            SectionKind::Cpu => keys
                .iter()
                .map(|key| match key.as_str() {
                    "Usage" => self.cpu.usage(),
                    _ => UNAVAILABLE.to_string(),
                })
                .collect(),
            SectionKind::Memory => {
                let reading = MemoryReading::take(&mut self.memory);
                keys.iter().map(|key| reading.value(key)).collect()
            }
            other => {
                debug!(section = %other, "no live values for section");
                vec![UNAVAILABLE.to_string(); keys.len()]
            }
        }
    }
}

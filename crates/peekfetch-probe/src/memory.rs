//! RAM and swap.

use peekfetch_models::{Fields, Section, SectionKind, UNAVAILABLE};
use sysinfo::System;
use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::format::{format_bytes, format_percent, percent_of};

/// Page cache figures that sysinfo does not expose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CacheFigures {
    cached: u64,
    buffers: u64,
    shared: u64,
}

/// One memory reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryReading {
    total: u64,
    used: u64,
    available: u64,
    free: u64,
    cache: CacheFigures,
    swap_total: u64,
    swap_used: u64,
    swap_free: u64,
}

impl MemoryReading {
    /// Refreshes memory figures on `system` and reads them.
    pub fn take(system: &mut System) -> Self {
        system.refresh_memory();

        let cache = match read_cache_figures() {
            Ok(cache) => cache,
            Err(e) => {
                debug!(error = %e, "page cache figures unavailable");
                CacheFigures::default()
            }
        };

        Self {
            total: system.total_memory(),
            used: system.used_memory(),
            available: system.available_memory(),
            free: system.free_memory(),
            cache,
            swap_total: system.total_swap(),
            swap_used: system.used_swap(),
            swap_free: system.free_swap(),
        }
    }

    /// Formatted value for a memory field, or [`UNAVAILABLE`] for unknown keys.
    pub fn value(&self, key: &str) -> String {
        match key {
            "Total RAM" => format_bytes(self.total),
            "Used" => format_bytes(self.used),
            "Available" => format_bytes(self.available),
            "Free" => format_bytes(self.free),
            "Cached" => format_bytes(self.cache.cached),
            "Buffers" => format_bytes(self.cache.buffers),
            "Shared" => format_bytes(self.cache.shared),
            "Usage" => format_percent(percent_of(self.used, self.total)),
            "Swap Total" => format_bytes(self.swap_total),
            "Swap Used" => format_bytes(self.swap_used),
            "Swap Free" => format_bytes(self.swap_free),
            "Swap Usage" => format_percent(percent_of(self.swap_used, self.swap_total)),
            _ => UNAVAILABLE.to_string(),
        }
    }

    /// Builds the Memory section from this reading.
    pub fn to_section(&self) -> Section {
        let mut info = Fields::new();

        if self.total > 0 {
            info.insert("Total RAM", self.value("Total RAM"));
            for key in ["Used", "Available", "Free"] {
                info.insert_live(key, self.value(key));
            }
            if self.cache.cached > 0 {
                info.insert_live("Cached", self.value("Cached"));
            }
            if self.cache.buffers > 0 {
                info.insert_live("Buffers", self.value("Buffers"));
            }
            if self.cache.shared > 0 {
                info.insert_live("Shared", self.value("Shared"));
            }
            info.insert_live("Usage", self.value("Usage"));
        }

        if self.swap_total > 0 {
            info.insert("Swap Total", self.value("Swap Total"));
            for key in ["Swap Used", "Swap Free", "Swap Usage"] {
                info.insert_live(key, self.value(key));
            }
        }

        Section::flat(SectionKind::Memory, info).with_live(true)
    }
}

fn read_cache_figures() -> Result<CacheFigures> {
    let meminfo = std::fs::read_to_string("/proc/meminfo")?;
    parse_meminfo(&meminfo)
}

/// Reads `Cached`, `Buffers` and `Shmem` (kB) from `/proc/meminfo`.
fn parse_meminfo(meminfo: &str) -> Result<CacheFigures> {
    let mut figures = CacheFigures::default();
    let mut seen = false;

    for line in meminfo.lines() {
        let Some((name, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match name {
            "Cached" => &mut figures.cached,
            "Buffers" => &mut figures.buffers,
            "Shmem" => &mut figures.shared,
            _ => continue,
        };
        let kb: u64 = rest
            .split_whitespace()
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| ProbeError::Parse(format!("bad meminfo line '{}'", line)))?;
        *slot = kb * 1024;
        seen = true;
    }

    if seen {
        Ok(figures)
    } else {
        Err(ProbeError::Parse("no cache figures in meminfo".to_string()))
    }
}

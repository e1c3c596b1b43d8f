//! Processor details and usage sampling.

use std::time::{Duration, Instant};

use peekfetch_models::{Fields, Section, SectionKind, UNAVAILABLE};
use sysinfo::{CpuRefreshKind, System};
use tracing::{debug, trace};

use crate::error::{ProbeError, Result};
use crate::format::format_percent;

/// Thermal sources, checked in order. Values are millidegrees Celsius.
const THERMAL_PATHS: [&str; 4] = [
    "/sys/class/thermal/thermal_zone0/temp",
    "/sys/class/thermal/thermal_zone1/temp",
    "/sys/class/hwmon/hwmon0/temp1_input",
    "/sys/class/hwmon/hwmon1/temp1_input",
];

/// Upper bound for the blocking part of a usage sample.
pub const MAX_SAMPLE_WINDOW: Duration = Duration::from_millis(250);

/// CPU usage sampler backed by a long-lived `sysinfo::System`.
///
/// Usage is a delta between two refreshes. Once a previous refresh exists,
/// taking a sample does not block; otherwise it waits for at most the
/// sample window.
pub struct CpuSampler {
    system: System,
    window: Duration,
    last_refresh: Option<Instant>,
}

impl CpuSampler {
    /// Creates a sampler. `window` is clamped to [`MAX_SAMPLE_WINDOW`].
    pub fn new(window: Duration) -> Self {
        Self {
            system: System::new(),
            window: window.min(MAX_SAMPLE_WINDOW),
            last_refresh: None,
        }
    }

    /// The effective blocking window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Collects the CPU section. Usage starts as a `0.0%` placeholder.
    pub fn collect(&mut self) -> Section {
        self.system.refresh_cpu_specifics(CpuRefreshKind::everything());
        self.last_refresh = Some(Instant::now());

        let mut info = Fields::new();

        if let Some(cpu) = self.system.cpus().first() {
            let brand = cpu.brand().trim();
            if !brand.is_empty() {
                info.insert("Model", brand);
            }
            let vendor = cpu.vendor_id().trim();
            if !vendor.is_empty() {
                info.insert("Vendor", vendor);
            }
            if cpu.frequency() > 0 {
                info.insert("Frequency", format!("{:.2} GHz", cpu.frequency() as f64 / 1000.0));
            }
        }

        let logical = self.system.cpus().len();
        let physical = self.system.physical_core_count().unwrap_or(0);

        if physical > 0 {
            info.insert("Physical Cores", physical.to_string());
        }
        if logical > 0 {
            info.insert("Logical Cores", logical.to_string());
        }
        if physical > 0 && logical > 0 {
            info.insert("Threads/Core", (logical / physical).to_string());
        }

        match temperature() {
            Ok(temp) => info.insert("Temperature", temp),
            Err(e) => debug!(error = %e, "cpu temperature unavailable"),
        }

        info.insert_live("Usage", format_percent(0.0));

        Section::flat(SectionKind::Cpu, info).with_live(true)
    }

    /// Global CPU usage as `"12.3%"`, or [`UNAVAILABLE`].
    pub fn usage(&mut self) -> String {
        let fresh = self
            .last_refresh
            .is_some_and(|t| t.elapsed() >= sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

        if !fresh {
            trace!(window_ms = self.window.as_millis() as u64, "priming cpu sample");
            self.system.refresh_cpu_usage();
            std::thread::sleep(self.window);
        }

        self.system.refresh_cpu_usage();
        self.last_refresh = Some(Instant::now());

        if self.system.cpus().is_empty() {
            return UNAVAILABLE.to_string();
        }

        let usage = f64::from(self.system.global_cpu_usage());
        if usage.is_finite() {
            format_percent(usage)
        } else {
            UNAVAILABLE.to_string()
        }
    }
}

fn temperature() -> Result<String> {
    for path in THERMAL_PATHS {
        let Ok(raw) = std::fs::read_to_string(path) else {
            continue;
        };
        if let Some(celsius) = parse_millidegrees(&raw) {
            return Ok(format!("{:.1}°C", celsius));
        }
    }
    Err(ProbeError::Unavailable("temperature"))
}

/// Parses a sysfs millidegree reading, rejecting implausible values.
fn parse_millidegrees(raw: &str) -> Option<f64> {
    let milli: i64 = raw.trim().parse().ok()?;
    let celsius = milli as f64 / 1000.0;
    (celsius > 0.0 && celsius < 150.0).then_some(celsius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millidegrees() {
        assert_eq!(parse_millidegrees("45000\n"), Some(45.0));
        assert_eq!(parse_millidegrees("0"), None);
        assert_eq!(parse_millidegrees("151000"), None);
        assert_eq!(parse_millidegrees("hot"), None);
    }

    #[test]
    fn test_window_is_clamped() {
        let sampler = CpuSampler::new(Duration::from_secs(5));
        assert_eq!(sampler.window(), MAX_SAMPLE_WINDOW);
    }

    #[test]
    fn test_collect_marks_only_usage_live() {
        let mut sampler = CpuSampler::new(Duration::from_millis(10));
        let section = sampler.collect();

        assert!(section.live);
        let fields = section.fields().expect("cpu section is flat");
        assert_eq!(fields.get("Usage"), Some("0.0%"));
        assert_eq!(fields.live_keys(), vec!["Usage"]);
    }

    #[test]
    fn test_first_usage_sample_is_bounded() {
        let mut sampler = CpuSampler::new(Duration::from_millis(20));
        let start = Instant::now();
        let usage = sampler.usage();

        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(usage.ends_with('%') || usage == UNAVAILABLE);
    }
}

//! Capabilities the dashboard uses to obtain telemetry.

use crate::section::{Section, SectionKind};

/// Value reported when a live reading cannot be taken.
pub const UNAVAILABLE: &str = "N/A";

/// Builds fully populated section snapshots.
///
/// Implementations never fail a whole call: a field that cannot be read is
/// left out of the section, and a domain that cannot be read at all yields
/// an empty section.
pub trait SectionProvider {
    /// Host, OS and session facts.
    fn system(&mut self) -> Section;

    /// Processor details.
    fn cpu(&mut self) -> Section;

    /// RAM and swap.
    fn memory(&mut self) -> Section;

    /// Mounted filesystems.
    fn disk(&mut self) -> Section;

    /// Network interfaces and counters.
    fn network(&mut self) -> Section;

    /// Builds the section for one domain.
    fn section(&mut self, kind: SectionKind) -> Section {
        match kind {
            SectionKind::System => self.system(),
            SectionKind::Cpu => self.cpu(),
            SectionKind::Memory => self.memory(),
            SectionKind::Disk => self.disk(),
            SectionKind::Network => self.network(),
        }
    }

    /// Builds every section in dashboard order.
    fn snapshot(&mut self) -> Vec<Section> {
        SectionKind::ALL.iter().map(|&kind| self.section(kind)).collect()
    }
}

/// Produces fresh values for live fields.
pub trait LiveValueProvider {
    /// Returns a fresh value for one live field, or [`UNAVAILABLE`].
    ///
    /// Must return within a short, bounded time.
    fn live_value(&mut self, kind: SectionKind, key: &str) -> String;

    /// Returns fresh values for several fields of one section, in the order
    /// of `keys`.
    ///
    /// Implementations may override this to share one OS query between
    /// fields.
    fn live_values(&mut self, kind: SectionKind, keys: &[String]) -> Vec<String> {
        keys.iter().map(|key| self.live_value(kind, key)).collect()
    }
}

//! Cancellable live-refresh timer.
//!
//! The scheduler never runs anything itself. The event loop asks it for a
//! due tick and delivers that tick as an ordinary event. Every scheduled
//! tick carries a [`TickHandle`]; cancelling invalidates all outstanding
//! handles, so a tick that was already taken from the scheduler is dropped
//! when it is finally delivered.

use std::time::{Duration, Instant};

/// Live refresh period.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(500);

/// Identifies one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

/// One-shot, re-armable timer with generation-based cancellation.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    interval: Duration,
    generation: u64,
    pending: Option<(TickHandle, Instant)>,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL)
    }
}

impl RefreshScheduler {
    /// Creates a scheduler with the given period.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            pending: None,
        }
    }

    /// The refresh period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the next tick one period after `now`.
    ///
    /// Re-arming replaces a pending tick; at most one tick is pending.
    pub fn schedule(&mut self, now: Instant) -> TickHandle {
        let handle = TickHandle {
            generation: self.generation,
        };
        self.pending = Some((handle, now + self.interval));
        handle
    }

    /// Drops the pending tick and invalidates every issued handle.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    /// Returns true if `handle` was issued since the last cancellation.
    pub fn is_current(&self, handle: TickHandle) -> bool {
        handle.generation == self.generation
    }

    /// Returns true if a tick is armed.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle of the armed tick, if any.
    pub fn pending_handle(&self) -> Option<TickHandle> {
        self.pending.map(|(handle, _)| handle)
    }

    /// Time left until the armed tick is due, if any.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Takes the armed tick if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<TickHandle> {
        match self.pending {
            Some((handle, due)) if due <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }
}

//! Dashboard application state and command execution.

use std::time::{Duration, Instant};

use peekfetch_models::{LiveValueProvider, Section, SectionProvider};
use tracing::{debug, trace};

use super::refresh::merge_live;
use super::scheduler::{RefreshScheduler, TickHandle};
use super::state::NavigationState;
use super::update::{update, Command, Event};

/// Dashboard application.
///
/// Owns the navigation state, the section store and the refresh timer, and
/// is the only writer of any of them.
pub struct App<L> {
    state: NavigationState,
    sections: Vec<Section>,
    scheduler: RefreshScheduler,
    provider: L,
    should_quit: bool,
}

impl<L: LiveValueProvider> App<L> {
    /// Create a new app over an existing section store.
    pub fn new(sections: Vec<Section>, provider: L) -> Self {
        Self {
            state: NavigationState::new(),
            sections,
            scheduler: RefreshScheduler::default(),
            provider,
            should_quit: false,
        }
    }

    /// Create a new app, taking the startup snapshot from `provider`.
    pub fn from_provider(mut provider: L) -> Self
    where
        L: SectionProvider,
    {
        let sections = provider.snapshot();
        debug!(sections = sections.len(), "Collected startup snapshot");
        Self::new(sections, provider)
    }

    /// Replace the refresh timer.
    pub fn with_scheduler(mut self, scheduler: RefreshScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Handle one event at the current time.
    pub fn handle(&mut self, event: Event) {
        self.handle_at(event, Instant::now());
    }

    /// Handle one event as if it arrived at `now`.
    pub fn handle_at(&mut self, event: Event, now: Instant) {
        if let Event::Tick(handle) = event {
            if !self.scheduler.is_current(handle) {
                trace!("Dropping cancelled tick");
                return;
            }
        }

        let command = update(&mut self.state, &mut self.sections, event);
        self.execute(command, now);
    }

    fn execute(&mut self, command: Command, now: Instant) {
        match command {
            Command::None => {}
            Command::Quit => self.should_quit = true,
            Command::ScheduleTick => {
                self.scheduler.schedule(now);
            }
            Command::CancelTick => self.scheduler.cancel(),
            Command::RefreshLive => {
                merge_live(&mut self.sections, &mut self.provider);
            }
            Command::Batch(commands) => {
                for command in commands {
                    self.execute(command, now);
                }
            }
        }
    }

    /// Deliver the refresh tick if it is due at `now`.
    ///
    /// Returns true if a tick was handled.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        match self.scheduler.take_due(now) {
            Some(handle) => {
                self.handle_at(Event::Tick(handle), now);
                true
            }
            None => false,
        }
    }

    /// Time until the next refresh tick, if one is armed.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }

    /// Handle of the armed refresh tick, if any.
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.scheduler.pending_handle()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn provider(&self) -> &L {
        &self.provider
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

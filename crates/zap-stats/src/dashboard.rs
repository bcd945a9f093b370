//! Dashboard state machine.
//!
//! This module defines the [`Dashboard`], which holds everything a frame is
//! drawn from, completely decoupled from the terminal and the feed.
//!
//! This is a pure state machine: it consumes [`crate::DashboardEvent`] inputs
//! and produces [`crate::DashboardAction`] instructions for the runtime.
//!
//! # Responsibilities
//!
//! - Merges classified feed messages into the [`MetricStore`].
//! - Tracks the session lifecycle ([`Phase`]) and the watch start time.
//! - Tracks the upstream feed state for the header.
//! - Turns quit keys and interrupts into a stop request.

use std::time::{Duration, Instant};

use crate::{
    DashboardAction, DashboardEvent, FeedEvent, FeedState, MetricStore, Phase, StatUpdate,
};

/// Error text used when the feed queue closes without a reason.
pub const FEED_CLOSED: &str = "feed closed";

/// Dashboard state machine.
///
/// Owned by the runtime; the renderer only ever borrows it.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Session lifecycle.
    phase: Phase,
    /// Latest metric values.
    store: MetricStore,
    /// Upstream feed state.
    feed: FeedState,
    /// When the session started. `None` before start.
    started_at: Option<Instant>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Create a stopped dashboard with an empty store.
    pub fn new() -> Self {
        Self {
            phase: Phase::Stopped,
            store: MetricStore::new(),
            feed: FeedState::Waiting,
            started_at: None,
        }
    }

    /// Start the session. Only the first call has an effect.
    pub fn start(&mut self, now: Instant) -> Vec<DashboardAction> {
        if self.phase != Phase::Stopped || self.started_at.is_some() {
            return vec![];
        }
        self.phase = Phase::Running;
        self.started_at = Some(now);
        tracing::debug!("dashboard running");
        vec![DashboardAction::Render]
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: DashboardEvent) -> Vec<DashboardAction> {
        match event {
            DashboardEvent::Key(key) if key.is_quit() => self.request_stop(),
            DashboardEvent::Key(_) => vec![],
            DashboardEvent::Interrupt => self.request_stop(),
            DashboardEvent::Tick => self.render_if_running(),
            DashboardEvent::Resize(cols, rows) => {
                tracing::trace!(cols, rows, "terminal resized");
                self.render_if_running()
            },
            DashboardEvent::Feed(event) => {
                self.apply_feed(event);
                vec![]
            },
        }
    }

    /// Ask the loop to stop. Idempotent.
    pub fn request_stop(&mut self) -> Vec<DashboardAction> {
        match self.phase {
            Phase::Running => {
                tracing::debug!("dashboard stopping");
                self.phase = Phase::Stopping;
                vec![DashboardAction::Quit]
            },
            Phase::Stopping => vec![DashboardAction::Quit],
            Phase::Stopped => vec![],
        }
    }

    /// Record that the feed queue closed. Keeps an earlier, more specific
    /// disconnect reason if there is one.
    pub fn feed_closed(&mut self) {
        if !matches!(self.feed, FeedState::Disconnected { .. }) {
            self.feed = FeedState::Disconnected { error: FEED_CLOSED.to_string() };
        }
    }

    /// Mark the session as fully shut down.
    pub fn finish(&mut self) {
        self.phase = Phase::Stopped;
    }

    /// Merge one feed event. Never triggers a render on its own; the next
    /// tick picks the change up.
    pub fn apply_feed(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Message { topic, payload } => {
                match StatUpdate::from_message(&topic, payload) {
                    Some(update) => self.store.apply(update),
                    None => tracing::trace!(%topic, "ignoring unknown topic"),
                }
            },
            FeedEvent::Connected => {
                tracing::info!("feed connected");
                self.feed = FeedState::Connected;
            },
            FeedEvent::Disconnected { error } => {
                tracing::warn!(%error, "feed disconnected");
                self.feed = FeedState::Disconnected { error };
            },
        }
    }

    fn render_if_running(&self) -> Vec<DashboardAction> {
        if self.phase == Phase::Running { vec![DashboardAction::Render] } else { vec![] }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the loop should keep going.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Latest metric values.
    pub fn store(&self) -> &MetricStore {
        &self.store
    }

    /// Upstream feed state.
    pub fn feed_state(&self) -> &FeedState {
        &self.feed
    }

    /// Time watched since start. Zero before start.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at.map_or(Duration::ZERO, |started| now.saturating_duration_since(started))
    }
}

//! Dashboard input events.
//!
//! This module defines [`DashboardEvent`], the full set of inputs that drive
//! the [`crate::Dashboard`] state machine, and [`FeedEvent`], the boundary
//! type an upstream feed pushes into the runtime's queue.
//!
//! Events originate from three sources:
//! - User interaction (keyboard, resize, interrupt signals).
//! - The redraw timer.
//! - The upstream feed.

use crate::KeyInput;

/// Messages pushed by an upstream feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The feed is (re)connected and delivering messages.
    Connected,

    /// One `(topic, payload)` pair, in delivery order.
    Message {
        /// Subscription topic.
        topic: String,
        /// Raw payload text.
        payload: String,
    },

    /// The feed lost its source. Last known values stay on screen.
    Disconnected {
        /// Last error reported by the feed.
        error: String,
    },
}

impl FeedEvent {
    /// Convenience constructor for [`FeedEvent::Message`].
    pub fn message(topic: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::Message { topic: topic.into(), payload: payload.into() }
    }
}

/// Events processed by the Dashboard state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Redraw timer fired.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// External interrupt (SIGINT, SIGTERM, input source closed).
    Interrupt,

    /// Upstream feed activity.
    Feed(FeedEvent),
}

//! Observable dashboard state types.

/// Lifecycle of a dashboard session.
///
/// `Stopped -> Running -> Stopping -> Stopped`. A session runs once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started, or fully shut down.
    Stopped,
    /// Terminal acquired, loop active.
    Running,
    /// Termination requested; the loop exits at its next iteration.
    Stopping,
}

/// Upstream feed state as shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// Nothing heard from the feed yet.
    Waiting,
    /// Feed is delivering messages.
    Connected,
    /// Feed is gone.
    Disconnected {
        /// Last error reported by the feed.
        error: String,
    },
}

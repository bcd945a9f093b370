//! Dashboard side-effects.
//!
//! [`DashboardAction`] is what the [`crate::Dashboard`] state machine asks
//! the runtime to do after handling an event.

/// Actions produced by the Dashboard state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Redraw the full frame.
    Render,

    /// Leave the event loop.
    Quit,
}

//! Driver trait for abstracting terminal I/O.
//!
//! The [`Driver`] trait decouples the dashboard runtime from a specific
//! terminal library. The terminal frontend implements it with crossterm and
//! ratatui; tests implement it with a scripted input queue and an in-memory
//! frame buffer. The generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{Dashboard, DashboardEvent};

/// Abstracts terminal I/O for the dashboard runtime.
///
/// A driver is created with its terminal already acquired, so construction
/// is where "no terminal" fails. [`Driver::stop`] hands the terminal back.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Must be cancel safe: the runtime polls it inside `tokio::select!`
    /// alongside the tick timer and the feed queue. Returns `None` once the
    /// input source is gone, which the runtime treats as an interrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn poll_event(
        &mut self,
    ) -> impl Future<Output = Result<Option<DashboardEvent>, Self::Error>> + Send;

    /// Draw a full frame from the dashboard state.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written.
    fn render(&mut self, dashboard: &Dashboard) -> Result<(), Self::Error>;

    /// Release the terminal and stop background input. Called exactly once
    /// by the runtime, on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode cannot be restored.
    fn stop(&mut self) -> Result<(), Self::Error>;
}

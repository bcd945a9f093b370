//! Generic runtime for the dashboard loop.
//!
//! The Runtime multiplexes three sources in one `tokio::select!`:
//! - input events from the [`Driver`] (keyboard, resize, interrupt)
//! - the redraw timer
//! - the bounded feed queue
//!
//! It owns the [`Dashboard`] and the driver, so the store has exactly one
//! writer and frames have exactly one producer.

use std::time::{Duration, Instant};

use tokio::{
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::{Dashboard, DashboardAction, DashboardConfig, DashboardEvent, Driver, FeedEvent};

/// What woke the loop.
enum Wake<E> {
    Input(Result<Option<DashboardEvent>, E>),
    Tick,
    Feed(FeedEvent),
    FeedClosed,
}

/// Generic runtime that drives a [`Dashboard`] through a [`Driver`].
pub struct Runtime<D: Driver> {
    driver: D,
    dashboard: Dashboard,
    feed: mpsc::Receiver<FeedEvent>,
    tick_interval: Duration,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime over an acquired driver and the receiving end of the
    /// feed queue.
    pub fn new(driver: D, feed: mpsc::Receiver<FeedEvent>, config: &DashboardConfig) -> Self {
        Self { driver, dashboard: Dashboard::new(), feed, tick_interval: config.tick_interval }
    }

    /// Run the session to completion and return the final dashboard state.
    ///
    /// Whatever ends the loop (a quit key, an interrupt, a driver error), the
    /// feed queue is closed and drained and the driver is stopped before this
    /// returns. Closing the queue releases a producer blocked on a full queue.
    ///
    /// # Errors
    ///
    /// Returns the first driver error from the loop, or the error from
    /// releasing the terminal.
    pub async fn run(mut self) -> Result<Dashboard, D::Error> {
        let result = self.event_loop().await;

        self.drain_feed();
        let released = self.driver.stop();
        self.dashboard.finish();
        tracing::debug!("dashboard stopped");

        match (result, released) {
            (Ok(()), Ok(())) => Ok(self.dashboard),
            (Ok(()), Err(e)) | (Err(e), Ok(())) => Err(e),
            (Err(e), Err(release)) => {
                tracing::error!(error = %release, "failed to release terminal after loop error");
                Err(e)
            },
        }
    }

    /// Loop until the dashboard leaves `Running`.
    async fn event_loop(&mut self) -> Result<(), D::Error> {
        let actions = self.dashboard.start(Instant::now());
        if self.process_actions(actions)? {
            return Ok(());
        }

        let mut ticker = time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The initial frame is already drawn; first tick one period from now.
        ticker.reset();

        let mut feed_open = true;

        while self.dashboard.is_running() {
            let wake = tokio::select! {
                biased;

                input = self.driver.poll_event() => Wake::Input(input),

                _ = ticker.tick() => Wake::Tick,

                message = self.feed.recv(), if feed_open => match message {
                    Some(event) => Wake::Feed(event),
                    None => Wake::FeedClosed,
                },
            };

            let event = match wake {
                Wake::Input(input) => input?.unwrap_or(DashboardEvent::Interrupt),
                Wake::Tick => {
                    self.absorb_pending();
                    DashboardEvent::Tick
                },
                Wake::Feed(event) => DashboardEvent::Feed(event),
                Wake::FeedClosed => {
                    tracing::debug!("feed queue closed");
                    feed_open = false;
                    self.dashboard.feed_closed();
                    continue;
                },
            };

            let actions = self.dashboard.handle(event);
            if self.process_actions(actions)? {
                break;
            }
        }

        Ok(())
    }

    /// Execute actions. Returns `true` if the loop should exit.
    fn process_actions(&mut self, actions: Vec<DashboardAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                DashboardAction::Render => self.driver.render(&self.dashboard)?,
                DashboardAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Merge everything already queued, so a frame reflects every update
    /// delivered before its tick.
    fn absorb_pending(&mut self) {
        while let Ok(event) = self.feed.try_recv() {
            self.dashboard.apply_feed(event);
        }
    }

    /// Close the queue and merge what was still buffered.
    fn drain_feed(&mut self) {
        self.feed.close();
        let mut drained = 0usize;
        while let Ok(event) = self.feed.try_recv() {
            self.dashboard.apply_feed(event);
            drained = drained.saturating_add(1);
        }
        tracing::debug!(drained, "feed queue drained");
    }
}

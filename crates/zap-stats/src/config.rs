//! Dashboard loop configuration.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::FeedEvent;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Redraw interval must be non-zero.
    #[error("tick interval must be greater than zero")]
    ZeroTick,

    /// Feed queue must hold at least one message.
    #[error("feed queue capacity must be greater than zero")]
    ZeroQueue,
}

/// Runtime tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Interval between full redraws.
    pub tick_interval: Duration,
    /// Capacity of the bounded feed queue.
    pub queue_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { tick_interval: Duration::from_millis(100), queue_capacity: 1024 }
    }
}

impl DashboardConfig {
    /// Reject values the runtime cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueue);
        }
        Ok(())
    }

    /// Create the bounded feed queue sized by this configuration.
    pub fn feed_channel(&self) -> (mpsc::Sender<FeedEvent>, mpsc::Receiver<FeedEvent>) {
        mpsc::channel(self.queue_capacity.max(1))
    }
}

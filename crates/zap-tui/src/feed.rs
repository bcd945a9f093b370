//! Line-oriented upstream feed.
//!
//! Reads `topic<separator>payload` lines (the shape `mosquitto_sub -v -F
//! '%t\t%p'` prints) from any async reader and pushes them into the bounded
//! feed queue. The task announces itself with [`FeedEvent::Connected`] and
//! always ends with [`FeedEvent::Disconnected`], unless the dashboard closed
//! the queue first.

use std::path::PathBuf;

use thiserror::Error;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
    task::AbortHandle,
};
use zap_stats::{DashboardConfig, FEED_CLOSED, FeedEvent};

/// Default topic/payload separator.
pub const DEFAULT_SEPARATOR: &str = "\t";

/// Feed setup errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The input file could not be opened.
    #[error("cannot open feed input {path}: {source}")]
    Open {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// An empty separator cannot split anything.
    #[error("feed separator must not be empty")]
    EmptySeparator,
}

/// How feed lines are split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Text between topic and payload. The first occurrence splits.
    pub separator: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR.to_string() }
    }
}

impl FeedConfig {
    /// Reject a configuration that would drop every line.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.separator.is_empty() {
            return Err(FeedError::EmptySeparator);
        }
        Ok(())
    }
}

/// A running feed task and the receiving end of its queue.
pub struct FeedHandle {
    events: mpsc::Receiver<FeedEvent>,
    task: AbortHandle,
}

impl FeedHandle {
    /// Split into the queue receiver (for the runtime) and the task handle.
    pub fn into_parts(self) -> (mpsc::Receiver<FeedEvent>, AbortHandle) {
        (self.events, self.task)
    }
}

/// Split one line into `(topic, payload)`.
///
/// Only the first separator splits, so payloads may contain it. A line
/// without a separator or with an empty topic is malformed.
pub fn parse_line<'a>(line: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let (topic, payload) = line.split_once(separator)?;
    if topic.is_empty() {
        return None;
    }
    Some((topic, payload))
}

/// Spawn a task that pumps `reader` into a queue sized by `queue`.
pub fn spawn_feed<R>(reader: R, config: FeedConfig, queue: &DashboardConfig) -> FeedHandle
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, events) = queue.feed_channel();
    let task = tokio::spawn(pump(reader, config, tx)).abort_handle();
    FeedHandle { events, task }
}

async fn pump<R>(reader: R, config: FeedConfig, tx: mpsc::Sender<FeedEvent>)
where
    R: AsyncBufRead + Unpin,
{
    if tx.send(FeedEvent::Connected).await.is_err() {
        return;
    }

    let mut lines = reader.lines();
    let mut delivered = 0u64;
    let mut skipped = 0u64;

    let error = loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let Some((topic, payload)) = parse_line(&line, &config.separator) else {
                    if !line.trim().is_empty() {
                        tracing::warn!(%line, "skipping malformed feed line");
                        skipped += 1;
                    }
                    continue;
                };
                if tx.send(FeedEvent::message(topic, payload)).await.is_err() {
                    tracing::debug!(delivered, "feed queue closed by dashboard");
                    return;
                }
                delivered += 1;
            },
            Ok(None) => break FEED_CLOSED.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "feed read failed");
                break e.to_string();
            },
        }
    };

    tracing::info!(delivered, skipped, "feed ended");
    let _ = tx.send(FeedEvent::Disconnected { error }).await;
}

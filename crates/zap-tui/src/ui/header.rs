//! Header line
//!
//! Wall clock, then either the watch timer or the feed error.

use std::time::Duration;

use zap_stats::{FeedState, format::format_elapsed};

use super::writer::{Emphasis, TextWriter};

const QUIT_HINT: &str = "[Q] to quit";

/// Header text for one frame.
pub fn line(now: &str, elapsed: Duration, feed: &FeedState) -> String {
    match feed {
        FeedState::Disconnected { error } => {
            format!("Now:  {now:<24}  Disconnected: {error}  {QUIT_HINT}")
        },
        FeedState::Waiting | FeedState::Connected => {
            format!("Now:  {now:<24}  Watching:  {}  {QUIT_HINT}", format_elapsed(elapsed))
        },
    }
}

/// Draw the header at `(x, y)`.
pub fn draw(
    writer: &mut impl TextWriter,
    x: u16,
    y: u16,
    now: &str,
    elapsed: Duration,
    feed: &FeedState,
) {
    writer.write(x, y, &line(now, elapsed, feed), Emphasis::Plain);
}

//! Terminal dashboard for broker statistics
//!
//! A thin shell over [`zap_stats::Driver`] that provides terminal-specific
//! I/O and a line-oriented upstream feed. All orchestration logic lives in
//! the generic [`zap_stats::Runtime`].
//!
//! This crate only handles terminal input, rendering and feed plumbing.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod feed;
pub mod terminal;
pub mod ui;

pub use feed::{FeedConfig, FeedError, FeedHandle, spawn_feed};
pub use terminal::{TerminalDriver, TerminalError};
pub use zap_stats::{Dashboard, DashboardConfig, Driver, Runtime};

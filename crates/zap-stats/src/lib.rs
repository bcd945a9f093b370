//! Broker statistics dashboard core
//!
//! Pure state machines and a generic runtime for a live `$SYS` statistics
//! view. Nothing here touches a terminal: frontends plug in through the
//! [`Driver`] trait, which keeps the whole loop runnable under a scripted
//! driver in tests.
//!
//! # Components
//!
//! - [`Metric`] and [`topic`]: the closed set of statistics and the topic
//!   table that feeds them
//! - [`MetricStore`]: latest value per metric
//! - [`format`]: fixed-width numbers and uptime durations
//! - [`Dashboard`]: session state machine (events in, actions out)
//! - [`Driver`]: trait for terminal I/O
//! - [`Runtime`]: the tick / feed / input loop

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod config;
mod dashboard;
mod driver;
mod event;
pub mod format;
mod input;
mod metric;
mod runtime;
mod state;
mod store;
pub mod topic;

pub use action::DashboardAction;
pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, FEED_CLOSED};
pub use driver::Driver;
pub use event::{DashboardEvent, FeedEvent};
pub use input::KeyInput;
pub use metric::{LoadSeries, LoadWindow, Metric};
pub use runtime::Runtime;
pub use state::{FeedState, Phase};
pub use store::{MISSING, MetricStore};
pub use topic::{StatUpdate, classify};

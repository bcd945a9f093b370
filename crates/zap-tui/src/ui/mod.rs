//! UI rendering
//!
//! Lays the dashboard out on a fixed grid: a header line, then two columns
//! of panels. The left column starts at x = 0, the right one at half the
//! terminal width. Every frame is recomputed from scratch; nothing is cached
//! between redraws.
//!
//! All functions are pure: they read the [`Dashboard`] and issue draw calls
//! through a [`TextWriter`].

mod broker;
mod clients;
mod header;
mod load;
mod messages;
mod panel;
pub mod writer;

use std::time::Duration;

use clap::ValueEnum;
use zap_stats::Dashboard;
pub use writer::{BufferWriter, DrawCall, Emphasis, RecordingWriter, TextWriter};

/// `chrono` format of the header clock.
pub const CLOCK_FORMAT: &str = "%b %d, %Y %H:%M:%S";

const HEADER_POSITION: (u16, u16) = (1, 0);
const PANELS_TOP: u16 = 2;
const PANEL_GAP: u16 = 1;

/// Which panel sits under Broker and which under Load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PanelOrder {
    /// Message Stats under Broker, Clients under Load.
    #[default]
    MessagesFirst,
    /// Clients under Broker, Message Stats under Load.
    ClientsFirst,
}

/// Per-frame inputs that do not live in the dashboard state.
#[derive(Debug, Clone)]
pub struct FrameContext {
    /// Wall clock, already formatted with [`CLOCK_FORMAT`].
    pub now: String,
    /// Time watched so far.
    pub elapsed: Duration,
    /// Terminal width in columns.
    pub width: u16,
    /// Panel arrangement.
    pub order: PanelOrder,
}

/// Render one full frame.
pub fn render(writer: &mut impl TextWriter, dashboard: &Dashboard, frame: &FrameContext) {
    let store = dashboard.store();
    let (header_x, header_y) = HEADER_POSITION;
    header::draw(writer, header_x, header_y, &frame.now, frame.elapsed, dashboard.feed_state());

    let right = frame.width / 2;

    let y = broker::draw(writer, store, 0, PANELS_TOP).saturating_add(PANEL_GAP);
    match frame.order {
        PanelOrder::MessagesFirst => messages::draw(writer, store, 0, y),
        PanelOrder::ClientsFirst => clients::draw(writer, store, 0, y),
    };

    let y = load::draw(writer, store, right, PANELS_TOP).saturating_add(PANEL_GAP);
    match frame.order {
        PanelOrder::MessagesFirst => clients::draw(writer, store, right, y),
        PanelOrder::ClientsFirst => messages::draw(writer, store, right, y),
    };
}

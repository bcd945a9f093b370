//! Message Stats panel

use zap_stats::{Metric, MetricStore};

use super::{panel, writer::TextWriter};

const LABEL_WIDTH: usize = 18;

const TRAFFIC: [(&str, Metric); 4] = [
    ("Messages Received", Metric::MessagesReceived),
    ("Messages Sent", Metric::MessagesSent),
    ("Messages In-flight", Metric::MessagesInflight),
    ("Messages Stored", Metric::MessagesStored),
];

const PUBLISH: [(&str, Metric); 4] = [
    ("Messages Publish Dropped", Metric::MessagesPublishDropped),
    ("Messages Publish Sent", Metric::MessagesPublishSent),
    ("Messages Publish Received", Metric::MessagesPublishReceived),
    ("Messages Retained Count", Metric::MessagesRetainedCount),
];

/// Draw the Message Stats panel at `(x, y)`. Returns the row below it.
pub fn draw(writer: &mut impl TextWriter, store: &MetricStore, x: u16, y: u16) -> u16 {
    let mut y = panel::title(writer, x, y, LABEL_WIDTH, "Message Stats");
    for (label, metric) in TRAFFIC {
        y = panel::row(writer, x, y, LABEL_WIDTH, label, store.get(metric));
    }
    // Blank row between traffic and publish counters
    y = y.saturating_add(1);
    for (label, metric) in PUBLISH {
        y = panel::row(writer, x, y, LABEL_WIDTH, label, store.get(metric));
    }
    y
}

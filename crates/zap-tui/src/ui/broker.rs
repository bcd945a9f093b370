//! Broker panel
//!
//! Identity and totals: version, clock, uptime, subscriptions, bytes, heap.

use zap_stats::{Metric, MetricStore, format};

use super::{panel, writer::TextWriter};

const LABEL_WIDTH: usize = 19;

const ROWS: [(&str, Metric); 8] = [
    ("Broker Version", Metric::BrokerVersion),
    ("Broker Time", Metric::BrokerTime),
    ("Broker Uptime", Metric::BrokerUptime),
    ("Subscriptions Count", Metric::SubscriptionsCount),
    ("Total Bytes Sent", Metric::BytesSent),
    ("Total Bytes Received", Metric::BytesReceived),
    ("Heap Current Size", Metric::HeapCurrentSize),
    ("Heap Maximum Size", Metric::HeapMaximumSize),
];

/// Draw the Broker panel at `(x, y)`. Returns the row below it.
pub fn draw(writer: &mut impl TextWriter, store: &MetricStore, x: u16, y: u16) -> u16 {
    let mut y = panel::title(writer, x, y, LABEL_WIDTH, "Broker");
    for (label, metric) in ROWS {
        let raw = store.get(metric);
        let value = match metric {
            Metric::BrokerUptime => format::uptime_to_duration(raw),
            _ => raw.to_string(),
        };
        y = panel::row(writer, x, y, LABEL_WIDTH, label, &value);
    }
    y
}

//! Clients panel

use zap_stats::{Metric, MetricStore};

use super::{panel, writer::TextWriter};

const LABEL_WIDTH: usize = 20;

const ROWS: [(&str, Metric); 5] = [
    ("Clients Total", Metric::ClientsTotal),
    ("Clients Connected", Metric::ClientsConnected),
    ("Clients Disconnected", Metric::ClientsDisconnected),
    ("Clients Expired", Metric::ClientsExpired),
    ("Clients Maximum", Metric::ClientsMaximum),
];

/// Draw the Clients panel at `(x, y)`. Returns the row below it.
pub fn draw(writer: &mut impl TextWriter, store: &MetricStore, x: u16, y: u16) -> u16 {
    let mut y = panel::title(writer, x, y, LABEL_WIDTH, "Clients");
    for (label, metric) in ROWS {
        y = panel::row(writer, x, y, LABEL_WIDTH, label, store.get(metric));
    }
    y
}

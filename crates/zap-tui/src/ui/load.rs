//! Load panel
//!
//! One row per load series, three fixed-width columns for the 1, 5 and 15
//! minute averages.

use zap_stats::{LoadSeries, LoadWindow, Metric, MetricStore, format::fixed_width};

use super::writer::{Emphasis, TextWriter};

const LABEL_WIDTH: usize = 14;
const TITLE_WIDTH: usize = LABEL_WIDTH + 2;

/// Draw the Load panel at `(x, y)`. Returns the row below it.
pub fn draw(writer: &mut impl TextWriter, store: &MetricStore, x: u16, y: u16) -> u16 {
    let title = format!("{:<TITLE_WIDTH$}  1 min  5 min 15 min", "Load");
    writer.write(x, y, &title, Emphasis::Underline);

    let mut y = y.saturating_add(1);
    for series in LoadSeries::ALL {
        let [one, five, fifteen] =
            LoadWindow::ALL.map(|window| fixed_width(store.get(Metric::Load(series, window))));
        let label = series.label();
        let line = format!("{label:>LABEL_WIDTH$} : {one:>6} {five:>6} {fifteen:>6}");
        writer.write(x, y, &line, Emphasis::Plain);
        y = y.saturating_add(1);
    }
    y
}

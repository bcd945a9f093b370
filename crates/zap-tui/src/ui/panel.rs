//! Shared panel primitives
//!
//! Every panel is an underlined title followed by right-aligned labels, a
//! `" : "` separator and the value. Each helper returns the next free row.

use super::writer::{Emphasis, TextWriter};

/// Extra title width past the label column.
const TITLE_EXTRA: usize = 8;

/// Underlined title padded to `label_width + 8` columns.
pub(super) fn title(
    writer: &mut impl TextWriter,
    x: u16,
    y: u16,
    label_width: usize,
    text: &str,
) -> u16 {
    let width = label_width + TITLE_EXTRA;
    writer.write(x, y, &format!("{text:<width$}"), Emphasis::Underline);
    y.saturating_add(1)
}

/// One `label : value` row.
pub(super) fn row(
    writer: &mut impl TextWriter,
    x: u16,
    y: u16,
    label_width: usize,
    label: &str,
    value: &str,
) -> u16 {
    writer.write(x, y, &format!("{label:>label_width$} : {value}"), Emphasis::Plain);
    y.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::writer::RecordingWriter;

    #[test]
    fn title_is_padded_and_underlined() {
        let mut writer = RecordingWriter::new();
        assert_eq!(title(&mut writer, 0, 2, 4, "Ab"), 3);
        let call = &writer.calls()[0];
        assert_eq!(call.text, "Ab          ");
        assert_eq!(call.emphasis, Emphasis::Underline);
    }

    #[test]
    fn row_right_aligns_label() {
        let mut writer = RecordingWriter::new();
        assert_eq!(row(&mut writer, 3, 7, 6, "Foo", "42"), 8);
        assert_eq!(writer.text_at(3, 7), Some("   Foo : 42"));
    }

    #[test]
    fn long_label_is_not_truncated() {
        let mut writer = RecordingWriter::new();
        let _ = row(&mut writer, 0, 0, 3, "Longer", "x");
        assert_eq!(writer.text_at(0, 0), Some("Longer : x"));
    }
}

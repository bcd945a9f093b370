//! Text output primitive
//!
//! Panels never talk to ratatui directly. They place strings at absolute
//! cell positions through [`TextWriter`], which keeps layout code testable
//! without a terminal and keeps clipping in one place.

use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
};

/// How a run of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Default attributes.
    Plain,
    /// Underlined (panel titles).
    Underline,
}

impl Emphasis {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::default(),
            Self::Underline => Style::default().add_modifier(Modifier::UNDERLINED),
        }
    }
}

/// Cell-addressed text sink.
pub trait TextWriter {
    /// Draw `text` starting at column `x`, row `y`. Anything falling outside
    /// the writable area is dropped.
    fn write(&mut self, x: u16, y: u16, text: &str, emphasis: Emphasis);
}

/// [`TextWriter`] over a ratatui [`Buffer`], clipped to the buffer area.
///
/// Coordinates are relative to the top-left corner of the area.
pub struct BufferWriter<'a> {
    buffer: &'a mut Buffer,
}

impl<'a> BufferWriter<'a> {
    /// Wrap a frame buffer.
    pub fn new(buffer: &'a mut Buffer) -> Self {
        Self { buffer }
    }
}

impl TextWriter for BufferWriter<'_> {
    fn write(&mut self, x: u16, y: u16, text: &str, emphasis: Emphasis) {
        let area = self.buffer.area;
        if x >= area.width || y >= area.height {
            return;
        }

        let available = usize::from(area.width - x);
        let _ = self.buffer.set_stringn(
            area.x.saturating_add(x),
            area.y.saturating_add(y),
            text,
            available,
            emphasis.style(),
        );
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// Text as passed in, unclipped.
    pub text: String,
    /// Emphasis as passed in.
    pub emphasis: Emphasis,
}

/// [`TextWriter`] that remembers every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    calls: Vec<DrawCall>,
}

impl RecordingWriter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls in the order they were made.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text written at `(x, y)`, if any call started there.
    pub fn text_at(&self, x: u16, y: u16) -> Option<&str> {
        self.calls.iter().find(|w| w.x == x && w.y == y).map(|w| w.text.as_str())
    }
}

impl TextWriter for RecordingWriter {
    fn write(&mut self, x: u16, y: u16, text: &str, emphasis: Emphasis) {
        self.calls.push(DrawCall { x, y, text: text.to_string(), emphasis });
    }
}

// Chunk: docs/chunks/text_layout - Windowed text layout engine

//! Snapshot of the host widget state the layout engine reads.

use crate::config::TextConfig;
use crate::geometry::{Padding, Point};

/// A selection as two flat char indices into the text.
///
/// `start` is the anchor and may lie after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection (a caret) at `index`.
    pub fn caret(index: usize) -> Self {
        Self::new(index, index)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// `(min, max)` of the two indices.
    pub fn ordered(&self) -> (usize, usize) {
        if self.end < self.start {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }
}

/// Everything the engine needs to know about the host for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct HostState<'a> {
    pub text: &'a str,
    pub font_family: &'a str,
    pub font_size: f32,
    pub selection: Selection,
    /// Scroll offset of the viewport within the text.
    pub scroll: Point,
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
    pub padding: Padding,
    pub read_only: bool,
}

impl<'a> HostState<'a> {
    /// A snapshot of `text` laid out per `config`, with a caret at 0 and no
    /// scroll.
    pub fn from_config(text: &'a str, config: &'a TextConfig, width: f32, height: f32) -> Self {
        Self {
            text,
            font_family: &config.font_family,
            font_size: config.font_size,
            selection: Selection::default(),
            scroll: Point::default(),
            width,
            height,
            padding: config.padding,
            read_only: config.read_only,
        }
    }

    /// Read-only hosts show no caret.
    pub fn rejects_input(&self) -> bool {
        self.read_only
    }
}

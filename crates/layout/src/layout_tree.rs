// Chunk: docs/chunks/text_layout - Windowed text layout engine

//! The layout tree handed to the rendering adapter.
//!
//! The engine only decides what goes where; the adapter turns these nodes
//! into pixels. Line boxes are shared via `Rc` so an unchanged line hands the
//! adapter the very same box every frame, which lets it skip redrawing.

use std::ops::Range;
use std::rc::Rc;

use crate::geometry::{Padding, Rect, Size};

/// One rendered line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    pub text: String,
    pub font_family: String,
    pub font_size: f32,
    pub width: f32,
    pub height: f32,
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    /// Empty space standing in for lines outside the viewport.
    Spacer(Size),
    /// A visible line.
    Line(Rc<LineBox>),
    /// One rectangle of a selection highlight.
    SelectionPart(Rect),
    /// The caret of a collapsed selection.
    Cursor(Rect),
}

impl LayoutNode {
    /// Vertical space the node occupies in the text flow.
    ///
    /// Selection parts and the cursor are overlays and take none.
    pub fn flow_height(&self) -> f32 {
        match self {
            LayoutNode::Spacer(size) => size.height,
            LayoutNode::Line(line) => line.height,
            LayoutNode::SelectionPart(_) | LayoutNode::Cursor(_) => 0.0,
        }
    }
}

/// The text layer: a spacer, the visible lines, and a trailing spacer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    /// Width of the widest line in the document.
    pub width: f32,
    /// Sum of all line heights.
    pub height: f32,
    pub padding: Padding,
    /// Rows whose lines appear in `children`.
    pub rendered_rows: Range<usize>,
    pub children: Vec<LayoutNode>,
}

impl TextLayer {
    /// The rendered line boxes, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &Rc<LineBox>> {
        self.children.iter().filter_map(|node| match node {
            LayoutNode::Line(line) => Some(line),
            _ => None,
        })
    }
}

/// The full layout of a text widget: selection overlay and text layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub selection: Vec<LayoutNode>,
    pub text: TextLayer,
}

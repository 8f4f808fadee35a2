// Chunk: docs/chunks/text_document - Line-oriented text document with style ranges
// Chunk: docs/chunks/style_ranges - Edit-aware style ranges

//! live-text-buffer: the document model behind live-text.
//!
//! This crate provides a line-oriented text document with (row, column)
//! addressing, flat index conversion, and style ranges that follow the text
//! through edits.
//!
//! # Overview
//!
//! The main type is [`TextDocument`], which provides:
//! - Insertion and removal of arbitrary (multi-line) text at any position
//! - Conversion between positions and flat character indices
//! - A set of non-overlapping [`StyleRange`]s, kept in sync with every edit
//! - Word segmentation, word-wise movement, and char scanning for matchers
//!
//! # Example
//!
//! ```
//! use live_text_buffer::{Position, Range, Style, StyleRange, TextDocument};
//!
//! let mut doc = TextDocument::from_str("hello world");
//! doc.add_style_range(StyleRange::new(
//!     Style { bold: true, ..Style::default() },
//!     Range::new(Position::new(0, 6), Position::new(0, 11)),
//! ));
//!
//! // Text inserted before the styled word pushes the style along
//! doc.insert(">> ", Position::new(0, 0));
//! assert_eq!(doc.text_string(), ">> hello world");
//! let styled = doc.style_ranges()[0].range;
//! assert_eq!(doc.text_in_range(styled), "world");
//! ```
//!
//! # Columns
//!
//! Columns count chars (Unicode scalar values), and every newline counts as
//! one unit of a flat index. Caret movement that must not split user-visible
//! characters goes through [`TextDocument::position_before`] and
//! [`TextDocument::position_after`], which step whole grapheme clusters.

mod grapheme;
pub mod index;
mod style;
mod style_range;
mod text_document;
mod types;

pub use grapheme::{grapheme_boundary_left, grapheme_boundary_right};
pub use index::{clip_position, index_to_position, position_to_index, LineSource, NEWLINE};
pub use style::{Color, NamedColor, Style, UnderlineStyle};
pub use style_range::{merge_into, shift_for_delete, shift_for_insert, EditTracking, StyleRange};
pub use text_document::{TextDocument, Word};
pub use types::{Position, Range};

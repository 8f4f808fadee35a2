// Chunk: docs/chunks/index_conversion - Shared flat index <-> position conversion

//! Conversion between (row, column) positions and flat character indices.
//!
//! A flat index addresses the document text as if all lines were joined with
//! [`NEWLINE`], each newline counting as exactly [`NEWLINE_LEN`] index units.
//! Both the text document and the layout engine go through this module, so
//! the two can never disagree about where an index lands.
//!
//! All functions clip instead of failing: rows beyond the last line clamp to
//! the last line, columns beyond a line's length clamp to its end, and an
//! index past the end of the text maps to the last position.

use crate::types::Position;

/// Line separator used when joining lines into a flat string.
pub const NEWLINE: &str = "\n";

/// Number of index units a line separator occupies.
pub const NEWLINE_LEN: usize = 1;

/// Anything that can report the char length of each of its lines.
pub trait LineSource {
    /// Number of lines.
    fn line_count(&self) -> usize;

    /// Length of `row` in chars, excluding the line separator.
    ///
    /// Callers only pass rows below `line_count()`.
    fn line_len(&self, row: usize) -> usize;
}

/// Length of `line` in chars.
pub(crate) fn char_len(line: &str) -> usize {
    // ASCII fast path: one byte per char
    if line.is_ascii() {
        line.len()
    } else {
        line.chars().count()
    }
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_len(&self, row: usize) -> usize {
        char_len(self[row].as_ref())
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_len(&self, row: usize) -> usize {
        char_len(self[row].as_ref())
    }
}

/// Clamps `pos` to the nearest position that exists in `lines`.
///
/// An empty source clips everything to (0, 0).
pub fn clip_position<L: LineSource + ?Sized>(lines: &L, pos: Position) -> Position {
    let count = lines.line_count();
    if count == 0 {
        return Position::default();
    }
    let row = pos.row.min(count - 1);
    let column = pos.column.min(lines.line_len(row));
    Position::new(row, column)
}

/// Converts a position to a flat index, counting from the start of `start_row`.
///
/// Pass `start_row = 0` for an absolute index. The position is clipped first.
pub fn position_to_index<L: LineSource + ?Sized>(
    lines: &L,
    pos: Position,
    start_row: usize,
) -> usize {
    let pos = clip_position(lines, pos);
    let preceding: usize = (start_row..pos.row)
        .map(|row| lines.line_len(row) + NEWLINE_LEN)
        .sum();
    preceding + pos.column
}

/// Converts a flat index, counted from the start of `start_row`, to a position.
///
/// An index beyond the end of the text returns the last position.
pub fn index_to_position<L: LineSource + ?Sized>(
    lines: &L,
    index: usize,
    start_row: usize,
) -> Position {
    let count = lines.line_count();
    if count == 0 {
        return Position::default();
    }

    let mut remaining = index;
    for row in start_row..count {
        let len = lines.line_len(row);
        if remaining <= len {
            return Position::new(row, remaining);
        }
        remaining -= len + NEWLINE_LEN;
    }

    let last = count - 1;
    Position::new(last, lines.line_len(last))
}

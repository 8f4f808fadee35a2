// Chunk: docs/chunks/grapheme_navigation - Grapheme cluster boundary helpers

//! Grapheme cluster boundary detection on document lines.
//!
//! Columns count chars (Unicode scalar values), but a caret should never land
//! inside what a user perceives as a single character:
//!
//! - ZWJ emoji sequences (several chars joined by U+200D)
//! - Combining sequences: e + U+0301
//! - Regional indicator pairs (flags)
//!
//! These helpers map a char column to the nearest grapheme boundary on either
//! side. Columns past the end of the line clamp to the line length.

use unicode_segmentation::UnicodeSegmentation;

/// Char columns at which grapheme clusters start, plus the line length.
fn grapheme_starts(line: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut column = 0;
    for grapheme in line.graphemes(true) {
        starts.push(column);
        column += grapheme.chars().count();
    }
    starts.push(column);
    starts
}

/// Returns the grapheme boundary strictly before `column`, or 0.
///
/// From the middle of a cluster this is the start of that cluster.
pub fn grapheme_boundary_left(line: &str, column: usize) -> usize {
    if column == 0 {
        return 0;
    }
    // ASCII text needs no segmentation
    if line.is_ascii() {
        return column.min(line.len()) - 1;
    }
    let starts = grapheme_starts(line);
    let len = starts.last().copied().unwrap_or(0);
    let column = column.min(len);
    starts
        .into_iter()
        .take_while(|&start| start < column)
        .last()
        .unwrap_or(0)
}

/// Returns the grapheme boundary strictly after `column`, or the line length.
///
/// From the middle of a cluster this is the end of that cluster.
pub fn grapheme_boundary_right(line: &str, column: usize) -> usize {
    if line.is_ascii() {
        return (column + 1).min(line.len());
    }
    let starts = grapheme_starts(line);
    let len = starts.last().copied().unwrap_or(0);
    starts
        .into_iter()
        .find(|&start| start > column)
        .unwrap_or(len)
}

// Chunk: docs/chunks/style_ranges - Edit-aware style ranges
//!
//! Style ranges and the edit notifications that keep them aligned with text.
//!
//! A document owns a flat set of [`StyleRange`]s that never overlap. Adding a
//! range goes through [`merge_into`], which carves the span of the new range
//! out of whatever was there before, so the most recently added style always
//! wins for a given character.
//!
//! When the document text changes, every range is told about the edit via
//! [`EditTracking`] and moves its endpoints accordingly:
//!
//! - insertion before a range shifts it forward
//! - insertion inside (or at the end of) a range extends it
//! - deletion before a range shifts it back
//! - deletion overlapping a range shrinks it, possibly to nothing

use crate::style::Style;
use crate::types::{Position, Range};

/// Receives the edits applied to the text an object is anchored to.
pub trait EditTracking {
    /// Text was inserted; `insertion` covers the new text.
    fn on_insert(&mut self, insertion: Range);

    /// Text was deleted; `deletion` covers the text as it was before removal.
    fn on_delete(&mut self, deletion: Range);
}

/// Where `pos` ends up after the text covered by `insertion` is inserted.
///
/// Positions at or after the insertion point move forward with the text.
pub fn shift_for_insert(pos: Position, insertion: Range) -> Position {
    let insertion = insertion.normalized();
    let (start, end) = (insertion.start, insertion.end);
    if pos < start {
        return pos;
    }
    if pos.row == start.row {
        Position::new(end.row, end.column + (pos.column - start.column))
    } else {
        Position::new(pos.row + (end.row - start.row), pos.column)
    }
}

/// Where `pos` ends up after the text covered by `deletion` is removed.
///
/// Positions inside the deleted span collapse onto its start.
pub fn shift_for_delete(pos: Position, deletion: Range) -> Position {
    let deletion = deletion.normalized();
    let (start, end) = (deletion.start, deletion.end);
    if pos <= start {
        pos
    } else if pos <= end {
        start
    } else if pos.row == end.row {
        Position::new(start.row, start.column + (pos.column - end.column))
    } else {
        Position::new(pos.row - (end.row - start.row), pos.column)
    }
}

/// A style attached to a span of document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleRange {
    pub style: Style,
    /// Always stored in document order.
    pub range: Range,
}

impl StyleRange {
    /// Creates a style range; a reversed `range` is normalized.
    pub fn new(style: Style, range: Range) -> Self {
        Self {
            style,
            range: range.normalized(),
        }
    }

    pub fn start(&self) -> Position {
        self.range.start
    }

    pub fn end(&self) -> Position {
        self.range.end
    }

    /// Returns true once edits have collapsed the span to zero width.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Sorts style ranges by start position.
    pub fn sort(ranges: &mut [StyleRange]) {
        ranges.sort_by_key(|sr| sr.range.start);
    }
}

impl EditTracking for StyleRange {
    fn on_insert(&mut self, insertion: Range) {
        self.range.start = shift_for_insert(self.range.start, insertion);
        self.range.end = shift_for_insert(self.range.end, insertion);
    }

    fn on_delete(&mut self, deletion: Range) {
        self.range.start = shift_for_delete(self.range.start, deletion);
        self.range.end = shift_for_delete(self.range.end, deletion);
    }
}

/// Adds `new` to `existing`, giving it priority over the span it covers.
///
/// Existing ranges that overlap `new` are trimmed to what lies outside it:
/// a range that straddles `new` on both sides is split in two, a range fully
/// covered by `new` disappears. The result is sorted by start position and
/// free of overlaps. An empty `new` range leaves `existing` unchanged.
pub fn merge_into(existing: Vec<StyleRange>, new: StyleRange) -> Vec<StyleRange> {
    let new = StyleRange::new(new.style, new.range);
    if new.is_empty() {
        return existing;
    }

    let mut merged = Vec::with_capacity(existing.len() + 2);
    for old in existing {
        if !old.range.overlaps(&new.range) {
            merged.push(old);
            continue;
        }
        let old_range = old.range.normalized();
        if old_range.start < new.range.start {
            merged.push(StyleRange::new(
                old.style,
                Range::new(old_range.start, new.range.start),
            ));
        }
        if new.range.end < old_range.end {
            merged.push(StyleRange::new(
                old.style,
                Range::new(new.range.end, old_range.end),
            ));
        }
    }
    merged.push(new);
    StyleRange::sort(&mut merged);
    merged
}

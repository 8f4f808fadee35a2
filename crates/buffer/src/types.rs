// Chunk: docs/chunks/position_range - Position and range primitives

use std::cmp::Ordering;
use std::fmt;

/// Position in a document as (row, column) where both are 0-indexed.
///
/// `column` counts chars within the row. A position carries no validity of
/// its own: it is only meaningful once clipped against a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare by row first, then by column
        match self.row.cmp(&other.row) {
            Ordering::Equal => self.column.cmp(&other.column),
            ord => ord,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A span between two positions.
///
/// A range may be reversed (`end` before `start`), e.g. a selection dragged
/// upwards. Call [`Range::normalized`] before using it structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width range at `pos`.
    pub fn at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns true if `end` comes before `start` in document order.
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// Returns the range with its endpoints in document order.
    pub fn normalized(self) -> Self {
        if self.is_reversed() {
            Self {
                start: self.end,
                end: self.start,
            }
        } else {
            self
        }
    }

    /// Returns true if the range spans no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `pos` lies in `[start, end)` of the normalized range.
    pub fn contains(&self, pos: Position) -> bool {
        let range = self.normalized();
        range.start <= pos && pos < range.end
    }

    /// Returns true if the two ranges share at least one character.
    pub fn overlaps(&self, other: &Range) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.start < b.end && b.start < a.end
    }

    /// Returns the sub-range covered by both ranges.
    ///
    /// Disjoint ranges produce an empty range positioned at the later of the
    /// two starts.
    pub fn intersect(&self, other: &Range) -> Range {
        let a = self.normalized();
        let b = other.normalized();
        let start = a.start.max(b.start);
        let end = a.end.min(b.end);
        if end < start {
            Range::at(start)
        } else {
            Range::new(start, end)
        }
    }

    /// Sorts ranges by their (normalized) start position.
    pub fn sort(ranges: &mut [Range]) {
        ranges.sort_by_key(|range| range.normalized().start);
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

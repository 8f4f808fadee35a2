// Chunk: docs/chunks/text_document - Line-oriented text document with style ranges

//! TextDocument is the main public API for editing styled text.
//!
//! The document stores its text as a plain vector of lines plus a flat set of
//! non-overlapping [`StyleRange`]s. Every edit goes through [`TextDocument::insert`]
//! or [`TextDocument::remove`], which update the lines and notify each style
//! range in the same call, so the two can never drift apart.
//!
//! A per-row cache of the style ranges touching each line is kept alongside.
//! It is derived data: each entry can always be recomputed from the style
//! range set, and every edit refreshes the rows it touches.
//!
//! Positions and ranges handed to the document are clamped, never rejected.
//! A caret that sits just past the end of a line while typing is normal
//! input, not an error.

use std::fmt;

use tracing::{debug, trace};

use crate::grapheme::{grapheme_boundary_left, grapheme_boundary_right};
use crate::index::{self, char_len, LineSource, NEWLINE};
use crate::style_range::{merge_into, EditTracking, StyleRange};
use crate::types::{Position, Range};

/// Max chars of text shown by the `Display` impl.
const DISPLAY_TRUNCATE: usize = 60;

/// Byte offset of char `column` in `line`, or the line's byte length.
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

/// The chars of `line` in `[from, to)`, clamped to the line.
fn char_slice(line: &str, from: usize, to: usize) -> &str {
    let from = byte_offset(line, from);
    let to = byte_offset(line, to).max(from);
    &line[from..to]
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

// Chunk: docs/chunks/word_navigation - Word segmentation and word-wise movement
/// A maximal run of word characters on a single line.
///
/// A word with empty `text` is a zero-width placeholder, returned when no
/// word exists where one was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Index of the word within its line.
    pub index: usize,
    pub text: String,
    pub range: Range,
}

impl Word {
    /// A zero-width placeholder word at `pos`.
    pub fn empty_at(pos: Position) -> Self {
        Self {
            index: 0,
            text: String::new(),
            range: Range::at(pos),
        }
    }

    /// Returns true for the zero-width placeholder.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if `column` lies in `[start, end]`, both ends included.
    fn touches(&self, column: usize) -> bool {
        self.range.start.column <= column && column <= self.range.end.column
    }
}

/// A multi-line text document with style ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDocument {
    lines: Vec<String>,
    /// Char length of each line; always `lines.len()` entries.
    line_lengths: Vec<usize>,
    /// Non-overlapping, sorted by start.
    style_ranges: Vec<StyleRange>,
    /// `style_ranges` clipped to each row; always `lines.len()` entries.
    style_ranges_by_line: Vec<Vec<StyleRange>>,
}

impl TextDocument {
    /// Creates a document from explicit lines and style ranges.
    ///
    /// Style ranges are added in order, so later ones win where they overlap.
    pub fn new(lines: Vec<String>, style_ranges: Vec<StyleRange>) -> Self {
        let rows = lines.len();
        let line_lengths = lines.iter().map(|line| char_len(line)).collect();
        let mut doc = Self {
            lines,
            line_lengths,
            style_ranges: Vec::new(),
            style_ranges_by_line: vec![Vec::new(); rows],
        };
        for style_range in style_ranges {
            doc.add_style_range(style_range);
        }
        doc
    }

    /// Creates a document from a string, splitting it on newlines.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but parsing a string into a document cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self::new(Self::parse_into_lines(text), Vec::new())
    }

    /// Splits text into lines. A trailing newline yields a final empty line.
    pub fn parse_into_lines(text: &str) -> Vec<String> {
        text.split(NEWLINE).map(String::from).collect()
    }

    // ==================== Accessors ====================

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the line at `row`, clamping the row into the document.
    ///
    /// A document without lines returns an empty string.
    pub fn get_line(&self, row: usize) -> &str {
        match self.lines.len() {
            0 => "",
            count => &self.lines[row.min(count - 1)],
        }
    }

    /// Length of `row` in chars; 0 for rows outside the document.
    pub fn line_len(&self, row: usize) -> usize {
        self.line_lengths.get(row).copied().unwrap_or(0)
    }

    /// The whole text, lines joined with newlines.
    pub fn text_string(&self) -> String {
        self.lines.join(NEWLINE)
    }

    /// Length of [`Self::text_string`] in chars.
    pub fn string_length(&self) -> usize {
        self.position_to_index(self.end_position(), 0)
    }

    /// Position just after the last char, or (0, 0) without lines.
    pub fn end_position(&self) -> Position {
        match self.lines.len() {
            0 => Position::default(),
            count => Position::new(count - 1, self.line_len(count - 1)),
        }
    }

    // ==================== Style Ranges ====================
    // Chunk: docs/chunks/style_ranges - Edit-aware style ranges

    pub fn style_ranges(&self) -> &[StyleRange] {
        &self.style_ranges
    }

    /// Style ranges clipped to each row, sorted by start column.
    pub fn style_ranges_by_line(&self) -> &[Vec<StyleRange>] {
        &self.style_ranges_by_line
    }

    /// Style ranges clipped to `row`; empty for rows outside the document.
    pub fn style_ranges_for_line(&self, row: usize) -> &[StyleRange] {
        self.style_ranges_by_line
            .get(row)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Adds a style range. It takes priority over existing ranges it overlaps.
    pub fn add_style_range(&mut self, style_range: StyleRange) {
        let style_range = StyleRange::new(style_range.style, style_range.range);
        self.style_ranges = merge_into(std::mem::take(&mut self.style_ranges), style_range);
        if self.lines.is_empty() {
            return;
        }
        let last_row = style_range.end().row.min(self.lines.len() - 1);
        for row in style_range.start().row..=last_row {
            self.update_line_style_ranges(row);
        }
    }

    /// Removes every style range.
    pub fn clear_style_ranges(&mut self) {
        self.style_ranges.clear();
        for row in &mut self.style_ranges_by_line {
            row.clear();
        }
    }

    /// Recomputes the cached style ranges for `row`.
    fn update_line_style_ranges(&mut self, row: usize) {
        if row >= self.lines.len() {
            return;
        }
        let line_range = Range::new(
            Position::new(row, 0),
            Position::new(row, self.line_len(row)),
        );
        let mut on_line: Vec<StyleRange> = self
            .style_ranges
            .iter()
            .filter_map(|sr| {
                let clipped = line_range.intersect(&sr.range);
                (!clipped.is_empty()).then(|| StyleRange::new(sr.style, clipped))
            })
            .collect();
        StyleRange::sort(&mut on_line);
        self.style_ranges_by_line[row] = on_line;
    }

    // ==================== Positions ====================

    /// Converts a position to a flat index counted from the start of `start_row`.
    pub fn position_to_index(&self, pos: Position, start_row: usize) -> usize {
        index::position_to_index(self, pos, start_row)
    }

    /// Converts a flat index counted from the start of `start_row` to a position.
    pub fn index_to_position(&self, index: usize, start_row: usize) -> Position {
        index::index_to_position(self, index, start_row)
    }

    /// Clamps `pos` to the nearest position inside the document.
    pub fn clip_position_to_lines(&self, pos: Position) -> Position {
        index::clip_position(self, pos)
    }

    /// Returns the text between the two (clipped) endpoints of `range`.
    pub fn text_in_range(&self, range: Range) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let start = self.clip_position_to_lines(range.start);
        let end = self.clip_position_to_lines(range.end);
        let Range { start, end } = Range::new(start, end).normalized();

        if start.row == end.row {
            return char_slice(&self.lines[start.row], start.column, end.column).to_string();
        }

        let mut result = char_slice(&self.lines[start.row], start.column, usize::MAX).to_string();
        for line in &self.lines[start.row + 1..end.row] {
            result.push_str(NEWLINE);
            result.push_str(line);
        }
        result.push_str(NEWLINE);
        result.push_str(char_slice(&self.lines[end.row], 0, end.column));
        result
    }

    // Chunk: docs/chunks/grapheme_navigation - Grapheme-aware caret stepping
    /// The position one grapheme cluster to the left, wrapping to the end of
    /// the previous line. Stays put at the document start.
    pub fn position_before(&self, pos: Position) -> Position {
        let pos = self.clip_position_to_lines(pos);
        if pos.column > 0 {
            let column = grapheme_boundary_left(&self.lines[pos.row], pos.column);
            Position::new(pos.row, column)
        } else if pos.row > 0 {
            Position::new(pos.row - 1, self.line_len(pos.row - 1))
        } else {
            pos
        }
    }

    /// The position one grapheme cluster to the right, wrapping to the start
    /// of the next line. Stays put at the document end.
    pub fn position_after(&self, pos: Position) -> Position {
        let pos = self.clip_position_to_lines(pos);
        if pos.column < self.line_len(pos.row) {
            let column = grapheme_boundary_right(&self.lines[pos.row], pos.column);
            Position::new(pos.row, column)
        } else if pos.row + 1 < self.lines.len() {
            Position::new(pos.row + 1, 0)
        } else {
            pos
        }
    }

    // ==================== Mutations ====================

    /// Inserts `text` at `pos` and returns the range the new text occupies.
    ///
    /// Insert positions outside the document are honored rather than clipped:
    /// missing rows are added as empty lines and a short line is padded with
    /// spaces up to `pos.column`. Style ranges move with the text.
    pub fn insert(&mut self, text: &str, pos: Position) -> Range {
        if pos.row >= self.lines.len() {
            debug!(
                row = pos.row,
                missing = pos.row + 1 - self.lines.len(),
                "padding document with empty lines for insert"
            );
            self.lines.resize(pos.row + 1, String::new());
            self.line_lengths.resize(pos.row + 1, 0);
            self.style_ranges_by_line.resize(pos.row + 1, Vec::new());
        }

        let row = pos.row;
        let line_len = self.line_len(row);
        if pos.column > line_len {
            let padding = pos.column - line_len;
            debug!(row, padding, "padding line with spaces for insert");
            self.lines[row].push_str(&" ".repeat(padding));
        }

        let mut insertion_lines = text.split(NEWLINE);
        let first = insertion_lines.next().unwrap_or("");
        let rest: Vec<&str> = insertion_lines.collect();

        let split_at = byte_offset(&self.lines[row], pos.column);
        let after = self.lines[row].split_off(split_at);
        self.lines[row].push_str(first);

        let end = match rest.last() {
            Some(last) => Position::new(row + rest.len(), char_len(last)),
            None => Position::new(row, pos.column + char_len(first)),
        };

        if !rest.is_empty() {
            self.lines
                .splice(row + 1..row + 1, rest.iter().map(|line| line.to_string()));
            self.line_lengths
                .splice(row + 1..row + 1, rest.iter().map(|line| char_len(line)));
            self.style_ranges_by_line.splice(
                row + 1..row + 1,
                std::iter::repeat_with(Vec::new).take(rest.len()),
            );
        }
        self.lines[end.row].push_str(&after);
        self.line_lengths[row] = char_len(&self.lines[row]);
        self.line_lengths[end.row] = char_len(&self.lines[end.row]);

        let insertion = Range::new(pos, end);
        for style_range in &mut self.style_ranges {
            style_range.on_insert(insertion);
        }
        if end.row > row {
            // Cached rows below moved down with the text
            for cached in self.style_ranges_by_line[end.row + 1..]
                .iter_mut()
                .flatten()
            {
                cached.on_insert(insertion);
            }
        }
        for changed in row..=end.row {
            self.update_line_style_ranges(changed);
        }

        trace!(%insertion, "inserted text");
        insertion
    }

    /// Removes the text in `range` and returns the range actually removed.
    ///
    /// The range is normalized and both ends are clipped to the document.
    /// Style ranges shrink or move; those left empty are dropped.
    pub fn remove(&mut self, range: Range) -> Range {
        if self.lines.is_empty() {
            return Range::default();
        }

        let range = range.normalized();
        let start = self.clip_position_to_lines(range.start);
        let end = self.clip_position_to_lines(range.end);
        let removed = Range::new(start, end);

        let tail_at = byte_offset(&self.lines[end.row], end.column);
        let tail = self.lines[end.row][tail_at..].to_string();
        let head_at = byte_offset(&self.lines[start.row], start.column);
        self.lines[start.row].truncate(head_at);
        self.lines[start.row].push_str(&tail);
        self.line_lengths[start.row] = char_len(&self.lines[start.row]);

        if end.row > start.row {
            self.lines.drain(start.row + 1..=end.row);
            self.line_lengths.drain(start.row + 1..=end.row);
            self.style_ranges_by_line.drain(start.row + 1..=end.row);
        }

        for style_range in &mut self.style_ranges {
            style_range.on_delete(removed);
        }
        let before = self.style_ranges.len();
        self.style_ranges.retain(|sr| !sr.is_empty());
        if self.style_ranges.len() < before {
            trace!(
                dropped = before - self.style_ranges.len(),
                "dropped emptied style ranges"
            );
        }

        if end.row > start.row {
            // Cached rows below moved up with the text
            for cached in self.style_ranges_by_line[start.row + 1..]
                .iter_mut()
                .flatten()
            {
                cached.on_delete(removed);
            }
        }
        self.update_line_style_ranges(start.row);

        trace!(%removed, "removed text");
        removed
    }

    /// Replaces the text in `range` with `text`; returns the new text's range.
    pub fn set_text_in_range(&mut self, text: &str, range: Range) -> Range {
        let removed = self.remove(range);
        self.insert(text, removed.start)
    }

    /// Returns an independent copy, style ranges included.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    // ==================== Words ====================
    // Chunk: docs/chunks/word_navigation - Word segmentation and word-wise movement

    /// Splits `row` into words: maximal runs of alphanumeric chars and `_`.
    pub fn words_of_line(&self, row: usize) -> Vec<Word> {
        let line = self.lines.get(row).map_or("", String::as_str);
        let mut words = Vec::new();
        let mut current: Option<(usize, String)> = None;

        let push = |words: &mut Vec<Word>, start: usize, end: usize, text: String| {
            let index = words.len();
            words.push(Word {
                index,
                text,
                range: Range::new(Position::new(row, start), Position::new(row, end)),
            });
        };

        let mut len = 0;
        for (column, ch) in line.chars().enumerate() {
            len = column + 1;
            if is_word_char(ch) {
                current
                    .get_or_insert_with(|| (column, String::new()))
                    .1
                    .push(ch);
            } else if let Some((start, text)) = current.take() {
                push(&mut words, start, column, text);
            }
        }
        if let Some((start, text)) = current {
            push(&mut words, start, len, text);
        }
        words
    }

    /// The word in `words` whose columns `[start, end]` contain `pos.column`.
    fn find_word(words: &[Word], pos: Position) -> Option<&Word> {
        words.iter().find(|word| word.touches(pos.column))
    }

    /// The word touching `pos`, or a placeholder at `pos`.
    pub fn word_at(&self, pos: Position) -> Word {
        let words = self.words_of_line(pos.row);
        Self::find_word(&words, pos)
            .cloned()
            .unwrap_or_else(|| Word::empty_at(pos))
    }

    /// The word a "word left" movement from `pos` lands on.
    ///
    /// Inside a word that is the word itself; at a word's start it is the
    /// previous word. With nothing to the left on this row, earlier rows are
    /// searched for their last word.
    pub fn word_left(&self, pos: Position) -> Word {
        let pos = self.clip_position_to_lines(pos);
        let words = self.words_of_line(pos.row);

        let nothing_left = words.first().map_or(true, |first| pos <= first.range.start);
        if nothing_left {
            return (0..pos.row)
                .rev()
                .find_map(|row| self.words_of_line(row).pop())
                .unwrap_or_else(|| Word::empty_at(pos));
        }

        if let Some(word) = Self::find_word(&words, pos) {
            // pos is past the first word's start, so index >= 1 here
            return if word.range.start == pos {
                words[word.index - 1].clone()
            } else {
                word.clone()
            };
        }

        words
            .iter()
            .rev()
            .find(|word| word.range.end.column <= pos.column)
            .cloned()
            .unwrap_or_else(|| Word::empty_at(pos))
    }

    /// The word a "word right" movement from `pos` lands on.
    ///
    /// Mirror image of [`Self::word_left`]: at a word's end it is the next
    /// word, and later rows are searched for their first word.
    pub fn word_right(&self, pos: Position) -> Word {
        let pos = self.clip_position_to_lines(pos);
        let words = self.words_of_line(pos.row);

        let nothing_right = words.last().map_or(true, |last| last.range.end <= pos);
        if nothing_right {
            return (pos.row + 1..self.lines.len())
                .find_map(|row| self.words_of_line(row).into_iter().next())
                .unwrap_or_else(|| Word::empty_at(pos));
        }

        if let Some(word) = Self::find_word(&words, pos) {
            // pos is before the last word's end, so index + 1 exists here
            return if word.range.end == pos {
                words[word.index + 1].clone()
            } else {
                word.clone()
            };
        }

        words
            .iter()
            .find(|word| word.range.start.column >= pos.column)
            .cloned()
            .unwrap_or_else(|| Word::empty_at(pos))
    }

    // ==================== Scanning ====================

    /// Visits chars from `start` (inclusive) to the end of the document.
    ///
    /// Returns the first `Some` produced by `matcher`, or `None` if the scan
    /// runs off the end.
    pub fn scan_forward<T, F>(&self, start: Position, mut matcher: F) -> Option<T>
    where
        F: FnMut(char, Position) -> Option<T>,
    {
        if self.lines.is_empty() {
            return None;
        }
        let start = self.clip_position_to_lines(start);
        for (row, line) in self.lines.iter().enumerate().skip(start.row) {
            let skip = if row == start.row { start.column } else { 0 };
            for (column, ch) in line.chars().enumerate().skip(skip) {
                if let Some(found) = matcher(ch, Position::new(row, column)) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Visits chars from just before `start` back to the document start.
    ///
    /// Returns the first `Some` produced by `matcher`, or `None` if the scan
    /// runs off the start.
    pub fn scan_backward<T, F>(&self, start: Position, mut matcher: F) -> Option<T>
    where
        F: FnMut(char, Position) -> Option<T>,
    {
        if self.lines.is_empty() {
            return None;
        }
        let start = self.clip_position_to_lines(start);
        for row in (0..=start.row).rev() {
            let line = &self.lines[row];
            let len = self.line_lengths[row];
            let end = if row == start.row { start.column } else { len };
            for (offset, ch) in line.chars().rev().skip(len - end).enumerate() {
                let column = end - 1 - offset;
                if let Some(found) = matcher(ch, Position::new(row, column)) {
                    return Some(found);
                }
            }
        }
        None
    }
}

impl LineSource for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, row: usize) -> usize {
        self.line_lengths[row]
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text_string();
        if text.chars().count() > DISPLAY_TRUNCATE {
            let head: String = text.chars().take(DISPLAY_TRUNCATE).collect();
            write!(f, "TextDocument(\"{}...\")", head)
        } else {
            write!(f, "TextDocument(\"{}\")", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, NamedColor, Style};

    fn pos(row: usize, column: usize) -> Position {
        Position::new(row, column)
    }

    fn range(r1: usize, c1: usize, r2: usize, c2: usize) -> Range {
        Range::new(pos(r1, c1), pos(r2, c2))
    }

    fn red() -> Style {
        Style::fg(Color::Named(NamedColor::Red))
    }

    fn blue() -> Style {
        Style::fg(Color::Named(NamedColor::Blue))
    }

    /// The by-line cache must always equal a fresh recomputation.
    fn assert_line_cache_consistent(doc: &TextDocument) {
        let mut fresh = TextDocument::new(doc.lines().to_vec(), Vec::new());
        for sr in doc.style_ranges() {
            fresh.add_style_range(*sr);
        }
        assert_eq!(doc.style_ranges_by_line(), fresh.style_ranges_by_line());
        assert_eq!(doc.style_ranges_by_line().len(), doc.line_count());
        assert_eq!(doc.line_lengths, fresh.line_lengths);
    }

    // ==================== Construction ====================

    #[test]
    fn test_from_str_splits_lines() {
        let doc = TextDocument::from_str("hello\nworld");
        assert_eq!(doc.lines(), &["hello".to_string(), "world".to_string()]);
        assert_eq!(doc.text_string(), "hello\nworld");
    }

    #[test]
    fn test_trailing_newline_yields_empty_line() {
        let doc = TextDocument::from_str("a\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.end_position(), pos(1, 0));
    }

    #[test]
    fn test_end_position_of_line_less_document() {
        let doc = TextDocument::new(Vec::new(), Vec::new());
        assert_eq!(doc.end_position(), pos(0, 0));
        assert_eq!(doc.text_string(), "");
        assert_eq!(doc.get_line(4), "");
    }

    #[test]
    fn test_get_line_clamps_row() {
        let doc = TextDocument::from_str("a\nb");
        assert_eq!(doc.get_line(10), "b");
    }

    #[test]
    fn test_string_length_counts_newlines() {
        let doc = TextDocument::from_str("héllo\nwörld");
        assert_eq!(doc.string_length(), 11);
    }

    #[test]
    fn test_display_truncates() {
        let doc = TextDocument::from_str(&"x".repeat(100));
        let shown = doc.to_string();
        assert_eq!(shown, format!("TextDocument(\"{}...\")", "x".repeat(60)));
        assert_eq!(
            TextDocument::from_str("hi").to_string(),
            "TextDocument(\"hi\")"
        );
    }

    // ==================== Positions ====================

    #[test]
    fn test_index_to_position() {
        let doc = TextDocument::from_str("hello\nworld");
        assert_eq!(doc.index_to_position(8, 0), pos(1, 2));
    }

    #[test]
    fn test_clip_position_to_lines() {
        let doc = TextDocument::from_str("abc\nde");
        assert_eq!(doc.clip_position_to_lines(pos(5, 5)), pos(1, 2));
        assert_eq!(doc.clip_position_to_lines(pos(0, 9)), pos(0, 3));
        assert_eq!(doc.clip_position_to_lines(pos(1, 1)), pos(1, 1));
    }

    #[test]
    fn test_text_in_range_single_row() {
        let doc = TextDocument::from_str("hello world");
        assert_eq!(doc.text_in_range(range(0, 6, 0, 11)), "world");
        assert_eq!(doc.text_in_range(range(0, 3, 0, 3)), "");
    }

    #[test]
    fn test_text_in_range_multi_row_reversed() {
        let doc = TextDocument::from_str("abc\ndef\nghi");
        assert_eq!(doc.text_in_range(range(2, 1, 0, 1)), "bc\ndef\ng");
    }

    #[test]
    fn test_text_in_range_whole_document() {
        let doc = TextDocument::from_str("one\n\ntwo three\n");
        let whole = Range::new(pos(0, 0), doc.end_position());
        assert_eq!(doc.text_in_range(whole), doc.text_string());
    }

    #[test]
    fn test_text_in_range_clips_endpoints() {
        let doc = TextDocument::from_str("abc\ndef");
        assert_eq!(doc.text_in_range(range(0, 2, 9, 9)), "c\ndef");
    }

    #[test]
    fn test_text_in_range_reversed_after_clipping() {
        let doc = TextDocument::from_str("abc\ndef");
        // Clipping maps (9, 9) to the end, which still comes after (0, 2)
        assert_eq!(doc.text_in_range(range(9, 9, 0, 2)), "c\ndef");
        assert_eq!(doc.text_in_range(range(0, 3, 0, 1)), "bc");
    }

    // ==================== Insert Tests ====================

    #[test]
    fn test_insert_within_line() {
        let mut doc = TextDocument::from_str("hllo");
        let inserted = doc.insert("e", pos(0, 1));
        assert_eq!(doc.text_string(), "hello");
        assert_eq!(inserted, range(0, 1, 0, 2));
    }

    #[test]
    fn test_insert_multiline_appends_remainder_to_last_row() {
        let mut doc = TextDocument::from_str("abcdef");
        let inserted = doc.insert("X\nYY\nZ", pos(0, 3));
        assert_eq!(doc.lines(), &["abcX", "YY", "Zdef"].map(String::from));
        assert_eq!(inserted, range(0, 3, 2, 1));
    }

    #[test]
    fn test_insert_newline_only() {
        let mut doc = TextDocument::from_str("helloworld");
        let inserted = doc.insert("\n", pos(0, 5));
        assert_eq!(doc.lines(), &["hello", "world"].map(String::from));
        assert_eq!(inserted, range(0, 5, 1, 0));
    }

    #[test]
    fn test_insert_pads_short_line_with_spaces() {
        let mut doc = TextDocument::from_str("ab");
        let inserted = doc.insert("x", pos(0, 5));
        assert_eq!(doc.text_string(), "ab   x");
        assert_eq!(inserted, range(0, 5, 0, 6));
    }

    #[test]
    fn test_insert_past_last_row_adds_lines() {
        let mut doc = TextDocument::from_str("a");
        doc.insert("z", pos(2, 0));
        assert_eq!(doc.lines(), &["a", "", "z"].map(String::from));
        assert_eq!(doc.style_ranges_by_line().len(), 3);
    }

    #[test]
    fn test_insert_into_line_less_document() {
        let mut doc = TextDocument::new(Vec::new(), Vec::new());
        doc.insert("hi", pos(0, 0));
        assert_eq!(doc.text_string(), "hi");
    }

    #[test]
    fn test_insert_multibyte() {
        let mut doc = TextDocument::from_str("añb");
        doc.insert("é", pos(0, 2));
        assert_eq!(doc.text_string(), "añéb");
    }

    #[test]
    fn test_line_lengths_follow_edits() {
        let mut doc = TextDocument::from_str("héllo\nwörld");
        assert_eq!(doc.line_lengths, vec![5, 5]);

        doc.insert("ü\nnew ✓\n", pos(0, 2));
        doc.insert("x", pos(5, 3));
        assert_eq!(doc.text_string(), "héü\nnew ✓\nllo\nwörld\n\n   x");
        let counted: Vec<usize> = doc.lines().iter().map(|l| l.chars().count()).collect();
        assert_eq!(doc.line_lengths, counted);

        doc.remove(range(0, 1, 3, 2));
        assert_eq!(doc.text_string(), "hrld\n\n   x");
        assert_eq!(doc.line_lengths, vec![4, 0, 4]);
        assert_eq!(doc.string_length(), 10);
        assert_eq!(doc.index_to_position(9, 0), pos(2, 3));
    }

    #[test]
    fn test_insert_then_remove_restores_text() {
        let before = "first line\nsecond\n\nlast";
        for (text, at) in [
            ("abc", pos(0, 3)),
            ("x\ny\nz", pos(1, 6)),
            ("\n", pos(2, 0)),
        ] {
            let mut doc = TextDocument::from_str(before);
            let inserted = doc.insert(text, at);
            doc.remove(inserted);
            assert_eq!(doc.text_string(), before, "inserting {:?} at {}", text, at);
        }
    }

    // ==================== Remove Tests ====================

    #[test]
    fn test_remove_across_rows() {
        let mut doc = TextDocument::from_str("abc\ndef\nghi");
        doc.remove(range(0, 1, 2, 1));
        assert_eq!(doc.lines(), &["ahi".to_string()]);
    }

    #[test]
    fn test_remove_reversed_range() {
        let mut doc = TextDocument::from_str("abc\ndef\nghi");
        let removed = doc.remove(range(2, 1, 0, 1));
        assert_eq!(doc.lines(), &["ahi".to_string()]);
        assert_eq!(removed, range(0, 1, 2, 1));
    }

    #[test]
    fn test_remove_clamps_end_to_document() {
        let mut doc = TextDocument::from_str("abc\ndef");
        let removed = doc.remove(range(0, 2, 7, 7));
        assert_eq!(doc.text_string(), "ab");
        assert_eq!(removed, range(0, 2, 1, 3));
    }

    #[test]
    fn test_remove_on_line_less_document_is_noop() {
        let mut doc = TextDocument::new(Vec::new(), Vec::new());
        assert_eq!(doc.remove(range(0, 0, 1, 1)), Range::default());
        assert_eq!(doc.line_count(), 0);
    }

    #[test]
    fn test_set_text_in_range() {
        let mut doc = TextDocument::from_str("hello world");
        let replaced = doc.set_text_in_range("there", range(0, 6, 0, 11));
        assert_eq!(doc.text_string(), "hello there");
        assert_eq!(replaced, range(0, 6, 0, 11));
    }

    #[test]
    fn test_set_text_in_reversed_range_uses_document_order_start() {
        let mut doc = TextDocument::from_str("abc\ndef");
        doc.set_text_in_range("X", range(1, 1, 0, 1));
        assert_eq!(doc.text_string(), "aXef");
    }

    // ==================== Style Range Tests ====================

    #[test]
    fn test_add_style_range_fills_line_cache() {
        let mut doc = TextDocument::from_str("abc\ndef\nghi");
        doc.add_style_range(StyleRange::new(red(), range(0, 1, 2, 2)));
        assert_eq!(
            doc.style_ranges_for_line(0),
            &[StyleRange::new(red(), range(0, 1, 0, 3))]
        );
        assert_eq!(
            doc.style_ranges_for_line(1),
            &[StyleRange::new(red(), range(1, 0, 1, 3))]
        );
        assert_eq!(
            doc.style_ranges_for_line(2),
            &[StyleRange::new(red(), range(2, 0, 2, 2))]
        );
        assert!(doc.style_ranges_for_line(3).is_empty());
    }

    #[test]
    fn test_line_cache_sorted_by_column() {
        let mut doc = TextDocument::from_str("abcdefgh");
        doc.add_style_range(StyleRange::new(red(), range(0, 5, 0, 7)));
        doc.add_style_range(StyleRange::new(blue(), range(0, 0, 0, 2)));
        let cached = doc.style_ranges_for_line(0);
        assert_eq!(cached[0].style, blue());
        assert_eq!(cached[1].style, red());
    }

    #[test]
    fn test_constructor_style_ranges_newest_wins() {
        let doc = TextDocument::new(
            vec!["abcdefgh".to_string()],
            vec![
                StyleRange::new(red(), range(0, 0, 0, 8)),
                StyleRange::new(blue(), range(0, 2, 0, 4)),
            ],
        );
        assert_eq!(doc.style_ranges().len(), 3);
        assert_line_cache_consistent(&doc);
    }

    #[test]
    fn test_insert_before_style_range_shifts_it() {
        let mut doc = TextDocument::from_str("hello world");
        doc.add_style_range(StyleRange::new(red(), range(0, 6, 0, 11)));
        doc.insert(">> ", pos(0, 0));
        assert_eq!(doc.style_ranges()[0].range, range(0, 9, 0, 14));
        assert_eq!(doc.text_in_range(doc.style_ranges()[0].range), "world");
        assert_line_cache_consistent(&doc);
    }

    #[test]
    fn test_insert_newline_moves_styles_on_later_rows() {
        let mut doc = TextDocument::from_str("one\ntwo\nthree");
        doc.add_style_range(StyleRange::new(red(), range(2, 0, 2, 5)));
        doc.insert("\n\n", pos(0, 1));
        assert_eq!(doc.style_ranges()[0].range, range(4, 0, 4, 5));
        assert_eq!(
            doc.style_ranges_for_line(4),
            &[StyleRange::new(red(), range(4, 0, 4, 5))]
        );
        assert_line_cache_consistent(&doc);
    }

    #[test]
    fn test_insert_inside_style_range_extends_it() {
        let mut doc = TextDocument::from_str("abcdef");
        doc.add_style_range(StyleRange::new(red(), range(0, 1, 0, 4)));
        doc.insert("XY", pos(0, 2));
        assert_eq!(doc.style_ranges()[0].range, range(0, 1, 0, 6));
        assert_line_cache_consistent(&doc);
    }

    #[test]
    fn test_remove_covering_style_range_drops_it() {
        let mut doc = TextDocument::from_str("abc\ndef\nghi");
        doc.add_style_range(StyleRange::new(red(), range(1, 0, 1, 3)));
        doc.add_style_range(StyleRange::new(blue(), range(2, 1, 2, 3)));
        doc.remove(range(0, 1, 2, 1));
        assert_eq!(
            doc.style_ranges(),
            &[StyleRange::new(blue(), range(0, 1, 0, 3))]
        );
        assert_eq!(doc.text_in_range(doc.style_ranges()[0].range), "hi");
        assert_line_cache_consistent(&doc);
    }

    #[test]
    fn test_remove_moves_styles_on_later_rows_up() {
        let mut doc = TextDocument::from_str("a\nb\nc\nd");
        doc.add_style_range(StyleRange::new(red(), range(3, 0, 3, 1)));
        doc.remove(range(0, 1, 2, 0));
        assert_eq!(doc.text_string(), "ac\nd");
        assert_eq!(
            doc.style_ranges_for_line(1),
            &[StyleRange::new(red(), range(1, 0, 1, 1))]
        );
        assert_line_cache_consistent(&doc);
    }

    #[test]
    fn test_clear_style_ranges() {
        let mut doc = TextDocument::from_str("abc\ndef");
        doc.add_style_range(StyleRange::new(red(), range(0, 0, 1, 3)));
        doc.clear_style_ranges();
        assert!(doc.style_ranges().is_empty());
        assert!(doc.style_ranges_by_line().iter().all(Vec::is_empty));
        assert_eq!(doc.style_ranges_by_line().len(), 2);
    }

    #[test]
    fn test_copy_is_independent_and_keeps_styles() {
        let mut doc = TextDocument::from_str("abc");
        doc.add_style_range(StyleRange::new(red(), range(0, 0, 0, 2)));
        let copy = doc.copy();
        doc.insert("zzz", pos(0, 0));
        assert_eq!(copy.text_string(), "abc");
        assert_eq!(
            copy.style_ranges(),
            &[StyleRange::new(red(), range(0, 0, 0, 2))]
        );
    }

    // ==================== Word Tests ====================

    #[test]
    fn test_words_of_line() {
        let doc = TextDocument::from_str("foo bar_baz 123");
        let words = doc.words_of_line(0);
        let summary: Vec<(&str, usize, usize)> = words
            .iter()
            .map(|w| (&w.text[..], w.range.start.column, w.range.end.column))
            .collect();
        assert_eq!(
            summary,
            vec![("foo", 0, 3), ("bar_baz", 4, 11), ("123", 12, 15)]
        );
        assert_eq!(words[2].index, 2);
    }

    #[test]
    fn test_words_of_line_leading_and_repeated_delimiters() {
        let doc = TextDocument::from_str("  (a, bc)  ");
        let texts: Vec<String> = doc.words_of_line(0).into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["a", "bc"]);
    }

    #[test]
    fn test_words_of_missing_row_is_empty() {
        let doc = TextDocument::from_str("abc");
        assert!(doc.words_of_line(7).is_empty());
    }

    #[test]
    fn test_word_at() {
        let doc = TextDocument::from_str("foo bar");
        assert_eq!(doc.word_at(pos(0, 5)).text, "bar");
        // Word end is inclusive
        assert_eq!(doc.word_at(pos(0, 3)).text, "foo");
    }

    #[test]
    fn test_word_at_delimiter_is_placeholder() {
        let doc = TextDocument::from_str("foo  bar");
        let word = doc.word_at(pos(0, 4));
        assert!(word.is_empty());
        assert_eq!(word.range, Range::at(pos(0, 4)));
    }

    #[test]
    fn test_word_left() {
        let doc = TextDocument::from_str("foo bar baz");
        // Inside "bar"
        assert_eq!(doc.word_left(pos(0, 6)).text, "bar");
        // At the start of "bar"
        assert_eq!(doc.word_left(pos(0, 4)).text, "foo");
        // At the end of "baz"
        assert_eq!(doc.word_left(pos(0, 11)).text, "baz");
    }

    #[test]
    fn test_word_left_from_delimiter() {
        let doc = TextDocument::from_str("foo  bar");
        assert_eq!(doc.word_left(pos(0, 4)).text, "foo");
    }

    #[test]
    fn test_word_left_crosses_rows_skipping_empty_lines() {
        let doc = TextDocument::from_str("alpha beta\n\n  \n  gamma");
        let word = doc.word_left(pos(3, 1));
        assert_eq!(word.text, "beta");
        assert_eq!(word.range, range(0, 6, 0, 10));
    }

    #[test]
    fn test_word_left_at_document_start() {
        let doc = TextDocument::from_str("  foo");
        let word = doc.word_left(pos(0, 1));
        assert!(word.is_empty());
        assert_eq!(word.range, Range::at(pos(0, 1)));
    }

    #[test]
    fn test_word_right() {
        let doc = TextDocument::from_str("foo bar baz");
        assert_eq!(doc.word_right(pos(0, 1)).text, "foo");
        assert_eq!(doc.word_right(pos(0, 3)).text, "bar");
        assert_eq!(doc.word_right(pos(0, 0)).text, "foo");
    }

    #[test]
    fn test_word_right_from_delimiter() {
        let doc = TextDocument::from_str("foo  bar");
        assert_eq!(doc.word_right(pos(0, 4)).text, "bar");
    }

    #[test]
    fn test_word_right_crosses_rows() {
        let doc = TextDocument::from_str("end.\n\n--\nnext word");
        let word = doc.word_right(pos(0, 3));
        assert_eq!(word.text, "next");
        assert_eq!(word.range, range(3, 0, 3, 4));
    }

    #[test]
    fn test_word_right_at_document_end() {
        let doc = TextDocument::from_str("foo ..");
        let word = doc.word_right(pos(0, 4));
        assert!(word.is_empty());
        assert_eq!(word.range, Range::at(pos(0, 4)));
    }

    // ==================== Scan Tests ====================

    #[test]
    fn test_scan_forward_includes_start_char() {
        let doc = TextDocument::from_str("a(b)\nc)");
        let found = doc.scan_forward(pos(0, 3), |ch, at| (ch == ')').then_some(at));
        assert_eq!(found, Some(pos(0, 3)));
    }

    #[test]
    fn test_scan_forward_crosses_rows() {
        let doc = TextDocument::from_str("abc\n\nxyz");
        let found = doc.scan_forward(pos(0, 1), |ch, at| (ch == 'y').then_some(at));
        assert_eq!(found, Some(pos(2, 1)));
    }

    #[test]
    fn test_scan_forward_not_found() {
        let doc = TextDocument::from_str("abc\ndef");
        assert_eq!(
            doc.scan_forward(pos(0, 0), |ch, _| (ch == 'q').then_some(())),
            None
        );
    }

    #[test]
    fn test_scan_backward_excludes_start_char() {
        let doc = TextDocument::from_str("(a)");
        let mut visited = Vec::new();
        let found: Option<()> = doc.scan_backward(pos(0, 2), |ch, at| {
            visited.push((ch, at.column));
            None
        });
        assert_eq!(found, None);
        assert_eq!(visited, vec![('a', 1), ('(', 0)]);
    }

    #[test]
    fn test_scan_backward_crosses_rows() {
        let doc = TextDocument::from_str("x{\n\n  y");
        let found = doc.scan_backward(pos(2, 2), |ch, at| (ch == '{').then_some(at));
        assert_eq!(found, Some(pos(0, 1)));
    }

    #[test]
    fn test_scan_bracket_matching_with_depth() {
        let doc = TextDocument::from_str("f(a, (b), c)");
        let mut depth = 0;
        let close = doc.scan_forward(pos(0, 2), |ch, at| {
            match ch {
                '(' => depth += 1,
                ')' if depth == 0 => return Some(at),
                ')' => depth -= 1,
                _ => {}
            }
            None
        });
        assert_eq!(close, Some(pos(0, 11)));
    }

    // ==================== Grapheme Navigation Tests ====================

    #[test]
    fn test_position_after_wraps_to_next_row() {
        let doc = TextDocument::from_str("ab\ncd");
        assert_eq!(doc.position_after(pos(0, 1)), pos(0, 2));
        assert_eq!(doc.position_after(pos(0, 2)), pos(1, 0));
        assert_eq!(doc.position_after(pos(1, 2)), pos(1, 2));
    }

    #[test]
    fn test_position_before_wraps_to_previous_row() {
        let doc = TextDocument::from_str("ab\ncd");
        assert_eq!(doc.position_before(pos(1, 0)), pos(0, 2));
        assert_eq!(doc.position_before(pos(0, 0)), pos(0, 0));
    }

    #[test]
    fn test_position_steps_over_combining_sequence() {
        let doc = TextDocument::from_str("ae\u{0301}b");
        assert_eq!(doc.position_after(pos(0, 1)), pos(0, 3));
        assert_eq!(doc.position_before(pos(0, 3)), pos(0, 1));
    }
}

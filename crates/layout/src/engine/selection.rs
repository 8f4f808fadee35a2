// Chunk: docs/chunks/selection_geometry - Selection rectangles and caret

//! Selection highlight geometry.
//!
//! A selection is drawn as at most three rectangles:
//!
//! ```text
//!         start ┌──────────────┐   first row: start to the right edge
//! ┌─────────────┘              │   middle rows: full width
//! │              ┌─────────────┘
//! └──────────────┘ end               last row: left edge to end
//! ```
//!
//! A selection within one row is a single rectangle, one spanning two adjacent
//! rows needs two. A collapsed selection is drawn as a caret instead.

use tracing::trace;

use live_text_buffer::index_to_position;

use crate::error::MetricError;
use crate::geometry::{Point, Rect};
use crate::host::HostState;
use crate::layout_tree::LayoutNode;

use super::constants::CURSOR_WIDTH;
use super::TextLayoutEngine;

impl TextLayoutEngine {
    /// Builds the selection overlay for `host`'s selection.
    ///
    /// All rectangles are offset by the host padding's left and top insets.
    pub fn render_selection_layer(
        &mut self,
        host: &HostState<'_>,
    ) -> Result<Vec<LayoutNode>, MetricError> {
        self.update_from_host_if_necessary(host);
        if self.chunks.is_empty() {
            return Ok(Vec::new());
        }

        let (start, end) = host.selection.ordered();
        let start_text_pos = index_to_position(&self.lines(), start, 0);
        let end_text_pos = index_to_position(&self.lines(), end, 0);
        let start_pos = self.pixel_position_for(host, start_text_pos)?;
        let end_pos = self.pixel_position_for(host, end_text_pos)?;
        let origin = host.padding.origin();

        if start == end {
            if host.rejects_input() {
                trace!("read-only host, no caret");
                return Ok(Vec::new());
            }
            let height = self
                .metric_provider
                .default_line_height(host.font_family, host.font_size)?;
            let caret = Rect::new(start_pos.x, start_pos.y, CURSOR_WIDTH, height);
            return Ok(vec![LayoutNode::Cursor(caret.translate(origin))]);
        }

        let part = |from: Point, to: Point| {
            LayoutNode::SelectionPart(Rect::from_corners(from, to).translate(origin))
        };
        let end_line_height = self.chunks[end_text_pos.row].height()?;
        let end_bottom = end_pos.add_xy(0.0, end_line_height);

        if start_text_pos.row == end_text_pos.row {
            trace!(row = start_text_pos.row, "single row selection");
            return Ok(vec![part(start_pos, end_bottom)]);
        }

        let start_line_bottom = start_pos.y + self.chunks[start_text_pos.row].height()?;
        let first_row_end = Point::new(host.width, start_line_bottom);
        let second_row_start = Point::new(0.0, start_line_bottom);

        if start_text_pos.row + 1 == end_text_pos.row {
            trace!(row = start_text_pos.row, "two row selection");
            return Ok(vec![
                part(start_pos, first_row_end),
                part(second_row_start, end_bottom),
            ]);
        }

        let middle_end = Point::new(host.width, end_pos.y);
        let last_row_start = Point::new(0.0, end_pos.y);
        trace!(
            start_row = start_text_pos.row,
            end_row = end_text_pos.row,
            "multi row selection"
        );
        Ok(vec![
            part(start_pos, first_row_end),
            part(second_row_start, middle_end),
            part(last_row_start, end_bottom),
        ])
    }
}

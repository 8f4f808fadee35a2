// Chunk: docs/chunks/text_layout - Windowed text layout engine

//! Mapping between pixel coordinates and text positions.
//!
//! Pixel coordinates are relative to the top-left of the text, before
//! padding. Rows are stacked by their measured heights, so lines of
//! different heights map correctly.

use live_text_buffer::{index_to_position, position_to_index, Position};

use crate::error::MetricError;
use crate::geometry::{Point, Rect};
use crate::host::HostState;

use super::TextLayoutEngine;

impl TextLayoutEngine {
    /// Top-left pixel of `pos`.
    ///
    /// Rows past the last line use the last line; columns past a line's end
    /// use the line end. Without lines this is the origin.
    pub fn pixel_position_for(
        &mut self,
        host: &HostState<'_>,
        pos: Position,
    ) -> Result<Point, MetricError> {
        self.update_from_host_if_necessary(host);
        let Some(last) = self.chunks.len().checked_sub(1) else {
            return Ok(Point::default());
        };

        let row = pos.row.min(last);
        let mut y = 0.0;
        for chunk in &mut self.chunks[..row] {
            y += chunk.height()?;
        }
        let x = self.chunks[row].x_offset_for(pos.column)?;
        Ok(Point::new(x, y))
    }

    /// Top-left pixel of the flat char `index`.
    pub fn pixel_position_for_index(
        &mut self,
        host: &HostState<'_>,
        index: usize,
    ) -> Result<Point, MetricError> {
        self.update_from_host_if_necessary(host);
        let pos = index_to_position(&self.lines(), index, 0);
        self.pixel_position_for(host, pos)
    }

    /// Text position under `point`.
    ///
    /// Points above the text map to the first row, points below it to the
    /// last row.
    pub fn text_position_for(
        &mut self,
        host: &HostState<'_>,
        point: Point,
    ) -> Result<Position, MetricError> {
        self.update_from_host_if_necessary(host);
        let Some(last) = self.chunks.len().checked_sub(1) else {
            return Ok(Position::default());
        };

        let mut remaining = point.y.max(0.0);
        let mut row = 0;
        while row < last {
            let height = self.chunks[row].height()?;
            if remaining < height {
                break;
            }
            remaining -= height;
            row += 1;
        }

        let column = self.chunks[row].column_for_x_offset(point.x)?;
        Ok(Position::new(row, column))
    }

    /// Flat char index under `point`.
    pub fn text_index_for(
        &mut self,
        host: &HostState<'_>,
        point: Point,
    ) -> Result<usize, MetricError> {
        let pos = self.text_position_for(host, point)?;
        Ok(position_to_index(&self.lines(), pos, 0))
    }

    /// Bounds of the whole text: widest line by summed line heights.
    pub fn text_bounds(&mut self, host: &HostState<'_>) -> Result<Rect, MetricError> {
        self.update_from_host_if_necessary(host);
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for chunk in &mut self.chunks {
            width = width.max(chunk.width()?);
            height += chunk.height()?;
        }
        Ok(Rect::new(0.0, 0.0, width, height))
    }
}

// Chunk: docs/chunks/viewport_windowing - Spacer-based viewport windowing

//! Viewport windowing of the text lines.
//!
//! Only lines that intersect the viewport get a line box. Lines above and
//! below it are folded into one spacer each, so the layer keeps the height
//! (and width) of the full text while its node count stays proportional to
//! the viewport.

use tracing::trace;

use crate::error::MetricError;
use crate::geometry::Size;
use crate::host::HostState;
use crate::layout_tree::{LayoutNode, TextLayer};

use super::TextLayoutEngine;

impl TextLayoutEngine {
    /// Builds the text layer for the viewport `[scroll.y, scroll.y + height]`.
    ///
    /// Children are: a spacer for the lines above the viewport, the visible
    /// lines, and a spacer for the lines below. Each spacer's width is the
    /// widest line seen up to and including its own lines.
    pub fn render_text_layer(&mut self, host: &HostState<'_>) -> Result<TextLayer, MetricError> {
        self.update_from_host_if_necessary(host);

        let visible_top = host.scroll.y;
        let visible_bottom = visible_top + host.height;
        let mut text_width: f32 = 0.0;
        let mut text_height: f32 = 0.0;
        let mut row = 0;

        // Lines ending above the viewport
        while let Some(chunk) = self.chunks.get_mut(row) {
            let (width, height) = (chunk.width()?, chunk.height()?);
            if text_height + height >= visible_top {
                break;
            }
            text_width = text_width.max(width);
            text_height += height;
            row += 1;
        }

        let mut children = vec![LayoutNode::Spacer(Size::new(text_width, text_height))];
        let first_rendered = row;

        // Lines starting within the viewport
        while let Some(chunk) = self.chunks.get_mut(row) {
            if text_height > visible_bottom {
                break;
            }
            let (width, height) = (chunk.width()?, chunk.height()?);
            children.push(LayoutNode::Line(chunk.render()?));
            text_width = text_width.max(width);
            text_height += height;
            row += 1;
        }

        let rendered_rows = first_rendered..row;
        let last_visible_bottom = text_height;

        for chunk in &mut self.chunks[row..] {
            text_width = text_width.max(chunk.width()?);
            text_height += chunk.height()?;
        }

        children.push(LayoutNode::Spacer(Size::new(
            text_width,
            text_height - last_visible_bottom,
        )));

        trace!(
            first = rendered_rows.start,
            end = rendered_rows.end,
            total = self.chunks.len(),
            "rendered text window"
        );

        Ok(TextLayer {
            width: text_width,
            height: text_height,
            padding: host.padding,
            rendered_rows,
            children,
        })
    }
}

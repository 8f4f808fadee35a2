// Chunk: docs/chunks/text_layout - Windowed text layout engine
// Chunk: docs/chunks/viewport_windowing - Spacer-based viewport windowing
// Chunk: docs/chunks/selection_geometry - Selection rectangles and caret
//!
//! Text layout engine.
//!
//! `TextLayoutEngine` keeps one [`RenderedChunk`] per line of the host text
//! and turns them into a layout tree on request. Chunks are resynced lazily:
//! the host calls [`TextLayoutEngine::invalidate`] whenever its text, font or
//! metric provider changes, and the next request that sees a [`HostState`]
//! brings the chunks up to date. Unchanged lines keep their cached metrics.
//!
//! ## Module Organization
//!
//! The engine is split into focused sub-modules, each adding methods to
//! `TextLayoutEngine`:
//! - `constants` - Fixed layout dimensions
//! - `selection` - Selection rectangles and the caret
//! - `text_layer` - Viewport windowing of the text lines
//! - `coordinates` - Pixel <-> text position mapping

mod constants;
mod coordinates;
mod selection;
mod text_layer;

pub use constants::CURSOR_WIDTH;

use std::rc::Rc;

use tracing::debug;

use live_text_buffer::{LineSource, NEWLINE};

use crate::chunk::RenderedChunk;
use crate::error::MetricError;
use crate::host::HostState;
use crate::layout_tree::TextLayout;
use crate::metrics::FontMetricProvider;

/// Windowed layout of a host's text, one chunk per line.
pub struct TextLayoutEngine {
    chunks: Vec<RenderedChunk>,
    metric_provider: Rc<dyn FontMetricProvider>,
    /// False until the first resync and after every `invalidate()`.
    layout_computed: bool,
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("chunks", &self.chunks)
            .field("layout_computed", &self.layout_computed)
            .finish()
    }
}

/// The chunks viewed as lines, for flat index conversion.
struct ChunkLines<'a>(&'a [RenderedChunk]);

impl LineSource for ChunkLines<'_> {
    fn line_count(&self) -> usize {
        self.0.len()
    }

    fn line_len(&self, row: usize) -> usize {
        self.0[row].char_len()
    }
}

impl TextLayoutEngine {
    /// Creates an engine measuring with `metric_provider`. The first request
    /// with a host snapshot computes the layout.
    pub fn new(metric_provider: Rc<dyn FontMetricProvider>) -> Self {
        Self {
            chunks: Vec::new(),
            metric_provider,
            layout_computed: false,
        }
    }

    pub fn metric_provider(&self) -> &Rc<dyn FontMetricProvider> {
        &self.metric_provider
    }

    /// Replaces the provider used for future resyncs and marks the layout dirty.
    pub fn set_metric_provider(&mut self, metric_provider: Rc<dyn FontMetricProvider>) {
        self.metric_provider = metric_provider;
        self.invalidate();
    }

    /// Marks the layout dirty. Call after any change to the host's text or font.
    pub fn invalidate(&mut self) {
        self.layout_computed = false;
    }

    pub fn is_dirty(&self) -> bool {
        !self.layout_computed
    }

    pub fn chunks(&self) -> &[RenderedChunk] {
        &self.chunks
    }

    pub fn line_count(&self) -> usize {
        self.chunks.len()
    }

    fn lines(&self) -> ChunkLines<'_> {
        ChunkLines(&self.chunks)
    }

    /// Resyncs the chunks to `text`, one chunk per line.
    ///
    /// Existing chunks are reused row by row, so a line whose text and font
    /// did not change keeps its cached metrics. Surplus chunks are dropped.
    pub fn update_lines(
        &mut self,
        text: &str,
        font_family: &str,
        font_size: f32,
        metric_provider: &Rc<dyn FontMetricProvider>,
    ) {
        let mut rows = 0;
        let mut reused = 0;
        for (row, line) in text.split(NEWLINE).enumerate() {
            rows += 1;
            match self.chunks.get_mut(row) {
                Some(chunk) => {
                    if !chunk.update_text(line, font_family, font_size, metric_provider) {
                        reused += 1;
                    }
                }
                None => self.chunks.push(RenderedChunk::new(
                    line,
                    font_family,
                    font_size,
                    Rc::clone(metric_provider),
                )),
            }
        }

        let truncated = self.chunks.len().saturating_sub(rows);
        self.chunks.truncate(rows);
        self.layout_computed = true;
        debug!(rows, reused, truncated, "resynced layout chunks");
    }

    /// Resyncs from `host` if the layout is dirty; otherwise does nothing.
    pub fn update_from_host_if_necessary(&mut self, host: &HostState<'_>) {
        if self.layout_computed {
            return;
        }
        let provider = Rc::clone(&self.metric_provider);
        self.update_lines(host.text, host.font_family, host.font_size, &provider);
    }

    /// Lays out the whole widget: the selection overlay, then the text layer.
    pub fn render(&mut self, host: &HostState<'_>) -> Result<TextLayout, MetricError> {
        let selection = self.render_selection_layer(host)?;
        let text = self.render_text_layer(host)?;
        Ok(TextLayout { selection, text })
    }
}

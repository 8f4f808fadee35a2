// Chunk: docs/chunks/rendered_chunk - Per-line metrics cache
//!
//! Per-line layout cache.
//!
//! A `RenderedChunk` holds one line of text together with the font it is set
//! in, and memoizes everything the engine derives from that line:
//!
//! - the line's bounds (one `size_for_str` query)
//! - per-column char bounds (one `size_for` query per char plus the line end)
//! - the rendered [`LineBox`]
//!
//! Each memo is computed on first use and kept until [`RenderedChunk::update_text`]
//! is called with different inputs. Calling it with identical inputs is a
//! no-op, so a full resync after a one-line edit only recomputes that line.

use std::iter;
use std::rc::Rc;

use tracing::trace;

use crate::error::MetricError;
use crate::geometry::Size;
use crate::layout_tree::LineBox;
use crate::metrics::FontMetricProvider;

/// Pixel bounds of one column of a line, relative to the line's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One line of text plus its lazily computed metrics.
pub struct RenderedChunk {
    text: String,
    /// `text.chars().count()`, cached for index conversion.
    char_len: usize,
    font_family: String,
    font_size: f32,
    metric_provider: Rc<dyn FontMetricProvider>,
    bounds: Option<Size>,
    /// One entry per column, including the line end.
    char_bounds: Option<Vec<CharBounds>>,
    rendered: Option<Rc<LineBox>>,
}

impl std::fmt::Debug for RenderedChunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedChunk")
            .field("text", &self.text)
            .field("font_family", &self.font_family)
            .field("font_size", &self.font_size)
            .field("bounds", &self.bounds)
            .field("char_bounds_computed", &self.char_bounds.is_some())
            .field("rendered", &self.rendered.is_some())
            .finish()
    }
}

impl RenderedChunk {
    pub fn new(
        text: &str,
        font_family: &str,
        font_size: f32,
        metric_provider: Rc<dyn FontMetricProvider>,
    ) -> Self {
        Self {
            text: text.to_string(),
            char_len: text.chars().count(),
            font_family: font_family.to_string(),
            font_size,
            metric_provider,
            bounds: None,
            char_bounds: None,
            rendered: None,
        }
    }

    /// Points the chunk at new inputs.
    ///
    /// Returns `false` and keeps every memo when text, font and provider are
    /// all unchanged (the provider is compared by identity). Otherwise stores
    /// the new inputs, drops all memos and returns `true`.
    pub fn update_text(
        &mut self,
        text: &str,
        font_family: &str,
        font_size: f32,
        metric_provider: &Rc<dyn FontMetricProvider>,
    ) -> bool {
        if self.text == text
            && self.font_family == font_family
            && self.font_size == font_size
            && Rc::ptr_eq(&self.metric_provider, metric_provider)
        {
            return false;
        }

        self.text.clear();
        self.text.push_str(text);
        self.char_len = text.chars().count();
        self.font_family.clear();
        self.font_family.push_str(font_family);
        self.font_size = font_size;
        self.metric_provider = Rc::clone(metric_provider);
        self.bounds = None;
        self.char_bounds = None;
        self.rendered = None;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the line in chars.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// The bounds memo, without computing it.
    pub fn cached_bounds(&self) -> Option<Size> {
        self.bounds
    }

    /// Measures the whole line. Memoized.
    pub fn compute_bounds(&mut self) -> Result<Size, MetricError> {
        if let Some(bounds) = self.bounds {
            return Ok(bounds);
        }
        let bounds = self
            .metric_provider
            .size_for_str(&self.font_family, self.font_size, &self.text)?
            .validated(|| format!("line {:?}", self.text))?;
        self.bounds = Some(bounds);
        Ok(bounds)
    }

    pub fn width(&mut self) -> Result<f32, MetricError> {
        Ok(self.compute_bounds()?.width)
    }

    pub fn height(&mut self) -> Result<f32, MetricError> {
        Ok(self.compute_bounds()?.height)
    }

    /// Measures every char plus a synthetic line end, laying them out
    /// left to right. Memoized.
    pub fn compute_char_bounds(&mut self) -> Result<(), MetricError> {
        if self.char_bounds.is_some() {
            return Ok(());
        }

        let mut char_bounds = Vec::with_capacity(self.char_len + 1);
        let mut x = 0.0;
        for ch in self.text.chars().chain(iter::once('\n')) {
            let size = self
                .metric_provider
                .size_for(&self.font_family, self.font_size, ch)?
                .validated(|| format!("char {:?}", ch))?;
            char_bounds.push(CharBounds {
                x,
                y: 0.0,
                width: size.width,
                height: size.height,
            });
            x += size.width;
        }

        trace!(columns = char_bounds.len(), "computed char bounds");
        self.char_bounds = Some(char_bounds);
        Ok(())
    }

    /// Per-column bounds, computing them if needed.
    pub fn char_bounds(&mut self) -> Result<&[CharBounds], MetricError> {
        self.compute_char_bounds()?;
        Ok(self.char_bounds.as_deref().unwrap_or_default())
    }

    /// X offset of `column`; columns past the line end use the line end.
    pub fn x_offset_for(&mut self, column: usize) -> Result<f32, MetricError> {
        let bounds = self.char_bounds()?;
        Ok(bounds
            .get(column)
            .or_else(|| bounds.last())
            .map_or(0.0, |b| b.x))
    }

    /// The column whose bounds contain `x`.
    ///
    /// Offsets left of the line map to column 0, offsets at or past the line
    /// end map to the line end.
    pub fn column_for_x_offset(&mut self, x: f32) -> Result<usize, MetricError> {
        let bounds = self.char_bounds()?;
        let Some(first) = bounds.first() else {
            return Ok(0);
        };
        if x < first.x {
            return Ok(0);
        }
        let last = bounds.len() - 1;
        if x >= bounds[last].x {
            return Ok(last);
        }
        Ok(bounds
            .iter()
            .position(|b| x >= b.x && x < b.x + b.width)
            .unwrap_or(last))
    }

    /// The line box for this chunk. Memoized: until the next effective
    /// `update_text`, every call returns the same `Rc`.
    pub fn render(&mut self) -> Result<Rc<LineBox>, MetricError> {
        if let Some(rendered) = &self.rendered {
            return Ok(Rc::clone(rendered));
        }
        let bounds = self.compute_bounds()?;
        let rendered = Rc::new(LineBox {
            text: self.text.clone(),
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            width: bounds.width,
            height: bounds.height,
        });
        self.rendered = Some(Rc::clone(&rendered));
        Ok(rendered)
    }
}

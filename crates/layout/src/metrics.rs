// Chunk: docs/chunks/font_metrics - Font metric provider contract

//! Font metric queries.
//!
//! The layout engine never measures text itself. It asks a
//! [`FontMetricProvider`] for the size of whole lines and of single chars, and
//! caches the answers per line. Providers must be deterministic: the same
//! query always yields the same size, or cached layout goes stale.
//!
//! [`MonospaceMetrics`] is a ready-made provider for fixed-advance fonts.

use crate::error::MetricError;
use crate::geometry::Size;

/// Source of text measurements for a font family at a point size.
pub trait FontMetricProvider {
    /// Size of `text` laid out on a single line.
    fn size_for_str(
        &self,
        font_family: &str,
        font_size: f32,
        text: &str,
    ) -> Result<Size, MetricError>;

    /// Size of a single char. Also asked for the line end (`'\n'`).
    fn size_for(&self, font_family: &str, font_size: f32, ch: char) -> Result<Size, MetricError>;

    /// Height of an empty line, used for the caret.
    fn default_line_height(&self, font_family: &str, font_size: f32) -> Result<f32, MetricError>;
}

/// Metrics for a monospace font.
///
/// Every char advances by the same width. Metrics are given at a reference
/// point size and scale linearly to the requested size, so 7pt text is half
/// as wide and tall as 14pt text.
#[derive(Debug, Clone, PartialEq)]
pub struct MonospaceMetrics {
    /// Width of a single glyph at `point_size`
    advance_width: f32,
    /// Height of a line at `point_size`
    line_height: f32,
    /// The point size the metrics were measured at
    point_size: f32,
    /// Families this provider answers for; empty means any family
    families: Vec<String>,
}

impl Default for MonospaceMetrics {
    /// 8px advance and 16px lines at 14pt.
    fn default() -> Self {
        Self::new(8.0, 16.0, 14.0)
    }
}

impl MonospaceMetrics {
    pub fn new(advance_width: f32, line_height: f32, point_size: f32) -> Self {
        Self {
            advance_width,
            line_height,
            point_size,
            families: Vec::new(),
        }
    }

    /// Restricts the provider to the given families; others are reported
    /// as [`MetricError::UnknownFont`].
    pub fn with_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.families = families.into_iter().map(Into::into).collect();
        self
    }

    /// Scale factor from the reference size to `font_size`.
    fn scale(&self, font_family: &str, font_size: f32) -> Result<f32, MetricError> {
        let known = self.families.is_empty() || self.families.iter().any(|f| f == font_family);
        if !known {
            return Err(MetricError::UnknownFont {
                family: font_family.to_string(),
                size: font_size,
            });
        }
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(MetricError::InvalidFontSize(font_size));
        }
        if !(self.point_size.is_finite() && self.point_size > 0.0) {
            return Err(MetricError::Provider(format!(
                "reference point size {} is not positive",
                self.point_size
            )));
        }
        Ok(font_size / self.point_size)
    }
}

impl FontMetricProvider for MonospaceMetrics {
    fn size_for_str(
        &self,
        font_family: &str,
        font_size: f32,
        text: &str,
    ) -> Result<Size, MetricError> {
        let scale = self.scale(font_family, font_size)?;
        let columns = text.chars().count() as f32;
        Ok(Size::new(
            columns * self.advance_width * scale,
            self.line_height * scale,
        ))
    }

    fn size_for(&self, font_family: &str, font_size: f32, _ch: char) -> Result<Size, MetricError> {
        let scale = self.scale(font_family, font_size)?;
        Ok(Size::new(
            self.advance_width * scale,
            self.line_height * scale,
        ))
    }

    fn default_line_height(&self, font_family: &str, font_size: f32) -> Result<f32, MetricError> {
        Ok(self.line_height * self.scale(font_family, font_size)?)
    }
}

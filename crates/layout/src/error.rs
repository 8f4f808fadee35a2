// Chunk: docs/chunks/rendered_chunk - Per-line metrics cache
// Chunk: docs/chunks/text_config - Text widget configuration

//! Error types for metric queries and configuration loading.

use thiserror::Error;

/// Failure reported by a [`FontMetricProvider`](crate::FontMetricProvider),
/// or a provider result that cannot be laid out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("unknown font {family:?} at size {size}")]
    UnknownFont { family: String, size: f32 },

    #[error("font size must be positive and finite, got {0}")]
    InvalidFontSize(f32),

    #[error("invalid size {width}x{height} for {what}")]
    InvalidSize {
        what: String,
        width: f32,
        height: f32,
    },

    #[error("font metric provider failed: {0}")]
    Provider(String),
}

/// Failure loading a [`TextConfig`](crate::TextConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse text config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("font size must be positive, got {0}")]
    InvalidFontSize(f32),
}

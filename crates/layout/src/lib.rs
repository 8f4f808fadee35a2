// Chunk: docs/chunks/text_layout - Windowed text layout engine
// Chunk: docs/chunks/rendered_chunk - Per-line metrics cache

//! live-text-layout: viewport-windowed layout for live-text.
//!
//! This crate turns the text of a host widget into a layout tree: a selection
//! overlay plus a text layer in which only the lines inside the viewport are
//! materialized. It also maps between pixel coordinates and text positions,
//! using the same index conversion as [`live_text_buffer::TextDocument`].
//!
//! # Overview
//!
//! - [`FontMetricProvider`] answers all measurement queries; [`MonospaceMetrics`]
//!   is a deterministic provider for fixed-advance fonts
//! - [`RenderedChunk`] caches the metrics of one line
//! - [`TextLayoutEngine`] keeps one chunk per line and produces [`TextLayout`]s
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use live_text_layout::{HostState, MonospaceMetrics, Selection, TextConfig, TextLayoutEngine};
//!
//! let config = TextConfig::default();
//! let mut host = HostState::from_config("hello\nworld", &config, 200.0, 100.0);
//! host.selection = Selection::new(2, 8);
//!
//! let mut engine = TextLayoutEngine::new(Rc::new(MonospaceMetrics::default()));
//! let layout = engine.render(&host).unwrap();
//! assert_eq!(layout.selection.len(), 2);
//! assert_eq!(layout.text.lines().count(), 2);
//! ```
//!
//! # Invalidation
//!
//! The engine does not watch the host. After changing the host's text, font
//! or metric provider, call [`TextLayoutEngine::invalidate`]; the next request
//! resyncs the chunks, reusing the metrics of every unchanged line.

mod chunk;
mod config;
mod engine;
mod error;
mod geometry;
mod host;
mod layout_tree;
mod metrics;

pub use chunk::{CharBounds, RenderedChunk};
pub use config::{TextConfig, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
pub use engine::{TextLayoutEngine, CURSOR_WIDTH};
pub use error::{ConfigError, MetricError};
pub use geometry::{Padding, Point, Rect, Size};
pub use host::{HostState, Selection};
pub use layout_tree::{LayoutNode, LineBox, TextLayer, TextLayout};
pub use metrics::{FontMetricProvider, MonospaceMetrics};

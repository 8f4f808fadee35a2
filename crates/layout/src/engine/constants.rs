// Chunk: docs/chunks/selection_geometry - Selection rectangles and caret

//! Fixed layout dimensions.

/// Width of the caret drawn for a collapsed selection, in pixels.
pub const CURSOR_WIDTH: f32 = 2.0;

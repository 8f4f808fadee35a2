// Chunk: docs/chunks/style_ranges - Style values attached to document ranges
//!
//! Style values carried by style ranges.
//!
//! The document never interprets a [`Style`]; it only stores, splits and
//! moves the ranges a style is attached to. The rendering adapter decides
//! what the attributes look like on screen.

// =============================================================================
// Color Types
// =============================================================================

/// The 8 basic named colors plus their bright variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Inherit from the host widget.
    #[default]
    Default,
    /// A named palette color.
    Named(NamedColor),
    /// 24-bit RGB color.
    Rgb { r: u8, g: u8, b: u8 },
}

/// Underline rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnderlineStyle {
    #[default]
    None,
    Single,
    Double,
    /// Wavy underline, e.g. for spelling errors.
    Curly,
}

// =============================================================================
// Style
// =============================================================================

/// Visual attributes for a run of text.
///
/// The default style is unstyled text: inherited colors, no attributes.
///
/// # Example
///
/// ```
/// use live_text_buffer::{Color, NamedColor, Style};
///
/// let keyword = Style {
///     fg: Color::Named(NamedColor::Blue),
///     bold: true,
///     ..Style::default()
/// };
/// assert!(keyword.bold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: UnderlineStyle,
}

impl Style {
    /// A style with only the foreground color set.
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Self::default()
        }
    }

    /// Returns true if no attribute differs from the default.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

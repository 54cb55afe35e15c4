//! Geometry and style values for swipe widgets.
//!
//! The widget reports its visual state as plain values ([`Length`],
//! [`ItemHeight`]) that render as CSS-like text, so hosts that style with
//! stylesheets can apply them directly.

use std::fmt;

/// A 2D point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

/// A 2D size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Whether the width is usable as a divisor.
    #[inline]
    pub fn has_width(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }
}

/// A horizontal length, either absolute or relative to the layer's width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Logical pixels.
    Px(f32),
    /// Percentage of the reference width.
    Percent(f32),
}

impl Length {
    /// Resolve to pixels against `reference_width`.
    pub fn to_px(self, reference_width: f32) -> f32 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => reference_width * pct / 100.0,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Percent(0.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{px}px"),
            Length::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Height of the whole item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ItemHeight {
    /// Sized by its content.
    #[default]
    Auto,
    /// Fixed height in logical pixels, used while collapsing.
    Px(f32),
}

impl fmt::Display for ItemHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemHeight::Auto => f.write_str("auto"),
            ItemHeight::Px(px) => write!(f, "{px}px"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_display() {
        assert_eq!(Length::default().to_string(), "0%");
        assert_eq!(Length::Px(40.0).to_string(), "40px");
        assert_eq!(Length::Px(12.5).to_string(), "12.5px");
    }

    #[test]
    fn test_length_to_px() {
        assert_eq!(Length::Px(30.0).to_px(200.0), 30.0);
        assert_eq!(Length::Percent(50.0).to_px(200.0), 100.0);
        assert_eq!(Length::default().to_px(200.0), 0.0);
    }

    #[test]
    fn test_item_height_display() {
        assert_eq!(ItemHeight::Auto.to_string(), "auto");
        assert_eq!(ItemHeight::Px(48.0).to_string(), "48px");
    }

    #[test]
    fn test_size_has_width() {
        assert!(Size::new(200.0, 48.0).has_width());
        assert!(!Size::ZERO.has_width());
        assert!(!Size::new(f32::NAN, 10.0).has_width());
    }
}

//! Stroke definitions for borders and arrow lines.
//!
//! [`StrokeDefinition`] carries color and width. The
//! [`apply_stroke!`](crate::apply_stroke!) macro writes both onto an SVG
//! element at once.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |

use crate::color::Color;

/// A solid stroke for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use tierplot_core::draw::StrokeDefinition;
/// use tierplot_core::color::Color;
///
/// let border = StrokeDefinition::solid(Color::new("white").unwrap(), 2.0);
/// assert_eq!(border.width(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use tierplot_core::draw::StrokeDefinition;
/// use tierplot_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("white").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new()
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = tierplot_core::apply_stroke!(rect, &stroke);
/// assert!(rect.to_string().contains("stroke=\"#ffffff\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

//! Drawable Components for Diagram Rendering
//!
//! This module provides drawable abstractions for the elements of an
//! architecture diagram. Shapes and text implement the [`Drawable`] trait;
//! arrows are drawn between two points through an [`ArrowWithTextDrawer`],
//! which also collects the arrowhead marker definitions.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered during
//! final SVG generation so that background bands always sit beneath component
//! boxes regardless of the order in which they were drawn.

mod arrow;
mod arrow_with_text;
mod layer;
mod rectangle;
mod stroke;
mod text;

pub use arrow::{Arrow, ArrowDefinition, ArrowDrawer};
pub use arrow_with_text::{ArrowWithText, ArrowWithTextDrawer};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use rectangle::{Rectangle, RectangleDefinition};
pub use stroke::StrokeDefinition;
pub use text::{Text, TextAlign, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable centered on `position` (canvas coordinates).
    ///
    /// Simple drawables emit to a single layer; text with a background box
    /// emits the box and the glyphs to separate layers.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}

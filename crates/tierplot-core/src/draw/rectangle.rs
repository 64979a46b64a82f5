//! Filled rectangles: component boxes, tier bands and plot backgrounds.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Visual style of a rectangle.
///
/// `opacity` applies to the whole shape (fill and border together), in
/// addition to any alpha already present in the fill color.
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    fill_color: Option<Color>,
    stroke: Option<StrokeDefinition>,
    opacity: f32,
    layer: RenderLayer,
}

impl RectangleDefinition {
    /// Creates an unfilled, borderless, opaque rectangle on the shape layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill color. `None` leaves the rectangle unfilled.
    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    /// Sets the border. `None` draws no border.
    pub fn set_stroke(&mut self, stroke: Option<StrokeDefinition>) {
        self.stroke = stroke;
    }

    /// Sets whole-shape opacity, clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Sets the layer the rectangle renders to.
    pub fn set_layer(&mut self, layer: RenderLayer) {
        self.layer = layer;
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn layer(&self) -> RenderLayer {
        self.layer
    }
}

impl Default for RectangleDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: None,
            opacity: 1.0,
            layer: RenderLayer::Shape,
        }
    }
}

/// A rectangle of a given size, optionally tagged with a `data-*` attribute
/// so that rendered output can be inspected.
#[derive(Debug, Clone)]
pub struct Rectangle<'a> {
    definition: &'a RectangleDefinition,
    size: Size,
    tag: Option<(&'static str, &'a str)>,
}

impl<'a> Rectangle<'a> {
    pub fn new(definition: &'a RectangleDefinition, size: Size) -> Self {
        Self {
            definition,
            size,
            tag: None,
        }
    }

    /// Tags the rendered element with `data-{key}="{value}"`.
    pub fn with_tag(mut self, key: &'static str, value: &'a str) -> Self {
        self.tag = Some((key, value));
        self
    }
}

impl Drawable for Rectangle<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let bounds = position.to_bounds(self.size);
        let min = bounds.min_point();

        let mut rect = svg_element::Rectangle::new()
            .set("x", min.x())
            .set("y", min.y())
            .set("width", bounds.width())
            .set("height", bounds.height());

        rect = match self.definition.fill_color() {
            Some(fill) => rect
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };

        rect = match self.definition.stroke() {
            Some(stroke) => crate::apply_stroke!(rect, stroke),
            None => rect.set("stroke", "none"),
        };

        if self.definition.opacity() < 1.0 {
            rect = rect.set("opacity", self.definition.opacity());
        }

        if let Some((key, value)) = self.tag {
            rect = rect.set(format!("data-{key}"), value);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.definition.layer(), Box::new(rect));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(rect: &Rectangle, position: Point) -> String {
        rect.render_to_layers(position)
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_rectangle_centered_on_position() {
        let def = RectangleDefinition::new();
        let rect = Rectangle::new(&def, Size::new(60.0, 20.0));
        let rendered = render_to_string(&rect, Point::new(100.0, 50.0));

        assert!(rendered.contains("x=\"70\""));
        assert!(rendered.contains("y=\"40\""));
        assert!(rendered.contains("width=\"60\""));
        assert!(rendered.contains("height=\"20\""));
        assert!(rendered.contains("fill=\"none\""));
        assert!(rendered.contains("stroke=\"none\""));
        assert!(!rendered.contains("opacity=\""));
    }

    #[test]
    fn test_rectangle_fill_stroke_and_opacity() {
        let mut def = RectangleDefinition::new();
        def.set_fill_color(Some(Color::new("#D2BA4C").unwrap()));
        def.set_stroke(Some(StrokeDefinition::solid(
            Color::new("white").unwrap(),
            2.0,
        )));
        def.set_opacity(0.8);

        let rect = Rectangle::new(&def, Size::new(10.0, 10.0)).with_tag("component", "Stripe");
        let rendered = render_to_string(&rect, Point::default());

        assert!(rendered.contains("fill=\"#d2ba4c\""));
        assert!(rendered.contains("stroke=\"#ffffff\""));
        assert!(rendered.contains(" opacity=\"0.8\""));
        assert!(rendered.contains("data-component=\"Stripe\""));
    }

    #[test]
    fn test_rectangle_renders_to_configured_layer() {
        let mut def = RectangleDefinition::new();
        def.set_layer(RenderLayer::Band);
        let rect = Rectangle::new(&def, Size::new(1.0, 1.0));
        let output = rect.render_to_layers(Point::default());
        assert_eq!(output.count_in_layer(RenderLayer::Band), 1);
        assert_eq!(output.count_in_layer(RenderLayer::Shape), 0);
    }

    #[test]
    fn test_rectangle_opacity_is_clamped() {
        let mut def = RectangleDefinition::new();
        def.set_opacity(1.5);
        assert_eq!(def.opacity(), 1.0);
        def.set_opacity(-0.2);
        assert_eq!(def.opacity(), 0.0);
    }
}

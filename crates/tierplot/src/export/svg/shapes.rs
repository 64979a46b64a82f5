//! Band and component box rendering.

use tierplot_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, Rectangle, RectangleDefinition, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point},
    semantic::{Component, Layer},
};

use super::Svg;

/// Half extents of a component box in data units.
const BOX_HALF_WIDTH: f32 = 0.3;
const BOX_HALF_HEIGHT: f32 = 0.2;
const BOX_BORDER_WIDTH: f32 = 2.0;
const BOX_OPACITY: f32 = 0.8;

/// Horizontal extent of every band in data units.
const BAND_MIN_X: f32 = -0.2;
const BAND_MAX_X: f32 = 4.2;
const BAND_HALF_HEIGHT: f32 = 0.4;

impl Svg<'_> {
    pub(super) fn render_plot_background(&self) -> LayeredOutput {
        let mut definition = RectangleDefinition::new();
        definition.set_fill_color(Some(self.plot_background));
        definition.set_layer(RenderLayer::Background);

        let plot_area = self.viewport.plot_area();
        draw_rect(Rectangle::new(&definition, plot_area.to_size()), plot_area)
    }

    pub(super) fn render_bands(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for layer in self.diagram.layers() {
            output.merge(self.render_band(layer));
        }
        output
    }

    fn render_band(&self, layer: &Layer) -> LayeredOutput {
        let mut definition = RectangleDefinition::new();
        definition.set_fill_color(Some(layer.color()));
        definition.set_opacity(layer.opacity());
        definition.set_layer(RenderLayer::Band);

        let bounds = self.viewport.to_canvas_bounds(
            Point::new(BAND_MIN_X, layer.center_y() - BAND_HALF_HEIGHT),
            Point::new(BAND_MAX_X, layer.center_y() + BAND_HALF_HEIGHT),
        );

        draw_rect(
            Rectangle::new(&definition, bounds.to_size()).with_tag("band", layer.name()),
            bounds,
        )
    }

    pub(super) fn render_components(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for component in self.diagram.components() {
            output.merge(self.render_component(component));
        }
        output
    }

    fn render_component(&self, component: &Component) -> LayeredOutput {
        let mut definition = RectangleDefinition::new();
        definition.set_fill_color(Some(component.color()));
        definition.set_stroke(Some(StrokeDefinition::solid(
            Color::from_rgb8(255, 255, 255),
            BOX_BORDER_WIDTH,
        )));
        definition.set_opacity(BOX_OPACITY);

        let center = component.position();
        let bounds = self.viewport.to_canvas_bounds(
            Point::new(center.x() - BOX_HALF_WIDTH, center.y() - BOX_HALF_HEIGHT),
            Point::new(center.x() + BOX_HALF_WIDTH, center.y() + BOX_HALF_HEIGHT),
        );

        draw_rect(
            Rectangle::new(&definition, bounds.to_size()).with_tag("component", component.name()),
            bounds,
        )
    }
}

fn draw_rect(rect: Rectangle<'_>, bounds: Bounds) -> LayeredOutput {
    rect.render_to_layers(bounds.center())
}

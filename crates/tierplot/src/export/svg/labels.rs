//! Text annotations: component names, layer names, notes and the title.

use log::trace;

use tierplot_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, StrokeDefinition, Text, TextAlign, TextDefinition},
    geometry::{Insets, Point},
    semantic::Note,
};

use super::Svg;

const COMPONENT_LABEL_SIZE: u16 = 9;

const LAYER_LABEL_SIZE: u16 = 11;
/// Layer labels sit just left of the bands.
const LAYER_LABEL_X: f32 = -0.1;
const LAYER_LABEL_ROTATION: f32 = 90.0;

const NOTE_PADDING: f32 = 1.0;

const TITLE_SIZE: u16 = 17;
/// Left edge of the title as a fraction of the canvas width.
const TITLE_X_FRACTION: f32 = 0.05;

impl Svg<'_> {
    pub(super) fn text_definition(&self, font_size: u16, color: Color) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(&self.font_family);
        definition.set_font_size(font_size);
        definition.set_color(Some(color));
        definition
    }

    pub(super) fn render_component_labels(&self) -> LayeredOutput {
        let definition =
            self.text_definition(COMPONENT_LABEL_SIZE, Color::from_rgb8(255, 255, 255));

        let mut output = LayeredOutput::new();
        for component in self.diagram.components() {
            let label = component.label();
            let position = self.viewport.to_canvas(component.position());
            output.merge(Text::new(&definition, &label).render_to_layers(position));
        }
        output
    }

    pub(super) fn render_layer_labels(&self) -> LayeredOutput {
        let mut definition =
            self.text_definition(LAYER_LABEL_SIZE, Color::from_rgb8(128, 128, 128));
        definition.set_rotation(LAYER_LABEL_ROTATION);

        let mut output = LayeredOutput::new();
        for layer in self.diagram.layers() {
            let position = self
                .viewport
                .to_canvas(Point::new(LAYER_LABEL_X, layer.center_y()));
            output.merge(Text::new(&definition, layer.name()).render_to_layers(position));
        }
        output
    }

    pub(super) fn render_notes(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for note in self.diagram.notes() {
            output.merge(self.render_note(note));
        }
        output
    }

    fn render_note(&self, note: &Note) -> LayeredOutput {
        let mut definition = self.text_definition(note.font_size(), note.color());
        definition.set_align(TextAlign::Left);
        definition.set_background_color(Some(note.background()));
        if note.border_width() > 0.0 {
            definition.set_border(Some(StrokeDefinition::solid(
                note.color(),
                note.border_width(),
            )));
        }
        definition.set_padding(Insets::uniform(NOTE_PADDING));

        let text = Text::new(&definition, note.text());
        let position = self.viewport.to_canvas(note.anchor());
        trace!(x = position.x(), y = position.y(); "Placing note");

        text.render_to_layers(position)
    }

    /// Title left-aligned at a fixed fraction of the width, centered in the top margin.
    pub(super) fn render_title(&self) -> LayeredOutput {
        let title = self.diagram.title();
        if title.is_empty() {
            return LayeredOutput::new();
        }

        let definition = self.text_definition(TITLE_SIZE, Color::from_rgb8(0x44, 0x44, 0x44));
        let text = Text::new(&definition, title);

        let canvas = self.viewport.canvas_size();
        let left = canvas.width() * TITLE_X_FRACTION;
        let center_y = self.viewport.plot_area().min_y() / 2.0;
        let position = Point::new(left + text.calculate_size().width() / 2.0, center_y);

        text.render_to_layers(position)
    }
}

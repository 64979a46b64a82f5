use crate::{
    draw::{Arrow, ArrowDrawer, Drawable, LayeredOutput, RenderLayer, SvgNode, Text},
    geometry::Point,
};

/// An arrow with an optional text label centered on the arrow's tail.
#[derive(Debug, Clone)]
pub struct ArrowWithText<'a> {
    arrow: Arrow,
    text: Option<Text<'a>>,
}

impl<'a> ArrowWithText<'a> {
    pub fn new(arrow: Arrow, text: Option<Text<'a>>) -> Self {
        Self { arrow, text }
    }

    /// Renders the arrow with optional text to layered output.
    ///
    /// The label is centered on `source`, where the arrow leaves from.
    pub fn render_to_layers(
        &self,
        arrow_drawer: &mut ArrowDrawer,
        source: Point,
        destination: Point,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let rendered_arrow = arrow_drawer.draw_arrow(&self.arrow, source, destination);
        output.add_to_layer(RenderLayer::Arrow, rendered_arrow);

        if let Some(text) = &self.text {
            output.merge(text.render_to_layers(source));
        }

        output
    }
}

/// Renders [`ArrowWithText`] values and owns the shared marker registry.
#[derive(Debug, Default)]
pub struct ArrowWithTextDrawer(ArrowDrawer);

impl ArrowWithTextDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_arrow_with_text(
        &mut self,
        arrow_with_text: &ArrowWithText,
        source: Point,
        destination: Point,
    ) -> LayeredOutput {
        arrow_with_text.render_to_layers(&mut self.0, source, destination)
    }

    /// Generates SVG marker definitions for all arrows drawn so far.
    pub fn draw_marker_definitions(&self) -> SvgNode {
        self.0.draw_marker_definitions()
    }
}

//! Flow arrow rendering.

use std::rc::Rc;

use tierplot_core::{
    draw::{Arrow, ArrowDefinition, ArrowWithText, LayeredOutput, StrokeDefinition, Text},
    semantic::FlowArrow,
};

use super::Svg;

const ARROW_LABEL_SIZE: u16 = 8;

impl Svg<'_> {
    pub(super) fn render_flows(&mut self) -> LayeredOutput {
        let diagram = self.diagram;

        let mut output = LayeredOutput::new();
        for flow in diagram.arrows() {
            output.merge(self.render_flow(flow));
        }
        output
    }

    /// Draws one flow; a label, if any, uses the arrow's color.
    fn render_flow(&mut self, flow: &FlowArrow) -> LayeredOutput {
        let definition = ArrowDefinition::new(StrokeDefinition::solid(flow.color(), flow.width()));
        let arrow = Arrow::new(Rc::new(definition)).with_tag("flow", flow.kind().name());

        let text_definition = self.text_definition(ARROW_LABEL_SIZE, flow.color());
        let text = flow
            .label()
            .map(|label| Text::new(&text_definition, label));

        let source = self.viewport.to_canvas(flow.start());
        let destination = self.viewport.to_canvas(flow.end());

        self.arrow_with_text_drawer.draw_arrow_with_text(
            &ArrowWithText::new(arrow, text),
            source,
            destination,
        )
    }
}

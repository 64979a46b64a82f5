//! SVG scene construction.
//!
//! [`SvgBuilder`] validates style and canvas settings and produces an [`Svg`]
//! exporter bound to one diagram. Rendering collects every drawable into a
//! [`LayeredOutput`] and emits one group per render layer, on top of a paper
//! background that covers the canvas.

mod arrows;
mod labels;
mod shapes;

use log::{debug, info};
use svg::{Document, node::element::Rectangle};

use tierplot_core::{
    color::Color,
    draw::{ArrowWithTextDrawer, LayeredOutput},
    semantic::Diagram,
};

use crate::{
    config::{CanvasConfig, StyleConfig},
    export::Error,
    viewport::Viewport,
};

/// Builder for [`Svg`] exporters.
#[derive(Debug)]
pub struct SvgBuilder<'a> {
    canvas: &'a CanvasConfig,
    style: Option<&'a StyleConfig>,
    diagram: Option<&'a Diagram>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new(canvas: &'a CanvasConfig) -> Self {
        Self {
            canvas,
            style: None,
            diagram: None,
        }
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_diagram(mut self, diagram: &'a Diagram) -> Self {
        self.diagram = Some(diagram);
        self
    }

    /// Validates the settings and creates the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] for unparsable colors or a missing diagram and
    /// [`Error::Viewport`] when the canvas cannot hold the plot area.
    pub fn build(self) -> Result<Svg<'a>, Error> {
        let diagram = self
            .diagram
            .ok_or_else(|| Error::Style("no diagram to render".to_string()))?;

        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        let background = style.background_color().map_err(Error::Style)?;
        let plot_background = style.plot_background_color().map_err(Error::Style)?;
        let viewport = Viewport::new(self.canvas, diagram.x_range(), diagram.y_range())?;

        Ok(Svg {
            diagram,
            viewport,
            background,
            plot_background,
            font_family: style.font_family().to_string(),
            arrow_with_text_drawer: ArrowWithTextDrawer::new(),
        })
    }
}

/// SVG exporter for a single diagram.
#[derive(Debug)]
pub struct Svg<'a> {
    diagram: &'a Diagram,
    viewport: Viewport,
    background: Color,
    plot_background: Color,
    font_family: String,
    arrow_with_text_drawer: ArrowWithTextDrawer,
}

impl Svg<'_> {
    /// Renders the full scene, consuming the exporter.
    pub fn render_document(mut self) -> Document {
        info!(
            components = self.diagram.components().len(),
            layers = self.diagram.layers().len(),
            arrows = self.diagram.arrows().len();
            "Rendering SVG scene"
        );

        let mut output = LayeredOutput::new();
        output.merge(self.render_plot_background());
        output.merge(self.render_bands());
        output.merge(self.render_components());
        output.merge(self.render_flows());
        output.merge(self.render_layer_labels());
        output.merge(self.render_component_labels());
        output.merge(self.render_notes());
        output.merge(self.render_title());

        let size = self.viewport.canvas_size();
        debug!(width = size.width(), height = size.height(); "SVG dimensions");

        let doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()));

        let mut doc = self.add_background(doc);
        doc = doc.add(self.arrow_with_text_drawer.draw_marker_definitions());

        for node in output.render() {
            doc = doc.add(node);
        }

        doc
    }

    /// Paper background covering the whole canvas, below every layer.
    fn add_background(&self, doc: Document) -> Document {
        let size = self.viewport.canvas_size();
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", self.background.to_string())
            .set("fill-opacity", self.background.alpha());

        doc.add(background)
    }
}

#[cfg(test)]
mod tests {
    use tierplot_core::{
        geometry::Point,
        semantic::{AxisRange, Category, Component},
    };

    use super::*;

    fn small_diagram() -> Diagram {
        let mut diagram = Diagram::new("Small", AxisRange::new(0.0, 4.0), AxisRange::new(0.0, 4.0));
        diagram.add_component(Component::new("KV Store", Point::new(2.0, 2.0), Category::Storage));
        diagram
    }

    #[test]
    fn test_build_requires_diagram() {
        let canvas = CanvasConfig::default();
        let result = SvgBuilder::new(&canvas).build();
        assert!(matches!(result, Err(Error::Style(_))));
    }

    #[test]
    fn test_document_has_canvas_size() {
        let canvas = CanvasConfig::default();
        let diagram = small_diagram();
        let doc = SvgBuilder::new(&canvas)
            .with_diagram(&diagram)
            .build()
            .unwrap()
            .render_document()
            .to_string();

        assert!(doc.contains("viewBox=\"0 0 700 500\""));
        assert!(doc.contains("width=\"700\""));
        assert!(doc.contains("data-layer=\"background\""));
        assert!(doc.contains("data-component=\"KV Store\""));
    }
}

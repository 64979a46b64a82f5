//! Layer-based rendering system for SVG output.
//!
//! Drawables tag every SVG node they emit with a [`RenderLayer`]. When the
//! collected [`LayeredOutput`] is rendered, nodes are grouped per layer and
//! emitted bottom to top, while nodes within a layer keep their insertion
//! order.
//!
//! # Example
//!
//! ```
//! # use tierplot_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! // Drawn first, but ends up above the band
//! output.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Band, Box::new(Rectangle::new()));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Plot area fill
    Background,
    /// Translucent horizontal tier bands
    Band,
    /// Component boxes
    Shape,
    /// Flow arrows
    Arrow,
    /// Boxes drawn behind text (note backgrounds and borders)
    TextBackground,
    /// Text labels
    Text,
}

impl RenderLayer {
    /// Returns the name written to the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Band => "band",
            Self::Shape => "shape",
            Self::Arrow => "arrow",
            Self::TextBackground => "text-background",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes from another `LayeredOutput`.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes on `layer`.
    pub fn count_in_layer(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes one `<g data-layer="...">` element.
    /// The sort is stable, so insertion order survives within a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    #[test]
    fn test_layered_output_new_is_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge_and_count() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new()));
        output2.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.count_in_layer(RenderLayer::Shape), 2);
        assert_eq!(output1.count_in_layer(RenderLayer::Text), 1);
        assert_eq!(output1.count_in_layer(RenderLayer::Band), 0);

        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_orders_bands_below_shapes() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Shape,
            Box::new(Rectangle::new().set("id", "box")),
        );
        output.add_to_layer(
            RenderLayer::Band,
            Box::new(Rectangle::new().set("id", "band")),
        );

        let rendered: String = output
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        let band_pos = rendered.find("band").unwrap();
        let box_pos = rendered.find("\"box\"").unwrap();
        assert!(band_pos < box_pos, "bands must be emitted before shapes");
    }

    #[test]
    fn test_layer_order_matches_declaration() {
        assert!(RenderLayer::Background < RenderLayer::Band);
        assert!(RenderLayer::Band < RenderLayer::Shape);
        assert!(RenderLayer::Shape < RenderLayer::Arrow);
        assert!(RenderLayer::Arrow < RenderLayer::TextBackground);
        assert!(RenderLayer::TextBackground < RenderLayer::Text);
    }
}

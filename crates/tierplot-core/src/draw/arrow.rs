//! Arrow drawable types and SVG marker generation.
//!
//! Arrows are straight segments from a source to a destination point with a
//! filled head at the destination. Heads are SVG markers sized in
//! stroke-width units, so a thicker arrow gets a proportionally larger head.

use std::rc::Rc;

use indexmap::IndexMap;
use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{StrokeDefinition, SvgNode},
    geometry::Point,
};

/// Defines the visual properties of an arrow.
#[derive(Debug, Clone, Default)]
pub struct ArrowDefinition {
    stroke: StrokeDefinition,
}

impl ArrowDefinition {
    /// Creates a new ArrowDefinition with the given stroke.
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self { stroke }
    }

    /// Gets the arrow stroke definition
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

/// A drawable arrow.
#[derive(Debug, Clone)]
pub struct Arrow {
    definition: Rc<ArrowDefinition>,
    tag: Option<(&'static str, String)>,
}

impl Arrow {
    pub fn new(definition: Rc<ArrowDefinition>) -> Self {
        Self {
            definition,
            tag: None,
        }
    }

    /// Tags the rendered path with `data-{key}="{value}"`.
    pub fn with_tag(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.tag = Some((key, value.into()));
        self
    }

    pub fn definition(&self) -> &ArrowDefinition {
        &self.definition
    }

    fn render_to_svg(&self, source: Point, destination: Point) -> SvgNode {
        let path = svg_element::Path::new()
            .set("d", Self::create_path_data_from_points(source, destination))
            .set("fill", "none");

        let mut path = crate::apply_stroke!(path, self.definition.stroke())
            .set("marker-end", format!("url(#{})", Self::marker_id(self.color())));

        if let Some((key, value)) = &self.tag {
            path = path.set(format!("data-{key}"), value.as_str());
        }

        Box::new(path)
    }

    fn color(&self) -> Color {
        self.definition.stroke().color()
    }

    fn marker_id(color: Color) -> String {
        format!("arrowhead-{}", color.to_id_safe_string())
    }

    /// Create a path data string from two points
    pub fn create_path_data_from_points(start: Point, end: Point) -> String {
        format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
    }

    /// Filled triangle whose tip, at x = 1.3, lands on the destination point.
    fn create_marker(id: &str, color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", id)
            .set("markerUnits", "strokeWidth")
            .set("orient", "auto")
            .set("viewBox", "-3.7 -2.5 5 5")
            .set("refX", 1.3)
            .set("refY", 0)
            .set("markerWidth", 5)
            .set("markerHeight", 5)
            .add(
                svg_element::Path::new()
                    .set("d", "M -3.7 -2.5 V 2.5 L 1.3 0 Z")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            )
    }
}

/// Draws arrows and collects the marker definitions they reference.
///
/// Markers are kept in first-use order so that repeated renders of the same
/// scene produce identical documents.
#[derive(Debug, Default)]
pub struct ArrowDrawer {
    markers: IndexMap<String, Color>,
}

impl ArrowDrawer {
    /// Draws an arrow and registers its head marker.
    pub fn draw_arrow(&mut self, arrow: &Arrow, source: Point, destination: Point) -> SvgNode {
        let color = arrow.color();
        self.markers.entry(Arrow::marker_id(color)).or_insert(color);
        arrow.render_to_svg(source, destination)
    }

    /// Generates a `<defs>` element with every registered marker.
    pub fn draw_marker_definitions(&self) -> SvgNode {
        let defs = self
            .markers
            .iter()
            .fold(svg_element::Definitions::new(), |defs, (id, color)| {
                defs.add(Arrow::create_marker(id, *color))
            });
        Box::new(defs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrow(color: &str, width: f32) -> Arrow {
        let definition =
            ArrowDefinition::new(StrokeDefinition::solid(Color::new(color).unwrap(), width));
        Arrow::new(Rc::new(definition))
    }

    fn marker_count(drawer: &ArrowDrawer) -> usize {
        drawer
            .draw_marker_definitions()
            .to_string()
            .matches("<marker")
            .count()
    }

    #[test]
    fn test_marker_tip_sits_on_destination() {
        let mut drawer = ArrowDrawer::default();
        drawer.draw_arrow(
            &arrow("blue", 2.0),
            Point::default(),
            Point::new(1.0, 0.0),
        );
        let defs = drawer.draw_marker_definitions().to_string();
        assert!(defs.contains("markerUnits=\"strokeWidth\""));
        assert!(defs.contains("refX=\"1.3\""));
        assert!(defs.contains("M -3.7 -2.5 V 2.5 L 1.3 0 Z"));
    }

    #[test]
    fn test_create_path_data_from_points() {
        let path =
            Arrow::create_path_data_from_points(Point::new(10.0, 20.0), Point::new(100.0, 50.5));
        assert_eq!(path, "M 10 20 L 100 50.5");
    }

    #[test]
    fn test_draw_arrow_references_marker() {
        let mut drawer = ArrowDrawer::default();
        let node = drawer.draw_arrow(
            &arrow("red", 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );

        let rendered = node.to_string();
        assert!(rendered.contains("marker-end=\"url(#arrowhead-hexff0000)\""));
        assert!(rendered.contains("stroke-width=\"3\""));
        assert_eq!(marker_count(&drawer), 1);
    }

    #[test]
    fn test_markers_are_shared_per_color() {
        let mut drawer = ArrowDrawer::default();
        let blue = arrow("blue", 2.0);
        for i in 0..7 {
            drawer.draw_arrow(&blue, Point::new(0.0, i as f32), Point::new(5.0, i as f32));
        }
        drawer.draw_arrow(
            &arrow("green", 2.0),
            Point::default(),
            Point::new(1.0, 1.0),
        );
        assert_eq!(marker_count(&drawer), 2);

        let defs = drawer.draw_marker_definitions().to_string();
        let blue_pos = defs.find("hex0000ff").unwrap();
        let green_pos = defs.find("hex008000").unwrap();
        assert!(blue_pos < green_pos, "markers keep first-use order");
    }

    #[test]
    fn test_tagged_arrow() {
        let mut drawer = ArrowDrawer::default();
        let tagged = arrow("blue", 2.0).with_tag("flow", "user-flow");
        let node = drawer.draw_arrow(&tagged, Point::default(), Point::new(1.0, 0.0));
        assert!(node.to_string().contains("data-flow=\"user-flow\""));
    }
}

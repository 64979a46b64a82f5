//! The top-level [`Diagram`].

use crate::{
    geometry::Point,
    semantic::{Component, FlowArrow, Layer, Note},
};

/// A closed interval of data coordinates along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f32,
    max: f32,
}

impl AxisRange {
    /// Creates a range; the bounds are swapped if given in reverse.
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(self) -> f32 {
        self.min
    }

    pub fn max(self) -> f32 {
        self.max
    }

    pub fn span(self) -> f32 {
        self.max - self.min
    }

    pub fn contains(self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Position of `value` within the range, 0.0 at `min` and 1.0 at `max`.
    pub fn fraction(self, value: f32) -> f32 {
        if self.span() == 0.0 {
            0.0
        } else {
            (value - self.min) / self.span()
        }
    }
}

/// A complete architecture diagram.
///
/// Elements keep insertion order; that order is also the drawing order within
/// each render layer.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    x_range: AxisRange,
    y_range: AxisRange,
    components: Vec<Component>,
    layers: Vec<Layer>,
    arrows: Vec<FlowArrow>,
    notes: Vec<Note>,
}

impl Diagram {
    pub fn new(title: impl Into<String>, x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            title: title.into(),
            x_range,
            y_range,
            components: Vec::new(),
            layers: Vec::new(),
            arrows: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn add_arrow(&mut self, arrow: FlowArrow) {
        self.arrows.push(arrow);
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Looks up a component by its exact name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn arrows(&self) -> &[FlowArrow] {
        &self.arrows
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns true if `point` lies within both axis ranges.
    pub fn in_range(&self, point: Point) -> bool {
        self.x_range.contains(point.x()) && self.y_range.contains(point.y())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{color::Color, semantic::Category};

    #[test]
    fn test_axis_range_normalizes_and_measures() {
        let range = AxisRange::new(5.0, -0.5);
        assert_approx_eq!(f32, range.min(), -0.5);
        assert_approx_eq!(f32, range.max(), 5.0);
        assert_approx_eq!(f32, range.span(), 5.5);
        assert!(range.contains(-0.5));
        assert!(range.contains(5.0));
        assert!(!range.contains(5.01));
    }

    #[test]
    fn test_axis_range_fraction() {
        let range = AxisRange::new(0.5, 6.0);
        assert_approx_eq!(f32, range.fraction(0.5), 0.0);
        assert_approx_eq!(f32, range.fraction(6.0), 1.0);
        assert_approx_eq!(f32, range.fraction(3.25), 0.5);
        assert_approx_eq!(f32, AxisRange::new(1.0, 1.0).fraction(1.0), 0.0);
    }

    #[test]
    fn test_diagram_collections_keep_order() {
        let mut diagram = Diagram::new(
            "Test",
            AxisRange::new(-0.5, 5.0),
            AxisRange::new(0.5, 6.0),
        );
        diagram.add_component(Component::new("A", Point::new(1.0, 1.0), Category::Storage));
        diagram.add_component(Component::new("B", Point::new(2.0, 1.0), Category::Storage));
        diagram.add_layer(Layer::new("Storage", 1.0, Category::Storage.color(), 0.1));
        diagram.add_note(crate::semantic::Note::new(
            "note",
            Point::new(4.0, 5.5),
            Color::new("blue").unwrap(),
        ));

        assert_eq!(diagram.title(), "Test");
        let names: Vec<_> = diagram.components().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(diagram.layers().len(), 1);
        assert_eq!(diagram.notes().len(), 1);
        assert!(diagram.arrows().is_empty());
        assert!(diagram.component("B").is_some());
        assert!(diagram.component("C").is_none());
    }

    #[test]
    fn test_diagram_in_range() {
        let diagram = Diagram::new("", AxisRange::new(-0.5, 5.0), AxisRange::new(0.5, 6.0));
        assert!(diagram.in_range(Point::new(2.0, 4.8)));
        assert!(!diagram.in_range(Point::new(2.0, 0.4)));
        assert!(!diagram.in_range(Point::new(-1.0, 3.0)));
    }
}

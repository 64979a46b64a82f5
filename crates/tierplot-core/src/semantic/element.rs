//! Diagram elements.

use crate::{color::Color, geometry::Point};

/// Architectural tier of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Frontend,
    Backend,
    Storage,
    Processing,
    Payment,
    Deployment,
}

impl Category {
    /// Returns the designated color of this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierplot_core::semantic::Category;
    ///
    /// assert_eq!(Category::Payment.color().to_hex(), "#d2ba4c");
    /// ```
    pub fn color(self) -> Color {
        match self {
            Self::Frontend => Color::from_rgb8(0x1f, 0xb8, 0xcd),
            Self::Backend => Color::from_rgb8(0xdb, 0x45, 0x45),
            Self::Storage => Color::from_rgb8(0x2e, 0x8b, 0x57),
            Self::Processing => Color::from_rgb8(0x5d, 0x87, 0x8f),
            Self::Payment => Color::from_rgb8(0xd2, 0xba, 0x4c),
            Self::Deployment => Color::from_rgb8(0xb4, 0x41, 0x3c),
        }
    }
}

/// A labeled box for one service in the architecture.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    position: Point,
    category: Category,
}

impl Component {
    /// Creates a component colored with its category's color.
    pub fn new(name: impl Into<String>, position: Point, category: Category) -> Self {
        Self {
            name: name.into(),
            position,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Center of the box in data coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Fill color, taken from the category.
    pub fn color(&self) -> Color {
        self.category.color()
    }

    /// Returns the display label: one word per line.
    ///
    /// ```
    /// # use tierplot_core::{geometry::Point, semantic::{Category, Component}};
    /// let workers = Component::new("Cloudflare Workers", Point::new(2.0, 4.0), Category::Backend);
    /// assert_eq!(workers.label(), "Cloudflare\nWorkers");
    /// ```
    pub fn label(&self) -> String {
        self.name.replace(' ', "\n")
    }
}

/// A horizontal background band grouping one tier.
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    center_y: f32,
    color: Color,
    opacity: f32,
}

impl Layer {
    pub fn new(name: impl Into<String>, center_y: f32, color: Color, opacity: f32) -> Self {
        Self {
            name: name.into(),
            center_y,
            color,
            opacity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vertical center of the band in data coordinates.
    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// The role an arrow plays in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// Regular request path of an end user
    UserFlow,
    /// Privileged path that skips payment
    AdminBypass,
    /// Edge from an external system into the backend
    Integration,
}

impl FlowKind {
    /// Default line width for arrows of this kind.
    pub fn default_width(self) -> f32 {
        match self {
            Self::AdminBypass => 3.0,
            Self::UserFlow | Self::Integration => 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::UserFlow => "user-flow",
            Self::AdminBypass => "admin-bypass",
            Self::Integration => "integration",
        }
    }
}

/// A directed edge between two literal coordinates.
///
/// Endpoints are not tied to components; nothing checks that they land on one.
#[derive(Debug, Clone)]
pub struct FlowArrow {
    kind: FlowKind,
    start: Point,
    end: Point,
    color: Color,
    width: f32,
    label: Option<String>,
}

impl FlowArrow {
    /// Creates an unlabeled arrow with the default width for `kind`.
    pub fn new(kind: FlowKind, start: Point, end: Point, color: Color) -> Self {
        Self {
            kind,
            start,
            end,
            color,
            width: kind.default_width(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A boxed, left-aligned block of text such as a journey description.
#[derive(Debug, Clone)]
pub struct Note {
    text: String,
    anchor: Point,
    color: Color,
    font_size: u16,
    background: Color,
    border_width: f32,
}

impl Note {
    /// Creates a note whose text and border share `color`.
    ///
    /// The box defaults to a white background at 0.8 alpha with a 1px border.
    pub fn new(text: impl Into<String>, anchor: Point, color: Color) -> Self {
        Self {
            text: text.into(),
            anchor,
            color,
            font_size: 9,
            background: Color::from_rgb8(255, 255, 255).with_alpha(0.8),
            border_width: 1.0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Center of the box in data coordinates.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }
}

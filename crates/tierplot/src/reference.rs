//! The FWEA-I audio system architecture.
//!
//! Every position, color and string here is literal; nothing is derived or
//! validated.

use log::debug;

use tierplot_core::{
    color::Color,
    geometry::Point,
    semantic::{AxisRange, Category, Component, Diagram, FlowArrow, FlowKind, Layer, Note},
};

use crate::TierplotError;

pub const TITLE: &str = "FWEA-I Audio System Architecture";

const LAYER_OPACITY: f32 = 0.1;

const COMPONENTS: [(&str, f32, f32, Category); 9] = [
    ("Wix Frontend", 2.0, 5.0, Category::Frontend),
    ("Cloudflare Workers", 2.0, 4.0, Category::Backend),
    ("R2 Storage", 1.0, 3.0, Category::Storage),
    ("KV Store", 2.0, 3.0, Category::Storage),
    ("D1 Database", 3.0, 3.0, Category::Storage),
    ("Cloudflare AI", 1.5, 2.0, Category::Processing),
    ("RunPod", 2.5, 2.0, Category::Processing),
    ("Stripe", 3.5, 1.0, Category::Payment),
    ("GitHub", 0.5, 4.0, Category::Deployment),
];

const LAYERS: [(&str, f32, Category); 5] = [
    ("Frontend", 5.0, Category::Frontend),
    ("Backend", 4.0, Category::Backend),
    ("Storage", 3.0, Category::Storage),
    ("Processing", 2.0, Category::Processing),
    ("Payment", 1.0, Category::Payment),
];

/// Upload, storage, processing and payment hops, as (start, end).
const USER_FLOWS: [((f32, f32), (f32, f32)); 7] = [
    ((2.0, 4.8), (2.0, 4.2)),
    ((1.8, 3.8), (1.3, 3.2)),
    ((2.0, 3.8), (2.0, 3.2)),
    ((2.2, 3.8), (2.7, 3.2)),
    ((1.8, 3.8), (1.6, 2.2)),
    ((2.2, 3.8), (2.4, 2.2)),
    ((2.5, 3.8), (3.3, 1.2)),
];

const USER_JOURNEY: &str =
    "User Journey:\n1. Upload Audio\n2. AI Analysis\n3. Preview\n4. Payment\n5. Download";
const ADMIN_PATH: &str = "Admin Path:\n• Token Bypass\n• Full Access\n• No Payment";

fn named_color(name: &str) -> Result<Color, TierplotError> {
    Color::new(name).map_err(TierplotError::Color)
}

fn point((x, y): (f32, f32)) -> Point {
    Point::new(x, y)
}

/// Builds the architecture diagram.
///
/// # Errors
///
/// Only fails if a named color cannot be parsed.
///
/// # Examples
///
/// ```
/// let diagram = tierplot::reference::fwea_architecture().unwrap();
/// assert_eq!(diagram.components().len(), 9);
/// assert_eq!(diagram.layers().len(), 5);
/// ```
pub fn fwea_architecture() -> Result<Diagram, TierplotError> {
    let mut diagram = Diagram::new(TITLE, AxisRange::new(-0.5, 5.0), AxisRange::new(0.5, 6.0));

    for (name, x, y, category) in COMPONENTS {
        diagram.add_component(Component::new(name, Point::new(x, y), category));
    }

    for (name, y, category) in LAYERS {
        diagram.add_layer(Layer::new(name, y, category.color(), LAYER_OPACITY));
    }

    let blue = named_color("blue")?;
    let red = named_color("red")?;
    let green = named_color("green")?;

    diagram.add_arrow(
        FlowArrow::new(FlowKind::AdminBypass, Point::new(2.2, 4.5), Point::new(2.8, 4.5), red)
            .with_label("Admin Bypass"),
    );
    for (start, end) in USER_FLOWS {
        diagram.add_arrow(FlowArrow::new(FlowKind::UserFlow, point(start), point(end), blue));
    }
    // GitHub deploys into the Workers
    diagram.add_arrow(FlowArrow::new(
        FlowKind::Integration,
        Point::new(0.8, 4.0),
        Point::new(1.7, 4.0),
        green,
    ));

    diagram.add_note(Note::new(USER_JOURNEY, Point::new(4.0, 5.5), blue));
    diagram.add_note(Note::new(ADMIN_PATH, Point::new(4.0, 4.5), red));

    debug!(
        components = diagram.components().len(),
        layers = diagram.layers().len(),
        arrows = diagram.arrows().len(),
        notes = diagram.notes().len();
        "Reference diagram built"
    );

    Ok(diagram)
}

//! Text rendering definitions for diagram labels and notes.
//!
//! - [`TextDefinition`] - Reusable text style (font, color, alignment, rotation, box)
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! Text is measured with `cosmic-text` so that boxed notes can be sized to
//! their content. Multi-line content is split on `\n`; there is no wrapping.
//!
//! # Quick Start
//!
//! ```
//! # use tierplot_core::draw::{TextDefinition, Text};
//! let mut style = TextDefinition::new();
//! style.set_font_size(9);
//!
//! let text = Text::new(&style, "Cloudflare\nWorkers");
//! let size = text.calculate_size();
//! assert!(size.width() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Insets, Point, Size},
};

/// Line height as a multiple of the font size.
const LINE_SPACING: f32 = 1.3;

/// Horizontal alignment of lines within a text block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Every line centered on the anchor
    #[default]
    Center,
    /// Lines share a left edge; the block as a whole stays centered on the anchor
    Left,
}

/// Defines the visual style for text elements in diagrams.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `12` |
/// | Text color | `None` (SVG default, black) |
/// | Alignment | [`TextAlign::Center`] |
/// | Rotation | `0` degrees |
/// | Background color | `None` |
/// | Border | `None` |
/// | Padding | Zero on all sides |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    align: TextAlign,
    rotation: f32,
    background_color: Option<Color>,
    border: Option<StrokeDefinition>,
    padding: Insets,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (e.g. "Arial", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` keeps the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets line alignment.
    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    /// Sets the clockwise rotation in degrees around the anchor.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    /// Sets the box fill behind the text. `None` draws no fill.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the box border around the text. `None` draws no border.
    pub fn set_border(&mut self, border: Option<StrokeDefinition>) {
        self.border = border;
    }

    /// Sets the padding between the text and its box.
    ///
    /// Padding counts toward the text size even when no box is drawn.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    fn font_size(&self) -> u16 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Font list for the SVG `font-family` attribute, ending in a generic family.
    fn font_family_list(&self) -> String {
        format!("{}, sans-serif", self.font_family)
    }

    fn has_box(&self) -> bool {
        self.background_color.is_some() || self.border.is_some()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 12,
            color: None,
            align: TextAlign::default(),
            rotation: 0.0,
            background_color: None,
            border: None,
            padding: Insets::default(),
        }
    }
}

/// A renderable text element combining content with styling.
///
/// # Examples
///
/// ```
/// # use tierplot_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Stripe");
/// assert_eq!(text.content(), "Stripe");
/// assert!(text.calculate_size().height() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Calculate the total size required to display this text, including padding.
    pub fn calculate_size(&self) -> Size {
        self.calculate_size_without_padding()
            .add_padding(self.definition.padding)
    }

    fn calculate_size_without_padding(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }

    fn rotate_transform(&self, position: Point) -> Option<String> {
        (self.definition.rotation != 0.0).then(|| {
            format!(
                "rotate({} {} {})",
                self.definition.rotation,
                position.x(),
                position.y()
            )
        })
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = self.definition;

        let lines: Vec<&str> = self.content.lines().collect();
        let content_size = self.calculate_size_without_padding();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            content_size.height() / lines.len() as f32
        };

        // First tspan advances by one line height, landing on the first line's center.
        let y_offset = -(content_size.height() + line_height) / 2.0;

        let (anchor, line_x) = match definition.align {
            TextAlign::Center => ("middle", position.x()),
            TextAlign::Left => ("start", position.x() - content_size.width() / 2.0),
        };

        let mut rendered_text = svg_element::Text::new("")
            .set("x", line_x)
            .set("y", position.y() + y_offset)
            .set("text-anchor", anchor)
            .set("dominant-baseline", "central")
            .set("font-family", definition.font_family_list())
            .set("font-size", definition.font_size());

        if let Some(color) = definition.color {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", line_x)
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        let transform = self.rotate_transform(position);

        if definition.has_box() {
            let box_bounds = position.to_bounds(self.calculate_size());
            let min = box_bounds.min_point();

            let mut bg = svg_element::Rectangle::new()
                .set("x", min.x())
                .set("y", min.y())
                .set("width", box_bounds.width())
                .set("height", box_bounds.height());

            bg = match definition.background_color {
                Some(fill) => bg
                    .set("fill", fill.to_string())
                    .set("fill-opacity", fill.alpha()),
                None => bg.set("fill", "none"),
            };

            if let Some(border) = &definition.border {
                bg = crate::apply_stroke!(bg, border);
            }

            if let Some(transform) = &transform {
                bg = bg.set("transform", transform.as_str());
            }

            output.add_to_layer(RenderLayer::TextBackground, Box::new(bg));
        }

        if let Some(transform) = transform {
            rendered_text = rendered_text.set("transform", transform);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Measures text with a shared `FontSystem`, which is expensive to create.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Measures `text` using real font metrics and shaping.
    ///
    /// Falls back to an average glyph width estimate when shaping produces no
    /// layout runs (for example when no fonts are installed).
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size_px = text_def.font_size() as f32;
        let line_height = font_size_px * LINE_SPACING;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let line_count = text.lines().count().max(1);
        let mut max_width: f32 = 0.0;

        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
        }

        if max_width == 0.0 {
            let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * font_size_px * 0.55;
        }

        Size::new(max_width, line_count as f32 * line_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

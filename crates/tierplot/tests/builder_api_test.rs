//! Integration tests for the DiagramBuilder API
//!
//! These render the reference architecture and inspect the produced
//! documents.

use std::fs;

use roxmltree::Document;
use tempfile::tempdir;

use tierplot::{
    DiagramBuilder, OutputFormat, RasterOptions, TierplotError,
    config::{AppConfig, CanvasConfig, StyleConfig},
    geometry::Insets,
    reference, svg_to_png,
};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn render_reference_svg() -> String {
    let diagram = reference::fwea_architecture().expect("Failed to build diagram");
    DiagramBuilder::default()
        .render_svg(&diagram)
        .expect("Failed to render")
}

fn count_tagged(doc: &Document, attribute: &str) -> usize {
    doc.descendants()
        .filter(|node| node.attribute(attribute).is_some())
        .count()
}

#[test]
fn test_render_is_complete_svg() {
    let svg = render_reference_svg();
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    Document::parse(&svg).expect("Output should be well-formed XML");
}

#[test]
fn test_one_box_per_component() {
    let svg = render_reference_svg();
    let doc = Document::parse(&svg).unwrap();
    assert_eq!(count_tagged(&doc, "data-component"), 9);
}

#[test]
fn test_one_band_per_layer() {
    let svg = render_reference_svg();
    let doc = Document::parse(&svg).unwrap();
    assert_eq!(count_tagged(&doc, "data-band"), 5);
}

#[test]
fn test_bands_render_below_boxes() {
    let svg = render_reference_svg();
    let band_group = svg.find("data-layer=\"band\"").unwrap();
    let shape_group = svg.find("data-layer=\"shape\"").unwrap();
    let arrow_group = svg.find("data-layer=\"arrow\"").unwrap();
    let text_group = svg.find("data-layer=\"text\"").unwrap();
    assert!(band_group < shape_group);
    assert!(shape_group < arrow_group);
    assert!(arrow_group < text_group);
}

#[test]
fn test_arrows_lie_within_axis_ranges() {
    let diagram = reference::fwea_architecture().unwrap();
    assert_eq!(diagram.arrows().len(), 9);
    for arrow in diagram.arrows() {
        assert!(diagram.in_range(arrow.start()), "start of {arrow:?}");
        assert!(diagram.in_range(arrow.end()), "end of {arrow:?}");
    }
}

#[test]
fn test_rendered_arrows_lie_within_plot_area() {
    let svg = render_reference_svg();
    let doc = Document::parse(&svg).unwrap();

    let paths: Vec<_> = doc
        .descendants()
        .filter(|node| node.attribute("data-flow").is_some())
        .collect();
    assert_eq!(paths.len(), 9);

    for path in paths {
        let data = path.attribute("d").unwrap();
        let numbers: Vec<f32> = data
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect();
        assert_eq!(numbers.len(), 4, "straight segment expected in `{data}`");
        for point in numbers.chunks(2) {
            assert!((80.0..=620.0).contains(&point[0]), "x out of plot in `{data}`");
            assert!((100.0..=420.0).contains(&point[1]), "y out of plot in `{data}`");
        }
    }
}

#[test]
fn test_stripe_box_color_and_label() {
    let svg = render_reference_svg();
    let doc = Document::parse(&svg).unwrap();

    let stripe = doc
        .descendants()
        .find(|node| node.attribute("data-component") == Some("Stripe"))
        .expect("Stripe box should be rendered");
    assert_eq!(stripe.attribute("fill"), Some("#d2ba4c"));
    assert_eq!(stripe.attribute("stroke"), Some("#ffffff"));

    let has_label = doc
        .descendants()
        .filter(|node| node.tag_name().name() == "tspan")
        .any(|node| node.text() == Some("Stripe"));
    assert!(has_label, "Stripe label should be rendered");
}

#[test]
fn test_multi_word_names_break_lines() {
    let svg = render_reference_svg();
    let doc = Document::parse(&svg).unwrap();
    let lines: Vec<_> = doc
        .descendants()
        .filter(|node| node.tag_name().name() == "tspan")
        .filter_map(|node| node.text())
        .collect();
    assert!(lines.contains(&"Cloudflare"));
    assert!(lines.contains(&"Workers"));
    assert!(!lines.contains(&"Cloudflare Workers"));
}

#[test]
fn test_title_and_notes_are_rendered() {
    let svg = render_reference_svg();
    assert!(svg.contains("FWEA-I Audio System Architecture"));
    assert!(svg.contains("Admin Bypass"));
    assert!(svg.contains("5. Download"));
    assert!(svg.contains("• Token Bypass"));
}

#[test]
fn test_render_is_idempotent() {
    let diagram = reference::fwea_architecture().unwrap();
    let builder = DiagramBuilder::default();
    assert_eq!(
        builder.render_svg(&diagram).unwrap(),
        builder.render_svg(&diagram).unwrap()
    );
    assert_eq!(
        builder.render_png(&diagram).unwrap(),
        builder.render_png(&diagram).unwrap()
    );
}

fn strip_text_elements(svg: &str) -> String {
    let mut stripped = String::with_capacity(svg.len());
    let mut rest = svg;
    while let Some(start) = rest.find("<text") {
        stripped.push_str(&rest[..start]);
        let end = rest[start..]
            .find("</text>")
            .expect("Unclosed text element");
        rest = &rest[start + end + "</text>".len()..];
    }
    stripped.push_str(rest);
    stripped
}

#[test]
fn test_png_draws_text() {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    if fontdb.is_empty() {
        return;
    }

    let diagram = reference::fwea_architecture().unwrap();
    let builder = DiagramBuilder::default();
    let svg = builder.render_svg(&diagram).unwrap();
    let without_text = strip_text_elements(&svg);
    assert!(!without_text.contains(">Stripe<"));

    let png = builder.render_png(&diagram).unwrap();
    let png_without_text = svg_to_png(&without_text, &RasterOptions::default()).unwrap();
    assert_ne!(png, png_without_text, "PNG should contain rendered labels");
}

#[test]
fn test_export_png() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("fwea_architecture_updated.png");

    let diagram = reference::fwea_architecture().unwrap();
    let format = DiagramBuilder::default().export(&diagram, &path).unwrap();
    assert_eq!(format, OutputFormat::Png);

    let bytes = fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(PNG_SIGNATURE));
}

#[test]
fn test_export_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("architecture.svg");

    let diagram = reference::fwea_architecture().unwrap();
    let format = DiagramBuilder::default().export(&diagram, &path).unwrap();
    assert_eq!(format, OutputFormat::Svg);
    assert!(fs::read_to_string(&path).unwrap().contains("data-component"));
}

#[test]
fn test_export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("architecture.gif");

    let diagram = reference::fwea_architecture().unwrap();
    let err = DiagramBuilder::default().export(&diagram, &path).unwrap_err();
    assert!(matches!(err, TierplotError::UnsupportedFormat(_)));
    assert!(!path.exists(), "nothing should be written");
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.svg");

    let diagram = reference::fwea_architecture().unwrap();
    let err = DiagramBuilder::default().export(&diagram, &path).unwrap_err();
    assert!(matches!(err, TierplotError::Io(_)));
}

#[test]
fn test_custom_canvas() {
    let canvas = CanvasConfig::new(1400.0, 1000.0, Insets::new(200.0, 160.0, 160.0, 160.0))
        .with_scale(0.5);
    let builder = DiagramBuilder::new(AppConfig::new(canvas, StyleConfig::default()));

    let diagram = reference::fwea_architecture().unwrap();
    let svg = builder.render_svg(&diagram).unwrap();
    assert!(svg.contains("viewBox=\"0 0 1400 1000\""));

    let png = builder.render_png(&diagram).unwrap();
    assert!(png.starts_with(PNG_SIGNATURE));
}

#[test]
fn test_canvas_without_plot_area_fails() {
    let canvas = CanvasConfig::new(100.0, 100.0, Insets::uniform(80.0));
    let builder = DiagramBuilder::new(AppConfig::new(canvas, StyleConfig::default()));

    let diagram = reference::fwea_architecture().unwrap();
    let err = builder.render_svg(&diagram).unwrap_err();
    assert!(matches!(err, TierplotError::Export(_)));
}

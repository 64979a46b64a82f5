//! SVG to PNG rasterization with resvg.

use log::{debug, warn};
use usvg::fontdb;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Output pixels per SVG user unit.
    pub scale: f32,
    /// Family for text whose own families are not installed. Falls back to
    /// an installed sans-serif face when this one is missing too.
    pub font_family: String,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_family: "Arial".to_string(),
        }
    }
}

/// Renders an SVG document to PNG bytes.
///
/// The document's own background is kept; the pixmap starts transparent.
pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options)?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

fn svg_to_pixmap(svg: &str, options: &RasterOptions) -> Result<tiny_skia::Pixmap> {
    let mut opt = usvg::Options::default();
    let fontdb = opt.fontdb_mut();
    fontdb.load_system_fonts();
    match resolve_font_family(fontdb, &options.font_family) {
        Some(family) => {
            if family != options.font_family {
                warn!(requested = options.font_family.as_str(), using = family.as_str(); "Font family not installed");
            }
            fontdb.set_sans_serif_family(family.clone());
            opt.font_family = family;
        }
        None => {
            warn!("No system fonts found, text will not be drawn");
            opt.font_family = options.font_family.clone();
        }
    }

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    let size = tree.size();
    let scale = options.scale;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(RasterError::PixmapAlloc);
    }
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;
    debug!(width_px, height_px; "Allocating pixmap");

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Picks the family text falls back to: `preferred` if installed, else the
/// first installed sans family by name, else the first installed family.
fn resolve_font_family(fontdb: &fontdb::Database, preferred: &str) -> Option<String> {
    let mut families: Vec<&str> = fontdb
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()))
        .collect();
    if families
        .iter()
        .any(|name| name.eq_ignore_ascii_case(preferred))
    {
        return Some(preferred.to_string());
    }

    families.sort_unstable();
    families
        .iter()
        .find(|name| name.contains("Sans") && !name.contains("Mono"))
        .or_else(|| families.first())
        .map(|name| name.to_string())
}

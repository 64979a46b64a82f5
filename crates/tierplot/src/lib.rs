//! tierplot - renders a layered cloud-architecture diagram.
//!
//! A diagram is a set of component boxes placed at literal data
//! coordinates, horizontal bands grouping them by tier, flow arrows between
//! coordinates and boxed notes. [`DiagramBuilder`] maps it onto a fixed
//! canvas and writes it as SVG or PNG.

pub mod config;
pub mod reference;

mod error;
mod export;
mod viewport;

pub use tierplot_core::{color, draw, geometry, semantic};

pub use error::TierplotError;
pub use export::{OutputFormat, RasterError, RasterOptions, svg_to_png};

use std::{fs, path::Path};

use log::{debug, info};

use config::AppConfig;
use export::svg::SvgBuilder;

/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "fwea_architecture_updated.png";

/// Builder for rendering and exporting diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use tierplot::{DiagramBuilder, config::AppConfig, reference};
///
/// let diagram = reference::fwea_architecture().expect("Failed to build diagram");
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
///
/// builder
///     .export(&diagram, "architecture.png")
///     .expect("Failed to export");
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `TierplotError::Export` for invalid style colors or a canvas
    /// whose margins leave no room for the plot.
    pub fn render_svg(&self, diagram: &semantic::Diagram) -> Result<String, TierplotError> {
        info!(title = diagram.title(); "Rendering SVG");

        let svg = SvgBuilder::new(self.config.canvas())
            .with_style(self.config.style())
            .with_diagram(diagram)
            .build()?;

        let svg_string = svg.render_document().to_string();

        debug!(bytes = svg_string.len(); "SVG rendered successfully");
        Ok(svg_string)
    }

    /// Render a diagram to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`render_svg`](Self::render_svg), plus
    /// `TierplotError::Raster` if rasterization fails.
    pub fn render_png(&self, diagram: &semantic::Diagram) -> Result<Vec<u8>, TierplotError> {
        let svg = self.render_svg(diagram)?;

        info!(scale = self.config.canvas().scale(); "Rasterizing SVG");
        let options = RasterOptions {
            scale: self.config.canvas().scale(),
            font_family: self.config.style().font_family().to_string(),
        };
        let png = svg_to_png(&svg, &options)?;

        debug!(bytes = png.len(); "PNG encoded");
        Ok(png)
    }

    /// Render a diagram and write it to `path`.
    ///
    /// The format follows the file extension. Existing files are overwritten.
    ///
    /// # Errors
    ///
    /// Returns `TierplotError::UnsupportedFormat` before rendering if the
    /// extension is neither `svg` nor `png`, and `TierplotError::Io` if the
    /// file cannot be written.
    pub fn export(
        &self,
        diagram: &semantic::Diagram,
        path: impl AsRef<Path>,
    ) -> Result<OutputFormat, TierplotError> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;

        let bytes = match format {
            OutputFormat::Svg => self.render_svg(diagram)?.into_bytes(),
            OutputFormat::Png => self.render_png(diagram)?,
        };

        info!(path = path.display().to_string(), format = format.extension(); "Writing output file");
        fs::write(path, bytes)?;

        Ok(format)
    }
}

//! Configuration types for tierplot rendering.
//!
//! This module provides configuration structures that control the canvas and
//! the styling of rendered diagrams. All types implement
//! [`serde::Deserialize`] and every field has a default, so a configuration
//! file only needs to name the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Output dimensions, plot margins and raster scale.
//! - [`StyleConfig`] - Background colors and font family.
//!
//! # Example
//!
//! ```
//! # use tierplot::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 700.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use tierplot_core::{color::Color, geometry::Insets};

/// Top-level application configuration combining canvas and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas and style configurations.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Canvas dimensions in pixels.
///
/// The plot area is what remains of the canvas after the margins; the title
/// lives in the top margin.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    margin_top: f32,
    margin_right: f32,
    margin_bottom: f32,
    margin_left: f32,
    /// Pixel multiplier applied when rasterizing.
    scale: f32,
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32, margins: Insets) -> Self {
        Self {
            width,
            height,
            margin_top: margins.top(),
            margin_right: margins.right(),
            margin_bottom: margins.bottom(),
            margin_left: margins.left(),
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margins(&self) -> Insets {
        Insets::new(
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
        )
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 500.0,
            margin_top: 100.0,
            margin_right: 80.0,
            margin_bottom: 80.0,
            margin_left: 80.0,
            scale: 1.0,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are kept as strings and parsed on use, so an invalid value is
/// reported when rendering rather than when loading.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Fill of the whole canvas.
    background_color: String,
    /// Fill of the plot area inside the margins.
    plot_background_color: String,
    font_family: String,
}

impl StyleConfig {
    /// Returns the parsed canvas background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed plot area background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn plot_background_color(&self) -> Result<Color, String> {
        Color::new(&self.plot_background_color)
            .map_err(|err| format!("Invalid plot background color in config: {err}"))
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
            plot_background_color: "white".to_string(),
            font_family: "Arial".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_canvas_defaults() {
        let canvas = CanvasConfig::default();
        assert_approx_eq!(f32, canvas.width(), 700.0);
        assert_approx_eq!(f32, canvas.height(), 500.0);
        assert_eq!(canvas.margins(), Insets::new(100.0, 80.0, 80.0, 80.0));
        assert_approx_eq!(f32, canvas.scale(), 1.0);
    }

    #[test]
    fn test_canvas_new_keeps_default_scale() {
        let canvas = CanvasConfig::new(300.0, 200.0, Insets::uniform(10.0)).with_scale(2.0);
        assert_approx_eq!(f32, canvas.width(), 300.0);
        assert_eq!(canvas.margins(), Insets::uniform(10.0));
        assert_approx_eq!(f32, canvas.scale(), 2.0);
    }

    #[test]
    fn test_style_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.background_color().unwrap().to_hex(), "#ffffff");
        assert_eq!(style.plot_background_color().unwrap().to_hex(), "#ffffff");
        assert_eq!(style.font_family(), "Arial");
    }

    #[test]
    fn test_invalid_style_color() {
        let style = StyleConfig {
            background_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        };
        let err = style.background_color().unwrap_err();
        assert!(err.starts_with("Invalid background color in config"));
    }
}

//! Color handling for tierplot diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are always emitted as `#rrggbb` hex with the
//! alpha channel carried separately, which is the form every SVG consumer
//! (including the rasterizer) understands.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgba(255, 255, 255, 0.8)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierplot_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let faded = Color::new("rgba(255, 255, 255, 0.8)").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Create an opaque sRGB color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgb8(r, g, b)),
        }
    }

    /// Creates a new color with the specified alpha value in `0.0..=1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierplot_core::color::Color;
    ///
    /// let white = Color::new("white").unwrap().with_alpha(0.8);
    /// assert_eq!(white.alpha(), 0.8);
    /// assert_eq!(white.to_hex(), "#ffffff");
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component, 0.0 (transparent) to 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the color as lowercase `#rrggbb`, ignoring alpha.
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// Returns a string usable inside an SVG `id` attribute.
    ///
    /// Translucent colors get an alpha suffix so that two colors differing
    /// only in alpha never share an id.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierplot_core::color::Color;
    ///
    /// let color = Color::new("#D2BA4C").unwrap();
    /// assert_eq!(color.to_id_safe_string(), "hexd2ba4c");
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let hex = self.to_hex().replace('#', "hex");
        let alpha = self.alpha();
        if alpha < 1.0 {
            format!("{hex}_a{}", (alpha * 100.0).round() as u32)
        } else {
            hex
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb8(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_hex())
    }
}

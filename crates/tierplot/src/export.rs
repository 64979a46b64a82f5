//! Turning a diagram into output documents.
//!
//! [`svg`] builds the scene as an SVG document; [`raster`] turns that
//! document into PNG bytes. [`OutputFormat`] picks between them by file
//! extension.

pub mod raster;
pub mod svg;

pub use raster::{RasterError, RasterOptions, svg_to_png};

use std::path::Path;

use thiserror::Error;

use crate::TierplotError;

/// Errors raised while building the SVG scene.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid style: {0}")]
    Style(String),

    #[error("Invalid viewport: {0}")]
    Viewport(String),
}

/// File format of a written diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Picks the format from the extension of `path`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`TierplotError::UnsupportedFormat`] for any extension other
    /// than `svg` or `png`, including a missing one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::Path;
    /// # use tierplot::OutputFormat;
    /// assert_eq!(OutputFormat::from_path(Path::new("out.PNG")).unwrap(), OutputFormat::Png);
    /// assert!(OutputFormat::from_path(Path::new("out.jpg")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, TierplotError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            Some(other) => Err(TierplotError::UnsupportedFormat(other.to_string())),
            None => Err(TierplotError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("fwea_architecture_updated.png")).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("dir/diagram.Svg")).unwrap(),
            OutputFormat::Svg
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = OutputFormat::from_path(Path::new("diagram.pdf")).unwrap_err();
        assert!(matches!(err, TierplotError::UnsupportedFormat(ref ext) if ext == "pdf"));
    }

    #[test]
    fn test_missing_extension() {
        let err = OutputFormat::from_path(Path::new("diagram")).unwrap_err();
        assert!(matches!(err, TierplotError::UnsupportedFormat(_)));
    }
}

//! Error adapter for converting TierplotError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tierplot::TierplotError;

/// Adapter giving every [`TierplotError`] a diagnostic code and, where a
/// fix is obvious, a help line.
pub struct ErrorAdapter<'a>(pub &'a TierplotError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TierplotError::Io(_) => "tierplot::io",
            TierplotError::Color(_) => "tierplot::color",
            TierplotError::Config(_) => "tierplot::config",
            TierplotError::UnsupportedFormat(_) => "tierplot::unsupported_format",
            TierplotError::Export(_) => "tierplot::export",
            TierplotError::Raster(_) => "tierplot::raster",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TierplotError::Io(_) => "check that the output directory exists and is writable",
            TierplotError::Config(_) => "check the configuration file or pass another with --config",
            TierplotError::UnsupportedFormat(_) => "use an output path ending in .svg or .png",
            TierplotError::Export(_) => "check the [canvas] and [style] configuration values",
            TierplotError::Color(_) | TierplotError::Raster(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

//! Error types for tierplot operations.
//!
//! This module provides the main error type [`TierplotError`] which wraps
//! the error conditions that can occur while building, rendering and writing
//! a diagram.

use std::io;

use thiserror::Error;

use crate::export::{self, RasterError};

/// The main error type for tierplot operations.
#[derive(Debug, Error)]
pub enum TierplotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid color: {0}")]
    Color(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported output format: `{0}`")]
    UnsupportedFormat(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),

    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),
}

impl From<export::Error> for TierplotError {
    fn from(error: export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

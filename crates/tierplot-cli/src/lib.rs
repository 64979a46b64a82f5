//! CLI logic for the tierplot diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use tierplot::{DiagramBuilder, TierplotError, reference};

/// Run the tierplot CLI application
///
/// Builds the architecture diagram and writes it to the output path in the
/// format its extension names.
///
/// # Errors
///
/// Returns `TierplotError` for:
/// - Configuration loading errors
/// - Unsupported output extensions
/// - Rendering and rasterization errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), TierplotError> {
    info!(output_path = args.output; "Rendering architecture diagram");

    let app_config = config::load_config(args.config.as_ref())?;

    let diagram = reference::fwea_architecture()?;

    let builder = DiagramBuilder::new(app_config);
    let format = builder.export(&diagram, &args.output)?;

    info!(output_file = args.output, format = format.extension(); "Diagram exported successfully");

    Ok(())
}

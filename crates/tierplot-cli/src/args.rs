//! Command-line argument definitions for the tierplot CLI.
//!
//! Every argument is optional; with none, the diagram is written to
//! [`DEFAULT_OUTPUT`] in the working directory.

use clap::Parser;

use tierplot::DEFAULT_OUTPUT;

/// Command-line arguments for the tierplot diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file; the extension selects SVG or PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

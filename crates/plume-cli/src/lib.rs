//! CLI logic for the Plume renderer.
//!
//! Reads a PlantUML source file, renders it with the configured style and
//! writes the SVG document next to it.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::info;

use plume::{DiagramBuilder, PlumeError};

/// Run the Plume CLI application
///
/// # Errors
///
/// Returns `PlumeError` for:
/// - File I/O errors, including empty or whitespace-only input
/// - Configuration loading errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PlumeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    if source.trim().is_empty() {
        return Err(PlumeError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("input file `{}` is empty", args.input),
        )));
    }

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source);
    let svg = builder.render_svg(&diagram)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

//! CLI logic for the plantc4 renderer.
//!
//! Reads a TOML diagram description, renders it to C4-PlantUML and writes
//! the document to a file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use plantc4::{DiagramBuilder, Plantc4Error};

/// Run the plantc4 CLI application
///
/// # Errors
///
/// Returns `Plantc4Error` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Description errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), Plantc4Error> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source)?;
    let document = builder.render(&diagram)?;

    match &args.output {
        Some(path) => {
            fs::write(path, document)?;
            info!(output_file = path; "PlantUML exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

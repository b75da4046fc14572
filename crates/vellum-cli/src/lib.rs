//! CLI logic for the Vellum document inspector.
//!
//! This module contains the core CLI logic: load a document, report its
//! warnings and write its outline.

pub mod error_adapter;

mod args;
mod config;
mod outline;

pub use args::Args;
pub use outline::Outline;

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use vellum::{DocumentLoader, VellumError};

use error_adapter::{render, warnings_to_reportables};

/// Run the Vellum CLI application
///
/// This function loads the input file through the Vellum pipeline and
/// writes the outline of the resulting tree to the output file, or to
/// stdout when no output file is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `VellumError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
pub fn run(args: &Args) -> Result<(), VellumError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing document"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let loader = DocumentLoader::new(app_config);
    let loaded = loader.load(&args.input)?;

    for reportable in warnings_to_reportables(loaded.warnings(), loaded.source()) {
        warn!("{}", render(&reportable));
    }

    let outline = Outline::new(loaded.document()).to_string();

    match &args.output {
        Some(path) => {
            fs::write(path, outline)?;
            info!(output_file = path; "Outline written");
        }
        None => io::stdout().write_all(outline.as_bytes())?,
    }

    Ok(())
}

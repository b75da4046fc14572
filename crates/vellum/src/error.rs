//! Error types for Vellum operations.
//!
//! This module provides the main error type [`VellumError`] which wraps
//! the error conditions that can occur while loading a document.

use std::io;

use thiserror::Error;

use vellum_parser::ParseError;

/// The main error type for Vellum operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the source text next to the diagnostics so
/// that their spans can be rendered as snippets.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VellumError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

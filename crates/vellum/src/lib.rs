//! Vellum - typed element trees for SVG-like documents.
//!
//! Reads SVG-like XML into an arena tree of typed elements. Unsupported tags
//! and malformed attribute values are skipped with warnings; broken nesting
//! is a hard error.

pub mod config;

mod error;

pub use vellum_core::{document, element, geometry, policy};
pub use vellum_parser::{Diagnostic, ErrorCode, Label, ParseError, Severity, Span};

pub use error::VellumError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use vellum_core::document::Document;
use vellum_parser::ParseConfig;

use config::AppConfig;

/// A document read from disk, together with its source text and the
/// warnings produced while reading it.
#[derive(Debug)]
pub struct LoadedDocument {
    source: String,
    document: Document,
    warnings: Vec<Diagnostic>,
}

impl LoadedDocument {
    /// Returns the source text the document was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the non-fatal warnings, in document order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// Loader for parsing Vellum documents.
///
/// This provides an API for turning SVG source into a [`Document`] with the
/// parser settings taken from an [`AppConfig`].
///
/// # Examples
///
/// ```rust
/// use vellum::{DocumentLoader, config::AppConfig};
///
/// let source = r#"<svg viewBox="0 0 200 100"><circle cx="10" cy="20" r="5"/></svg>"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let loader = DocumentLoader::new(config);
///
/// let document = loader.parse(source).expect("Failed to parse");
/// assert_eq!(document.len(), 2);
///
/// // Or use default config
/// let loader = DocumentLoader::default();
/// ```
#[derive(Debug, Default)]
pub struct DocumentLoader {
    config: AppConfig,
}

impl DocumentLoader {
    /// Create a new document loader with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including parser settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a document.
    ///
    /// Warnings are logged and discarded.
    ///
    /// # Errors
    ///
    /// Returns `VellumError::Parse` for malformed XML or invalid nesting.
    pub fn parse(&self, source: &str) -> Result<Document, VellumError> {
        self.parse_with_diagnostics(source)
            .map(|(document, _)| document)
    }

    /// Parse source text into a document, keeping the warnings.
    ///
    /// # Errors
    ///
    /// Returns `VellumError::Parse` for malformed XML or invalid nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vellum::{DocumentLoader, ErrorCode};
    ///
    /// let loader = DocumentLoader::default();
    /// let (document, warnings) = loader
    ///     .parse_with_diagnostics(r#"<svg><circle r="big"/></svg>"#)
    ///     .expect("Failed to parse");
    ///
    /// assert_eq!(document.len(), 2);
    /// assert_eq!(warnings[0].code(), Some(ErrorCode::E200));
    /// ```
    pub fn parse_with_diagnostics(
        &self,
        source: &str,
    ) -> Result<(Document, Vec<Diagnostic>), VellumError> {
        info!(
            unsupported_tags:% = self.config.parser().unsupported_tags();
            "Parsing document"
        );

        let (document, warnings) =
            vellum_parser::parse_with_diagnostics(source, self.parse_config())
                .map_err(|err| VellumError::new_parse_error(err, source))?;

        debug!(nodes = document.len(), warnings = warnings.len(); "Document parsed successfully");
        trace!(document:?; "Parsed document");

        Ok((document, warnings))
    }

    /// Read and parse a document from a file.
    ///
    /// # Errors
    ///
    /// Returns `VellumError::Io` if the file cannot be read and
    /// `VellumError::Parse` if it is not valid UTF-8 or fails to parse.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedDocument, VellumError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading document");

        let bytes = fs::read(path)?;
        let source = vellum_parser::decode_utf8(&bytes)
            .map_err(|diag| {
                VellumError::new_parse_error(diag.into(), String::from_utf8_lossy(&bytes))
            })?
            .to_string();

        let (document, warnings) = self.parse_with_diagnostics(&source)?;
        Ok(LoadedDocument {
            source,
            document,
            warnings,
        })
    }

    fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.config.parser().unsupported_tags())
    }
}

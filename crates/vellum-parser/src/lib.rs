//! # Vellum Parser
//!
//! Builds a typed element tree from SVG-like XML. This crate provides the
//! pipeline from source text to a [`Document`].
//!
//! ## Usage
//!
//! ```
//! # use vellum_parser::{parse, ParseConfig, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"<svg viewBox="0 0 200 100"><circle cx="10" cy="20" r="5"/></svg>"#;
//!
//!     let document = parse(source, ParseConfig::default())?;
//!     assert_eq!(document.root().children().count(), 1);
//!     Ok(())
//! }
//! ```

pub mod attribute;
mod builder;
pub mod error;
mod reader;
pub mod registry;
mod span;

pub use attribute::Attributes;
pub use builder::{BuilderState, ParseConfig, TreeBuilder};
pub use error::{Diagnostic, ErrorCode, Label, ParseError, Severity};
pub use span::Span;

use vellum_core::document::Document;

/// Parse source text into a document.
///
/// This is the main entry point. It runs the complete pipeline:
///
/// 1. **Read** - Pull tag events out of the XML
/// 2. **Coerce** - Turn attribute strings into typed values
/// 3. **Build** - Assemble the element tree on a stack
///
/// Warnings are logged and then discarded; use [`parse_with_diagnostics`]
/// to keep them.
///
/// # Arguments
///
/// * `source` - The SVG source text
/// * `config` - Configuration for tree building
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed XML or invalid nesting. No partial
/// tree is returned.
pub fn parse(source: &str, config: ParseConfig) -> Result<Document, ParseError> {
    parse_with_diagnostics(source, config).map(|(document, _)| document)
}

/// Parse source text, returning the document together with every non-fatal
/// warning emitted on the way.
///
/// # Example
///
/// ```
/// # use vellum_parser::{parse_with_diagnostics, ErrorCode, ParseConfig};
/// let source = r#"<svg><rect width="4"/><circle r="2"/></svg>"#;
/// let (document, warnings) = parse_with_diagnostics(source, ParseConfig::default()).unwrap();
///
/// assert_eq!(document.len(), 2);
/// assert_eq!(warnings[0].code(), Some(ErrorCode::E300));
/// ```
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_with_diagnostics(
    source: &str,
    config: ParseConfig,
) -> Result<(Document, Vec<Diagnostic>), ParseError> {
    reader::read_document(source, config)
}

/// Parse raw bytes into a document.
///
/// # Errors
///
/// Returns [`ErrorCode::E002`] if `bytes` is not valid UTF-8, otherwise the
/// same errors as [`parse`].
pub fn parse_bytes(bytes: &[u8], config: ParseConfig) -> Result<Document, ParseError> {
    let source = decode_utf8(bytes)?;
    parse(source, config)
}

/// Check that `bytes` is UTF-8 and view it as source text.
///
/// # Errors
///
/// Returns an [`ErrorCode::E002`] diagnostic labelling the first invalid
/// byte sequence.
pub fn decode_utf8(bytes: &[u8]) -> Result<&str, Diagnostic> {
    std::str::from_utf8(bytes).map_err(|err| {
        let start = err.valid_up_to();
        let end = start + err.error_len().unwrap_or(bytes.len() - start);
        Diagnostic::error("input is not valid UTF-8")
            .with_code(ErrorCode::E002)
            .with_label(Span::new(start..end), "invalid byte sequence")
    })
}

//! Error and diagnostic system for the Vellum parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating warnings next to fatal errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Fatal diagnostics are wrapped in [`ParseError`]
//! for returning from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use vellum_parser::error::{Diagnostic, ErrorCode};
//! # use vellum_parser::Span;
//!
//! let close = Span::new(40..49);
//! let open = Span::new(0..24);
//!
//! let diag = Diagnostic::error("mismatched end tag `circle`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(close, "expected `</svg>`")
//!     .with_secondary_label(open, "`svg` opened here")
//!     .with_help("close elements in the reverse order they were opened");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;

//! Error codes for the Vellum diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - XML input errors
//! - `E1xx` - Tree structure errors
//! - `E2xx` - Attribute errors
//! - `E3xx` - Vocabulary errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // XML Input Errors (E0xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The XML tokenizer rejected the input.
    E001,

    /// Invalid UTF-8.
    ///
    /// The input bytes are not valid UTF-8 text.
    E002,

    /// Malformed attribute syntax.
    ///
    /// An attribute could not be read from a start tag, for example because
    /// it is unquoted or declared twice.
    E003,

    // =========================================================================
    // Structure Errors (E1xx)
    // =========================================================================
    /// Mismatched end tag.
    ///
    /// An end tag does not close the most recently opened element.
    E100,

    /// Unexpected end tag.
    ///
    /// An end tag was found while no element was open.
    E101,

    /// Element cannot have children.
    ///
    /// A child element was placed inside an element that does not support
    /// nested content.
    E102,

    /// Unterminated document.
    ///
    /// The input ended while elements were still open.
    E103,

    /// Invalid root element.
    ///
    /// The outermost recognized element must be `svg`.
    E104,

    /// Content after the root element.
    ///
    /// A recognized element was found after the root element was closed.
    E105,

    /// Nested viewport.
    ///
    /// An `svg` element was found inside the root element.
    E106,

    /// Missing root element.
    ///
    /// The document does not contain any recognized root element.
    E107,

    // =========================================================================
    // Attribute Errors (E2xx)
    // =========================================================================
    /// Invalid attribute value.
    ///
    /// An attribute value does not parse as the expected type. The attribute
    /// falls back to its default.
    E200,

    /// Invalid viewBox.
    ///
    /// A `viewBox` declares a negative width or height.
    E201,

    // =========================================================================
    // Vocabulary Errors (E3xx)
    // =========================================================================
    /// Unsupported tag.
    ///
    /// The tag is not part of the recognized vocabulary and was skipped.
    E300,

    /// Element dropped.
    ///
    /// A recognized element was discarded because it is nested inside an
    /// unsupported tag.
    E301,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // XML input errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Structure errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            ErrorCode::E107 => "E107",
            // Attribute errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            // Vocabulary errors
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // XML input errors
            ErrorCode::E001 => "malformed XML",
            ErrorCode::E002 => "invalid UTF-8",
            ErrorCode::E003 => "malformed attribute",
            // Structure errors
            ErrorCode::E100 => "mismatched end tag",
            ErrorCode::E101 => "unexpected end tag",
            ErrorCode::E102 => "element cannot have children",
            ErrorCode::E103 => "unterminated document",
            ErrorCode::E104 => "invalid root element",
            ErrorCode::E105 => "content after root element",
            ErrorCode::E106 => "nested viewport",
            ErrorCode::E107 => "missing root element",
            // Attribute errors
            ErrorCode::E200 => "invalid attribute value",
            ErrorCode::E201 => "invalid viewBox",
            // Vocabulary errors
            ErrorCode::E300 => "unsupported tag",
            ErrorCode::E301 => "element dropped",
        }
    }

    /// Returns true for codes that describe a structural problem.
    ///
    /// Structural problems always abort the parse.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ErrorCode::E100
                | ErrorCode::E101
                | ErrorCode::E102
                | ErrorCode::E103
                | ErrorCode::E104
                | ErrorCode::E105
                | ErrorCode::E106
                | ErrorCode::E107
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
        assert_eq!(ErrorCode::E300.to_string(), "E300");
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E003.as_str(), "E003");
        assert_eq!(ErrorCode::E107.as_str(), "E107");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "malformed XML");
        assert_eq!(ErrorCode::E103.description(), "unterminated document");
        assert_eq!(ErrorCode::E300.description(), "unsupported tag");
    }

    #[test]
    fn test_error_code_is_structural() {
        assert!(ErrorCode::E100.is_structural());
        assert!(ErrorCode::E107.is_structural());
        assert!(!ErrorCode::E001.is_structural());
        assert!(!ErrorCode::E200.is_structural());
        assert!(!ErrorCode::E300.is_structural());
    }
}

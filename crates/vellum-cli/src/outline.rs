//! Plain-text outline of a parsed document.
//!
//! One line per element in document order, indented by depth, followed by
//! the viewport's aspect ratio.

use std::fmt;

use vellum::document::Document;

/// Display wrapper that renders a [`Document`] as an indented outline.
pub struct Outline<'a> {
    document: &'a Document,
}

impl<'a> Outline<'a> {
    /// Create an outline view of `document`.
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }
}

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.document.descendants() {
            writeln!(f, "{}{}", "  ".repeat(node.depth()), node.element())?;
        }

        match self.document.viewport().aspect_ratio() {
            Some(ratio) => writeln!(f, "aspect ratio: {ratio:.3}"),
            None => writeln!(f, "aspect ratio: undefined"),
        }
    }
}

//! Tag-to-element dispatch.
//!
//! The registry is the only place that knows how a recognized tag turns into
//! a typed [`Element`]. Supporting a new tag means adding a variant to
//! [`ElementKind`] and [`Element`] plus one arm in [`build`]; the tree
//! builder never changes.

use log::debug;

use vellum_core::{
    element::{Circle, Element, ElementKind, Viewport},
    geometry::Rect,
};

use crate::{
    attribute::{self, Attributes},
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
};

/// Returns true if `tag` is part of the recognized vocabulary.
pub fn recognizes(tag: &str) -> bool {
    ElementKind::from_tag(tag).is_some()
}

/// Comma separated list of every recognized tag, for help messages.
pub(crate) fn vocabulary() -> &'static str {
    "svg, circle"
}

/// Build the element for a recognized tag.
///
/// Attributes that are present but malformed fall back to their defaults and
/// emit a warning into `diagnostics`; building itself never fails.
pub(crate) fn build(
    kind: ElementKind,
    attributes: &Attributes,
    span: Span,
    diagnostics: &mut DiagnosticCollector,
) -> Element {
    let mut reader = AttributeReader {
        kind,
        attributes,
        span,
        diagnostics,
    };

    let element = match kind {
        ElementKind::Svg => Element::Root(build_viewport(&mut reader)),
        ElementKind::Circle => Element::Circle(build_circle(&mut reader)),
    };
    debug!(element:% = element; "Built element");
    element
}

fn build_viewport(reader: &mut AttributeReader<'_>) -> Viewport {
    let view_box = reader.read("viewBox", Rect::DEFAULT_VIEW_BOX, attribute::rect);

    if !view_box.has_non_negative_size() {
        reader.diagnostics.emit(
            Diagnostic::warning(format!(
                "viewBox `{view_box}` has a negative width or height"
            ))
            .with_code(ErrorCode::E201)
            .with_label(reader.span, "on this `svg`")
            .with_help(format!(
                "using the default viewBox `{}`",
                Rect::DEFAULT_VIEW_BOX
            )),
        );
        return Viewport::new(Rect::DEFAULT_VIEW_BOX);
    }

    Viewport::new(view_box)
}

fn build_circle(reader: &mut AttributeReader<'_>) -> Circle {
    let cx = reader.read("cx", 0.0, attribute::double);
    let cy = reader.read("cy", 0.0, attribute::double);
    let r = reader.read("r", 0.0, attribute::double);
    Circle::new(cx, cy, r)
}

/// Reads typed attributes of one tag and reports malformed values.
struct AttributeReader<'a> {
    kind: ElementKind,
    attributes: &'a Attributes,
    span: Span,
    diagnostics: &'a mut DiagnosticCollector,
}

impl AttributeReader<'_> {
    /// Coerce `name`, falling back to `default` when it is absent or malformed.
    fn read<T, F>(&mut self, name: &str, default: T, coerce: F) -> T
    where
        T: std::fmt::Display,
        F: Fn(Option<&str>) -> Option<T>,
    {
        let Some(raw) = self.attributes.get(name) else {
            return default;
        };

        match coerce(Some(raw)) {
            Some(value) => value,
            None => {
                self.diagnostics.emit(
                    Diagnostic::warning(format!(
                        "invalid value `{raw}` for attribute `{name}`"
                    ))
                    .with_code(ErrorCode::E200)
                    .with_label(self.span, format!("on this `{}`", self.kind))
                    .with_help(format!("using the default `{default}`")),
                );
                default
            }
        }
    }
}

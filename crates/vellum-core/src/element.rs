//! Typed graphic elements.
//!
//! Every recognized tag maps to exactly one [`ElementKind`] and one
//! [`Element`] variant. Supporting a new tag means adding a variant to both
//! and teaching the registry how to build it; tree construction is unaffected.

use std::{fmt, str::FromStr};

use crate::geometry::Rect;

/// The recognized tag vocabulary.
///
/// The names match the XML tag names exactly (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The `svg` viewport root
    Svg,
    /// A `circle` shape
    Circle,
}

impl ElementKind {
    /// Look up the kind for a tag name, returning `None` for unsupported tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    /// Returns the XML tag name of this kind.
    pub fn tag_name(self) -> &'static str {
        self.into()
    }

    /// Returns true if elements of this kind may own children.
    pub fn is_container(self) -> bool {
        match self {
            ElementKind::Svg => true,
            ElementKind::Circle => false,
        }
    }
}

impl FromStr for ElementKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            "circle" => Ok(Self::Circle),
            _ => Err("Unsupported element"),
        }
    }
}

impl From<ElementKind> for &'static str {
    fn from(val: ElementKind) -> Self {
        match val {
            ElementKind::Svg => "svg",
            ElementKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag_name())
    }
}

/// The viewport root of a document.
///
/// Holds the `viewBox` rectangle that defines the user coordinate space and
/// the document bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    view_box: Rect,
}

impl Viewport {
    /// Create a new viewport with the given view box.
    pub fn new(view_box: Rect) -> Self {
        Self { view_box }
    }

    /// Returns the view box rectangle.
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Height over width of the view box.
    ///
    /// Returns `None` for a zero-width view box.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.view_box.width() == 0.0 {
            return None;
        }
        Some(self.view_box.height() / self.view_box.width())
    }

    /// Factor that maps the view box height onto `height` output units.
    ///
    /// Returns `None` for a zero-height view box.
    pub fn scale(&self, height: f64) -> Option<f64> {
        if self.view_box.height() == 0.0 {
            return None;
        }
        Some(height / self.view_box.height())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Rect::DEFAULT_VIEW_BOX)
    }
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    cx: f64,
    cy: f64,
    r: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    /// Returns the x-coordinate of the center
    pub fn cx(&self) -> f64 {
        self.cx
    }

    /// Returns the y-coordinate of the center
    pub fn cy(&self) -> f64 {
        self.cy
    }

    /// Returns the radius
    pub fn r(&self) -> f64 {
        self.r
    }
}

/// One node's payload in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// The viewport root (`svg`)
    Root(Viewport),
    /// A circle (`circle`)
    Circle(Circle),
}

impl Element {
    /// Returns the kind of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Root(_) => ElementKind::Svg,
            Element::Circle(_) => ElementKind::Circle,
        }
    }

    /// Returns true if this element may own children.
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Borrow the viewport if this element is the root variant.
    pub fn as_viewport(&self) -> Option<&Viewport> {
        match self {
            Element::Root(viewport) => Some(viewport),
            _ => None,
        }
    }

    /// Borrow the circle if this element is a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Element::Circle(circle) => Some(circle),
            _ => None,
        }
    }
}

impl From<Viewport> for Element {
    fn from(viewport: Viewport) -> Self {
        Element::Root(viewport)
    }
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Element::Circle(circle)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Root(viewport) => write!(f, "svg viewBox=\"{}\"", viewport.view_box()),
            Element::Circle(circle) => write!(
                f,
                "circle cx={} cy={} r={}",
                circle.cx(),
                circle.cy(),
                circle.r()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(ElementKind::from_tag("svg"), Some(ElementKind::Svg));
        assert_eq!(ElementKind::from_tag("circle"), Some(ElementKind::Circle));
        assert_eq!(ElementKind::from_tag("rect"), None);
        assert_eq!(ElementKind::from_tag("SVG"), None);
    }

    #[test]
    fn test_kind_tag_name_roundtrip() {
        for kind in [ElementKind::Svg, ElementKind::Circle] {
            assert_eq!(ElementKind::from_tag(kind.tag_name()), Some(kind));
        }
    }

    #[test]
    fn test_container_capability() {
        assert!(ElementKind::Svg.is_container());
        assert!(!ElementKind::Circle.is_container());
        assert!(Element::Root(Viewport::default()).is_container());
        assert!(!Element::Circle(Circle::default()).is_container());
    }

    #[test]
    fn test_viewport_aspect_ratio() {
        let viewport = Viewport::new(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_approx_eq!(f64, viewport.aspect_ratio().unwrap(), 0.5);

        let flat = Viewport::new(Rect::new(0.0, 0.0, 0.0, 100.0));
        assert!(flat.aspect_ratio().is_none());
    }

    #[test]
    fn test_viewport_scale() {
        let viewport = Viewport::new(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_approx_eq!(f64, viewport.scale(50.0).unwrap(), 0.5);
        assert_approx_eq!(f64, viewport.scale(300.0).unwrap(), 3.0);

        let empty = Viewport::new(Rect::default());
        assert!(empty.scale(10.0).is_none());
    }

    #[test]
    fn test_viewport_default_uses_canonical_view_box() {
        assert_eq!(Viewport::default().view_box(), Rect::DEFAULT_VIEW_BOX);
    }

    #[test]
    fn test_element_accessors() {
        let element = Element::from(Circle::new(10.0, 20.0, 5.0));
        assert_eq!(element.kind(), ElementKind::Circle);
        assert!(element.as_viewport().is_none());

        let circle = element.as_circle().unwrap();
        assert_eq!(circle.cx(), 10.0);
        assert_eq!(circle.cy(), 20.0);
        assert_eq!(circle.r(), 5.0);
    }

    #[test]
    fn test_element_display() {
        let root = Element::Root(Viewport::new(Rect::new(0.0, 0.0, 200.0, 100.0)));
        assert_eq!(root.to_string(), "svg viewBox=\"0 0 200 100\"");

        let circle = Element::Circle(Circle::new(10.0, 20.0, 5.0));
        assert_eq!(circle.to_string(), "circle cx=10 cy=20 r=5");
    }
}

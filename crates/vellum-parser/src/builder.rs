//! Stack-based tree builder driven by start and end tag events.
//!
//! The [`TreeBuilder`] owns a stack of open entries. Recognized tags become
//! elements that are appended to the nearest open element and pushed; end
//! tags pop the stack in exact reverse order. Unsupported tags push an opaque
//! marker so their end tags pair up without touching the tree.
//!
//! # States
//!
//! ```text
//!   Idle ──start──► Building ──root end──► Done
//! ```
//!
//! - [`BuilderState::Idle`] - no event has been consumed yet
//! - [`BuilderState::Building`] - at least one event consumed, root not closed
//! - [`BuilderState::Done`] - the root element has been closed
//!
//! A builder that stops receiving events while `Building` has produced no
//! usable result; [`TreeBuilder::finish`] reports it as unterminated.

use log::{debug, info, trace};

use vellum_core::{
    document::{Document, DocumentDraft, NodeId, TreeError},
    element::{Element, ElementKind},
    policy::UnsupportedTagPolicy,
};

use crate::{
    attribute::Attributes,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Result},
    registry,
    span::Span,
};

/// Configuration for tree building.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// What happens to recognized elements inside unsupported tags
    pub unsupported_tags: UnsupportedTagPolicy,
}

impl ParseConfig {
    /// Create a new ParseConfig with the given unsupported tag policy
    pub fn new(unsupported_tags: UnsupportedTagPolicy) -> Self {
        Self { unsupported_tags }
    }
}

/// Lifecycle state of a [`TreeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Idle,
    Building,
    Done,
}

/// One entry of the open-element stack.
#[derive(Debug)]
enum OpenEntry {
    /// A recognized element that is part of the tree
    Element {
        id: NodeId,
        kind: ElementKind,
        span: Span,
    },
    /// An unsupported tag, or a recognized tag dropped inside one
    Opaque { name: String, span: Span },
}

impl OpenEntry {
    fn name(&self) -> &str {
        match self {
            OpenEntry::Element { kind, .. } => kind.tag_name(),
            OpenEntry::Opaque { name, .. } => name,
        }
    }

    fn span(&self) -> Span {
        match self {
            OpenEntry::Element { span, .. } | OpenEntry::Opaque { span, .. } => *span,
        }
    }

    fn is_opaque(&self) -> bool {
        matches!(self, OpenEntry::Opaque { .. })
    }
}

/// Where a recognized start tag ends up.
enum Placement {
    /// The first element of the document
    Root,
    /// A child of an open element
    Child {
        parent: NodeId,
        parent_kind: ElementKind,
        parent_span: Span,
    },
    /// Inside a subtree that is being discarded
    Dropped,
}

/// Builds a [`Document`] from a sequence of tag events.
///
/// # Example
///
/// ```
/// # use vellum_parser::{Attributes, ParseConfig, Span, TreeBuilder};
/// let mut builder = TreeBuilder::new(ParseConfig::default());
///
/// let svg: Attributes = [("viewBox", "0 0 200 100")].into_iter().collect();
/// let circle: Attributes = [("cx", "10"), ("cy", "20"), ("r", "5")].into_iter().collect();
///
/// builder.start_element("svg", &svg, Span::new(0..26)).unwrap();
/// builder.start_element("circle", &circle, Span::new(26..57)).unwrap();
/// builder.end_element("circle", Span::new(26..57)).unwrap();
/// builder.end_element("svg", Span::new(57..63)).unwrap();
///
/// let (document, warnings) = builder.finish().unwrap();
/// assert_eq!(document.root().children().count(), 1);
/// assert!(warnings.is_empty());
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    config: ParseConfig,
    state: BuilderState,
    draft: Option<DocumentDraft>,
    stack: Vec<OpenEntry>,
    diagnostics: DiagnosticCollector,
    pushes: usize,
    pops: usize,
}

impl TreeBuilder {
    /// Create an idle builder.
    pub fn new(config: ParseConfig) -> Self {
        Self {
            config,
            state: BuilderState::Idle,
            draft: None,
            stack: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
            pushes: 0,
            pops: 0,
        }
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Number of entries on the open stack, opaque markers included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of elements pushed onto the stack so far.
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Number of elements popped off the stack so far.
    pub fn pops(&self) -> usize {
        self.pops
    }

    /// Warnings emitted so far.
    pub fn warnings(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    /// Consume a start tag.
    ///
    /// # Errors
    ///
    /// Returns a structural error if the element cannot be placed in the tree.
    /// The event is rejected and the builder should be discarded with
    /// [`abort`](Self::abort).
    pub fn start_element(&mut self, name: &str, attributes: &Attributes, span: Span) -> Result<()> {
        if self.state == BuilderState::Done {
            return Err(Diagnostic::error(format!(
                "element `{name}` after the root element"
            ))
            .with_code(ErrorCode::E105)
            .with_label(span, "unexpected element")
            .with_help("a document has exactly one root `svg` element"));
        }
        self.state = BuilderState::Building;

        let Some(kind) = ElementKind::from_tag(name) else {
            self.diagnostics.emit(
                Diagnostic::warning(format!("unsupported tag `{name}`"))
                    .with_code(ErrorCode::E300)
                    .with_label(span, "skipped")
                    .with_help(format!(
                        "supported tags are: {}",
                        registry::vocabulary()
                    )),
            );
            self.push_opaque(name, span);
            return Ok(());
        };

        match self.placement() {
            Placement::Dropped => {
                self.diagnostics.emit(
                    Diagnostic::warning(format!(
                        "`{kind}` inside an unsupported tag was dropped"
                    ))
                    .with_code(ErrorCode::E301)
                    .with_label(span, "dropped"),
                );
                self.push_opaque(name, span);
                Ok(())
            }
            Placement::Root => self.start_root(kind, attributes, span),
            Placement::Child {
                parent,
                parent_kind,
                parent_span,
            } => {
                if kind == ElementKind::Svg {
                    return Err(Diagnostic::error("nested `svg` element")
                        .with_code(ErrorCode::E106)
                        .with_label(span, "nested viewport")
                        .with_secondary_label(parent_span, format!("inside this `{parent_kind}`"))
                        .with_help("only the document root may be an `svg` element"));
                }
                if !parent_kind.is_container() {
                    return Err(tree_error(
                        TreeError::NotContainer(parent_kind),
                        kind,
                        span,
                        parent_span,
                    ));
                }

                let element = registry::build(kind, attributes, span, &mut self.diagnostics);
                let draft = self.draft.as_mut().ok_or_else(|| {
                    Diagnostic::error(format!("`{kind}` has no enclosing root element"))
                        .with_code(ErrorCode::E104)
                        .with_label(span, "outside the document")
                })?;
                let id = draft
                    .append(parent, element)
                    .map_err(|err| tree_error(err, kind, span, parent_span))?;

                self.push_element(id, kind, span);
                Ok(())
            }
        }
    }

    /// Consume an end tag.
    ///
    /// # Errors
    ///
    /// Returns a structural error if the end tag does not close the most
    /// recently opened entry.
    pub fn end_element(&mut self, name: &str, span: Span) -> Result<()> {
        let Some(top) = self.stack.last() else {
            let diag = Diagnostic::error(format!("unexpected end tag `{name}`"))
                .with_code(ErrorCode::E101)
                .with_label(span, "no open element to close");
            return Err(if self.state == BuilderState::Done {
                diag.with_help("the root element is already closed")
            } else {
                diag
            });
        };

        if top.name() != name {
            return Err(Diagnostic::error(format!("mismatched end tag `{name}`"))
                .with_code(ErrorCode::E100)
                .with_label(span, format!("expected `</{}>`", top.name()))
                .with_secondary_label(top.span(), format!("`{}` opened here", top.name()))
                .with_help("close elements in the reverse order they were opened"));
        }

        let Some(entry) = self.stack.pop() else {
            return Ok(());
        };

        if let OpenEntry::Element { id, kind, .. } = entry {
            if let Some(draft) = self.draft.as_mut() {
                draft
                    .close(id)
                    .map_err(|err| tree_error(err, kind, span, span))?;
            }
            self.pops += 1;
            debug!(tag = kind.tag_name(), depth = self.stack.len(); "Closed element");

            if id == NodeId::ROOT {
                self.state = BuilderState::Done;
                info!(elements = self.pushes; "Root element closed");
            }
        }
        Ok(())
    }

    /// Finish building after the end of the input.
    ///
    /// Returns the document together with the warnings collected on the way.
    ///
    /// # Errors
    ///
    /// Fails if elements are still open or no root element was produced.
    pub fn finish(self) -> std::result::Result<(Document, Vec<Diagnostic>), ParseError> {
        if let Some(open) = self.stack.last() {
            let diag = Diagnostic::error(format!(
                "unterminated document: `{}` is never closed",
                open.name()
            ))
            .with_code(ErrorCode::E103)
            .with_label(open.span(), "opened here")
            .with_help(format!("add the missing `</{}>`", open.name()));
            return Err(self.abort(diag));
        }

        let Some(draft) = self.draft else {
            let diag = Diagnostic::error("document has no root `svg` element")
                .with_code(ErrorCode::E107)
                .with_help("wrap the content in an `<svg>` element");
            return Err(self.diagnostics.abort(diag));
        };

        let warnings = self.diagnostics.finish()?;
        let document = draft.finish();
        trace!(nodes = document.len(); "Document finished");
        Ok((document, warnings))
    }

    /// Abandon the build with a fatal diagnostic.
    ///
    /// No partial tree is returned; the error carries the fatal diagnostic
    /// followed by every warning collected so far.
    pub fn abort(self, fatal: Diagnostic) -> ParseError {
        self.diagnostics.abort(fatal)
    }

    fn placement(&self) -> Placement {
        let parent = self.stack.iter().rev().find_map(|entry| match entry {
            OpenEntry::Element { id, kind, span } => Some((*id, *kind, *span)),
            OpenEntry::Opaque { .. } => None,
        });

        match parent {
            None if self.stack.is_empty() => Placement::Root,
            // Opaque content outside the root is never hoisted.
            None => Placement::Dropped,
            Some(_)
                if self.config.unsupported_tags == UnsupportedTagPolicy::Drop
                    && self.stack.iter().any(OpenEntry::is_opaque) =>
            {
                Placement::Dropped
            }
            Some((parent, parent_kind, parent_span)) => Placement::Child {
                parent,
                parent_kind,
                parent_span,
            },
        }
    }

    fn start_root(&mut self, kind: ElementKind, attributes: &Attributes, span: Span) -> Result<()> {
        let invalid_root = || {
            Diagnostic::error(format!("document root must be `svg`, found `{kind}`"))
                .with_code(ErrorCode::E104)
                .with_label(span, "invalid root element")
                .with_help("wrap the content in an `<svg>` element")
        };
        if kind != ElementKind::Svg || self.draft.is_some() {
            return Err(invalid_root());
        }

        let Element::Root(viewport) =
            registry::build(kind, attributes, span, &mut self.diagnostics)
        else {
            return Err(invalid_root());
        };

        self.draft = Some(DocumentDraft::new(viewport));
        self.push_element(NodeId::ROOT, kind, span);
        Ok(())
    }

    fn push_element(&mut self, id: NodeId, kind: ElementKind, span: Span) {
        self.stack.push(OpenEntry::Element { id, kind, span });
        self.pushes += 1;
        debug!(tag = kind.tag_name(), depth = self.stack.len(); "Opened element");
    }

    fn push_opaque(&mut self, name: &str, span: Span) {
        self.stack.push(OpenEntry::Opaque {
            name: name.to_string(),
            span,
        });
    }
}

/// Turn a rejected append into a structural diagnostic.
fn tree_error(err: TreeError, kind: ElementKind, span: Span, parent_span: Span) -> Diagnostic {
    let diag = Diagnostic::error(format!("cannot place `{kind}` here: {err}"));
    match err {
        TreeError::NotContainer(parent_kind) | TreeError::Sealed(parent_kind) => diag
            .with_code(ErrorCode::E102)
            .with_label(span, "child element")
            .with_secondary_label(parent_span, format!("inside this `{parent_kind}`"))
            .with_help(format!("close the `{parent_kind}` before opening `{kind}`")),
        TreeError::NestedRoot => diag
            .with_code(ErrorCode::E106)
            .with_label(span, "nested viewport"),
        TreeError::UnknownNode(_) => diag.with_code(ErrorCode::E104).with_label(span, "here"),
    }
}

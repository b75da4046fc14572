//! Arena-backed element tree.
//!
//! A document is built through a [`DocumentDraft`] and frozen into a
//! read-only [`Document`]. Nodes live in a single vector owned by the
//! document; a node's children are an ordered list of [`NodeId`]s and its
//! parent is a plain index back into the same arena. Parent links never own
//! anything, so dropping the document drops the whole tree at once.
//!
//! # Invariants
//!
//! - Node `0` is the root and is always an [`Element::Root`].
//! - Every other node appears in exactly one children list, and its parent
//!   link points at the node that owns that list.
//! - A parent's id is always smaller than its children's ids, so the tree
//!   cannot contain cycles.
//! - Children are kept in insertion order, which is document order.

use log::trace;
use thiserror::Error;

use crate::element::{Element, ElementKind, Viewport};

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The id of the root node in every document.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the position of this node in document order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors raised when an append would break the tree invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("`{0}` elements cannot have children")]
    NotContainer(ElementKind),

    #[error("`{0}` element is already closed")]
    Sealed(ElementKind),

    #[error("the root element cannot be nested")]
    NestedRoot,

    #[error("node {0:?} does not belong to this document")]
    UnknownNode(NodeId),
}

#[derive(Debug, Clone)]
struct NodeData {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(element: Element, parent: Option<NodeId>) -> Self {
        Self {
            element,
            parent,
            children: Vec::new(),
        }
    }
}

/// A document under construction.
///
/// Nodes may only be appended to open container nodes. Once a node has
/// been [closed](DocumentDraft::close) its children list is frozen.
#[derive(Debug)]
pub struct DocumentDraft {
    nodes: Vec<NodeData>,
    sealed: Vec<bool>,
}

impl DocumentDraft {
    /// Create a draft whose root is the given viewport.
    pub fn new(root: Viewport) -> Self {
        Self {
            nodes: vec![NodeData::new(Element::Root(root), None)],
            sealed: vec![false],
        }
    }

    /// Append `element` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if `parent` is unknown, closed or not a
    /// container, or if `element` is a root.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, TreeError> {
        let parent_node = self
            .nodes
            .get(parent.0)
            .ok_or(TreeError::UnknownNode(parent))?;
        let parent_kind = parent_node.element.kind();

        if matches!(element, Element::Root(_)) {
            return Err(TreeError::NestedRoot);
        }
        if !parent_kind.is_container() {
            return Err(TreeError::NotContainer(parent_kind));
        }
        if self.sealed[parent.0] {
            return Err(TreeError::Sealed(parent_kind));
        }

        let id = NodeId(self.nodes.len());
        trace!(parent = parent.0, child = id.0, kind = element.kind().tag_name(); "Appending node");

        self.nodes.push(NodeData::new(element, Some(parent)));
        self.sealed.push(false);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Close a node so that no further children can be appended to it.
    pub fn close(&mut self, id: NodeId) -> Result<(), TreeError> {
        let sealed = self.sealed.get_mut(id.0).ok_or(TreeError::UnknownNode(id))?;
        *sealed = true;
        Ok(())
    }

    /// Returns true if the node has been closed.
    pub fn is_closed(&self, id: NodeId) -> bool {
        self.sealed.get(id.0).copied().unwrap_or(false)
    }

    /// Returns the kind of the node, if it exists.
    pub fn kind(&self, id: NodeId) -> Option<ElementKind> {
        self.nodes.get(id.0).map(|node| node.element.kind())
    }

    /// Returns the number of nodes in the draft.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A draft always holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the draft into a read-only document.
    pub fn finish(self) -> Document {
        Document { nodes: self.nodes }
    }
}

/// A finished, read-only element tree.
///
/// # Examples
///
/// ```
/// # use vellum_core::document::{DocumentDraft, NodeId};
/// # use vellum_core::element::{Circle, Element, Viewport};
/// let mut draft = DocumentDraft::new(Viewport::default());
/// let circle = draft
///     .append(NodeId::ROOT, Element::Circle(Circle::new(1.0, 2.0, 3.0)))
///     .unwrap();
/// let document = draft.finish();
///
/// let node = document.get(circle).unwrap();
/// assert!(node.parent().unwrap().is_root());
/// assert_eq!(document.root().children().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Returns the root node.
    pub fn root(&self) -> Node<'_> {
        Node {
            document: self,
            id: NodeId::ROOT,
        }
    }

    /// Returns the root viewport.
    pub fn viewport(&self) -> &Viewport {
        match &self.nodes[NodeId::ROOT.0].element {
            Element::Root(viewport) => viewport,
            // Only `DocumentDraft::new` creates node 0.
            _ => unreachable!("document root is always a viewport"),
        }
    }

    /// Returns the node with the given id, if it belongs to this document.
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then_some(Node { document: self, id })
    }

    /// Returns the total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in document (pre-order) order.
    pub fn descendants(&self) -> impl Iterator<Item = Node<'_>> {
        let mut stack = vec![NodeId::ROOT];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
            Some(Node { document: self, id })
        })
    }
}

/// A borrowed handle to one node of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    document: &'a Document,
    id: NodeId,
}

impl<'a> Node<'a> {
    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the element stored in this node.
    pub fn element(&self) -> &'a Element {
        &self.data().element
    }

    /// Returns the element kind of this node.
    pub fn kind(&self) -> ElementKind {
        self.data().element.kind()
    }

    /// Returns the parent node, or `None` for the root.
    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|id| Node {
            document: self.document,
            id,
        })
    }

    /// Iterate over the children of this node in document order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let document = self.document;
        self.data()
            .children
            .iter()
            .map(move |&id| Node { document, id })
    }

    /// Returns true if this node is the document root.
    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    /// Number of ancestors between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.data().parent;
        while let Some(id) = current {
            depth += 1;
            current = self.document.nodes[id.0].parent;
        }
        depth
    }

    fn data(&self) -> &'a NodeData {
        &self.document.nodes[self.id.0]
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

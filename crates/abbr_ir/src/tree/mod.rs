//! Abbreviation tree.
//!
//! A flat arena of nodes addressed by [`NodeId`]. Ownership flows strictly
//! from the root to the children: each node owns the ordered list of its
//! children's IDs and keeps a non-owning `parent` link back. Everything
//! else (first/last child, sibling links, child index) is derived from the
//! `children` lists on demand, so there is no redundant state to keep in
//! sync.
//!
//! Slot 0 is always the synthetic root: it has no name, no value and no
//! parent. Nodes of the abbreviation proper hang below it.

mod builder;
#[cfg(test)]
mod tests;

pub use builder::NodeSpec;

use crate::NodeId;
use bitflags::bitflags;

bitflags! {
    /// Structural flags of an abbreviation node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u8 {
        /// Node holds text only (`{text}` in an abbreviation), no element name.
        const TEXT_ONLY = 1 << 0;
        /// Pure grouping node (`(a+b)`); produces no output of its own.
        const GROUP = 1 << 1;
        /// Element is self-closing (`img/`).
        const SELF_CLOSING = 1 << 2;
    }
}

bitflags! {
    /// Options attached to an attribute.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct AttrFlags: u8 {
        /// Explicitly boolean attribute (`[disabled.]`).
        const BOOLEAN = 1 << 0;
        /// Implied attribute: dropped from output unless it gets a value.
        const IMPLIED = 1 << 1;
    }
}

/// A single element attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    /// Attribute value; may embed field markers. `None` means "no value given".
    pub value: Option<String>,
    pub flags: AttrFlags,
}

impl Attribute {
    /// Attribute with a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: Some(value.into()),
            flags: AttrFlags::empty(),
        }
    }

    /// Attribute without a value (`a[href]`).
    pub fn empty(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: None,
            flags: AttrFlags::empty(),
        }
    }

    /// Replace the attribute flags.
    #[must_use]
    pub fn with_flags(mut self, flags: AttrFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.flags.contains(AttrFlags::BOOLEAN)
    }

    #[inline]
    pub fn is_implied(&self) -> bool {
        self.flags.contains(AttrFlags::IMPLIED)
    }
}

/// Payload of an abbreviation node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeData {
    /// Element name, `None` for text-only and group nodes.
    pub name: Option<String>,
    /// Literal text content, may embed field markers.
    pub value: Option<String>,
    pub attributes: Vec<Attribute>,
    pub flags: NodeFlags,
}

impl NodeData {
    /// Element node with the given name.
    pub fn element(name: impl Into<String>) -> Self {
        NodeData {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Text-only node.
    pub fn text(value: impl Into<String>) -> Self {
        NodeData {
            value: Some(value.into()),
            flags: NodeFlags::TEXT_ONLY,
            ..Default::default()
        }
    }

    /// Grouping node.
    pub fn group() -> Self {
        NodeData {
            flags: NodeFlags::GROUP,
            ..Default::default()
        }
    }
}

/// Arena slot: node payload plus its structural links.
///
/// Public so hosts can hand over a tree produced elsewhere through
/// [`AbbrTree::from_raw`], which validates the links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawNode {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Tree structure violations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),
    #[error("tree has no root slot")]
    MissingRoot,
    #[error("root node must not have a parent (found {0})")]
    RootHasParent(NodeId),
    #[error("node {child} is listed under {listed} but its parent link is {actual:?}")]
    ParentMismatch {
        child: NodeId,
        listed: NodeId,
        actual: Option<NodeId>,
    },
    #[error("node {0} is listed as a child more than once")]
    DuplicateChild(NodeId),
    #[error("node {0} is not reachable from the root")]
    Detached(NodeId),
}

/// Parsed abbreviation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbbrTree {
    nodes: Vec<RawNode>,
}

impl Default for AbbrTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AbbrTree {
    /// Create a tree holding only the synthetic root.
    pub fn new() -> Self {
        AbbrTree {
            nodes: vec![RawNode::default()],
        }
    }

    /// Build a tree whose root children are the given specs, in order.
    pub fn from_specs(specs: impl IntoIterator<Item = NodeSpec>) -> Self {
        let mut tree = Self::new();
        for spec in specs {
            tree.attach(NodeId::ROOT, spec);
        }
        tree
    }

    /// Adopt arena slots produced elsewhere. Slot 0 is the root.
    pub fn from_raw(nodes: Vec<RawNode>) -> Result<Self, TreeError> {
        let tree = AbbrTree { nodes };
        tree.validate()?;
        Ok(tree)
    }

    /// Append a node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId, TreeError> {
        if parent.index() >= self.nodes.len() {
            return Err(TreeError::UnknownNode(parent));
        }
        Ok(self.push(parent, data))
    }

    /// Append a whole spec subtree as the last child of `parent`.
    pub fn append_spec(&mut self, parent: NodeId, spec: NodeSpec) -> Result<NodeId, TreeError> {
        if parent.index() >= self.nodes.len() {
            return Err(TreeError::UnknownNode(parent));
        }
        Ok(self.attach(parent, spec))
    }

    fn attach(&mut self, parent: NodeId, spec: NodeSpec) -> NodeId {
        let (data, children) = spec.into_parts();
        let id = self.push(parent, data);
        for child in children {
            self.attach(id, child);
        }
        id
    }

    fn push(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let raw = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        let id = NodeId::new(raw);
        self.nodes.push(RawNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// The synthetic root node.
    #[inline]
    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// Look up a node by ID.
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then_some(Node { tree: self, id })
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.first().is_none_or(|root| root.children.is_empty())
    }

    /// Pre-order walk over every node below the root.
    ///
    /// `level` is 0 for children of the root.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(Node<'a>, usize)) {
        let mut stack: Vec<(NodeId, usize)> = self
            .raw(NodeId::ROOT)
            .children
            .iter()
            .rev()
            .map(|&id| (id, 0))
            .collect();

        while let Some((id, level)) = stack.pop() {
            f(Node { tree: self, id }, level);
            stack.extend(self.raw(id).children.iter().rev().map(|&c| (c, level + 1)));
        }
    }

    /// Check that parent links and children lists agree.
    pub fn validate(&self) -> Result<(), TreeError> {
        let root = self.nodes.first().ok_or(TreeError::MissingRoot)?;
        if let Some(parent) = root.parent {
            return Err(TreeError::RootHasParent(parent));
        }

        let mut listed_once = vec![false; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate() {
            let listed = NodeId::new(u32::try_from(index).unwrap_or(u32::MAX));
            for &child in &node.children {
                let Some(slot) = self.nodes.get(child.index()) else {
                    return Err(TreeError::UnknownNode(child));
                };
                if child.is_root() || listed_once[child.index()] {
                    return Err(TreeError::DuplicateChild(child));
                }
                listed_once[child.index()] = true;
                if slot.parent != Some(listed) {
                    return Err(TreeError::ParentMismatch {
                        child,
                        listed,
                        actual: slot.parent,
                    });
                }
            }
        }

        // every node is listed at most once, so the walk terminates even
        // when some slots link into a cycle of their own
        let mut reached = vec![false; self.nodes.len()];
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            reached[id.index()] = true;
            stack.extend(self.raw(id).children.iter().copied());
        }

        match reached.iter().position(|reached| !reached) {
            Some(index) => Err(TreeError::Detached(NodeId::new(
                u32::try_from(index).unwrap_or(u32::MAX),
            ))),
            None => Ok(()),
        }
    }

    #[inline]
    fn raw(&self, id: NodeId) -> &RawNode {
        &self.nodes[id.index()]
    }
}

/// Borrowed handle to a node, with derived navigation.
#[derive(Copy, Clone)]
pub struct Node<'a> {
    tree: &'a AbbrTree,
    id: NodeId,
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl Eq for Node<'_> {}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

impl<'a> Node<'a> {
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn tree(self) -> &'a AbbrTree {
        self.tree
    }

    #[inline]
    fn raw(self) -> &'a RawNode {
        self.tree.raw(self.id)
    }

    #[inline]
    fn at(self, id: NodeId) -> Node<'a> {
        Node {
            tree: self.tree,
            id,
        }
    }

    pub fn data(self) -> &'a NodeData {
        &self.raw().data
    }

    pub fn name(self) -> Option<&'a str> {
        self.raw().data.name.as_deref()
    }

    pub fn value(self) -> Option<&'a str> {
        self.raw().data.value.as_deref()
    }

    pub fn attributes(self) -> &'a [Attribute] {
        &self.raw().data.attributes
    }

    pub fn is_text_only(self) -> bool {
        self.raw().data.flags.contains(NodeFlags::TEXT_ONLY)
    }

    pub fn is_group(self) -> bool {
        self.raw().data.flags.contains(NodeFlags::GROUP)
    }

    pub fn is_self_closing(self) -> bool {
        self.raw().data.flags.contains(NodeFlags::SELF_CLOSING)
    }

    pub fn is_root(self) -> bool {
        self.raw().parent.is_none()
    }

    pub fn parent(self) -> Option<Node<'a>> {
        self.raw().parent.map(|id| self.at(id))
    }

    pub fn children(self) -> impl DoubleEndedIterator<Item = Node<'a>> + ExactSizeIterator + 'a {
        let tree = self.tree;
        self.raw()
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    pub fn child_count(self) -> usize {
        self.raw().children.len()
    }

    pub fn has_children(self) -> bool {
        !self.raw().children.is_empty()
    }

    pub fn first_child(self) -> Option<Node<'a>> {
        self.raw().children.first().map(|&id| self.at(id))
    }

    pub fn last_child(self) -> Option<Node<'a>> {
        self.raw().children.last().map(|&id| self.at(id))
    }

    /// Position among the parent's children; `None` for the root.
    pub fn child_index(self) -> Option<usize> {
        let siblings = &self.parent()?.raw().children;
        siblings.iter().position(|&id| id == self.id)
    }

    pub fn next_sibling(self) -> Option<Node<'a>> {
        let parent = self.parent()?;
        let index = self.child_index()?;
        parent.raw().children.get(index + 1).map(|&id| self.at(id))
    }

    pub fn previous_sibling(self) -> Option<Node<'a>> {
        let parent = self.parent()?;
        let index = self.child_index()?.checked_sub(1)?;
        parent.raw().children.get(index).map(|&id| self.at(id))
    }

    pub fn is_first_child(self) -> bool {
        self.parent()
            .and_then(Node::first_child)
            .is_some_and(|first| first.id == self.id)
    }

    pub fn is_last_child(self) -> bool {
        self.parent()
            .and_then(Node::last_child)
            .is_some_and(|last| last.id == self.id)
    }

    /// Ancestors from the parent up to (and including) the root.
    pub fn ancestors(self) -> impl Iterator<Item = Node<'a>> + 'a {
        std::iter::successors(self.parent(), |node| node.parent())
    }
}

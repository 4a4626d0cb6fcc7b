//! Owned, nested description of a subtree.
//!
//! `NodeSpec` is the ergonomic way to assemble trees in code: build the
//! nested structure, then flatten it with [`AbbrTree::from_specs`] or
//! [`AbbrTree::append_spec`].
//!
//! ```ignore
//! // div>p*3
//! let tree = AbbrTree::from_specs([
//!     NodeSpec::element("div").children(NodeSpec::element("p").repeat(3)),
//! ]);
//! ```
//!
//! [`AbbrTree::from_specs`]: super::AbbrTree::from_specs
//! [`AbbrTree::append_spec`]: super::AbbrTree::append_spec

use super::{AttrFlags, Attribute, NodeData, NodeFlags};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeSpec {
    data: NodeData,
    children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn element(name: impl Into<String>) -> Self {
        NodeSpec::from(NodeData::element(name))
    }

    pub fn text(value: impl Into<String>) -> Self {
        NodeSpec::from(NodeData::text(value))
    }

    pub fn group() -> Self {
        NodeSpec::from(NodeData::group())
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.data.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.attributes.push(Attribute::new(name, value));
        self
    }

    /// Attribute with no value (`a[href]`).
    #[must_use]
    pub fn empty_attr(mut self, name: impl Into<String>) -> Self {
        self.data.attributes.push(Attribute::empty(name));
        self
    }

    #[must_use]
    pub fn boolean_attr(mut self, name: impl Into<String>) -> Self {
        self.data
            .attributes
            .push(Attribute::empty(name).with_flags(AttrFlags::BOOLEAN));
        self
    }

    #[must_use]
    pub fn implied_attr(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        let attr = Attribute {
            name: name.into(),
            value,
            flags: AttrFlags::IMPLIED,
        };
        self.data.attributes.push(attr);
        self
    }

    #[must_use]
    pub fn self_closing(mut self) -> Self {
        self.data.flags |= NodeFlags::SELF_CLOSING;
        self
    }

    #[must_use]
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.children.extend(children);
        self
    }

    /// `count` copies of this spec, as produced by the `*N` operator.
    pub fn repeat(self, count: usize) -> Vec<NodeSpec> {
        vec![self; count]
    }

    pub(super) fn into_parts(self) -> (NodeData, Vec<NodeSpec>) {
        (self.data, self.children)
    }
}

impl From<NodeData> for NodeSpec {
    fn from(data: NodeData) -> Self {
        NodeSpec {
            data,
            children: Vec::new(),
        }
    }
}

//! Node IDs for the flat abbreviation tree.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Index into the node arena of an [`AbbrTree`](crate::AbbrTree).
///
/// Used as the identity key for per-node data computed outside the tree
/// (format descriptors, for instance), so passes never need to mutate
/// the tree itself.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The synthetic root every tree starts with.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the root ID.
    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl Hash for NodeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "NodeId::ROOT")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

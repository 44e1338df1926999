//! Node.

use core::fmt;

use crate::cursor::ChildCursor;
use crate::forest::Forest;
use crate::hierarchy::Neighbors;
use crate::NodeId;

/// Immutable reference to a node.
///
/// This type guarantees that the node ID is present in the internal
/// storage of the forest and is not erased yet.
pub struct Node<'a, T> {
    /// Forest.
    forest: &'a Forest<T>,
    /// Node ID.
    id: NodeId,
}

impl<'a, T> Node<'a, T> {
    /// Creates a new `Node` object.
    #[must_use]
    pub(super) fn new(forest: &'a Forest<T>, id: NodeId) -> Option<Self> {
        if !forest.is_alive(id) {
            return None;
        }
        Some(Self { forest, id })
    }

    /// Returns the neighbors of the node.
    #[inline]
    fn neighbors(&self) -> &'a Neighbors {
        self.forest
            .hierarchy()
            .neighbors(self.id)
            .expect("[validity] the node has been checked to be alive")
    }

    /// Returns a proxy to another node of the same forest.
    fn sibling_proxy(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| {
            Self::new(self.forest, id).expect("[consistency] neighbors of a live node must be alive")
        })
    }

    /// Returns the node ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the position of the node in its sibling chain.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> ChildCursor {
        ChildCursor::at(self.id)
    }

    /// Returns a reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &'a T {
        self.forest
            .data(self.id)
            .expect("[validity] the node has been checked to be alive")
    }

    /// Returns the parent node, or `None` for a toplevel node.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.sibling_proxy(self.neighbors().parent().node())
    }

    /// Returns the next sibling node.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Self> {
        self.sibling_proxy(self.neighbors().next_sibling())
    }

    /// Returns the previous sibling node.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<Self> {
        self.sibling_proxy(self.neighbors().prev_sibling())
    }

    /// Returns the first child node.
    #[must_use]
    pub fn first_child(&self) -> Option<Self> {
        self.sibling_proxy(self.neighbors().first_child())
    }

    /// Returns the last child node.
    #[must_use]
    pub fn last_child(&self) -> Option<Self> {
        self.sibling_proxy(self.neighbors().last_child())
    }

    /// Returns the number of ancestors of the node.
    ///
    /// Toplevel nodes have depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.forest.ancestors(self.cursor()).count() - 1
    }
}

impl<T> Clone for Node<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("data", self.data())
            .finish()
    }
}

//! Walk from a node up to the toplevel.

use crate::cursor::{ChildCursor, Cursor};
use crate::forest::Forest;
use crate::NodeId;

/// Forward cursor visiting a node, its parent, its grandparent, and so on.
///
/// The walk ends after the toplevel ancestor; the root anchor is never
/// visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HierarchyCursor(Option<NodeId>);

impl HierarchyCursor {
    /// The end of every hierarchy walk.
    pub(crate) const END: Self = Self(None);

    /// Creates a cursor starting at the node.
    #[inline]
    #[must_use]
    pub(crate) fn start(node: Option<NodeId>) -> Self {
        Self(node)
    }
}

impl Cursor for HierarchyCursor {
    #[inline]
    fn node(&self) -> Option<NodeId> {
        self.0
    }

    fn advance<T>(&mut self, forest: &Forest<T>) {
        let id = self
            .0
            .expect("[precondition] cannot advance an end position");
        self.0 = forest.hierarchy().live(id).parent().node();
    }

    #[inline]
    fn sibling_current(&self) -> ChildCursor {
        self.0.map_or_else(ChildCursor::parent_end, ChildCursor::at)
    }
}

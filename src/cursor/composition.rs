//! Enter/leave walk.

use crate::cursor::{ChildCursor, Cursor};
use crate::forest::Forest;
use crate::hierarchy::{Hierarchy, ParentLink};
use crate::NodeId;

/// Traversal state of a composition walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalState {
    /// The node is entered, before any of its descendants.
    Enter,
    /// The node is left, after all of its descendants.
    Leave,
}

/// Forward cursor for the enter/leave walk.
///
/// Every node in the walked subtree is visited twice: once with
/// [`TraversalState::Enter`] and once with [`TraversalState::Leave`].
///
/// The walk is not bounded by itself: leaving the last child of a node goes
/// on to leave the node, and leaving a node with a next sibling goes on to
/// enter the sibling. A subtree range is bounded by the position right
/// after leaving the subtree root (see [`Cursor::composition_end`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositionCursor {
    /// Current node and state, or `None` for the end position.
    current: Option<(NodeId, TraversalState)>,
}

impl CompositionCursor {
    /// The end position of the walk over the whole forest.
    pub(crate) const END: Self = Self { current: None };

    /// Creates a cursor entering the node.
    #[inline]
    #[must_use]
    pub(crate) fn begin_at(node: Option<NodeId>) -> Self {
        Self {
            current: node.map(|id| (id, TraversalState::Enter)),
        }
    }

    /// Creates a cursor at the position right after leaving the node.
    #[must_use]
    pub(crate) fn end_after(node: Option<NodeId>, hier: &Hierarchy) -> Self {
        let mut cursor = Self {
            current: node.map(|id| (id, TraversalState::Leave)),
        };
        if !cursor.is_end() {
            cursor.advance_in(hier);
        }
        cursor
    }

    /// Returns the traversal state, or `None` for the end position.
    #[inline]
    #[must_use]
    pub fn state(&self) -> Option<TraversalState> {
        self.current.map(|(_, state)| state)
    }

    /// Moves the cursor to the next event.
    pub(crate) fn advance_in(&mut self, hier: &Hierarchy) {
        let (id, state) = self
            .current
            .expect("[precondition] cannot advance an end position");
        let nbs = hier.live(id);
        self.current = match state {
            TraversalState::Enter => match nbs.first_child() {
                Some(first_child) => Some((first_child, TraversalState::Enter)),
                None => Some((id, TraversalState::Leave)),
            },
            TraversalState::Leave => match (nbs.next_sibling(), nbs.parent()) {
                (Some(next), _) => Some((next, TraversalState::Enter)),
                (None, ParentLink::Node(parent)) => Some((parent, TraversalState::Leave)),
                (None, ParentLink::Root) => None,
            },
        };
    }
}

impl Cursor for CompositionCursor {
    #[inline]
    fn node(&self) -> Option<NodeId> {
        self.current.map(|(id, _)| id)
    }

    #[inline]
    fn advance<T>(&mut self, forest: &Forest<T>) {
        self.advance_in(forest.hierarchy());
    }

    #[inline]
    fn sibling_current(&self) -> ChildCursor {
        self.node()
            .map_or_else(ChildCursor::parent_end, ChildCursor::at)
    }
}

//! Single-visit depth-first walks.

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use crate::cursor::{ChildCursor, CompositionCursor, Cursor, TraversalState};
use crate::forest::Forest;
use crate::hierarchy::Hierarchy;
use crate::NodeId;

/// Event of the composition walk a depth-first cursor stops at.
pub trait VisitOn: Copy + Eq + Hash + fmt::Debug {
    /// Traversal state to yield.
    const STATE: TraversalState;
}

/// Head recursion: a node is visited before its descendants (pre-order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Head;

impl VisitOn for Head {
    const STATE: TraversalState = TraversalState::Enter;
}

/// Tail recursion: a node is visited after its descendants (post-order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tail;

impl VisitOn for Tail {
    const STATE: TraversalState = TraversalState::Leave;
}

/// Forward cursor filtering a [`CompositionCursor`] down to one kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthFirstCursor<V> {
    /// Underlying composition walk.
    inner: CompositionCursor,
    /// Visit policy.
    _visit: PhantomData<V>,
}

/// Pre-order cursor.
pub type SubtreeCursor = DepthFirstCursor<Head>;

/// Post-order cursor.
pub type TailSubtreeCursor = DepthFirstCursor<Tail>;

impl<V: VisitOn> DepthFirstCursor<V> {
    /// The end position of the walk over the whole forest.
    pub(crate) const END: Self = Self {
        inner: CompositionCursor::END,
        _visit: PhantomData,
    };

    /// Creates a cursor from the composition cursor, skipping forward to the
    /// first event to be visited.
    #[must_use]
    pub(crate) fn from_composition(inner: CompositionCursor, hier: &Hierarchy) -> Self {
        let mut cursor = Self {
            inner,
            _visit: PhantomData,
        };
        cursor.skip_in(hier);
        cursor
    }

    /// Returns the underlying composition cursor.
    #[inline]
    #[must_use]
    pub fn composition(&self) -> CompositionCursor {
        self.inner
    }

    /// Moves the cursor to the next visited event.
    pub(crate) fn advance_in(&mut self, hier: &Hierarchy) {
        self.inner.advance_in(hier);
        self.skip_in(hier);
    }

    /// Advances the underlying cursor until it reaches the visited state.
    fn skip_in(&mut self, hier: &Hierarchy) {
        while let Some(state) = self.inner.state() {
            if state == V::STATE {
                break;
            }
            self.inner.advance_in(hier);
        }
    }
}

impl<V: VisitOn> Cursor for DepthFirstCursor<V> {
    #[inline]
    fn node(&self) -> Option<NodeId> {
        self.inner.node()
    }

    #[inline]
    fn advance<T>(&mut self, forest: &Forest<T>) {
        self.advance_in(forest.hierarchy());
    }

    #[inline]
    fn sibling_current(&self) -> ChildCursor {
        self.inner.sibling_current()
    }
}

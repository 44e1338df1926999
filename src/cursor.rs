//! Cursors, i.e. positions inside a forest.
//!
//! Cursors are plain `Copy` values holding node IDs. They do not borrow the
//! forest, so they survive mutations of the forest as long as the node they
//! refer to is alive. Operations which need to follow links take the forest
//! as an argument.
//!
//! [`ChildCursor`] is the canonical position. Every cursor can be converted
//! to it by [`Cursor::sibling_current`], and all the conversion methods of
//! [`Cursor`] go through it.

mod child;
mod composition;
mod depth_first;
mod hierarchy;
mod offset;

use core::fmt;

use crate::forest::Forest;
use crate::NodeId;

pub use self::child::ChildCursor;
pub use self::composition::{CompositionCursor, TraversalState};
pub use self::depth_first::{
    DepthFirstCursor, Head, SubtreeCursor, Tail, TailSubtreeCursor, VisitOn,
};
pub use self::hierarchy::HierarchyCursor;

pub(crate) use self::offset::EndOffset;

/// A position inside a forest.
///
/// Two cursors compare equal when they are at the same position. Cursors
/// from different forests must not be compared.
pub trait Cursor: Copy + Eq + fmt::Debug {
    /// Returns the node at the position, or `None` for an end position.
    #[must_use]
    fn node(&self) -> Option<NodeId>;

    /// Moves the cursor to the next position of its traversal.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at an end position, or if the node it
    /// refers to has been erased.
    fn advance<T>(&mut self, forest: &Forest<T>);

    /// Returns the position of the current node among its siblings.
    ///
    /// An exhausted hierarchy, composition, or depth-first cursor is
    /// converted to [`Forest::parent_end`], whose sibling range is empty.
    #[must_use]
    fn sibling_current(&self) -> ChildCursor;

    /// Returns true if the cursor is at an end position.
    #[inline]
    #[must_use]
    fn is_end(&self) -> bool {
        self.node().is_none()
    }

    /// Returns the first position among the children of the current node.
    ///
    /// For an end position, returns an end position one level deeper.
    #[must_use]
    fn child_begin<T>(&self, forest: &Forest<T>) -> ChildCursor {
        self.sibling_current().child_begin_in(forest.hierarchy())
    }

    /// Returns the end position of the children of the current node.
    ///
    /// For an end position, returns an end position one level deeper.
    #[must_use]
    fn child_end(&self) -> ChildCursor {
        self.sibling_current().child_end_in()
    }

    /// Returns the first position of the sibling chain of the current node.
    #[must_use]
    fn sibling_begin<T>(&self, forest: &Forest<T>) -> ChildCursor {
        self.sibling_current().sibling_begin_in(forest.hierarchy())
    }

    /// Returns the end position of the sibling chain of the current node.
    #[must_use]
    fn sibling_end<T>(&self, forest: &Forest<T>) -> ChildCursor {
        self.sibling_current().sibling_end_in(forest.hierarchy())
    }

    /// Returns the position of the parent.
    ///
    /// The parent of a toplevel node is [`Forest::parent_end`].
    #[must_use]
    fn parent<T>(&self, forest: &Forest<T>) -> ChildCursor {
        self.sibling_current().parent_in(forest.hierarchy())
    }

    /// Returns a cursor walking from the current node up to the toplevel.
    #[inline]
    #[must_use]
    fn hierarchy_begin(&self) -> HierarchyCursor {
        HierarchyCursor::start(self.node())
    }

    /// Returns the end of any hierarchy walk.
    #[inline]
    #[must_use]
    fn hierarchy_end(&self) -> HierarchyCursor {
        HierarchyCursor::END
    }

    /// Returns the first position of the composition walk of the current subtree.
    #[inline]
    #[must_use]
    fn composition_begin(&self) -> CompositionCursor {
        CompositionCursor::begin_at(self.node())
    }

    /// Returns the position right after the composition walk of the current
    /// subtree.
    #[must_use]
    fn composition_end<T>(&self, forest: &Forest<T>) -> CompositionCursor {
        CompositionCursor::end_after(self.node(), forest.hierarchy())
    }

    /// Returns the first position of the pre-order walk of the current subtree.
    #[must_use]
    fn subtree_begin<T>(&self, forest: &Forest<T>) -> SubtreeCursor {
        SubtreeCursor::from_composition(self.composition_begin(), forest.hierarchy())
    }

    /// Returns the end position of the pre-order walk of the current subtree.
    #[must_use]
    fn subtree_end<T>(&self, forest: &Forest<T>) -> SubtreeCursor {
        SubtreeCursor::from_composition(self.composition_end(forest), forest.hierarchy())
    }

    /// Returns the first position of the post-order walk of the current subtree.
    #[must_use]
    fn tail_subtree_begin<T>(&self, forest: &Forest<T>) -> TailSubtreeCursor {
        TailSubtreeCursor::from_composition(self.composition_begin(), forest.hierarchy())
    }

    /// Returns the end position of the post-order walk of the current subtree.
    #[must_use]
    fn tail_subtree_end<T>(&self, forest: &Forest<T>) -> TailSubtreeCursor {
        TailSubtreeCursor::from_composition(self.composition_end(forest), forest.hierarchy())
    }
}

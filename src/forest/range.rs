//! Iterators over cursor ranges.

use core::fmt;
use core::iter;

use crate::cursor::{ChildCursor, Cursor};
use crate::forest::{Forest, Node};

/// Iterator over the nodes between two cursors.
///
/// The iterator yields the node at the front cursor and advances it, until
/// the front cursor equals the back cursor.
///
/// A range of [`ChildCursor`]s is double-ended, so a reversed view of a
/// sibling range is available via [`Iterator::rev`].
pub struct Range<'a, T, C> {
    /// Forest.
    forest: &'a Forest<T>,
    /// Next position to yield.
    front: C,
    /// Position right after the last one to yield.
    back: C,
}

impl<'a, T, C: Cursor> Range<'a, T, C> {
    /// Creates a new iterator.
    #[inline]
    #[must_use]
    pub(crate) fn new(forest: &'a Forest<T>, front: C, back: C) -> Self {
        Self {
            forest,
            front,
            back,
        }
    }

    /// Returns the next position to yield.
    #[inline]
    #[must_use]
    pub fn front(&self) -> C {
        self.front
    }

    /// Returns the position where the iteration stops.
    #[inline]
    #[must_use]
    pub fn back(&self) -> C {
        self.back
    }

    /// Makes the iterator yield the cursor together with the node.
    ///
    /// This is useful to read the state of a composition walk.
    #[inline]
    #[must_use]
    pub fn with_cursors(self) -> WithCursors<'a, T, C> {
        WithCursors { inner: self }
    }

    /// Returns the next cursor and advances the front.
    fn next_cursor(&mut self) -> Option<(C, Node<'a, T>)> {
        if self.front == self.back {
            return None;
        }
        let current = self.front;
        let id = current
            .node()
            .expect("[precondition] the range end must be reachable from its start");
        self.front.advance(self.forest);
        let node = Node::new(self.forest, id)
            .expect("[consistency] the node being traversed must be alive");

        Some((current, node))
    }
}

impl<'a, T> Range<'a, T, ChildCursor> {
    /// Retreats the back and returns the cursor.
    fn next_back_cursor(&mut self) -> Option<(ChildCursor, Node<'a, T>)> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat(self.forest);
        let id = self
            .back
            .node()
            .expect("[consistency] retreating always stops at a node");
        let node = Node::new(self.forest, id)
            .expect("[consistency] the node being traversed must be alive");

        Some((self.back, node))
    }
}

impl<T, C: Copy> Clone for Range<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            forest: self.forest,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for Range<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<'a, T, C: Cursor> Iterator for Range<'a, T, C> {
    type Item = Node<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_cursor().map(|(_, node)| node)
    }
}

impl<'a, T> DoubleEndedIterator for Range<'a, T, ChildCursor> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next_back_cursor().map(|(_, node)| node)
    }
}

impl<T, C: Cursor> iter::FusedIterator for Range<'_, T, C> {}

/// Iterator over the cursors and nodes between two cursors.
///
/// Created by [`Range::with_cursors`].
pub struct WithCursors<'a, T, C> {
    /// Underlying range.
    inner: Range<'a, T, C>,
}

impl<T, C: Copy> Clone for WithCursors<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for WithCursors<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WithCursors").field(&self.inner).finish()
    }
}

impl<'a, T, C: Cursor> Iterator for WithCursors<'a, T, C> {
    type Item = (C, Node<'a, T>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_cursor()
    }
}

impl<'a, T> DoubleEndedIterator for WithCursors<'a, T, ChildCursor> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back_cursor()
    }
}

impl<T, C: Cursor> iter::FusedIterator for WithCursors<'_, T, C> {}

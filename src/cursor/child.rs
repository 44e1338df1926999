//! Position in a sibling chain.

use crate::cursor::{Cursor, EndOffset};
use crate::forest::Forest;
use crate::hierarchy::{Hierarchy, ParentLink};
use crate::NodeId;

/// Bidirectional position in the sibling chain of one parent.
///
/// The position is either a node, or an end position bound to a parent
/// together with an [offset](EndOffset) from the real end of that parent's
/// children.
///
/// A cursor at a node only remembers the node, so it keeps referring to the
/// same node after the node is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildCursor(Position);

/// Internal representation of [`ChildCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Position {
    /// At a node.
    Node(NodeId),
    /// At an end position.
    End {
        /// Parent of the chain.
        parent: ParentLink,
        /// Distance from the real end of the chain.
        offset: EndOffset,
    },
}

impl ChildCursor {
    /// Creates a cursor at the node.
    #[inline]
    #[must_use]
    pub(crate) fn at(id: NodeId) -> Self {
        Self(Position::Node(id))
    }

    /// Creates a cursor at the real end of the children of `parent`.
    #[inline]
    #[must_use]
    pub(crate) fn end_of(parent: ParentLink) -> Self {
        Self(Position::End {
            parent,
            offset: EndOffset::DIRECT,
        })
    }

    /// Creates a cursor at the first child of `parent`.
    #[must_use]
    pub(crate) fn first_of(parent: ParentLink, hier: &Hierarchy) -> Self {
        hier.children(parent)
            .first()
            .map_or_else(|| Self::end_of(parent), Self::at)
    }

    /// Creates the position above the toplevel chain.
    #[inline]
    #[must_use]
    pub(crate) fn parent_end() -> Self {
        Self(Position::End {
            parent: ParentLink::Root,
            offset: EndOffset::ABOVE,
        })
    }

    /// Returns the parent and the next sibling which a node inserted at
    /// this position would get.
    ///
    /// # Panics
    ///
    /// Panics if the position is a virtual end position, i.e. not a node
    /// and not the real end of a chain.
    #[must_use]
    pub(crate) fn insertion_point(self, hier: &Hierarchy) -> (ParentLink, Option<NodeId>) {
        match self.0 {
            Position::Node(id) => (hier.live(id).parent(), Some(id)),
            Position::End { parent, offset } => {
                assert!(
                    offset.is_direct(),
                    "[precondition] nodes cannot be placed at a virtual end position"
                );
                (parent, None)
            }
        }
    }

    /// Moves the cursor to the previous sibling.
    ///
    /// From the real end of a chain, moves to the last child of the parent.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the first sibling, at a virtual end
    /// position, or at the end of an empty chain.
    pub fn retreat<T>(&mut self, forest: &Forest<T>) {
        self.retreat_in(forest.hierarchy());
    }

    /// Moves the cursor to the next sibling.
    fn advance_in(&mut self, hier: &Hierarchy) {
        let id = match self.0 {
            Position::Node(id) => id,
            Position::End { .. } => panic!("[precondition] cannot advance an end position"),
        };
        let nbs = hier.live(id);
        *self = match nbs.next_sibling() {
            Some(next) => Self::at(next),
            None => Self::end_of(nbs.parent()),
        };
    }

    /// Moves the cursor to the previous sibling.
    fn retreat_in(&mut self, hier: &Hierarchy) {
        let prev = match self.0 {
            Position::Node(id) => hier
                .live(id)
                .prev_sibling()
                .expect("[precondition] cannot retreat from the first sibling"),
            Position::End { parent, offset } => {
                assert!(
                    offset.is_direct(),
                    "[precondition] cannot retreat from a virtual end position"
                );
                hier.children(parent)
                    .last()
                    .expect("[precondition] cannot retreat in an empty sibling chain")
            }
        };
        *self = Self::at(prev);
    }

    /// Returns the first child position.
    #[must_use]
    pub(crate) fn child_begin_in(self, hier: &Hierarchy) -> Self {
        match self.0 {
            Position::Node(id) => Self::first_of(ParentLink::Node(id), hier),
            Position::End { .. } => self.deeper(),
        }
    }

    /// Returns the child end position.
    #[must_use]
    pub(crate) fn child_end_in(self) -> Self {
        match self.0 {
            Position::Node(id) => Self::end_of(ParentLink::Node(id)),
            Position::End { .. } => self.deeper(),
        }
    }

    /// Returns the end position one level below this end position.
    fn deeper(self) -> Self {
        match self.0 {
            Position::End { parent, offset } => Self(Position::End {
                parent,
                offset: offset.deeper(),
            }),
            Position::Node(_) => unreachable!("[consistency] only end positions go deeper"),
        }
    }

    /// Returns the first position of the chain.
    #[must_use]
    pub(crate) fn sibling_begin_in(self, hier: &Hierarchy) -> Self {
        match self.0 {
            Position::Node(id) => Self::first_of(hier.live(id).parent(), hier),
            Position::End { parent, offset } if offset.is_direct() => {
                Self::first_of(parent, hier)
            }
            Position::End { .. } => self,
        }
    }

    /// Returns the end position of the chain.
    #[must_use]
    pub(crate) fn sibling_end_in(self, hier: &Hierarchy) -> Self {
        match self.0 {
            Position::Node(id) => Self::end_of(hier.live(id).parent()),
            Position::End { .. } => self,
        }
    }

    /// Returns the parent position.
    #[must_use]
    pub(crate) fn parent_in(self, hier: &Hierarchy) -> Self {
        let (parent, offset) = match self.0 {
            Position::Node(id) => (hier.live(id).parent(), EndOffset::DIRECT),
            Position::End { parent, offset } => (parent, offset),
        };
        match parent {
            ParentLink::Root => Self(Position::End {
                parent,
                offset: offset.shallower(),
            }),
            ParentLink::Node(id) if offset.is_direct() => Self::at(id),
            ParentLink::Node(_) => Self(Position::End {
                parent,
                offset: offset.shallower(),
            }),
        }
    }
}

impl Cursor for ChildCursor {
    #[inline]
    fn node(&self) -> Option<NodeId> {
        match self.0 {
            Position::Node(id) => Some(id),
            Position::End { .. } => None,
        }
    }

    #[inline]
    fn advance<T>(&mut self, forest: &Forest<T>) {
        self.advance_in(forest.hierarchy());
    }

    #[inline]
    fn sibling_current(&self) -> ChildCursor {
        *self
    }
}

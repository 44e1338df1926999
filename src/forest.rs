//! Forest.

mod builder;
mod node;
mod range;

use core::ops::{Index, IndexMut};

use alloc::vec::Vec;

use crate::cursor::{
    ChildCursor, CompositionCursor, Cursor, HierarchyCursor, SubtreeCursor, TailSubtreeCursor,
    TraversalState,
};
use crate::hierarchy::{Hierarchy, ParentLink};
use crate::NodeId;

pub use self::builder::TreeBuilder;
pub use self::node::Node;
pub use self::range::{Range, WithCursors};

/// Forest, i.e. zero or more trees sharing one arena.
///
/// The toplevel nodes are the children of an implicit root anchor. All
/// positions are expressed with [cursors][`crate::cursor`].
#[derive(Debug)]
pub struct Forest<T> {
    /// Hierarchy.
    hierarchy: Hierarchy,
    /// Data.
    ///
    /// `None` is used for vacant slots.
    // `self.hierarchy` knows which slots are vacant, so this could be
    // `Vec<MaybeUninit<T>>`. `Option<T>` keeps it free of `unsafe`.
    data: Vec<Option<T>>,
}

impl<T> Forest<T> {
    /// Creates a new empty forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use sylva::Forest;
    ///
    /// let forest = Forest::<i32>::new();
    /// assert!(forest.is_empty());
    /// assert_eq!(forest.child_begin(), forest.child_end());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty forest with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hierarchy: Hierarchy::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the link records.
    #[inline]
    #[must_use]
    pub(crate) fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Returns true if the node exists and is not yet erased.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.hierarchy.is_alive(id)
    }

    /// Returns a [proxy object][`Node`] to the node.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<Node<'_, T>> {
        Node::new(self, id)
    }

    /// Returns a reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.data.get(id.get()).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.data.get_mut(id.get()).and_then(Option::as_mut)
    }

    /// Returns a reference to the data at the position.
    ///
    /// Returns `None` for end positions.
    #[inline]
    #[must_use]
    pub fn get<C: Cursor>(&self, pos: C) -> Option<&T> {
        pos.node().and_then(|id| self.data(id))
    }

    /// Returns a mutable reference to the data at the position.
    ///
    /// Returns `None` for end positions.
    #[inline]
    #[must_use]
    pub fn get_mut<C: Cursor>(&mut self, pos: C) -> Option<&mut T> {
        match pos.node() {
            Some(id) => self.data_mut(id),
            None => None,
        }
    }

    /// Returns true if the forest has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hierarchy.children(ParentLink::Root).first().is_none()
    }

    /// Returns the number of nodes.
    ///
    /// This walks the whole forest, so it is `O(n)`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the maximum nesting level.
    ///
    /// An empty forest has depth 0, and a forest of leaves has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut current = 0_usize;
        let mut max = 0;
        let mut cursor = self.composition_begin();
        while let Some(state) = cursor.state() {
            match state {
                TraversalState::Enter => {
                    current += 1;
                    max = max.max(current);
                }
                TraversalState::Leave => current -= 1,
            }
            cursor.advance_in(&self.hierarchy);
        }
        max
    }

    /// Returns the first position of the toplevel chain.
    #[inline]
    #[must_use]
    pub fn child_begin(&self) -> ChildCursor {
        ChildCursor::first_of(ParentLink::Root, &self.hierarchy)
    }

    /// Returns the end position of the toplevel chain.
    #[inline]
    #[must_use]
    pub fn child_end(&self) -> ChildCursor {
        ChildCursor::end_of(ParentLink::Root)
    }

    /// Returns the position above the toplevel chain.
    ///
    /// This is the [parent][`Cursor::parent`] of every toplevel position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sylva::{Cursor, Forest};
    ///
    /// let mut forest = Forest::new();
    /// let top = forest.insert(forest.child_end(), 0);
    /// assert_eq!(top.parent(&forest), forest.parent_end());
    /// assert_eq!(forest.child_end().parent(&forest), forest.parent_end());
    /// ```
    #[inline]
    #[must_use]
    pub fn parent_end(&self) -> ChildCursor {
        ChildCursor::parent_end()
    }

    /// Returns the first position of the composition walk over the forest.
    #[inline]
    #[must_use]
    pub fn composition_begin(&self) -> CompositionCursor {
        self.child_begin().composition_begin()
    }

    /// Returns the end position of the composition walk over the forest.
    #[inline]
    #[must_use]
    pub fn composition_end(&self) -> CompositionCursor {
        CompositionCursor::END
    }

    /// Returns the first position of the pre-order walk over the forest.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> SubtreeCursor {
        SubtreeCursor::from_composition(self.composition_begin(), &self.hierarchy)
    }

    /// Returns the end position of the pre-order walk over the forest.
    #[inline]
    #[must_use]
    pub fn end(&self) -> SubtreeCursor {
        SubtreeCursor::END
    }

    /// Returns the first position of the post-order walk over the forest.
    #[inline]
    #[must_use]
    pub fn tail_begin(&self) -> TailSubtreeCursor {
        TailSubtreeCursor::from_composition(self.composition_begin(), &self.hierarchy)
    }

    /// Returns the end position of the post-order walk over the forest.
    #[inline]
    #[must_use]
    pub fn tail_end(&self) -> TailSubtreeCursor {
        TailSubtreeCursor::END
    }

    /// Returns an iterator over the nodes from `begin` up to (excluding) `end`.
    ///
    /// `end` must be reachable from `begin` by advancing it.
    #[inline]
    #[must_use]
    pub fn range<C: Cursor>(&self, begin: C, end: C) -> Range<'_, T, C> {
        Range::new(self, begin, end)
    }

    /// Returns an iterator over the toplevel nodes.
    #[inline]
    #[must_use]
    pub fn toplevel(&self) -> Range<'_, T, ChildCursor> {
        self.range(self.child_begin(), self.child_end())
    }

    /// Returns an iterator over the nodes in pre-order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Range<'_, T, SubtreeCursor> {
        self.range(self.begin(), self.end())
    }

    /// Returns an iterator over the nodes in post-order.
    #[inline]
    #[must_use]
    pub fn tail_iter(&self) -> Range<'_, T, TailSubtreeCursor> {
        self.range(self.tail_begin(), self.tail_end())
    }

    /// Returns an iterator over the enter/leave walk of the whole forest.
    #[inline]
    #[must_use]
    pub fn composition_iter(&self) -> Range<'_, T, CompositionCursor> {
        self.range(self.composition_begin(), self.composition_end())
    }

    /// Returns an iterator over the children of the node at `pos`.
    #[must_use]
    pub fn children<C: Cursor>(&self, pos: C) -> Range<'_, T, ChildCursor> {
        self.range(pos.child_begin(self), pos.child_end())
    }

    /// Returns an iterator over the siblings of `pos`, starting from the
    /// first one.
    #[must_use]
    pub fn siblings<C: Cursor>(&self, pos: C) -> Range<'_, T, ChildCursor> {
        self.range(pos.sibling_begin(self), pos.sibling_end(self))
    }

    /// Returns an iterator from the node at `pos` up to its toplevel ancestor.
    ///
    /// Note that the node itself is returned first.
    #[must_use]
    pub fn ancestors<C: Cursor>(&self, pos: C) -> Range<'_, T, HierarchyCursor> {
        self.range(pos.hierarchy_begin(), pos.hierarchy_end())
    }

    /// Returns an iterator over the enter/leave walk of the subtree at `pos`.
    #[must_use]
    pub fn composition<C: Cursor>(&self, pos: C) -> Range<'_, T, CompositionCursor> {
        self.range(pos.composition_begin(), pos.composition_end(self))
    }

    /// Returns an iterator over the subtree at `pos` in pre-order.
    #[must_use]
    pub fn subtree<C: Cursor>(&self, pos: C) -> Range<'_, T, SubtreeCursor> {
        self.range(pos.subtree_begin(self), pos.subtree_end(self))
    }

    /// Returns an iterator over the subtree at `pos` in post-order.
    #[must_use]
    pub fn tail_subtree<C: Cursor>(&self, pos: C) -> Range<'_, T, TailSubtreeCursor> {
        self.range(pos.tail_subtree_begin(self), pos.tail_subtree_end(self))
    }

    /// Creates a node right before `pos`, as a sibling of `pos`.
    ///
    /// Returns the position of the new node.
    ///
    /// # Panics
    ///
    /// Panics if `pos` refers to an erased node or is a virtual end position
    /// (e.g. children of an end position).
    ///
    /// # Examples
    ///
    /// ```
    /// use sylva::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let two = forest.insert(forest.child_begin(), 2);
    /// forest.insert(two, 1);
    /// forest.insert(forest.child_end(), 3);
    ///
    /// let values = forest.toplevel().map(|node| *node.data()).collect::<Vec<_>>();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn insert(&mut self, pos: ChildCursor, data: T) -> ChildCursor {
        let (parent, next) = pos.insertion_point(&self.hierarchy);
        let id = self.hierarchy.allocate();
        match self.data.get_mut(id.get()) {
            Some(slot) => {
                debug_assert!(slot.is_none(), "[consistency] reused slot must be vacant");
                *slot = Some(data);
            }
            None => {
                assert_eq!(
                    self.data.len(),
                    id.get(),
                    "[consistency] node ID must be able to be used as an index for the vec"
                );
                self.data.push(Some(data));
            }
        }
        self.hierarchy.link(id, parent, next);
        log::trace!("inserted {:?} under {:?}", id, parent);

        ChildCursor::at(id)
    }

    /// Erases the node at `pos` together with all its descendants.
    ///
    /// Descendants are dropped in post-order, and the node itself last.
    /// Returns the position of the next sibling of the erased node, or the
    /// end position of its sibling chain.
    ///
    /// Cursors into the erased subtree are invalidated. Others stay valid.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is an end position or refers to an erased node.
    pub fn erase(&mut self, pos: ChildCursor) -> ChildCursor {
        let root = pos
            .node()
            .expect("[precondition] cannot erase an end position");
        let nbs = *self.hierarchy.live(root);
        let next = nbs
            .next_sibling()
            .map_or_else(|| ChildCursor::end_of(nbs.parent()), ChildCursor::at);

        let mut cursor =
            TailSubtreeCursor::from_composition(pos.composition_begin(), &self.hierarchy);
        let mut erased = 1_usize;
        loop {
            let id = cursor
                .node()
                .expect("[consistency] teardown must reach the subtree root");
            if id == root {
                break;
            }
            // Links of `id` are read while advancing, so release it afterwards.
            cursor.advance_in(&self.hierarchy);
            self.release(id);
            erased += 1;
        }
        self.hierarchy.unlink(root);
        self.release(root);
        log::trace!("erased {} node(s) rooted at {:?}", erased, root);

        next
    }

    /// Erases the nodes from `begin` up to (excluding) `end` with their
    /// descendants.
    ///
    /// Returns `end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` is not reachable from `begin` in the sibling chain.
    pub fn erase_range(&mut self, begin: ChildCursor, end: ChildCursor) -> ChildCursor {
        let mut pos = begin;
        while pos != end {
            pos = self.erase(pos);
        }
        end
    }

    /// Frees the slot of a node whose subtree is being torn down.
    fn release(&mut self, id: NodeId) {
        self.hierarchy.release(id);
        self.data[id.get()] = None;
    }

    /// Moves the subtree at `subtree` right before `pos`.
    ///
    /// The node keeps its ID, so every cursor to the node or its descendants
    /// stays valid. Returns the position of the moved node.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::AncestorDescendantLoop`] without touching
    /// the forest if `pos` is inside the subtree itself (including the
    /// subtree root and the end of its children).
    ///
    /// # Panics
    ///
    /// Panics if `subtree` is an end position, or if `pos` is a virtual end
    /// position.
    pub fn try_move(
        &mut self,
        subtree: ChildCursor,
        pos: ChildCursor,
    ) -> Result<ChildCursor, StructureError> {
        let node = subtree
            .node()
            .expect("[precondition] cannot move an end position");
        assert!(
            self.hierarchy.is_alive(node),
            "[precondition] the node to move must be alive"
        );
        let (parent, next) = pos.insertion_point(&self.hierarchy);

        if let Some(lowest) = next.or_else(|| parent.node()) {
            if self.hierarchy.is_self_or_ancestor(node, lowest) {
                return Err(StructureError::AncestorDescendantLoop);
            }
        }

        self.hierarchy.unlink(node);
        self.hierarchy.clear_links(node);
        self.hierarchy.link(node, parent, next);
        log::trace!("moved {:?} under {:?}", node, parent);

        Ok(ChildCursor::at(node))
    }

    /// Moves the subtree at `subtree` right before `pos`.
    ///
    /// This is [`try_move`][`Self::try_move`] which reports a cycle-forming
    /// move by returning `subtree` itself, with the forest unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use sylva::{Cursor, Forest};
    ///
    /// let mut forest = Forest::new();
    /// let a = forest.insert(forest.child_end(), "a");
    /// let b = forest.insert(forest.child_end(), "b");
    /// let a0 = forest.insert(a.child_end(), "a-0");
    ///
    /// // `b` becomes the last child of `a`.
    /// let moved = forest.move_subtree(b, a.child_end());
    /// assert_eq!(moved, b);
    /// assert_eq!(b.parent(&forest), a);
    ///
    /// // `a` cannot be moved under its own child.
    /// assert_eq!(forest.move_subtree(a, a0), a);
    /// assert_eq!(a.parent(&forest), forest.parent_end());
    /// ```
    pub fn move_subtree(&mut self, subtree: ChildCursor, pos: ChildCursor) -> ChildCursor {
        match self.try_move(subtree, pos) {
            Ok(moved) => moved,
            Err(e) => {
                log::warn!("rejected to move {:?} before {:?}: {}", subtree, pos, e);
                subtree
            }
        }
    }

    /// Erases all nodes.
    pub fn clear(&mut self) {
        let end = self.child_end();
        self.erase_range(self.child_begin(), end);
        debug_assert!(self.is_empty());
        self.hierarchy = Hierarchy::default();
        self.data.clear();
    }

    /// Appends clones of all trees in `source` to the toplevel of `self`.
    fn append_clones(&mut self, source: &Self)
    where
        T: Clone,
    {
        // Positions in `self` of the nodes entered but not yet left.
        let mut open: Vec<ChildCursor> = Vec::new();
        for (cursor, node) in source.composition_iter().with_cursors() {
            match cursor.state() {
                Some(TraversalState::Enter) => {
                    let dest = open
                        .last()
                        .map_or_else(|| self.child_end(), |parent| parent.child_end());
                    let cloned = self.insert(dest, node.data().clone());
                    open.push(cloned);
                }
                Some(TraversalState::Leave) => {
                    open.pop();
                }
                None => unreachable!("[consistency] ranges never yield the end position"),
            }
        }
        debug_assert!(open.is_empty(), "[consistency] every entered node is left");
    }
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self {
            hierarchy: Hierarchy::default(),
            data: Vec::new(),
        }
    }
}

/// Deep clone.
///
/// The clone has the same shape and cloned data, but its own nodes. Node IDs
/// (and therefore cursors) of the source are not valid for the clone.
impl<T: Clone> Clone for Forest<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.len());
        cloned.append_clones(self);
        cloned
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.append_clones(source);
    }
}

impl<T, C: Cursor> Index<C> for Forest<T> {
    type Output = T;

    fn index(&self, pos: C) -> &Self::Output {
        self.get(pos)
            .expect("[precondition] cannot dereference an end position or an erased node")
    }
}

impl<T, C: Cursor> IndexMut<C> for Forest<T> {
    fn index_mut(&mut self, pos: C) -> &mut Self::Output {
        self.get_mut(pos)
            .expect("[precondition] cannot dereference an end position or an erased node")
    }
}

impl<'a, T> IntoIterator for &'a Forest<T> {
    type Item = Node<'a, T>;
    type IntoIter = Range<'a, T, SubtreeCursor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Structure inconsistency error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum StructureError {
    /// Attempt to make a node the ancestor of itself.
    #[error("attempt to make a node the ancestor of itself")]
    AncestorDescendantLoop,
}

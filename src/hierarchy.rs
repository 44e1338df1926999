//! Link records for the nodes of a forest.
//!
//! The hierarchy knows nothing about the data associated to the nodes. It
//! only owns the parent, sibling, and child links, and the root anchor which
//! is the parent of all toplevel nodes.

use core::fmt;

use alloc::vec::Vec;

use crate::id::NodeId;

/// Owner of a sibling chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ParentLink {
    /// The root anchor, i.e. the parent of the toplevel nodes.
    Root,
    /// A node.
    Node(NodeId),
}

impl ParentLink {
    /// Returns the node ID if the parent is a node.
    #[inline]
    #[must_use]
    pub(crate) fn node(self) -> Option<NodeId> {
        match self {
            Self::Root => None,
            Self::Node(id) => Some(id),
        }
    }
}

/// Both ends of a sibling chain.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChildLinks {
    /// First child.
    first: Option<NodeId>,
    /// Last child.
    last: Option<NodeId>,
}

impl ChildLinks {
    /// Returns the first node of the chain.
    #[inline]
    #[must_use]
    pub(crate) fn first(&self) -> Option<NodeId> {
        self.first
    }

    /// Returns the last node of the chain.
    #[inline]
    #[must_use]
    pub(crate) fn last(&self) -> Option<NodeId> {
        self.last
    }
}

impl fmt::Debug for ChildLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChildLinks")
            .field(&self.first)
            .field(&self.last)
            .finish()
    }
}

/// Neighbors of a live node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Neighbors {
    /// Parent.
    parent: ParentLink,
    /// Previous sibling.
    prev_sibling: Option<NodeId>,
    /// Next sibling.
    next_sibling: Option<NodeId>,
    /// First and last children.
    children: ChildLinks,
}

impl Neighbors {
    /// Creates a node record that is not a member of any sibling chain.
    #[inline]
    #[must_use]
    fn new_detached() -> Self {
        Self {
            parent: ParentLink::Root,
            prev_sibling: None,
            next_sibling: None,
            children: ChildLinks::default(),
        }
    }

    /// Returns the parent.
    #[inline]
    #[must_use]
    pub(crate) fn parent(&self) -> ParentLink {
        self.parent
    }

    /// Returns the node ID of the previous sibling.
    #[inline]
    #[must_use]
    pub(crate) fn prev_sibling(&self) -> Option<NodeId> {
        self.prev_sibling
    }

    /// Returns the node ID of the next sibling.
    #[inline]
    #[must_use]
    pub(crate) fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    /// Returns the node ID of the first child.
    #[inline]
    #[must_use]
    pub(crate) fn first_child(&self) -> Option<NodeId> {
        self.children.first
    }

    /// Returns the node ID of the last child.
    #[inline]
    #[must_use]
    pub(crate) fn last_child(&self) -> Option<NodeId> {
        self.children.last
    }
}

/// Arena of node links.
#[derive(Debug, Clone, Default)]
pub(crate) struct Hierarchy {
    /// Children of the root anchor.
    anchor: ChildLinks,
    /// Neighbors storage.
    ///
    /// `None` is used for vacant slots.
    neighbors: Vec<Option<Neighbors>>,
    /// Vacant slots to be reused by later allocations.
    vacant: Vec<NodeId>,
}

impl Hierarchy {
    /// Creates an empty hierarchy with room for `capacity` nodes.
    #[must_use]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            anchor: ChildLinks::default(),
            neighbors: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    /// Allocates a detached node record and returns its ID.
    ///
    /// # Panics
    ///
    /// Panics if the node ID overflows.
    pub(crate) fn allocate(&mut self) -> NodeId {
        if let Some(id) = self.vacant.pop() {
            debug_assert!(
                self.neighbors[id.get()].is_none(),
                "[consistency] vacant slot must not hold a live node"
            );
            self.neighbors[id.get()] = Some(Neighbors::new_detached());
            return id;
        }
        let id = NodeId::from_usize(self.neighbors.len())
            .expect("[precondition] node ID overflowed presumably due to too many node creations");
        self.neighbors.push(Some(Neighbors::new_detached()));
        id
    }

    /// Frees the slot of the node.
    ///
    /// The caller is responsible for unlinking the node (or its whole
    /// subtree) beforehand so that no live record refers to it.
    ///
    /// # Panics
    ///
    /// Panics if the node is not alive.
    pub(crate) fn release(&mut self, id: NodeId) {
        let slot = self
            .neighbors
            .get_mut(id.get())
            .expect("[precondition] the node ID must belong to this forest");
        if slot.take().is_none() {
            panic!("[precondition] the node must be alive");
        }
        self.vacant.push(id);
    }

    /// Returns the number of slots, live or vacant.
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) fn slots(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns a reference to the neighbors for the node if the node is alive.
    ///
    /// Returns `None` if the node ID is invalid or the node has already been removed.
    #[inline]
    #[must_use]
    pub(crate) fn neighbors(&self, id: NodeId) -> Option<&Neighbors> {
        self.neighbors.get(id.get()).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the neighbors for the node if the node is alive.
    #[inline]
    #[must_use]
    fn neighbors_mut(&mut self, id: NodeId) -> Option<&mut Neighbors> {
        self.neighbors.get_mut(id.get()).and_then(Option::as_mut)
    }

    /// Returns the neighbors of a node which must be alive.
    ///
    /// # Panics
    ///
    /// Panics if the node is not alive.
    #[inline]
    #[must_use]
    pub(crate) fn live(&self, id: NodeId) -> &Neighbors {
        self.neighbors(id)
            .expect("[precondition] the node must be alive")
    }

    /// Returns true if the node is alive.
    #[inline]
    #[must_use]
    pub(crate) fn is_alive(&self, id: NodeId) -> bool {
        self.neighbors(id).is_some()
    }

    /// Returns the ends of the sibling chain owned by the parent.
    ///
    /// # Panics
    ///
    /// Panics if the parent is a node which is not alive.
    #[must_use]
    pub(crate) fn children(&self, parent: ParentLink) -> ChildLinks {
        match parent {
            ParentLink::Root => self.anchor,
            ParentLink::Node(id) => self.live(id).children,
        }
    }

    /// Returns the ends of the sibling chain owned by the parent.
    fn children_mut(&mut self, parent: ParentLink) -> &mut ChildLinks {
        match parent {
            ParentLink::Root => &mut self.anchor,
            ParentLink::Node(id) => {
                &mut self
                    .neighbors_mut(id)
                    .expect("[precondition] the parent must be alive")
                    .children
            }
        }
    }

    /// Splices `node` into the children of `parent`, immediately before
    /// `next`, or at the end of the chain if `next` is `None`.
    ///
    /// ```text
    /// Before:
    ///
    ///          parent
    ///           /  \
    ///          /    \
    ///      prev -> next        node
    ///
    /// After:
    ///
    ///              parent
    ///           /    |    \
    ///          /     |     \
    ///      prev -> node -> next
    /// ```
    ///
    /// The previous links of `node` are overwritten, so `node` must not be a
    /// member of any sibling chain at this point.
    ///
    /// # Panics
    ///
    /// * Panics if any of the given nodes are not alive.
    /// * Panics if `next` is not a child of `parent`.
    pub(crate) fn link(&mut self, node: NodeId, parent: ParentLink, next: Option<NodeId>) {
        let prev = match next {
            Some(next) => {
                let next_nbs = self.live(next);
                assert_eq!(
                    next_nbs.parent, parent,
                    "[precondition] `next` must be a child of `parent`"
                );
                next_nbs.prev_sibling
            }
            None => self.children(parent).last,
        };

        {
            let nbs = self
                .neighbors_mut(node)
                .expect("[precondition] the node to link must be alive");
            nbs.parent = parent;
            nbs.prev_sibling = prev;
            nbs.next_sibling = next;
        }

        match prev {
            Some(prev) => {
                self.neighbors_mut(prev)
                    .expect("[consistency] siblings of a live node must be alive")
                    .next_sibling = Some(node)
            }
            None => self.children_mut(parent).first = Some(node),
        }
        match next {
            Some(next) => {
                self.neighbors_mut(next)
                    .expect("[consistency] siblings of a live node must be alive")
                    .prev_sibling = Some(node)
            }
            None => self.children_mut(parent).last = Some(node),
        }
    }

    /// Removes the node from its sibling chain.
    ///
    /// Neighbors of the node and its parent are patched. The links of the
    /// node itself are left as they were.
    ///
    /// # Panics
    ///
    /// Panics if the node is not alive.
    pub(crate) fn unlink(&mut self, node: NodeId) {
        let nbs = *self.live(node);

        match nbs.prev_sibling {
            Some(prev) => {
                self.neighbors_mut(prev)
                    .expect("[consistency] siblings of a live node must be alive")
                    .next_sibling = nbs.next_sibling
            }
            None => self.children_mut(nbs.parent).first = nbs.next_sibling,
        }
        match nbs.next_sibling {
            Some(next) => {
                self.neighbors_mut(next)
                    .expect("[consistency] siblings of a live node must be alive")
                    .prev_sibling = nbs.prev_sibling
            }
            None => self.children_mut(nbs.parent).last = nbs.prev_sibling,
        }
    }

    /// Clears the parent and sibling links of the node.
    ///
    /// Children are kept.
    pub(crate) fn clear_links(&mut self, node: NodeId) {
        let nbs = self
            .neighbors_mut(node)
            .expect("[precondition] the node must be alive");
        nbs.parent = ParentLink::Root;
        nbs.prev_sibling = None;
        nbs.next_sibling = None;
    }

    /// Returns true if `ancestor` is `node` itself or one of its ancestors.
    #[must_use]
    pub(crate) fn is_self_or_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.live(id).parent.node();
        }
        false
    }
}

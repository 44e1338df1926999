//! Tree builder.

use crate::cursor::{ChildCursor, Cursor};
use crate::forest::Forest;

/// Tree builder.
///
/// `TreeBuilder` remembers "the current node".
///
/// * [`TreeBuilder::child()`][`TreeBuilder::child`] creates a new child node
///   (as the last child) of the current node.
/// * [`TreeBuilder::sibling()`][`TreeBuilder::sibling`] creates a new next
///   sibling of the current node.
/// * [`TreeBuilder::parent()`][`TreeBuilder::parent`] makes the parent the new current node.
///
/// # Examples
///
/// ```
/// use sylva::{Forest, TreeBuilder};
///
/// let mut forest = Forest::new();
/// TreeBuilder::new(&mut forest, "root")
///     .child("0")
///     .child("0-0")
///     .sibling("0-1")
///     .parent()
///     .sibling("1");
/// TreeBuilder::new(&mut forest, "another root");
///
/// // Forest:
/// //  root
/// //  |-- 0
/// //  |   |-- 0-0
/// //  |   `-- 0-1
/// //  `-- 1
/// //  another root
///
/// let preorder = forest.iter().map(|node| *node.data()).collect::<Vec<_>>();
/// assert_eq!(preorder, ["root", "0", "0-0", "0-1", "1", "another root"]);
/// ```
#[derive(Debug)]
pub struct TreeBuilder<'a, T> {
    /// Target forest.
    forest: &'a mut Forest<T>,
    /// Position of the root node.
    root: ChildCursor,
    /// Position of the current node.
    current: ChildCursor,
}

impl<'a, T> TreeBuilder<'a, T> {
    /// Appends a new toplevel node and creates the tree builder for it.
    pub fn new(forest: &'a mut Forest<T>, root_data: T) -> Self {
        let root = forest.insert(forest.child_end(), root_data);
        Self {
            forest,
            root,
            current: root,
        }
    }

    /// Returns a reference to the forest.
    #[inline]
    #[must_use]
    pub fn forest(&self) -> &Forest<T> {
        self.forest
    }

    /// Returns the position of the root node.
    #[inline]
    #[must_use]
    pub fn root(&self) -> ChildCursor {
        self.root
    }

    /// Returns the position of the current node.
    #[inline]
    #[must_use]
    pub fn current(&self) -> ChildCursor {
        self.current
    }

    /// Appends a child node to the current node, and changes the current node to it.
    pub fn child(&mut self, data: T) -> &mut Self {
        self.current = self.forest.insert(self.current.child_end(), data);
        self
    }

    /// Adds a next sibling node to the current node, and changes the current node to it.
    ///
    /// At a toplevel node (including the root of the builder), the new node
    /// becomes the next toplevel node.
    pub fn sibling(&mut self, data: T) -> &mut Self {
        let mut pos = self.current;
        pos.advance(&*self.forest);
        self.current = self.forest.insert(pos, data);
        self
    }

    /// Tries to change the current node to the parent of the current node.
    ///
    /// Returns `None` if the current node is a toplevel node.
    pub fn try_parent(&mut self) -> Option<&mut Self> {
        let parent = self.current.parent(&*self.forest);
        if parent.is_end() {
            return None;
        }
        self.current = parent;
        Some(self)
    }

    /// Changes the current node to the parent of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the current node is a toplevel node.
    pub fn parent(&mut self) -> &mut Self {
        self.try_parent()
            .expect("[precondition] the current node should not be the root of a tree")
    }
}

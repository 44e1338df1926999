//! Multi-root forest stored in an arena.
//!
//! A [`Forest`] owns every node. Positions inside it are described by small
//! `Copy` cursors that never borrow the forest:
//!
//! * [`ChildCursor`]: a position in the sibling chain of one parent.
//!   Every other cursor can be converted to it.
//! * [`HierarchyCursor`]: walks from a node up through its ancestors.
//! * [`CompositionCursor`]: enter/leave walk which visits every node twice.
//! * [`SubtreeCursor`] and [`TailSubtreeCursor`]: pre-order and post-order
//!   walks, filtered from the composition walk.
//!
//! # Examples
//!
//! ```
//! use sylva::{Cursor, Forest};
//!
//! let mut forest = Forest::new();
//! let root = forest.insert(forest.child_end(), "root");
//! let a = forest.insert(root.child_end(), "a");
//! forest.insert(root.child_end(), "b");
//! forest.insert(a.child_end(), "a-0");
//!
//! let preorder = forest.iter().map(|node| *node.data()).collect::<Vec<_>>();
//! assert_eq!(preorder, ["root", "a", "a-0", "b"]);
//!
//! let postorder = forest.tail_iter().map(|node| *node.data()).collect::<Vec<_>>();
//! assert_eq!(postorder, ["a-0", "a", "b", "root"]);
//! ```
#![no_std]
#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
// `clippy::missing_docs_in_private_items` implies `missing_docs`.
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::must_use_candidate)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod cursor;
pub mod forest;
mod hierarchy;
mod id;

pub use self::cursor::{
    ChildCursor, CompositionCursor, Cursor, DepthFirstCursor, Head, HierarchyCursor,
    SubtreeCursor, Tail, TailSubtreeCursor, TraversalState, VisitOn,
};
pub use self::forest::{Forest, Node, StructureError, TreeBuilder};
pub use self::id::NodeId;

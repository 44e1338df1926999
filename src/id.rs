//! Node ID.

use core::fmt;
use core::num::NonZeroUsize;

/// Node ID.
///
/// A node ID is an index into the arena of one [`Forest`][`crate::Forest`].
/// Slots of erased nodes are reused, so an ID of an erased node may later
/// refer to a different node.
///
/// The ordering (`PartialOrd` and `Ord`) follows the arena index and is only
/// provided for use with ordered containers such as `BTreeSet`. It has no
/// relation to the order of nodes in the forest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// Arena index plus one, so that `Option<NodeId>` fits in a `usize`.
    slot: NonZeroUsize,
}

impl NodeId {
    /// Returns the arena index.
    #[inline]
    #[must_use]
    pub(crate) fn get(self) -> usize {
        self.slot.get() - 1
    }

    /// Creates a node ID for the arena index.
    ///
    /// Returns `None` if the index is `usize::MAX`.
    #[inline]
    #[must_use]
    pub(crate) fn from_usize(index: usize) -> Option<Self> {
        index
            .checked_add(1)
            .and_then(NonZeroUsize::new)
            .map(|slot| Self { slot })
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.get()).finish()
    }
}

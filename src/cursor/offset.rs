//! Offsets of end positions.
//!
//! An end position of a sibling chain may be "deeper" than the chain itself:
//! taking the children of an end position gives an end position one level
//! below, and taking the parent of it goes back one level. The offset counts
//! those virtual levels.

use core::cmp;

/// Distance of an end position from the sibling chain it terminates.
///
/// * `-1`: above the chain. Only used for the root anchor, as the parent
///   position of toplevel nodes.
/// * `0`: the real end of the chain.
/// * `n > 0`: the end of the children of a non-existent node `n` levels
///   below the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct EndOffset(isize);

impl EndOffset {
    /// Position above the toplevel chain.
    pub(crate) const ABOVE: Self = Self(-1);
    /// The real end of a chain.
    pub(crate) const DIRECT: Self = Self(0);

    /// Returns the offset one level deeper.
    #[inline]
    #[must_use]
    pub(crate) fn deeper(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the offset one level shallower, clamped at [`Self::ABOVE`].
    #[inline]
    #[must_use]
    pub(crate) fn shallower(self) -> Self {
        Self(cmp::max(self.0 - 1, Self::ABOVE.0))
    }

    /// Returns true if the offset denotes the real end of a chain.
    #[inline]
    #[must_use]
    pub(crate) fn is_direct(self) -> bool {
        self == Self::DIRECT
    }
}

#[cfg(test)]
mod tests {
    use super::EndOffset;

    #[test]
    fn deeper_then_shallower_is_identity() {
        let mut offset = EndOffset::DIRECT;
        for _ in 0..5 {
            offset = offset.deeper();
        }
        assert!(!offset.is_direct());
        for _ in 0..5 {
            offset = offset.shallower();
        }
        assert!(offset.is_direct());
    }

    #[test]
    fn shallower_clamps_above() {
        assert_eq!(EndOffset::DIRECT.shallower(), EndOffset::ABOVE);
        assert_eq!(EndOffset::ABOVE.shallower(), EndOffset::ABOVE);
        assert_eq!(EndOffset::ABOVE.deeper(), EndOffset::DIRECT);
    }

    #[test]
    fn ordering() {
        assert!(EndOffset::ABOVE < EndOffset::DIRECT);
        assert!(EndOffset::DIRECT < EndOffset::DIRECT.deeper());
    }
}

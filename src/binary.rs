//! Binary arity strategy
//!
//! Index arithmetic for the classic two-children implicit tree:
//!
//! | Query          | Formula                |
//! |----------------|------------------------|
//! | children of i  | `2i + 1`, `2i + 2`     |
//! | parent of i    | `(i - 1) / 2`          |
//! | leaf test      | `i >= len / 2 + 1`     |
//!
//! The leaf boundary is one slot later than the textbook `len / 2`. Slot
//! `len / 2` is visited by `heapify_down` and finds no in-bounds children.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{Arity, Binary};
//!
//! assert_eq!(Binary.children(1, 10), 3..5);
//! assert_eq!(Binary.parent(4), 1);
//! assert!(!Binary.is_leaf(5, 10));
//! assert!(Binary.is_leaf(6, 10));
//! ```

use crate::traits::Arity;
use std::ops::Range;

/// Branching factor 2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Binary;

impl Arity for Binary {
    #[inline]
    fn branching(&self) -> usize {
        2
    }

    #[inline]
    fn parent(&self, i: usize) -> usize {
        (i - 1) >> 1
    }

    #[inline]
    fn children(&self, i: usize, len: usize) -> Range<usize> {
        let left = (i << 1) + 1;
        left.min(len)..(left + 2).min(len)
    }

    #[inline]
    fn is_leaf(&self, i: usize, len: usize) -> bool {
        i > len >> 1
    }

    #[inline]
    fn build_bound(&self, len: usize) -> usize {
        ((len >> 1) + 1).min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_and_parent_are_inverse() {
        for i in 0..100 {
            for child in Binary.children(i, 1000) {
                assert_eq!(Binary.parent(child), i);
            }
        }
    }

    #[test]
    fn test_children_clipped_to_len() {
        assert_eq!(Binary.children(0, 0), 0..0);
        assert_eq!(Binary.children(0, 1), 1..1);
        assert_eq!(Binary.children(0, 2), 1..2);
        assert_eq!(Binary.children(0, 3), 1..3);
        assert_eq!(Binary.children(2, 6), 5..6);
        assert!(Binary.children(3, 6).is_empty());
    }

    #[test]
    fn test_leaf_boundary() {
        // i >= len / 2 + 1, one past the textbook bound
        let len = 7;
        for i in 0..=3 {
            assert!(!Binary.is_leaf(i, len), "slot {i} should be internal");
        }
        for i in 4..len {
            assert!(Binary.is_leaf(i, len), "slot {i} should be a leaf");
        }

        assert!(!Binary.is_leaf(0, 0));
        assert!(!Binary.is_leaf(0, 1));
        assert!(Binary.is_leaf(1, 1));
        assert!(!Binary.is_leaf(1, 2));
        assert!(Binary.is_leaf(2, 2));
    }

    #[test]
    fn test_build_bound() {
        assert_eq!(Binary.build_bound(0), 0);
        assert_eq!(Binary.build_bound(1), 1);
        assert_eq!(Binary.build_bound(2), 2);
        assert_eq!(Binary.build_bound(7), 4);
        assert_eq!(Binary.build_bound(8), 5);
    }
}

//! K-ary arity strategy
//!
//! Generalises the binary tree to a branching factor `K` chosen at
//! construction time, `2 < K <= 64`. Wider trees are shallower, so sift-up
//! is cheaper, while sift-down inspects `K` children per level:
//!
//! | Operation      | Complexity        |
//! |----------------|-------------------|
//! | `heapify_up`   | O(log_K n)        |
//! | `heapify_down` | O(K log_K n)      |
//! | build          | O(n)              |
//!
//! Powers of two (4, 8, ...) tend to work best in practice.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{Arity, KAry, HeapError};
//!
//! let quad = KAry::new(4).unwrap();
//! assert_eq!(quad.children(1, 100), 5..9);
//! assert_eq!(quad.parent(8), 1);
//!
//! assert_eq!(KAry::new(2), Err(HeapError::InvalidArity { arity: 2 }));
//! assert_eq!(KAry::new(65), Err(HeapError::InvalidArity { arity: 65 }));
//! ```

use crate::error::{HeapError, Result};
use crate::traits::Arity;
use std::ops::Range;

/// Branching factor `K`, validated once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KAry {
    k: usize,
}

impl KAry {
    /// Largest supported branching factor
    pub const MAX_ARITY: usize = 64;

    /// Creates a strategy with `k` children per slot
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] unless `2 < k <= 64`.
    pub fn new(k: usize) -> Result<Self> {
        if k <= 2 || k > Self::MAX_ARITY {
            return Err(HeapError::InvalidArity { arity: k });
        }
        Ok(Self { k })
    }

    /// A `K = 2` instance of the k-ary arithmetic
    ///
    /// This exists for comparing the k-ary code path against
    /// [`Binary`](crate::binary::Binary); it produces the same extraction
    /// order, size and heap shape on identical inputs. Use `Binary` for
    /// real binary heaps.
    pub fn binary_equivalent() -> Self {
        Self { k: 2 }
    }

    /// The branching factor
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    fn child(&self, i: usize, j: usize) -> usize {
        self.k.saturating_mul(i).saturating_add(j + 1)
    }
}

impl Arity for KAry {
    #[inline]
    fn branching(&self) -> usize {
        self.k
    }

    #[inline]
    fn parent(&self, i: usize) -> usize {
        (i - 1) / self.k
    }

    #[inline]
    fn children(&self, i: usize, len: usize) -> Range<usize> {
        let first = self.child(i, 0);
        first.min(len)..first.saturating_add(self.k).min(len)
    }

    #[inline]
    fn is_leaf(&self, i: usize, len: usize) -> bool {
        // with fewer than two slots nothing has children; the engine finds
        // no in-bounds child and stops on its own
        match len.checked_sub(2) {
            Some(last_parent_span) => i > last_parent_span / self.k,
            None => false,
        }
    }

    #[inline]
    fn build_bound(&self, len: usize) -> usize {
        (len / self.k + 1).min(len)
    }
}

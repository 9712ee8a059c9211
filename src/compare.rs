//! Comparators for min and max heaps
//!
//! [`MinOrder`] and [`MaxOrder`] use the element type's natural [`Ord`].
//! [`MinBy`] and [`MaxBy`] wrap a caller-supplied total order, which is
//! inverted per heap kind exactly like the natural one.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::compare::MaxBy;
//! use indexed_heaps::{Heap, HeapInit, Binary};
//!
//! // Longest string first
//! let words = vec!["fig", "banana", "kiwi"];
//! let mut heap = Heap::with_comparator(
//!     words,
//!     Binary,
//!     MaxBy::new(|a: &&str, b: &&str| a.len().cmp(&b.len())),
//!     HeapInit::Build,
//! );
//! assert_eq!(heap.pop(), Ok("banana"));
//! assert_eq!(heap.pop(), Ok("kiwi"));
//! ```

use crate::traits::{Compare, HeapKind};
use std::cmp::Ordering;
use std::fmt;

/// Natural order, smallest element on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

/// Natural order, largest element on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    fn kind(&self) -> HeapKind {
        HeapKind::Min
    }

    #[inline]
    fn comp(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    fn kind(&self) -> HeapKind {
        HeapKind::Max
    }

    #[inline]
    fn comp(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Custom total order, smallest element on top
#[derive(Clone, Copy)]
pub struct MinBy<F> {
    order: F,
}

/// Custom total order, largest element on top
#[derive(Clone, Copy)]
pub struct MaxBy<F> {
    order: F,
}

impl<F> MinBy<F> {
    /// Wraps `order`, which must be a total order
    pub fn new(order: F) -> Self {
        Self { order }
    }
}

impl<F> MaxBy<F> {
    /// Wraps `order`, which must be a total order
    pub fn new(order: F) -> Self {
        Self { order }
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for MinBy<F> {
    fn kind(&self) -> HeapKind {
        HeapKind::Min
    }

    #[inline]
    fn comp(&self, a: &T, b: &T) -> bool {
        (self.order)(a, b) == Ordering::Greater
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for MaxBy<F> {
    fn kind(&self) -> HeapKind {
        HeapKind::Max
    }

    #[inline]
    fn comp(&self, a: &T, b: &T) -> bool {
        (self.order)(a, b) == Ordering::Less
    }
}

impl<F> fmt::Debug for MinBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinBy").finish_non_exhaustive()
    }
}

impl<F> fmt::Debug for MaxBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxBy").finish_non_exhaustive()
    }
}

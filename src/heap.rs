//! Plain array-backed heap
//!
//! [`Heap`] stores its elements directly in a dense vector and orders them
//! with a [`Compare`] relation. The branching factor is an [`Arity`]:
//! [`Binary`] or a validated [`KAry`].
//!
//! # Time Complexity
//!
//! | Operation | Binary     | K-ary          |
//! |-----------|------------|----------------|
//! | `push`    | O(log n)   | O(log_K n)     |
//! | `pop`     | O(log n)   | O(K log_K n)   |
//! | `top`     | O(1)       | O(1)           |
//! | build     | O(n)       | O(n)           |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{Heap, HeapInit};
//!
//! let mut heap = Heap::max(vec![30, 1, 50, 20, 40, 60, 100], HeapInit::Build);
//! assert_eq!(heap.top(), Ok(&100));
//! assert_eq!(heap.pop(), Ok(100));
//! assert_eq!(heap.pop(), Ok(60));
//! heap.push(55);
//! assert_eq!(heap.pop(), Ok(55));
//! ```

use crate::binary::Binary;
use crate::compare::{MaxOrder, MinOrder};
use crate::engine::{HeapCore, HeapInit};
use crate::error::{HeapError, Result};
use crate::k_ary::KAry;
use crate::traits::{Arity, Compare, HeapKind, NodeStore};

/// Dense element store ordered by a comparator
#[derive(Debug, Clone)]
struct Slots<T, C> {
    nodes: Vec<T>,
    comp: C,
}

impl<T, C: Compare<T>> NodeStore for Slots<T, C> {
    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn comp(&self, a: usize, b: usize) -> bool {
        self.comp.comp(&self.nodes[a], &self.nodes[b])
    }

    #[inline]
    fn swap_nodes(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
    }
}

/// An array-backed heap with a pluggable arity and comparator
///
/// The defaults give a binary min-heap over the element's natural order.
#[derive(Debug, Clone)]
pub struct Heap<T, A = Binary, C = MinOrder> {
    core: HeapCore<Slots<T, C>, A>,
}

/// Binary min-heap over the natural order
pub type MinHeap<T> = Heap<T, Binary, MinOrder>;
/// Binary max-heap over the natural order
pub type MaxHeap<T> = Heap<T, Binary, MaxOrder>;
/// K-ary min-heap over the natural order
pub type MinKHeap<T> = Heap<T, KAry, MinOrder>;
/// K-ary max-heap over the natural order
pub type MaxKHeap<T> = Heap<T, KAry, MaxOrder>;

impl<T: Ord> Heap<T, Binary, MinOrder> {
    /// Creates a binary min-heap from `values`
    pub fn min(values: Vec<T>, init: HeapInit) -> Self {
        Self::with_comparator(values, Binary, MinOrder, init)
    }
}

impl<T: Ord> Heap<T, Binary, MaxOrder> {
    /// Creates a binary max-heap from `values`
    pub fn max(values: Vec<T>, init: HeapInit) -> Self {
        Self::with_comparator(values, Binary, MaxOrder, init)
    }
}

impl<T: Ord> Heap<T, KAry, MinOrder> {
    /// Creates a k-ary min-heap from `values`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] unless `2 < k <= 64`.
    pub fn min_k(k: usize, values: Vec<T>, init: HeapInit) -> Result<Self> {
        Ok(Self::with_comparator(values, KAry::new(k)?, MinOrder, init))
    }
}

impl<T: Ord> Heap<T, KAry, MaxOrder> {
    /// Creates a k-ary max-heap from `values`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] unless `2 < k <= 64`.
    pub fn max_k(k: usize, values: Vec<T>, init: HeapInit) -> Result<Self> {
        Ok(Self::with_comparator(values, KAry::new(k)?, MaxOrder, init))
    }
}

impl<T, A: Arity, C: Compare<T>> Heap<T, A, C> {
    /// Creates a heap from `values` with an explicit arity and comparator
    pub fn with_comparator(values: Vec<T>, arity: A, comp: C, init: HeapInit) -> Self {
        let store = Slots {
            nodes: values,
            comp,
        };
        Self {
            core: HeapCore::with_init(store, arity, init),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Returns the element at the root
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn top(&self) -> Result<&T> {
        self.core.store().nodes.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the element at the root
    ///
    /// The last element takes the root's place and is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }

        let top = self.core.store_mut().nodes.swap_remove(0);
        if !self.is_empty() {
            self.core.heapify_down(0);
        }
        Ok(top)
    }

    /// Inserts an element
    pub fn push(&mut self, value: T) {
        let index = self.len();
        self.core.store_mut().nodes.push(value);
        self.core.heapify_up(index);
    }

    /// The elements in slot order
    pub fn values(&self) -> &[T] {
        &self.core.store().nodes
    }

    /// Returns true if every slot satisfies the heap property
    pub fn is_valid_heap(&self) -> bool {
        self.core.is_valid_heap()
    }

    /// Whether the root holds the smallest or the largest element
    pub fn kind(&self) -> HeapKind {
        self.core.store().comp.kind()
    }

    /// The arity strategy
    pub fn arity(&self) -> A {
        self.core.arity()
    }

    /// Consumes the heap, returning its elements in slot order
    pub fn into_vec(self) -> Vec<T> {
        self.core.into_store().nodes
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }
}

impl<T: Ord> Default for Heap<T, Binary, MinOrder> {
    fn default() -> Self {
        Self::min(Vec::new(), HeapInit::AssumeHeap)
    }
}

impl<T, A: Arity, C: Compare<T>> Extend<T> for Heap<T, A, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::MinBy;

    #[test]
    fn test_basic_operations() {
        let mut heap = Heap::min(Vec::new(), HeapInit::Build);

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.top(), Ok(&1));

        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
    }

    #[test]
    fn test_empty_heap_errors() {
        let mut heap: MaxHeap<u8> = Heap::max(Vec::new(), HeapInit::Build);
        assert_eq!(heap.top(), Err(HeapError::Empty));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicate_values() {
        let mut heap = Heap::max(vec![1, 1, 1], HeapInit::Build);
        heap.push(1);
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = Heap::min_k(4, Vec::new(), HeapInit::Build).unwrap();
        for i in 0..100 {
            heap.push(i);
        }
        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = Heap::max_k(8, Vec::new(), HeapInit::Build).unwrap();
        for i in 0..100 {
            heap.push(i);
        }
        for i in (0..100).rev() {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_invalid_arity_rejected() {
        assert_eq!(
            Heap::min_k(2, vec![1, 2, 3], HeapInit::Build).err(),
            Some(HeapError::InvalidArity { arity: 2 })
        );
        assert_eq!(
            Heap::max_k(100, vec![1], HeapInit::Build).err(),
            Some(HeapError::InvalidArity { arity: 100 })
        );
    }

    #[test]
    fn test_custom_comparator() {
        let heap = Heap::with_comparator(
            vec![-5, 3, -1, 4],
            KAry::new(3).unwrap(),
            MinBy::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs())),
            HeapInit::Build,
        );
        assert_eq!(heap.kind(), HeapKind::Min);
        assert_eq!(heap.arity().k(), 3);
        assert_eq!(heap.into_sorted_vec(), vec![-1, 3, 4, -5]);
    }

    #[test]
    fn test_extend_and_default() {
        let mut heap: MinHeap<i32> = Heap::default();
        heap.extend([5, 9, 2, 7]);
        assert!(heap.is_valid_heap());
        assert_eq!(heap.top(), Ok(&2));
        assert_eq!(heap.into_vec().len(), 4);
    }
}

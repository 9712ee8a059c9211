//! Common traits for the array-backed heaps
//!
//! The heap engine is written once against three small capabilities:
//!
//! - [`Compare`]: the ordering relation and the heap kind it realises
//! - [`Arity`]: parent/child arithmetic of the implicit tree
//! - [`NodeStore`]: the dense slot sequence, including the single
//!   [`swap_nodes`](NodeStore::swap_nodes) seam every two-slot mutation
//!   goes through
//!
//! [`Heap`](crate::heap::Heap) and
//! [`IndexedPriorityQueue`](crate::priority_queue::IndexedPriorityQueue)
//! differ only in the [`NodeStore`] they hand to
//! [`HeapCore`](crate::engine::HeapCore): the queue's store overrides the
//! swap to keep its value→index map in lockstep with the slots.

use std::fmt;
use std::ops::Range;

/// Direction of a heap: which extreme sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapKind {
    /// The smallest element is at the root
    Min,
    /// The largest element is at the root
    Max,
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapKind::Min => write!(f, "min"),
            HeapKind::Max => write!(f, "max"),
        }
    }
}

/// Ordering relation used to place elements in a heap
///
/// `comp(a, b)` returns true when `b` belongs higher in the tree than `a`.
/// A min-heap therefore uses "greater than" and a max-heap "less than".
/// The relation must be consistent with [`kind`](Compare::kind), since the
/// indexed priority queue picks the sift direction of
/// [`update_key`](crate::priority_queue::IndexedPriorityQueue::update_key)
/// from the kind alone.
pub trait Compare<T: ?Sized> {
    /// The heap kind this relation produces
    fn kind(&self) -> HeapKind;

    /// Returns true if `b` should sit above `a`
    fn comp(&self, a: &T, b: &T) -> bool;
}

/// Index arithmetic of an implicit tree with a fixed branching factor
///
/// Slots are positions in a dense zero-indexed sequence of length `len`.
/// Implementations never touch the sequence itself.
pub trait Arity: Copy + fmt::Debug {
    /// Number of children per internal slot
    fn branching(&self) -> usize;

    /// Parent of slot `i`. Only meaningful for `i > 0`.
    fn parent(&self, i: usize) -> usize;

    /// In-bounds children of slot `i`, left to right
    fn children(&self, i: usize, len: usize) -> Range<usize>;

    /// Returns true if `heapify_down` should stop descending at slot `i`
    fn is_leaf(&self, i: usize, len: usize) -> bool;

    /// One past the highest slot visited by a bottom-up build
    fn build_bound(&self, len: usize) -> usize;
}

/// Dense slot sequence the heap engine operates on
///
/// The engine only reads through [`comp`](NodeStore::comp) and only writes
/// through [`swap_nodes`](NodeStore::swap_nodes). A store that keeps side
/// tables (positions, keys) updates them in `swap_nodes` and nowhere else
/// during a sift.
pub trait NodeStore {
    /// Number of live slots
    fn len(&self) -> usize;

    /// Returns true if there are no live slots
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies the heap's comparator to the elements at slots `a` and `b`
    fn comp(&self, a: usize, b: usize) -> bool;

    /// Exchanges the elements at slots `i` and `j`
    fn swap_nodes(&mut self, i: usize, j: usize);
}

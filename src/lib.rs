//! Array-backed heaps with an indexed priority queue
//!
//! This crate provides dense, pointer-free heaps whose branching factor and
//! ordering direction are chosen independently, plus an indexed priority
//! queue that supports in-place key updates.
//!
//! # Features
//!
//! - **Heap**: binary or k-ary (`2 < K <= 64`), min or max, natural order or
//!   a custom total order; O(n) build or O(1) adoption of an existing heap
//! - **IndexedPriorityQueue**: the same engine ordering values by external
//!   keys, with O(1) `contains`/`key_at` and O(log n) `update_key`
//! - **HeapCore**: the sift engine, written once against the [`Arity`] and
//!   [`NodeStore`] capabilities, usable with custom stores
//! - **DisjointSet** and **SparseByteSet**: small companion containers
//! - **pathfinding**: Dijkstra and A* on top of the indexed queue
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{IndexedPriorityQueue, HeapInit};
//!
//! let mut queue = IndexedPriorityQueue::min_k(
//!     4,
//!     vec![5, 4, 1, 3, 6, 0, 2],
//!     vec!['m', 'i', 'n', 'h', 'e', 'a', 'p'],
//!     HeapInit::Build,
//! ).unwrap();
//!
//! queue.update_key(&'e', 0).unwrap();
//! assert_eq!(queue.top(), Ok(&'a'));
//! assert_eq!(queue.pop(), Ok((0, 'a')));
//! assert_eq!(queue.pop(), Ok((0, 'e')));
//! ```

pub mod binary;
pub mod compare;
pub mod disjoint_set;
pub mod engine;
pub mod error;
pub mod heap;
pub mod k_ary;
pub mod pathfinding;
pub mod priority_queue;
pub mod sparse_byte_set;
pub mod traits;
pub mod util;

pub use binary::Binary;
pub use compare::{MaxBy, MaxOrder, MinBy, MinOrder};
pub use disjoint_set::DisjointSet;
pub use engine::{HeapCore, HeapInit};
pub use error::{HeapError, Result};
pub use heap::{Heap, MaxHeap, MaxKHeap, MinHeap, MinKHeap};
pub use k_ary::KAry;
pub use priority_queue::{
    IndexedPriorityQueue, MaxKPriorityQueue, MaxPriorityQueue, MinKPriorityQueue,
    MinPriorityQueue,
};
pub use sparse_byte_set::SparseByteSet;
pub use traits::{Arity, Compare, HeapKind, NodeStore};

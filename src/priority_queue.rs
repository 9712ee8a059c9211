//! Indexed priority queue
//!
//! [`IndexedPriorityQueue`] stores values in an array heap ordered by an
//! external key per value, and keeps two maps next to the slots:
//!
//! - value → current key, used by the comparator and by [`key_at`]
//! - value → current slot, used by [`update_key`] to find the value without
//!   a scan
//!
//! The slot map is maintained in exactly one place, the store's
//! `swap_nodes`, which the engine calls for every exchange during a sift.
//! After every public operation both maps are exact inverses of the slot
//! sequence.
//!
//! Values are expected to be unique. Pushing a value that is already queued
//! replaces its key in place instead of adding a second slot.
//!
//! # Updating keys
//!
//! [`update_key`] restores order in one direction only, chosen by the heap
//! kind: a min-queue sifts up (the update is treated as a decrease) and a
//! max-queue sifts down (treated as an increase). Moving a key the other way
//! leaves the heap property violated below or above that value until later
//! operations happen to repair it. Callers that need both directions should
//! pop and re-push.
//!
//! # Time Complexity
//!
//! | Operation    | Binary   | K-ary          |
//! |--------------|----------|----------------|
//! | `push`       | O(log n) | O(log_K n)     |
//! | `pop`        | O(log n) | O(K log_K n)   |
//! | `update_key` | O(log n) | O(K log_K n)   |
//! | `key_at`     | O(1)     | O(1)           |
//! | `contains`   | O(1)     | O(1)           |
//! | `top`        | O(1)     | O(1)           |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{IndexedPriorityQueue, HeapInit};
//!
//! let mut queue = IndexedPriorityQueue::min(
//!     vec![5, 4, 1],
//!     vec!["m", "i", "n"],
//!     HeapInit::Build,
//! ).unwrap();
//!
//! assert_eq!(queue.top_key_value(), Ok((&1, &"n")));
//!
//! queue.update_key(&"m", 0).unwrap();
//! assert_eq!(queue.pop(), Ok((0, "m")));
//! assert_eq!(queue.pop(), Ok((1, "n")));
//! assert_eq!(queue.key_at(&"i"), Some(&4));
//! ```
//!
//! [`key_at`]: IndexedPriorityQueue::key_at
//! [`update_key`]: IndexedPriorityQueue::update_key

use crate::binary::Binary;
use crate::compare::{MaxOrder, MinOrder};
use crate::engine::{HeapCore, HeapInit};
use crate::error::{HeapError, Result};
use crate::k_ary::KAry;
use crate::traits::{Arity, Compare, HeapKind, NodeStore};
use crate::util::range;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Value slots plus the key and position maps
#[derive(Debug, Clone)]
struct IndexedSlots<K, V, C> {
    nodes: Vec<V>,
    key_map: FxHashMap<V, K>,
    index_map: FxHashMap<V, usize>,
    comp: C,
}

impl<K, V, C> IndexedSlots<K, V, C>
where
    V: Eq + Hash + Clone,
{
    fn build(keys: Vec<K>, nodes: Vec<V>, comp: C) -> Result<Self> {
        if keys.len() != nodes.len() {
            return Err(HeapError::LengthMismatch {
                keys: keys.len(),
                values: nodes.len(),
            });
        }

        let mut index_map = FxHashMap::default();
        index_map.reserve(nodes.len());
        for (node, index) in nodes.iter().zip(range(nodes.len(), 0)) {
            if index_map.insert(node.clone(), index).is_some() {
                return Err(HeapError::Duplicate);
            }
        }

        let key_map = nodes.iter().cloned().zip(keys).collect();

        Ok(Self {
            nodes,
            key_map,
            index_map,
            comp,
        })
    }
}

impl<K, V, C> NodeStore for IndexedSlots<K, V, C>
where
    V: Eq + Hash,
    C: Compare<K>,
{
    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn comp(&self, a: usize, b: usize) -> bool {
        self.comp
            .comp(&self.key_map[&self.nodes[a]], &self.key_map[&self.nodes[b]])
    }

    fn swap_nodes(&mut self, i: usize, j: usize) {
        // positions first, then the slots themselves
        let (Some(&at_i), Some(&at_j)) = (
            self.index_map.get(&self.nodes[i]),
            self.index_map.get(&self.nodes[j]),
        ) else {
            self.nodes.swap(i, j);
            return;
        };
        if let Some(position) = self.index_map.get_mut(&self.nodes[i]) {
            *position = at_j;
        }
        if let Some(position) = self.index_map.get_mut(&self.nodes[j]) {
            *position = at_i;
        }
        self.nodes.swap(i, j);
    }
}

/// A heap of values ordered by per-value keys, with O(1) value lookup
///
/// The defaults give a binary min-queue over the keys' natural order.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K, V, A = Binary, C = MinOrder> {
    core: HeapCore<IndexedSlots<K, V, C>, A>,
}

/// Binary min-queue over the keys' natural order
pub type MinPriorityQueue<K, V> = IndexedPriorityQueue<K, V, Binary, MinOrder>;
/// Binary max-queue over the keys' natural order
pub type MaxPriorityQueue<K, V> = IndexedPriorityQueue<K, V, Binary, MaxOrder>;
/// K-ary min-queue over the keys' natural order
pub type MinKPriorityQueue<K, V> = IndexedPriorityQueue<K, V, KAry, MinOrder>;
/// K-ary max-queue over the keys' natural order
pub type MaxKPriorityQueue<K, V> = IndexedPriorityQueue<K, V, KAry, MaxOrder>;

impl<K: Ord, V: Eq + Hash + Clone> IndexedPriorityQueue<K, V, Binary, MinOrder> {
    /// Creates a binary min-queue associating `keys[i]` with `values[i]`
    ///
    /// # Errors
    /// Returns [`HeapError::LengthMismatch`] if the sequences differ in
    /// length and [`HeapError::Duplicate`] if a value repeats.
    pub fn min(keys: Vec<K>, values: Vec<V>, init: HeapInit) -> Result<Self> {
        Self::with_comparator(keys, values, Binary, MinOrder, init)
    }

    /// Creates an empty binary min-queue
    pub fn new() -> Self {
        Self::empty(Binary, MinOrder)
    }
}

impl<K: Ord, V: Eq + Hash + Clone> IndexedPriorityQueue<K, V, Binary, MaxOrder> {
    /// Creates a binary max-queue associating `keys[i]` with `values[i]`
    ///
    /// # Errors
    /// Returns [`HeapError::LengthMismatch`] if the sequences differ in
    /// length and [`HeapError::Duplicate`] if a value repeats.
    pub fn max(keys: Vec<K>, values: Vec<V>, init: HeapInit) -> Result<Self> {
        Self::with_comparator(keys, values, Binary, MaxOrder, init)
    }
}

impl<K: Ord, V: Eq + Hash + Clone> IndexedPriorityQueue<K, V, KAry, MinOrder> {
    /// Creates a k-ary min-queue associating `keys[i]` with `values[i]`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] unless `2 < k <= 64`, plus the
    /// errors of [`IndexedPriorityQueue::min`].
    pub fn min_k(k: usize, keys: Vec<K>, values: Vec<V>, init: HeapInit) -> Result<Self> {
        Self::with_comparator(keys, values, KAry::new(k)?, MinOrder, init)
    }
}

impl<K: Ord, V: Eq + Hash + Clone> IndexedPriorityQueue<K, V, KAry, MaxOrder> {
    /// Creates a k-ary max-queue associating `keys[i]` with `values[i]`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArity`] unless `2 < k <= 64`, plus the
    /// errors of [`IndexedPriorityQueue::max`].
    pub fn max_k(k: usize, keys: Vec<K>, values: Vec<V>, init: HeapInit) -> Result<Self> {
        Self::with_comparator(keys, values, KAry::new(k)?, MaxOrder, init)
    }
}

impl<K, V, A, C> IndexedPriorityQueue<K, V, A, C>
where
    V: Eq + Hash + Clone,
    A: Arity,
    C: Compare<K>,
{
    /// Creates a queue with an explicit arity and key comparator
    ///
    /// # Errors
    /// Returns [`HeapError::LengthMismatch`] if the sequences differ in
    /// length and [`HeapError::Duplicate`] if a value repeats.
    pub fn with_comparator(
        keys: Vec<K>,
        values: Vec<V>,
        arity: A,
        comp: C,
        init: HeapInit,
    ) -> Result<Self> {
        let store = IndexedSlots::build(keys, values, comp)?;
        Ok(Self {
            core: HeapCore::with_init(store, arity, init),
        })
    }

    /// Creates an empty queue with an explicit arity and key comparator
    pub fn empty(arity: A, comp: C) -> Self {
        let store = IndexedSlots {
            nodes: Vec::new(),
            key_map: FxHashMap::default(),
            index_map: FxHashMap::default(),
            comp,
        };
        Self {
            core: HeapCore::new(store, arity),
        }
    }

    /// Returns the number of values in the queue
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Adds `value` with priority `key`
    ///
    /// If `value` is already queued its key is replaced and the value is
    /// re-sifted in both directions; no second slot is created.
    pub fn push(&mut self, key: K, value: V) {
        if let Some(&index) = self.core.store().index_map.get(&value) {
            tracing::debug!(index, "push of a queued value replaces its key");
            self.core.store_mut().key_map.insert(value.clone(), key);
            self.core.heapify_up(index);
            if let Some(&index) = self.core.store().index_map.get(&value) {
                self.core.heapify_down(index);
            }
            return;
        }

        let index = self.len();
        let store = self.core.store_mut();
        store.index_map.insert(value.clone(), index);
        store.key_map.insert(value.clone(), key);
        store.nodes.push(value);
        self.core.heapify_up(index);
    }

    /// Removes the root value, returning it with its key
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue has no values.
    pub fn pop(&mut self) -> Result<(K, V)> {
        let store = self.core.store_mut();
        let Some(root) = store.nodes.first() else {
            return Err(HeapError::Empty);
        };
        let key = store.key_map.remove(root).ok_or(HeapError::NotFound)?;
        store.index_map.remove(root);

        // the last value takes the root slot
        let value = store.nodes.swap_remove(0);
        if let Some(front) = store.nodes.first() {
            if let Some(position) = store.index_map.get_mut(front) {
                *position = 0;
            }
            self.core.heapify_down(0);
        }

        Ok((key, value))
    }

    /// Replaces the key of a queued value and restores order
    ///
    /// The sift direction depends only on the heap kind: a min-queue sifts
    /// up and a max-queue sifts down, whatever the old key was.
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if `value` is not queued; the queue
    /// is left unchanged.
    pub fn update_key(&mut self, value: &V, key: K) -> Result<()> {
        let store = self.core.store_mut();
        let Some(&index) = store.index_map.get(value) else {
            return Err(HeapError::NotFound);
        };
        if let Some(current) = store.key_map.get_mut(value) {
            *current = key;
        }

        match store.comp.kind() {
            HeapKind::Min => self.core.heapify_up(index),
            HeapKind::Max => self.core.heapify_down(index),
        }
        Ok(())
    }

    /// The key currently associated with `value`
    pub fn key_at(&self, value: &V) -> Option<&K> {
        self.core.store().key_map.get(value)
    }

    /// Returns true if `value` is queued
    pub fn contains(&self, value: &V) -> bool {
        self.core.store().index_map.contains_key(value)
    }

    /// The slot currently holding `value`
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.core.store().index_map.get(value).copied()
    }

    /// The root value
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue has no values.
    pub fn top(&self) -> Result<&V> {
        self.core.store().nodes.first().ok_or(HeapError::Empty)
    }

    /// The root value together with its key
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue has no values.
    pub fn top_key_value(&self) -> Result<(&K, &V)> {
        let value = self.top()?;
        let key = self.key_at(value).ok_or(HeapError::NotFound)?;
        Ok((key, value))
    }

    /// The values in slot order
    pub fn values(&self) -> &[V] {
        &self.core.store().nodes
    }

    /// Returns true if every slot satisfies the heap property on its key
    pub fn is_valid_heap(&self) -> bool {
        self.core.is_valid_heap()
    }

    /// Whether the root holds the smallest or the largest key
    pub fn kind(&self) -> HeapKind {
        self.core.store().comp.kind()
    }

    /// The arity strategy
    pub fn arity(&self) -> A {
        self.core.arity()
    }
}

impl<K: Ord, V: Eq + Hash + Clone> Default for IndexedPriorityQueue<K, V, Binary, MinOrder> {
    fn default() -> Self {
        Self::new()
    }
}

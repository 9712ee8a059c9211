//! Array heap engine
//!
//! [`HeapCore`] pairs a [`NodeStore`] with an [`Arity`] and implements the
//! sift algorithms once for every combination. All slot mutation goes
//! through [`NodeStore::swap_nodes`].

use crate::traits::{Arity, NodeStore};

/// How a heap treats the sequence it is constructed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeapInit {
    /// Rearrange the input with a bottom-up build, O(n)
    #[default]
    Build,
    /// Trust that the input already satisfies the heap property, O(1)
    ///
    /// This is not checked. Supplying a sequence that is not a heap gives
    /// an unspecified extraction order.
    AssumeHeap,
}

/// Arity-generic heap engine over a slot store
#[derive(Debug, Clone)]
pub struct HeapCore<S, A> {
    store: S,
    arity: A,
}

impl<S: NodeStore, A: Arity> HeapCore<S, A> {
    /// Wraps `store` without reordering it
    pub fn new(store: S, arity: A) -> Self {
        Self { store, arity }
    }

    /// Wraps `store`, building the heap unless `init` says it already is one
    pub fn with_init(store: S, arity: A, init: HeapInit) -> Self {
        let mut core = Self::new(store, arity);
        core.heapify(init);
        core
    }

    /// Builds the heap if `init` is [`HeapInit::Build`]
    pub fn heapify(&mut self, init: HeapInit) {
        match init {
            HeapInit::Build => self.build_heap(),
            HeapInit::AssumeHeap => {
                tracing::trace!(len = self.store.len(), "trusting caller-supplied heap order");
            }
        }
    }

    /// Number of live slots
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if there are no live slots
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The arity strategy
    pub fn arity(&self) -> A {
        self.arity
    }

    /// Shared access to the store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Exclusive access to the store
    ///
    /// Changes made here bypass the sift algorithms; the caller restores
    /// the heap property afterwards.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the engine, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Moves the element at `index` up until its parent no longer loses to it
    ///
    /// # Time Complexity
    /// O(log_K n)
    pub fn heapify_up(&mut self, index: usize) {
        let mut i = index;
        while i > 0 {
            let p = self.arity.parent(i);
            if !self.store.comp(p, i) {
                break;
            }
            self.store.swap_nodes(i, p);
            i = p;
        }
    }

    /// Moves the element at `index` down until no child beats it
    ///
    /// Children are scanned left to right and the candidate only changes on
    /// a strict win, so among equal children the leftmost is chosen.
    ///
    /// # Time Complexity
    /// O(K log_K n)
    pub fn heapify_down(&mut self, index: usize) {
        let len = self.store.len();
        let mut i = index;

        while !self.arity.is_leaf(i, len) {
            let mut winner = i;
            for child in self.arity.children(i, len) {
                if self.store.comp(winner, child) {
                    winner = child;
                }
            }

            if winner == i {
                return;
            }

            self.store.swap_nodes(i, winner);
            i = winner;
        }
    }

    /// Rearranges every slot into heap order, bottom-up
    ///
    /// # Time Complexity
    /// O(n)
    pub fn build_heap(&mut self) {
        let len = self.store.len();
        let bound = self.arity.build_bound(len);
        tracing::trace!(len, arity = self.arity.branching(), "building heap");

        for i in (0..bound).rev() {
            self.heapify_down(i);
        }
    }

    /// Returns true if no slot loses to one of its children
    pub fn is_valid_heap(&self) -> bool {
        let len = self.store.len();
        (0..len).all(|i| {
            self.arity
                .children(i, len)
                .all(|child| !self.store.comp(i, child))
        })
    }
}

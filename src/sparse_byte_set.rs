//! Append-only set of bytes backed by a sparse/dense array pair
//!
//! Follows Briggs and Torczon, "An Efficient Representation for Sparse
//! Sets". The set never allocates and every operation except
//! [`reset`](SparseByteSet::reset) runs in constant time.

/// Set of `u8` values with O(1) insert and membership
#[derive(Clone)]
pub struct SparseByteSet {
    // u16 so that a full set (256 entries) fits
    size: u16,
    sparse: [u8; SparseByteSet::CAPACITY],
    dense: [u8; SparseByteSet::CAPACITY],
}

impl SparseByteSet {
    /// Number of distinct bytes
    pub const CAPACITY: usize = 256;

    /// Creates an empty set
    pub fn new() -> Self {
        Self {
            size: 0,
            sparse: [0; Self::CAPACITY],
            dense: [0; Self::CAPACITY],
        }
    }

    /// Adds `byte`, returning true if it was not already present
    pub fn add(&mut self, byte: u8) -> bool {
        if self.contains(byte) {
            return false;
        }
        let slot = self.size as usize;
        self.dense[slot] = byte;
        self.sparse[byte as usize] = slot as u8;
        self.size += 1;
        true
    }

    /// Returns true if `byte` is in the set
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        let slot = self.sparse[byte as usize];
        u16::from(slot) < self.size && self.dense[slot as usize] == byte
    }

    /// Removes every byte
    pub fn reset(&mut self) {
        self.size = 0;
        self.sparse.fill(0);
        self.dense.fill(0);
    }

    /// Number of bytes in the set
    pub fn len(&self) -> usize {
        self.size as usize
    }

    /// Returns true if the set holds no bytes
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The bytes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.dense[..self.len()].iter().copied()
    }
}

impl Default for SparseByteSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SparseByteSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

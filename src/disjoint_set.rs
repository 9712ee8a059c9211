//! Disjoint set (union-find) over arbitrary hashable elements
//!
//! Elements are mapped to dense indices internally, so any `Eq + Hash`
//! type can be used. Union by rank combined with path splitting gives
//! near-constant amortized cost for every operation.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::DisjointSet;
//!
//! let mut sets = DisjointSet::from_elements(vec!["a", "b", "c"]).unwrap();
//! sets.unite(&"a", &"c").unwrap();
//! assert_eq!(sets.are_connected(&"a", &"c"), Ok(true));
//! assert_eq!(sets.are_connected(&"a", &"b"), Ok(false));
//! ```

use crate::error::{HeapError, Result};
use crate::util::range;
use rustc_hash::FxHashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy)]
struct Node {
    parent: usize,
    rank: usize,
}

impl Node {
    fn root(index: usize) -> Self {
        Self {
            parent: index,
            rank: 0,
        }
    }
}

/// Union-find with union by rank and path splitting
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    nodes: Vec<Node>,
    index_map: FxHashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    /// Creates an empty disjoint set
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index_map: FxHashMap::default(),
        }
    }

    /// Creates one singleton set per element
    ///
    /// # Errors
    /// Returns [`HeapError::Duplicate`] if an element repeats.
    pub fn from_elements(elements: Vec<T>) -> Result<Self> {
        let size = elements.len();
        let mut index_map = FxHashMap::default();
        index_map.reserve(size);
        for (element, index) in elements.into_iter().zip(range(size, 0)) {
            if index_map.insert(element, index).is_some() {
                return Err(HeapError::Duplicate);
            }
        }

        Ok(Self {
            nodes: range(size, 0).map(Node::root).collect(),
            index_map,
        })
    }

    /// Number of elements across all sets
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no element has been added
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `x` has been added
    pub fn contains(&self, x: &T) -> bool {
        self.index_map.contains_key(x)
    }

    /// Adds `x` as a new singleton set, returning its internal index
    ///
    /// # Errors
    /// Returns [`HeapError::Duplicate`] if `x` is already present.
    pub fn add(&mut self, x: T) -> Result<usize> {
        if self.index_map.contains_key(&x) {
            return Err(HeapError::Duplicate);
        }
        let index = self.nodes.len();
        self.nodes.push(Node::root(index));
        self.index_map.insert(x, index);
        Ok(index)
    }

    /// Merges the sets containing `x` and `y`
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if either element is absent.
    pub fn unite(&mut self, x: &T, y: &T) -> Result<()> {
        let mut i = self.find(self.index_of(x)?);
        let mut j = self.find(self.index_of(y)?);
        if i == j {
            return Ok(());
        }

        // the higher-ranked root absorbs the other
        if self.nodes[i].rank < self.nodes[j].rank {
            std::mem::swap(&mut i, &mut j);
        }
        self.nodes[j].parent = i;
        if self.nodes[i].rank == self.nodes[j].rank {
            self.nodes[i].rank += 1;
        }
        Ok(())
    }

    /// Returns true if `x` and `y` are in the same set
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if either element is absent.
    pub fn are_connected(&mut self, x: &T, y: &T) -> Result<bool> {
        let i = self.index_of(x)?;
        let j = self.index_of(y)?;
        Ok(self.find(i) == self.find(j))
    }

    /// Snapshot of every set, keyed by its representative's index
    pub fn get_sets(&mut self) -> FxHashMap<usize, Vec<T>> {
        let entries: Vec<(T, usize)> = self
            .index_map
            .iter()
            .map(|(x, &index)| (x.clone(), index))
            .collect();

        let mut sets: FxHashMap<usize, Vec<T>> = FxHashMap::default();
        for (x, index) in entries {
            sets.entry(self.find(index)).or_default().push(x);
        }
        sets
    }

    fn index_of(&self, x: &T) -> Result<usize> {
        self.index_map.get(x).copied().ok_or(HeapError::NotFound)
    }

    /// Representative of the set holding `index`, splitting the path
    fn find(&mut self, mut index: usize) -> usize {
        while index != self.nodes[index].parent {
            let grandparent = self.nodes[self.nodes[index].parent].parent;
            self.nodes[index].parent = grandparent;
            index = grandparent;
        }
        index
    }
}

impl<T: Eq + Hash + Clone> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_start_disconnected() {
        let mut sets = DisjointSet::from_elements((0..10).collect()).unwrap();
        assert_eq!(sets.len(), 10);
        for i in 0..10 {
            assert_eq!(sets.are_connected(&i, &i), Ok(true));
            if i > 0 {
                assert_eq!(sets.are_connected(&(i - 1), &i), Ok(false));
            }
        }
        assert_eq!(sets.get_sets().len(), 10);
    }

    #[test]
    fn test_unite_is_transitive() {
        let mut sets = DisjointSet::new();
        for c in ['a', 'b', 'c', 'd', 'e'] {
            sets.add(c).unwrap();
        }
        sets.unite(&'a', &'b').unwrap();
        sets.unite(&'c', &'d').unwrap();
        sets.unite(&'b', &'d').unwrap();

        assert_eq!(sets.are_connected(&'a', &'c'), Ok(true));
        assert_eq!(sets.are_connected(&'a', &'e'), Ok(false));

        let mut groups: Vec<Vec<char>> = sets
            .get_sets()
            .into_values()
            .map(|mut group| {
                group.sort();
                group
            })
            .collect();
        groups.sort();
        assert_eq!(groups, vec![vec!['a', 'b', 'c', 'd'], vec!['e']]);
    }

    #[test]
    fn test_unite_same_set_is_noop() {
        let mut sets = DisjointSet::from_elements(vec![1, 2]).unwrap();
        sets.unite(&1, &2).unwrap();
        sets.unite(&2, &1).unwrap();
        assert_eq!(sets.get_sets().len(), 1);
    }

    #[test]
    fn test_missing_and_duplicate_elements() {
        let mut sets = DisjointSet::from_elements(vec!["x"]).unwrap();
        assert_eq!(sets.add("x"), Err(HeapError::Duplicate));
        assert_eq!(sets.unite(&"x", &"y"), Err(HeapError::NotFound));
        assert_eq!(sets.are_connected(&"y", &"x"), Err(HeapError::NotFound));
        assert!(DisjointSet::from_elements(vec![1, 1]).is_err());
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut sets = DisjointSet::from_elements((0..1000).collect()).unwrap();
        for i in 1..1000 {
            sets.unite(&(i - 1), &i).unwrap();
        }
        assert_eq!(sets.are_connected(&0, &999), Ok(true));
        assert_eq!(sets.get_sets().len(), 1);
    }
}

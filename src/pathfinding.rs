//! Dijkstra's and A* search driven by the indexed priority queue
//!
//! The open set is a min [`IndexedPriorityQueue`] holding lightweight node
//! indices keyed by f-score. Relaxing an edge to a node that is still open
//! lowers its key in place with
//! [`update_key`](IndexedPriorityQueue::update_key), which on a min-queue
//! always sifts up, exactly the direction a relaxation needs.
//!
//! A fast hash map (FxHash) maps node states to their bookkeeping entry.
//! Dijkstra is A* with h(n) = 0.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::pathfinding::{SearchNode, dijkstra};
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         vec![
//!             (GridPos { x: self.x + 1, ..self.clone() }, 1),
//!             (GridPos { x: self.x - 1, ..self.clone() }, 1),
//!             (GridPos { y: self.y + 1, ..self.clone() }, 1),
//!             (GridPos { y: self.y - 1, ..self.clone() }, 1),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//! let (path, cost) = dijkstra(&start).unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(path.len(), 5);
//! ```

use crate::binary::Binary;
use crate::compare::MinOrder;
use crate::priority_queue::IndexedPriorityQueue;
use crate::traits::Arity;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// Costs are ordered, copyable, additive, and `Default` is zero.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate successors and to
/// recognise a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
///
/// The heuristic must be admissible (never overestimate the true cost)
/// for A* to find optimal paths.
pub trait AStarNode: SearchNode {
    /// Returns an estimate of the cost from this node to any goal.
    fn heuristic(&self) -> Self::Cost;
}

/// Internal index type; only these are stored in the queue.
type NodeIndex = usize;

/// Bookkeeping for each discovered node.
struct NodeEntry<N: SearchNode> {
    node: N,
    /// Cost from start (g-score)
    g_score: N::Cost,
    came_from: Option<NodeIndex>,
    closed: bool,
}

/// Open set plus discovered-node tables for one search.
struct PathFinder<N: SearchNode, A: Arity> {
    open: IndexedPriorityQueue<N::Cost, NodeIndex, A, MinOrder>,
    nodes: Vec<NodeEntry<N>>,
    state_to_index: FxHashMap<N, NodeIndex>,
}

impl<N: SearchNode, A: Arity> PathFinder<N, A> {
    fn new(arity: A) -> Self {
        PathFinder {
            open: IndexedPriorityQueue::empty(arity, MinOrder),
            nodes: Vec::new(),
            state_to_index: FxHashMap::default(),
        }
    }

    /// Gets or creates an index for a node state.
    fn get_or_create_index(&mut self, node: N, g_score: N::Cost) -> (NodeIndex, bool) {
        if let Some(&index) = self.state_to_index.get(&node) {
            return (index, false);
        }
        let index = self.nodes.len();
        self.state_to_index.insert(node.clone(), index);
        self.nodes.push(NodeEntry {
            node,
            g_score,
            came_from: None,
            closed: false,
        });
        (index, true)
    }

    /// Reconstructs the path from start to the given node index.
    fn reconstruct_path(&self, mut current: NodeIndex) -> Vec<N> {
        let mut path = vec![self.nodes[current].node.clone()];
        while let Some(prev) = self.nodes[current].came_from {
            path.push(self.nodes[prev].node.clone());
            current = prev;
        }
        path.reverse();
        path
    }

    fn run(
        mut self,
        start: &N,
        heuristic: impl Fn(&N) -> N::Cost,
        max_cost: Option<N::Cost>,
        max_nodes: Option<usize>,
    ) -> Option<(Vec<N>, N::Cost)> {
        let (start_index, _) = self.get_or_create_index(start.clone(), N::Cost::default());
        self.open.push(heuristic(start), start_index);
        let mut expanded = 0usize;

        while let Ok((_, current)) = self.open.pop() {
            if max_nodes.is_some_and(|max| expanded >= max) {
                tracing::debug!(expanded, "search stopped at node limit");
                return None;
            }
            expanded += 1;

            let entry = &mut self.nodes[current];
            entry.closed = true;
            let current_g = entry.g_score;

            if max_cost.is_some_and(|max| current_g > max) {
                continue;
            }

            if entry.node.is_goal() {
                tracing::debug!(expanded, discovered = self.nodes.len(), "goal reached");
                return Some((self.reconstruct_path(current), current_g));
            }

            for (neighbor, edge_cost) in entry.node.successors() {
                let tentative_g = current_g + edge_cost;
                let f = tentative_g + heuristic(&neighbor);
                let (index, is_new) = self.get_or_create_index(neighbor, tentative_g);

                let neighbor_entry = &mut self.nodes[index];
                if neighbor_entry.closed {
                    continue;
                }

                if is_new {
                    neighbor_entry.came_from = Some(current);
                    self.open.push(f, index);
                } else if tentative_g < neighbor_entry.g_score {
                    neighbor_entry.g_score = tentative_g;
                    neighbor_entry.came_from = Some(current);
                    if self.open.update_key(&index, f).is_err() {
                        self.open.push(f, index);
                    }
                }
            }
        }

        tracing::debug!(expanded, "open set exhausted without reaching a goal");
        None
    }
}

/// Runs Dijkstra's algorithm from the start node until `is_goal()` returns true.
///
/// Returns the path (start and goal inclusive) and its cost, or `None` if
/// no goal is reachable.
pub fn dijkstra<N: SearchNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    PathFinderBuilder::new(start.clone()).dijkstra()
}

/// Runs A* search from the start node until `is_goal()` returns true.
///
/// Uses the node's `heuristic()` method to guide the search.
pub fn astar<N: AStarNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    PathFinderBuilder::new(start.clone()).astar()
}

/// Builder for pathfinding queries with more configuration options.
///
/// ```rust
/// # use indexed_heaps::pathfinding::{PathFinderBuilder, SearchNode};
/// # use indexed_heaps::KAry;
/// # #[derive(Clone, PartialEq, Eq, Hash)]
/// # struct Counter(u32);
/// # impl SearchNode for Counter {
/// #     type Cost = u32;
/// #     fn successors(&self) -> Vec<(Self, u32)> { vec![(Counter(self.0 + 1), 1)] }
/// #     fn is_goal(&self) -> bool { self.0 == 10 }
/// # }
/// let result = PathFinderBuilder::new(Counter(0))
///     .arity(KAry::new(4).unwrap())
///     .max_nodes(100)
///     .dijkstra();
/// assert_eq!(result.map(|(_, cost)| cost), Some(10));
/// ```
pub struct PathFinderBuilder<N: SearchNode, A: Arity = Binary> {
    start: N,
    arity: A,
    max_cost: Option<N::Cost>,
    max_nodes: Option<usize>,
}

impl<N: SearchNode> PathFinderBuilder<N, Binary> {
    /// Creates a new builder starting from the given node.
    pub fn new(start: N) -> Self {
        PathFinderBuilder {
            start,
            arity: Binary,
            max_cost: None,
            max_nodes: None,
        }
    }
}

impl<N: SearchNode, A: Arity> PathFinderBuilder<N, A> {
    /// Sets the branching factor of the open-set queue.
    pub fn arity<B: Arity>(self, arity: B) -> PathFinderBuilder<N, B> {
        PathFinderBuilder {
            start: self.start,
            arity,
            max_cost: self.max_cost,
            max_nodes: self.max_nodes,
        }
    }

    /// Sets the maximum cost to explore.
    pub fn max_cost(mut self, cost: N::Cost) -> Self {
        self.max_cost = Some(cost);
        self
    }

    /// Sets the maximum number of nodes to expand.
    pub fn max_nodes(mut self, count: usize) -> Self {
        self.max_nodes = Some(count);
        self
    }

    /// Runs Dijkstra's algorithm with the configured settings.
    pub fn dijkstra(self) -> Option<(Vec<N>, N::Cost)> {
        PathFinder::new(self.arity).run(
            &self.start,
            |_| N::Cost::default(),
            self.max_cost,
            self.max_nodes,
        )
    }

    /// Runs A* search with the configured settings.
    pub fn astar(self) -> Option<(Vec<N>, N::Cost)>
    where
        N: AStarNode,
    {
        PathFinder::new(self.arity).run(
            &self.start,
            |n: &N| n.heuristic(),
            self.max_cost,
            self.max_nodes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k_ary::KAry;

    /// Node on a small weighted graph given as an adjacency list
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct GraphNode {
        id: usize,
        goal: usize,
        edges: &'static [&'static [(usize, u32)]],
    }

    impl SearchNode for GraphNode {
        type Cost = u32;

        fn successors(&self) -> Vec<(Self, u32)> {
            self.edges[self.id]
                .iter()
                .map(|&(to, w)| (GraphNode { id: to, ..self.clone() }, w))
                .collect()
        }

        fn is_goal(&self) -> bool {
            self.id == self.goal
        }
    }

    // 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (2), 1 -> 3 (1), 2 -> 3 (5)
    const EDGES: &[&[(usize, u32)]] = &[&[(1, 4), (2, 1)], &[(3, 1)], &[(1, 2), (3, 5)], &[]];

    fn ids(path: &[GraphNode]) -> Vec<usize> {
        path.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_relaxation_uses_update_key() {
        let start = GraphNode { id: 0, goal: 3, edges: EDGES };
        let (path, cost) = dijkstra(&start).unwrap();
        assert_eq!(cost, 4);
        assert_eq!(ids(&path), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_k_ary_open_set_agrees() {
        let start = GraphNode { id: 0, goal: 3, edges: EDGES };
        let (path, cost) = PathFinderBuilder::new(start)
            .arity(KAry::new(8).unwrap())
            .dijkstra()
            .unwrap();
        assert_eq!(cost, 4);
        assert_eq!(ids(&path), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_unreachable_goal() {
        let start = GraphNode { id: 3, goal: 0, edges: EDGES };
        assert!(dijkstra(&start).is_none());
    }

    #[test]
    fn test_limits() {
        let start = GraphNode { id: 0, goal: 3, edges: EDGES };
        assert!(PathFinderBuilder::new(start.clone()).max_cost(3).dijkstra().is_none());
        assert!(PathFinderBuilder::new(start.clone()).max_nodes(1).dijkstra().is_none());
        assert!(PathFinderBuilder::new(start).max_nodes(4).dijkstra().is_some());
    }
}

//! The Neighborhood of a square Grid: which Nodes are one step apart, and how far apart two Nodes
//! are estimated to be.

use crate::{path::Cost, NodeId, Point};

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood).
/// Every step has a Cost of `1`.
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// The Heuristic is the truncated Euclidean distance. It never exceeds the number of steps needed,
/// and it never drops by more than `1` per step, so it is both admissible and consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    dim: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood for a `dim` x `dim` Grid.
    pub fn new(dim: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { dim }
    }

    /// The side length of the Grid
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Converts a Node into its `(row, col)` on the Grid.
    pub fn position(&self, node: NodeId) -> Point {
        (node / self.dim, node % self.dim)
    }

    /// Converts a `(row, col)` on the Grid into its Node.
    pub fn node_at(&self, (row, col): Point) -> NodeId {
        row * self.dim + col
    }

    /// Collects the Nodes one step away from `node` into `target`, in the order
    /// up, down, left, right.
    ///
    /// Note that this does not check whether the Nodes can be walked on.
    /// `target` is not cleared.
    pub fn get_all_neighbors(&self, node: NodeId, target: &mut Vec<NodeId>) {
        let (row, col) = self.position(node);
        if row != 0 {
            target.push(node - self.dim);
        }
        if row + 1 < self.dim {
            target.push(node + self.dim);
        }
        if col != 0 {
            target.push(node - 1);
        }
        if col + 1 < self.dim {
            target.push(node + 1);
        }
    }

    /// `floor(sqrt(d_row² + d_col²))` between the two Nodes.
    pub fn heuristic(&self, node: NodeId, goal: NodeId) -> Cost {
        let (r0, c0) = self.position(node);
        let (r1, c1) = self.position(goal);
        let d_row = r0.abs_diff(r1) as u64;
        let d_col = c0.abs_diff(c1) as u64;
        isqrt(d_row * d_row + d_col * d_col) as Cost
    }
}

fn isqrt(value: u64) -> u64 {
    let mut root = (value as f64).sqrt() as u64;
    // float rounding may be off by one in either direction
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}

#[test]
fn test_manhattan_get_all_neighbors() {
    let neighborhood = ManhattanNeighborhood::new(5);
    let mut neighbors = vec![];
    neighborhood.get_all_neighbors(10, &mut neighbors);
    // (2, 0): no left neighbor
    assert_eq!(neighbors, vec![5, 15, 11]);

    neighbors.clear();
    neighborhood.get_all_neighbors(24, &mut neighbors);
    assert_eq!(neighbors, vec![19, 23]);
}

#[test]
fn test_euclidean_heuristic() {
    let neighborhood = ManhattanNeighborhood::new(5);
    assert_eq!(neighborhood.heuristic(0, 0), 0);
    // (0, 0) -> (2, 2): sqrt(8) = 2.83
    assert_eq!(neighborhood.heuristic(0, 12), 2);
    // (0, 0) -> (3, 4): exactly 5
    assert_eq!(neighborhood.heuristic(0, 19), 5);
    // (4, 3) -> (0, 0)
    assert_eq!(neighborhood.heuristic(23, 0), 5);
    // (4, 0) -> (0, 1): sqrt(17) = 4.12
    assert_eq!(neighborhood.heuristic(20, 1), 4);
}

#[test]
fn test_heuristic_is_consistent() {
    let neighborhood = ManhattanNeighborhood::new(9);
    let mut neighbors = vec![];
    for goal in 0..81 {
        for node in 0..81 {
            neighbors.clear();
            neighborhood.get_all_neighbors(node, &mut neighbors);
            for &other in &neighbors {
                assert!(neighborhood.heuristic(node, goal) <= 1 + neighborhood.heuristic(other, goal));
            }
        }
    }
}

#[test]
fn test_isqrt() {
    for value in 0..10_000u64 {
        let root = isqrt(value);
        assert!(root * root <= value && (root + 1) * (root + 1) > value);
    }
}

use crate::{neighbors::ManhattanNeighborhood, path::Cost, NodeId, Point};

/// A square Grid of `dim` x `dim` cells, stored row-major.
///
/// A cell value of `0` is a wall, any other value can be walked on. Walking from a cell to one of
/// its 4 direct neighbors always costs `1`, regardless of the values.
///
/// ## Examples
/// ```
/// use parallel_astar::Graph;
///
/// let graph = Graph::from_rows(&[
///     [1, 1, 1],
///     [0, 0, 1],
///     [1, 1, 1],
/// ]);
///
/// assert_eq!(graph.dim(), 3);
/// assert_eq!(graph.node_at((1, 2)), 5);
/// assert!(!graph.is_passable(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    neighborhood: ManhattanNeighborhood,
    cells: Vec<u32>,
}

impl Graph {
    /// Creates a Graph from its side length and `dim * dim` row-major cells.
    ///
    /// ## Panics
    /// if `cells` does not contain exactly `dim * dim` values.
    #[track_caller]
    pub fn new(dim: usize, cells: Vec<u32>) -> Graph {
        assert_eq!(
            cells.len(),
            dim * dim,
            "a Graph of dim {} needs {} cells",
            dim,
            dim * dim
        );
        Graph {
            neighborhood: ManhattanNeighborhood::new(dim),
            cells,
        }
    }

    /// Creates a Graph from a list of rows. Mostly useful for tests and examples.
    ///
    /// ## Panics
    /// if the rows do not form a square.
    #[track_caller]
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Graph {
        let dim = rows.len();
        let mut cells = Vec::with_capacity(dim * dim);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), dim, "the Grid must be square");
            cells.extend_from_slice(row);
        }
        Graph::new(dim, cells)
    }

    /// The side length of the Grid
    pub fn dim(&self) -> usize {
        self.neighborhood.dim()
    }

    /// The number of Nodes (cells) in the Grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` for the degenerate Grid with `dim == 0`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The raw cell values, row-major.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// The Neighborhood used to move on this Grid
    pub fn neighborhood(&self) -> &ManhattanNeighborhood {
        &self.neighborhood
    }

    /// `true` if `(row, col)` lies on the Grid.
    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.dim() && col < self.dim()
    }

    /// The Node at `(row, col)`
    pub fn node_at(&self, point: Point) -> NodeId {
        self.neighborhood.node_at(point)
    }

    /// The `(row, col)` of a Node
    pub fn position(&self, node: NodeId) -> Point {
        self.neighborhood.position(node)
    }

    /// `true` if the cell of `node` is not a wall.
    #[track_caller]
    pub fn is_passable(&self, node: NodeId) -> bool {
        self.cells[node] != 0
    }

    /// Collects all passable Nodes one step away from `node` into `target`.
    ///
    /// `target` is cleared first.
    pub fn passable_neighbors(&self, node: NodeId, target: &mut Vec<NodeId>) {
        target.clear();
        self.neighborhood.get_all_neighbors(node, target);
        target.retain(|&other| self.is_passable(other));
    }

    /// The estimated Cost of walking from `node` to `goal`.
    pub fn heuristic(&self, node: NodeId, goal: NodeId) -> Cost {
        self.neighborhood.heuristic(node, goal)
    }

    /// `true` if the two Nodes are exactly one step apart.
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        let (r0, c0) = self.position(a);
        let (r1, c1) = self.position(b);
        r0.abs_diff(r1) + c0.abs_diff(c1) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passable_neighbors_skip_walls() {
        let graph = Graph::from_rows(&[[1, 0, 1], [1, 1, 0], [1, 1, 1]]);
        let mut neighbors = vec![7];

        graph.passable_neighbors(4, &mut neighbors);
        assert_eq!(neighbors, vec![7, 3]);

        graph.passable_neighbors(0, &mut neighbors);
        assert_eq!(neighbors, vec![3]);
    }

    #[test]
    fn adjacency() {
        let graph = Graph::new(3, vec![1; 9]);
        assert!(graph.are_adjacent(0, 1));
        assert!(graph.are_adjacent(4, 7));
        assert!(!graph.are_adjacent(2, 3));
        assert!(!graph.are_adjacent(0, 4));
        assert!(!graph.are_adjacent(4, 4));
    }

    #[test]
    #[should_panic]
    fn wrong_cell_count() {
        Graph::new(3, vec![1; 8]);
    }
}

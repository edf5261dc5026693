use super::ValidationError;
use crate::{bfs_search, Cost, Graph, NodeId, Point};

use log::debug;

/// Checks a Path read back from an output file against the Grid it was searched on.
///
/// `declared` is the Node count from the first line of the file, `path` the Nodes from source to
/// target. A valid Path starts at `source`, ends at `target`, only moves between adjacent cells,
/// never enters a wall (the source cell itself is not checked) and is as short as a
/// breadth-first search says it can be. An empty Path is only valid if the target is unreachable.
///
/// ## Returns
/// the Cost of the Path, or `None` for a correctly empty one.
///
/// ## Examples
/// ```
/// use parallel_astar::{io::{validate_path, ValidationError}, Graph};
///
/// let graph = Graph::new(2, vec![1; 4]);
///
/// assert_eq!(validate_path(&graph, 0, 3, 3, &[(0, 0), (0, 1), (1, 1)]), Ok(Some(2)));
/// assert_eq!(
///     validate_path(&graph, 0, 3, 2, &[(0, 0), (1, 1)]),
///     Err(ValidationError::IllegalMove((0, 0), (1, 1)))
/// );
/// ```
pub fn validate_path(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    declared: usize,
    path: &[Point],
) -> Result<Option<Cost>, ValidationError> {
    if declared != path.len() {
        return Err(ValidationError::CountMismatch {
            declared,
            found: path.len(),
        });
    }
    let optimal = bfs_search(graph, source, target).map(|path| path.cost());

    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return match optimal {
            Some(optimal) => Err(ValidationError::MissingPath { optimal }),
            None => Ok(None),
        };
    };

    if let Some(&point) = path.iter().find(|&&point| !graph.contains(point)) {
        return Err(ValidationError::OutOfBounds(point));
    }
    let expected = (graph.position(source), graph.position(target));
    if (first, last) != expected {
        return Err(ValidationError::WrongEndpoints {
            expected,
            found: (first, last),
        });
    }

    for pair in path.windows(2) {
        let (from, to) = (graph.node_at(pair[0]), graph.node_at(pair[1]));
        if !graph.is_passable(to) {
            return Err(ValidationError::Wall(pair[1]));
        }
        if !graph.are_adjacent(from, to) {
            return Err(ValidationError::IllegalMove(pair[0], pair[1]));
        }
    }

    let cost = path.len() - 1;
    match optimal {
        Some(optimal) if cost > optimal => Err(ValidationError::NotOptimal { cost, optimal }),
        _ => {
            debug!("path of cost {} is valid", cost);
            Ok(Some(cost))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph {
        Graph::from_rows(&[
            [1, 1, 1, 1], //
            [0, 0, 0, 1],
            [1, 1, 1, 1],
            [1, 0, 0, 0],
        ])
    }

    const SHORTEST: [Point; 10] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 3),
        (2, 3),
        (2, 2),
        (2, 1),
        (2, 0),
        (3, 0),
    ];

    #[test]
    fn accepts_a_shortest_path() {
        let graph = graph();
        assert_eq!(validate_path(&graph, 0, 12, 10, &SHORTEST), Ok(Some(9)));
        // single Node
        assert_eq!(validate_path(&graph, 5, 5, 1, &[(1, 1)]), Ok(Some(0)));
    }

    #[test]
    fn rejects_corrupted_paths() {
        let graph = graph();

        assert_eq!(
            validate_path(&graph, 0, 12, 11, &SHORTEST),
            Err(ValidationError::CountMismatch { declared: 11, found: 10 })
        );

        let mut through_wall = SHORTEST;
        through_wall[4] = (1, 2);
        assert_eq!(
            validate_path(&graph, 0, 12, 10, &through_wall),
            Err(ValidationError::Wall((1, 2)))
        );

        let mut jump = SHORTEST.to_vec();
        jump.remove(5);
        assert_eq!(
            validate_path(&graph, 0, 12, 9, &jump),
            Err(ValidationError::IllegalMove((1, 3), (2, 2)))
        );

        assert_eq!(
            validate_path(&graph, 0, 12, 9, &SHORTEST[..9]),
            Err(ValidationError::WrongEndpoints {
                expected: ((0, 0), (3, 0)),
                found: ((0, 0), (2, 0)),
            })
        );

        let mut outside = SHORTEST;
        outside[9] = (4, 0);
        assert_eq!(
            validate_path(&graph, 0, 12, 10, &outside),
            Err(ValidationError::OutOfBounds((4, 0)))
        );

        assert_eq!(
            validate_path(&graph, 0, 12, 0, &[]),
            Err(ValidationError::MissingPath { optimal: 9 })
        );
    }

    #[test]
    fn rejects_detours() {
        let graph = Graph::new(3, vec![1; 9]);
        let detour = [(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1), (2, 2)];

        assert_eq!(
            validate_path(&graph, 0, 8, 7, &detour),
            Err(ValidationError::NotOptimal { cost: 6, optimal: 4 })
        );
    }

    #[test]
    fn empty_output_for_unreachable_target() {
        let graph = Graph::from_rows(&[
            [1, 1, 1], //
            [0, 0, 0],
            [1, 1, 1],
        ]);
        assert_eq!(validate_path(&graph, 0, 8, 0, &[]), Ok(None));
    }
}

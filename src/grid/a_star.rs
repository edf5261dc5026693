use super::{Graph, HeuristicElement, Path};
use crate::NodeId;

use hashbrown::HashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Searches the Grid single-threaded using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// with the truncated Euclidean Heuristic.
///
/// Only the cells reached *from* `start` need to be passable; the cell of `start` itself is not
/// checked.
///
/// ## Examples
/// ```
/// use parallel_astar::{grid::a_star_search, Graph};
///
/// let graph = Graph::from_rows(&[
///     [1, 1, 1],
///     [0, 0, 1],
///     [1, 1, 1],
/// ]);
/// let path = a_star_search(&graph, 0, 6).unwrap();
///
/// assert_eq!(path.cost(), 6);
/// assert_eq!(path, vec![0, 1, 2, 5, 8, 7, 6]);
/// ```
///
/// ## Returns
/// the Path, if one was found, or None if the `goal` is unreachable.
/// The first Node in the Path is always the `start` and the last is the `goal`
pub fn a_star_search(graph: &Graph, start: NodeId, goal: NodeId) -> Option<Path<NodeId>> {
    if start == goal {
        return Some(Path::from_slice(&[start], 0));
    }
    let mut visited = HashMap::with_capacity(graph.len() / 4);
    let mut next = BinaryHeap::new();
    next.push(HeuristicElement(start, 0, graph.heuristic(start, goal)));
    visited.insert(start, (0, start));

    let mut all_neighbors = vec![];

    while let Some(HeuristicElement(current_id, current_cost, _)) = next.pop() {
        if current_id == goal {
            break;
        }
        match current_cost.cmp(&visited[&current_id].0) {
            Ordering::Greater => continue,
            Ordering::Equal => {}
            Ordering::Less => panic!("Binary Heap failed"),
        }

        let other_cost = current_cost + 1;

        graph.passable_neighbors(current_id, &mut all_neighbors);
        for &other_id in all_neighbors.iter() {
            let mut needs_visit = true;
            if let Some((prev_cost, prev_id)) = visited.get_mut(&other_id) {
                if *prev_cost > other_cost {
                    *prev_cost = other_cost;
                    *prev_id = current_id;
                } else {
                    needs_visit = false;
                }
            } else {
                visited.insert(other_id, (other_cost, current_id));
            }

            if needs_visit {
                let heuristic = graph.heuristic(other_id, goal);
                next.push(HeuristicElement(
                    other_id,
                    other_cost,
                    other_cost + heuristic,
                ));
            }
        }
    }

    let &(goal_cost, _) = visited.get(&goal)?;

    let steps = {
        let mut steps = vec![];
        let mut current = goal;

        while current != start {
            steps.push(current);
            let (_, prev) = visited[&current];
            current = prev;
        }
        steps.push(start);
        steps.reverse();
        steps
    };

    Some(Path::new(steps, goal_cost))
}

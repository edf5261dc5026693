use super::{Cost, Graph, Path};
use crate::{path::INFINITY, NodeId};

use std::collections::VecDeque;

/// Searches the Grid with a plain breadth-first search.
///
/// With every step costing `1`, this yields the exact shortest distance and is the baseline that
/// both A* variants are measured against.
///
/// ## Returns
/// the Path from `start` to `goal`, or None if the `goal` is unreachable.
pub fn bfs_search(graph: &Graph, start: NodeId, goal: NodeId) -> Option<Path<NodeId>> {
    let mut visited: Vec<(Cost, NodeId)> = vec![(INFINITY, start); graph.len()];
    let mut next = VecDeque::new();
    visited[start] = (0, start);
    next.push_back(start);

    let mut all_neighbors = vec![];

    while let Some(current_id) = next.pop_front() {
        if current_id == goal {
            break;
        }
        let other_cost = visited[current_id].0 + 1;

        graph.passable_neighbors(current_id, &mut all_neighbors);
        for &other_id in all_neighbors.iter() {
            if visited[other_id].0 == INFINITY {
                visited[other_id] = (other_cost, current_id);
                next.push_back(other_id);
            }
        }
    }

    let (goal_cost, _) = visited[goal];
    if goal_cost == INFINITY {
        return None;
    }

    let steps = {
        let mut steps = vec![];
        let mut current = goal;

        while current != start {
            steps.push(current);
            current = visited[current].1;
        }
        steps.push(start);
        steps.reverse();
        steps
    };

    Some(Path::new(steps, goal_cost))
}

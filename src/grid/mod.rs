//! The Grid itself and the sequential searches on it.
//!
//! The sequential searches are the reference that the parallel search is checked against.

mod graph;
pub use graph::Graph;

mod a_star;
pub use a_star::a_star_search;

mod bfs;
pub use bfs::bfs_search;

pub use crate::path::{Cost, Path};

use std::cmp::Ordering;

/// A Node with its Cost so far and its estimated total Cost. Ordered so that a
/// [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest estimate first.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct HeuristicElement<Id>(pub Id, pub Cost, pub Cost);
impl<Id: Eq> PartialOrd for HeuristicElement<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id: Eq> Ord for HeuristicElement<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.2.cmp(&self.2)
    }
}

/// A Node with a single priority. Ordered so that a
/// [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest priority first.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Element<Id>(pub Id, pub Cost);
impl<Id: Eq> PartialOrd for Element<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id: Eq> Ord for Element<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1)
    }
}

//! The parallel search.
//!
//! All mutable search state lives in five owner threads, each the only one to ever touch its
//! piece:
//!
//! | Owner | State |
//! |-------|-------|
//! | frontier | the open list, open and closed sets |
//! | cost gate | the Cost of the best solution accepted so far |
//! | score table | the best known Cost of every Node |
//! | predecessor table | how each Node is best reached, and the accepted solution |
//! | termination detector | how many Workers are idle |
//!
//! Workers hold no shared state. They send typed requests over rendezvous channels and block
//! until the owner answers, so every change to a piece of state is one request handled start to
//! finish by its owner. When every Worker is idle at once the termination detector declares the
//! search done, and closing a single shutdown channel stops every owner.

mod channel;
mod config;
mod cost_gate;
mod frontier;
mod predecessor;
mod score;
mod termination;
mod worker;

pub use self::channel::Disconnected;
pub use self::config::{SearchConfig, MAX_WORKERS};
pub use self::worker::WorkerStats;

use self::cost_gate::CostGate;
use self::frontier::FrontierOwner;
use self::predecessor::PredecessorTable;
use self::score::ScoreTable;
use self::termination::TerminationDetector;
use self::worker::{Managers, Worker};
use crate::{
    grid::Graph,
    path::{Cost, Path},
    NodeId,
};

use log::info;
use std::thread::{self, ScopedJoinHandle};
use std::time::{Duration, Instant};

/// The outcome of a [`parallel_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The accepted Path, walking from the target back to the source. `None` if the target is
    /// unreachable.
    pub path: Option<Path<NodeId>>,
    /// Every Cost written to the cost gate, in order. Strictly decreasing.
    pub gate_history: Vec<Cost>,
    /// One entry per Worker
    pub workers: Vec<WorkerStats>,
    /// Time from starting the first thread to the search being declared done
    pub elapsed: Duration,
}

impl SearchReport {
    /// The Cost of the accepted Path, if any.
    pub fn cost(&self) -> Option<Cost> {
        self.path.as_ref().map(Path::cost)
    }

    /// The Nodes of the accepted Path from target to source, or an empty Vec.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.path.as_ref().map(Path::to_vec).unwrap_or_default()
    }

    /// The total number of expansions over all Workers
    pub fn expanded(&self) -> usize {
        self.workers.iter().map(|stats| stats.expanded).sum()
    }
}

/// Searches the shortest Path from `source` to `target` with a pool of concurrent Workers.
///
/// The cell of `source` is not required to be passable. The resulting Path, if any, starts at
/// `target` and ends at `source`.
///
/// ## Examples
/// ```
/// use parallel_astar::{parallel_search, Graph, SearchConfig};
///
/// let graph = Graph::from_rows(&[
///     [1, 1, 1],
///     [1, 1, 1],
///     [1, 1, 1],
/// ]);
/// let report = parallel_search(&graph, 0, 8, SearchConfig::with_workers(4));
///
/// assert_eq!(report.cost(), Some(4));
/// let path = report.path.unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.first(), Some(&8));
/// assert_eq!(path.last(), Some(&0));
/// ```
///
/// ## Panics
/// if `source` or `target` is not a Node of `graph`.
#[track_caller]
pub fn parallel_search(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    config: SearchConfig,
) -> SearchReport {
    assert!(
        source < graph.len() && target < graph.len(),
        "source {} or target {} out of bounds for a Grid of {} Nodes",
        source,
        target,
        graph.len()
    );
    let config = config.validated();

    let (stop, signal) = channel::shutdown();
    let (detector, termination, completion) = TerminationDetector::new(config.workers);
    let (gate, gate_handle) = CostGate::new();
    let (predecessors, predecessor_handle) = PredecessorTable::new(source, gate_handle.clone());
    let (scores, score_handle) = ScoreTable::new(graph.len(), source, predecessor_handle.clone());
    let (frontier, frontier_handle) = FrontierOwner::new(
        source,
        graph.heuristic(source, target),
        termination.clone(),
    );
    let managers = Managers {
        frontier: frontier_handle,
        gate: gate_handle,
        scores: score_handle,
        predecessors: predecessor_handle,
        termination,
    };

    thread::scope(|s| {
        let start = Instant::now();

        let detector = {
            let signal = signal.clone();
            s.spawn(move || detector.run(signal))
        };
        let gate = {
            let signal = signal.clone();
            s.spawn(move || gate.run(signal))
        };
        let predecessors = {
            let signal = signal.clone();
            s.spawn(move || predecessors.run(signal))
        };
        let scores = {
            let signal = signal.clone();
            s.spawn(move || scores.run(signal))
        };
        let frontier = s.spawn(move || frontier.run(signal));

        let workers: Vec<_> = (0..config.workers)
            .map(|id| {
                let worker = Worker::new(
                    id,
                    graph,
                    target,
                    managers.clone(),
                    config.yield_when_idle,
                );
                s.spawn(move || worker.run())
            })
            .collect();
        drop(managers);

        completion.wait();
        let elapsed = start.elapsed();
        stop.broadcast();

        let workers: Vec<WorkerStats> = workers.into_iter().map(join).collect();
        let path = join(predecessors);
        let gate_history = join(gate);
        join(scores);
        join(frontier);
        join(detector);

        let report = SearchReport {
            path,
            gate_history,
            workers,
            elapsed,
        };
        info!(
            "parallel search with {} workers finished in {:?}: cost {:?}, {} expansions",
            config.workers,
            report.elapsed,
            report.cost(),
            report.expanded()
        );
        report
    })
}

fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}

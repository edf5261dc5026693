use super::channel::Disconnected;
use super::cost_gate::CostGateHandle;
use super::frontier::{FrontierEntry, FrontierHandle};
use super::predecessor::PredecessorHandle;
use super::score::ScoreHandle;
use super::termination::TerminationHandle;
use crate::{grid::Graph, NodeId};

use log::{debug, trace};
use std::thread;

/// Counters collected by a single Worker during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Nodes taken from the frontier and expanded
    pub expanded: usize,
    /// Solutions this Worker offered that were accepted
    pub solutions: usize,
    /// Neighbors that had already been expanded and were queued again with a lower Cost
    pub reopened: usize,
    /// Times the Worker asked for work and got none
    pub idle_polls: usize,
}

/// Handles to every state owner a Worker talks to.
#[derive(Debug, Clone)]
pub(crate) struct Managers {
    pub frontier: FrontierHandle,
    pub gate: CostGateHandle,
    pub scores: ScoreHandle,
    pub predecessors: PredecessorHandle,
    pub termination: TerminationHandle,
}

/// One expansion loop. Owns no search state of its own beyond whether it is currently
/// registered as idle.
#[derive(Debug)]
pub(crate) struct Worker<'a> {
    id: usize,
    graph: &'a Graph,
    target: NodeId,
    managers: Managers,
    yield_when_idle: bool,
}

impl<'a> Worker<'a> {
    pub fn new(
        id: usize,
        graph: &'a Graph,
        target: NodeId,
        managers: Managers,
        yield_when_idle: bool,
    ) -> Worker<'a> {
        Worker {
            id,
            graph,
            target,
            managers,
            yield_when_idle,
        }
    }

    /// Expands Nodes until the termination detector reports the search as done.
    pub fn run(self) -> WorkerStats {
        let mut stats = WorkerStats::default();
        match self.search(&mut stats) {
            Ok(()) => debug!("worker {}: done, {:?}", self.id, stats),
            Err(Disconnected) => debug!("worker {}: shut down, {:?}", self.id, stats),
        }
        stats
    }

    fn search(&self, stats: &mut WorkerStats) -> Result<(), Disconnected> {
        let Managers {
            frontier,
            gate,
            termination,
            ..
        } = &self.managers;

        let mut idle = false;
        let mut neighbors = Vec::with_capacity(4);

        while !termination.is_done()? {
            let threshold = gate.read()?;
            // an idle Worker is marked busy by the frontier as part of a successful pop
            let Some(entry) = frontier.pop_or_wait(threshold, idle)? else {
                if !idle {
                    termination.mark_idle()?;
                    idle = true;
                }
                stats.idle_polls += 1;
                if self.yield_when_idle {
                    thread::yield_now();
                }
                continue;
            };
            idle = false;
            self.expand(entry, &mut neighbors, stats)?;
        }
        Ok(())
    }

    fn expand(
        &self,
        entry: FrontierEntry,
        neighbors: &mut Vec<NodeId>,
        stats: &mut WorkerStats,
    ) -> Result<(), Disconnected> {
        let Managers {
            frontier,
            gate,
            scores,
            predecessors,
            ..
        } = &self.managers;
        let FrontierEntry { node, priority } = entry;
        stats.expanded += 1;
        trace!("worker {}: expanding {} (priority {})", self.id, node, priority);

        let threshold = gate.read()?;
        if node == self.target
            && priority < threshold
            && predecessors.accept_solution(node, priority)?
        {
            stats.solutions += 1;
        }

        self.graph.passable_neighbors(node, neighbors);
        for &neighbor in neighbors.iter() {
            let Some(cost) = scores.relax(node, neighbor)? else {
                continue;
            };
            let priority = cost + self.graph.heuristic(neighbor, self.target);
            let membership = frontier.membership(neighbor)?;
            if membership.closed {
                stats.reopened += 1;
                trace!("worker {}: reopening {}", self.id, neighbor);
            } else if membership.open {
                trace!("worker {}: {} is queued, lowering it to {}", self.id, neighbor, priority);
            }
            frontier.push_or_update(neighbor, priority)?;
        }
        Ok(())
    }
}

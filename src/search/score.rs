use super::channel::{rendezvous, Disconnected, Endpoint, Request, ShutdownSignal};
use super::predecessor::PredecessorHandle;
use crate::{
    path::{Cost, INFINITY},
    NodeId,
};

use crossbeam_channel::{select, Receiver};
use log::trace;

/// Calling side of the [`ScoreTable`].
#[derive(Debug, Clone)]
pub(crate) struct ScoreHandle {
    relaxes: Endpoint<(NodeId, NodeId), Option<Cost>>,
}

impl ScoreHandle {
    /// Tries to improve `neighbor` by reaching it from `current`.
    ///
    /// Returns the new Cost of `neighbor` if the edge is an improvement. In that case the edge is
    /// already recorded as the way `neighbor` is reached.
    pub fn relax(&self, current: NodeId, neighbor: NodeId) -> Result<Option<Cost>, Disconnected> {
        self.relaxes.call((current, neighbor))
    }
}

/// Owner of the best known Cost from the source to every Node.
///
/// Being the only place that decides whether an edge improves a Node, it also forwards every
/// improving edge to the predecessor table before answering. Predecessors therefore change in
/// exactly the order Costs do.
#[derive(Debug)]
pub(crate) struct ScoreTable {
    scores: Vec<Cost>,
    predecessors: PredecessorHandle,
    relaxes: Receiver<Request<(NodeId, NodeId), Option<Cost>>>,
}

impl ScoreTable {
    /// Creates a table for `len` Nodes where only `source` has a known Cost.
    pub fn new(
        len: usize,
        source: NodeId,
        predecessors: PredecessorHandle,
    ) -> (ScoreTable, ScoreHandle) {
        let mut scores = vec![INFINITY; len];
        scores[source] = 0;
        let (relax_tx, relaxes) = rendezvous();
        let table = ScoreTable {
            scores,
            predecessors,
            relaxes,
        };
        (table, ScoreHandle { relaxes: relax_tx })
    }

    fn relax(&mut self, current: NodeId, neighbor: NodeId) -> Option<Cost> {
        let tentative = self.scores[current].saturating_add(1);
        if tentative >= self.scores[neighbor] {
            return None;
        }
        self.scores[neighbor] = tentative;
        trace!("score: {} = {} via {}", neighbor, tentative, current);
        self.predecessors.record_edge(current, neighbor).ok()?;
        Some(tentative)
    }

    pub fn run(mut self, shutdown: ShutdownSignal) {
        loop {
            select! {
                recv(self.relaxes) -> request => match request {
                    Ok(request) => {
                        let (current, neighbor) = request.body;
                        let improved = self.relax(current, neighbor);
                        request.respond(improved);
                    }
                    Err(_) => break,
                },
                recv(shutdown.receiver()) -> _ => break,
            }
        }
    }
}

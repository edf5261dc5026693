use super::channel::{rendezvous, Disconnected, Endpoint, Request, ShutdownSignal};
use super::cost_gate::CostGateHandle;
use crate::{
    path::{Cost, Path},
    NodeId,
};

use crossbeam_channel::{select, Receiver};
use hashbrown::HashMap;
use log::{debug, trace};

/// Calling side of the [`PredecessorTable`].
#[derive(Debug, Clone)]
pub(crate) struct PredecessorHandle {
    edges: Endpoint<(NodeId, NodeId), ()>,
    solutions: Endpoint<(NodeId, Cost), bool>,
}

impl PredecessorHandle {
    /// Records that `neighbor` is best reached from `current`.
    pub fn record_edge(&self, current: NodeId, neighbor: NodeId) -> Result<(), Disconnected> {
        self.edges.call((current, neighbor))
    }

    /// Offers `node` as the end of a solution with the given Cost.
    ///
    /// Returns `true` if it was accepted, i.e. it is cheaper than every solution before it.
    pub fn accept_solution(&self, node: NodeId, cost: Cost) -> Result<bool, Disconnected> {
        self.solutions.call((node, cost))
    }
}

/// Owner of the predecessor map and of the accepted solution.
///
/// Accepting a solution and lowering the [`CostGate`](super::cost_gate::CostGate) happen in the
/// same step, so no other solution can slip in between.
#[derive(Debug)]
pub(crate) struct PredecessorTable {
    source: NodeId,
    came_from: HashMap<NodeId, NodeId>,
    solution: Option<Path<NodeId>>,
    gate: CostGateHandle,
    edges: Receiver<Request<(NodeId, NodeId), ()>>,
    solutions: Receiver<Request<(NodeId, Cost), bool>>,
}

impl PredecessorTable {
    pub fn new(source: NodeId, gate: CostGateHandle) -> (PredecessorTable, PredecessorHandle) {
        let (edge_tx, edges) = rendezvous();
        let (solution_tx, solutions) = rendezvous();
        let table = PredecessorTable {
            source,
            came_from: HashMap::new(),
            solution: None,
            gate,
            edges,
            solutions,
        };
        let handle = PredecessorHandle {
            edges: edge_tx,
            solutions: solution_tx,
        };
        (table, handle)
    }

    /// Walks the predecessors from `node` back to the source.
    fn reconstruct(&self, node: NodeId) -> Vec<NodeId> {
        let mut steps = vec![node];
        let mut current = node;
        while let Some(&prev) = self.came_from.get(&current) {
            steps.push(prev);
            current = prev;
        }
        debug_assert_eq!(current, self.source, "predecessors must lead to the source");
        steps
    }

    fn accept_solution(&mut self, node: NodeId, cost: Cost) -> bool {
        if let Some(solution) = &self.solution {
            if cost >= solution.cost() {
                trace!("predecessors: rejected solution of cost {}", cost);
                return false;
            }
        }
        let steps = self.reconstruct(node);
        if self.gate.write(cost).is_err() {
            return false;
        }
        debug!("accepted solution of cost {} ({} nodes)", cost, steps.len());
        self.solution = Some(Path::new(steps, cost));
        true
    }

    /// Serves requests until shutdown. Returns the last accepted solution, walking from the
    /// target back to the source.
    pub fn run(mut self, shutdown: ShutdownSignal) -> Option<Path<NodeId>> {
        loop {
            select! {
                recv(self.edges) -> request => match request {
                    Ok(request) => {
                        let (current, neighbor) = request.body;
                        self.came_from.insert(neighbor, current);
                        request.respond(());
                    }
                    Err(_) => break,
                },
                recv(self.solutions) -> request => match request {
                    Ok(request) => {
                        let (node, cost) = request.body;
                        let accepted = self.accept_solution(node, cost);
                        request.respond(accepted);
                    }
                    Err(_) => break,
                },
                recv(shutdown.receiver()) -> _ => break,
            }
        }
        self.solution
    }
}

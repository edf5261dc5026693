use super::channel::{rendezvous, Disconnected, Endpoint, Request, ShutdownSignal};
use super::termination::TerminationHandle;
use crate::{grid::Element, path::Cost, NodeId};

use crossbeam_channel::{select, Receiver};
use hashbrown::{HashMap, HashSet};
use log::trace;
use std::collections::BinaryHeap;

/// A Node handed out for expansion, with the priority it was queued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub node: NodeId,
    pub priority: Cost,
}

/// Where a Node currently stands in the [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Membership {
    pub closed: bool,
    pub open: bool,
}

/// The open list of the search: a min-heap over priorities plus open/closed bookkeeping.
///
/// A Node may sit in the heap several times. Only the entry matching its priority in `open` is
/// live, the others are dropped once they reach the top.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Element<NodeId>>,
    open: HashMap<NodeId, Cost>,
    closed: HashSet<NodeId>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Removes and returns the best entry, if its priority is strictly below `threshold`.
    pub fn pop_below(&mut self, threshold: Cost) -> Option<FrontierEntry> {
        loop {
            let &Element(node, priority) = self.heap.peek()?;
            if self.open.get(&node) != Some(&priority) {
                self.heap.pop();
                continue;
            }
            if priority >= threshold {
                return None;
            }
            self.heap.pop();
            self.open.remove(&node);
            self.closed.insert(node);
            return Some(FrontierEntry { node, priority });
        }
    }

    /// Queues `node` under `priority`, reopening it if it was closed.
    ///
    /// An open Node keeps the better of its current and the new priority.
    pub fn push_or_update(&mut self, node: NodeId, priority: Cost) {
        if !self.closed.remove(&node) {
            match self.open.get(&node) {
                Some(&current) if current <= priority => return,
                _ => {}
            }
        }
        self.open.insert(node, priority);
        self.heap.push(Element(node, priority));
    }

    pub fn membership(&self, node: NodeId) -> Membership {
        Membership {
            closed: self.closed.contains(&node),
            open: self.open.contains_key(&node),
        }
    }

    /// Number of open Nodes
    pub fn len(&self) -> usize {
        self.open.len()
    }
}

/// The payload of a pop request.
#[derive(Debug, Clone, Copy)]
struct PopRequest {
    threshold: Cost,
    /// The caller is registered as idle with the termination detector.
    idle: bool,
}

/// Calling side of the [`FrontierOwner`].
#[derive(Debug, Clone)]
pub(crate) struct FrontierHandle {
    pops: Endpoint<PopRequest, Option<FrontierEntry>>,
    pushes: Endpoint<(NodeId, Cost), ()>,
    memberships: Endpoint<NodeId, Membership>,
}

impl FrontierHandle {
    /// Asks for the best Node with a priority strictly below `threshold`.
    ///
    /// A caller that is registered as `idle` is marked busy again before the entry is handed
    /// over, so the termination detector never sees an idle Worker holding a Node.
    pub fn pop_or_wait(
        &self,
        threshold: Cost,
        idle: bool,
    ) -> Result<Option<FrontierEntry>, Disconnected> {
        self.pops.call(PopRequest { threshold, idle })
    }

    pub fn push_or_update(&self, node: NodeId, priority: Cost) -> Result<(), Disconnected> {
        self.pushes.call((node, priority))
    }

    pub fn membership(&self, node: NodeId) -> Result<Membership, Disconnected> {
        self.memberships.call(node)
    }
}

/// Owner of the [`Frontier`].
#[derive(Debug)]
pub(crate) struct FrontierOwner {
    frontier: Frontier,
    termination: TerminationHandle,
    pops: Receiver<Request<PopRequest, Option<FrontierEntry>>>,
    pushes: Receiver<Request<(NodeId, Cost), ()>>,
    memberships: Receiver<Request<NodeId, Membership>>,
}

impl FrontierOwner {
    /// Creates the owner with `source` already queued under `priority`.
    pub fn new(
        source: NodeId,
        priority: Cost,
        termination: TerminationHandle,
    ) -> (FrontierOwner, FrontierHandle) {
        let mut frontier = Frontier::new();
        frontier.push_or_update(source, priority);

        let (pop_tx, pops) = rendezvous();
        let (push_tx, pushes) = rendezvous();
        let (membership_tx, memberships) = rendezvous();
        let owner = FrontierOwner {
            frontier,
            termination,
            pops,
            pushes,
            memberships,
        };
        let handle = FrontierHandle {
            pops: pop_tx,
            pushes: push_tx,
            memberships: membership_tx,
        };
        (owner, handle)
    }

    fn pop(&mut self, request: PopRequest) -> Option<FrontierEntry> {
        let entry = self.frontier.pop_below(request.threshold)?;
        if request.idle && self.termination.mark_busy().is_err() {
            // the search is over; nobody will expand this
            return None;
        }
        trace!(
            "frontier: pop {} (priority {}), {} open",
            entry.node,
            entry.priority,
            self.frontier.len()
        );
        Some(entry)
    }

    pub fn run(mut self, shutdown: ShutdownSignal) {
        loop {
            select! {
                recv(self.pops) -> request => match request {
                    Ok(request) => {
                        let entry = self.pop(request.body);
                        request.respond(entry);
                    }
                    Err(_) => break,
                },
                recv(self.pushes) -> request => match request {
                    Ok(request) => {
                        let (node, priority) = request.body;
                        self.frontier.push_or_update(node, priority);
                        request.respond(());
                    }
                    Err(_) => break,
                },
                recv(self.memberships) -> request => match request {
                    Ok(request) => {
                        let membership = self.frontier.membership(request.body);
                        request.respond(membership);
                    }
                    Err(_) => break,
                },
                recv(shutdown.receiver()) -> _ => break,
            }
        }
    }
}

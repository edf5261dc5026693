use super::channel::{rendezvous, Disconnected, Endpoint, Request, ShutdownSignal};
use crate::path::{Cost, INFINITY};

use crossbeam_channel::{select, Receiver};
use log::trace;

/// Calling side of the [`CostGate`].
#[derive(Debug, Clone)]
pub(crate) struct CostGateHandle {
    reads: Endpoint<(), Cost>,
    writes: Endpoint<Cost, ()>,
}

impl CostGateHandle {
    /// The best accepted solution Cost, [`INFINITY`] while there is none.
    pub fn read(&self) -> Result<Cost, Disconnected> {
        self.reads.call(())
    }

    /// Replaces the best solution Cost. Returns once the new value is visible to every reader.
    pub fn write(&self, cost: Cost) -> Result<(), Disconnected> {
        self.writes.call(cost)
    }
}

/// Owner of the best known solution Cost.
///
/// Writes are taken as they come; keeping them decreasing is up to the single writer, the
/// [`PredecessorTable`](super::predecessor::PredecessorTable).
#[derive(Debug)]
pub(crate) struct CostGate {
    best: Cost,
    history: Vec<Cost>,
    reads: Receiver<Request<(), Cost>>,
    writes: Receiver<Request<Cost, ()>>,
}

impl CostGate {
    pub fn new() -> (CostGate, CostGateHandle) {
        let (read_tx, reads) = rendezvous();
        let (write_tx, writes) = rendezvous();
        let gate = CostGate {
            best: INFINITY,
            history: Vec::new(),
            reads,
            writes,
        };
        let handle = CostGateHandle {
            reads: read_tx,
            writes: write_tx,
        };
        (gate, handle)
    }

    /// Serves requests until shutdown. Returns every value that was written, in order.
    pub fn run(mut self, shutdown: ShutdownSignal) -> Vec<Cost> {
        loop {
            select! {
                recv(self.reads) -> request => match request {
                    Ok(request) => request.respond(self.best),
                    Err(_) => break,
                },
                recv(self.writes) -> request => match request {
                    Ok(request) => {
                        trace!("cost gate: {} -> {}", self.best, request.body);
                        self.best = request.body;
                        self.history.push(request.body);
                        request.respond(());
                    }
                    Err(_) => break,
                },
                recv(shutdown.receiver()) -> _ => break,
            }
        }
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::channel::shutdown;
    use std::thread;

    #[test]
    fn read_and_write() {
        let (gate, handle) = CostGate::new();
        let (stop, signal) = shutdown();
        let owner = thread::spawn(move || gate.run(signal));

        assert_eq!(handle.read(), Ok(INFINITY));
        handle.write(12).unwrap();
        assert_eq!(handle.read(), Ok(12));
        // not enforced here
        handle.write(20).unwrap();
        assert_eq!(handle.read(), Ok(20));

        stop.broadcast();
        assert_eq!(owner.join().unwrap(), vec![12, 20]);
        assert_eq!(handle.read(), Err(Disconnected));
    }
}

use super::channel::{rendezvous, Disconnected, Endpoint, Request, ShutdownSignal};

use crossbeam_channel::{bounded, select, Receiver, Sender};
use log::{debug, trace};

/// Calling side of the [`TerminationDetector`].
#[derive(Debug, Clone)]
pub(crate) struct TerminationHandle {
    idle: Endpoint<(), ()>,
    busy: Endpoint<(), ()>,
    done: Endpoint<(), bool>,
}

impl TerminationHandle {
    /// Registers the caller as idle: it found nothing worth expanding.
    pub fn mark_idle(&self) -> Result<(), Disconnected> {
        self.idle.call(())
    }

    /// Cancels an earlier [`mark_idle`](Self::mark_idle).
    pub fn mark_busy(&self) -> Result<(), Disconnected> {
        self.busy.call(())
    }

    pub fn is_done(&self) -> Result<bool, Disconnected> {
        self.done.call(())
    }
}

/// Resolves once the [`TerminationDetector`] has reached its final state.
#[derive(Debug)]
pub(crate) struct Completion {
    rx: Receiver<()>,
}

impl Completion {
    /// Blocks until the search is done. Returns immediately if it already is.
    pub fn wait(&self) {
        // the sender is dropped right after the one message, so this never blocks twice
        let _ = self.rx.recv();
    }
}

/// Counts idle Workers and declares the search finished once all of them are idle at the same
/// time.
///
/// The finished state is absorbing: later `mark_busy` calls adjust the count but never revert it.
#[derive(Debug)]
pub(crate) struct TerminationDetector {
    pool: usize,
    idle_count: usize,
    done: bool,
    on_done: Option<Sender<()>>,
    idle: Receiver<Request<(), ()>>,
    busy: Receiver<Request<(), ()>>,
    queries: Receiver<Request<(), bool>>,
}

impl TerminationDetector {
    pub fn new(pool: usize) -> (TerminationDetector, TerminationHandle, Completion) {
        let (idle_tx, idle) = rendezvous();
        let (busy_tx, busy) = rendezvous();
        let (done_tx, queries) = rendezvous();
        let (on_done, rx) = bounded(1);
        let detector = TerminationDetector {
            pool,
            idle_count: 0,
            done: false,
            on_done: Some(on_done),
            idle,
            busy,
            queries,
        };
        let handle = TerminationHandle {
            idle: idle_tx,
            busy: busy_tx,
            done: done_tx,
        };
        (detector, handle, Completion { rx })
    }

    fn mark_idle(&mut self) {
        debug_assert!(self.idle_count < self.pool, "more idle Workers than exist");
        self.idle_count += 1;
        trace!("idle workers: {}/{}", self.idle_count, self.pool);
        if self.idle_count == self.pool && !self.done {
            debug!("all {} workers idle, search is done", self.pool);
            self.done = true;
            if let Some(on_done) = self.on_done.take() {
                let _ = on_done.send(());
            }
        }
    }

    fn mark_busy(&mut self) {
        debug_assert!(self.idle_count > 0, "busy without being idle");
        self.idle_count = self.idle_count.saturating_sub(1);
        trace!("idle workers: {}/{}", self.idle_count, self.pool);
    }

    pub fn run(mut self, shutdown: ShutdownSignal) {
        loop {
            select! {
                recv(self.idle) -> request => match request {
                    Ok(request) => {
                        self.mark_idle();
                        request.respond(());
                    }
                    Err(_) => break,
                },
                recv(self.busy) -> request => match request {
                    Ok(request) => {
                        self.mark_busy();
                        request.respond(());
                    }
                    Err(_) => break,
                },
                recv(self.queries) -> request => match request {
                    Ok(request) => request.respond(self.done),
                    Err(_) => break,
                },
                recv(shutdown.receiver()) -> _ => break,
            }
        }
    }
}

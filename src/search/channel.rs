//! Request/reply plumbing between the Workers and the state owners.
//!
//! Every request queue is a zero-capacity (rendezvous) channel: a send only completes once the
//! owner has taken the request. Replies travel on a one-shot channel carried inside the request,
//! so an owner never blocks on a caller that has gone away.

use crossbeam_channel::{bounded, Receiver, Sender};

/// Returned by every call into an owner that has already shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the search has shut down")]
pub struct Disconnected;

/// A request as seen by the owner: the payload and where to send the answer.
#[derive(Debug)]
pub(crate) struct Request<Q, R> {
    pub body: Q,
    reply: Sender<R>,
}

impl<Q, R> Request<Q, R> {
    /// Answers the request. A caller that stopped waiting is not an error.
    pub fn respond(self, value: R) {
        let _ = self.reply.send(value);
    }
}

/// The calling side of a request queue. Cloned once per caller.
#[derive(Debug)]
pub(crate) struct Endpoint<Q, R> {
    tx: Sender<Request<Q, R>>,
}

impl<Q, R> Clone for Endpoint<Q, R> {
    fn clone(&self) -> Self {
        Endpoint {
            tx: self.tx.clone(),
        }
    }
}

impl<Q, R> Endpoint<Q, R> {
    /// Hands `body` to the owner and waits for its answer.
    pub fn call(&self, body: Q) -> Result<R, Disconnected> {
        let (reply, answer) = bounded(1);
        self.tx
            .send(Request { body, reply })
            .map_err(|_| Disconnected)?;
        answer.recv().map_err(|_| Disconnected)
    }
}

/// Creates a rendezvous request queue.
pub(crate) fn rendezvous<Q, R>() -> (Endpoint<Q, R>, Receiver<Request<Q, R>>) {
    let (tx, rx) = bounded(0);
    (Endpoint { tx }, rx)
}

/// Never sent; the shutdown channel only ever gets closed.
#[derive(Debug)]
pub(crate) enum Never {}

/// Held by the coordinator. Dropping it (or calling [`Shutdown::broadcast`]) closes the signal
/// for every listener at once.
#[derive(Debug)]
pub(crate) struct Shutdown {
    _tx: Sender<Never>,
}

impl Shutdown {
    pub fn broadcast(self) {}
}

/// The listening side of the shutdown signal.
#[derive(Debug, Clone)]
pub(crate) struct ShutdownSignal {
    rx: Receiver<Never>,
}

impl ShutdownSignal {
    /// For use in `select!`: becomes ready (with an error) once the signal is closed.
    pub fn receiver(&self) -> &Receiver<Never> {
        &self.rx
    }

    #[cfg(test)]
    pub fn is_triggered(&self) -> bool {
        matches!(self.rx.try_recv(), Err(crossbeam_channel::TryRecvError::Disconnected))
    }
}

pub(crate) fn shutdown() -> (Shutdown, ShutdownSignal) {
    let (tx, rx) = bounded(0);
    (Shutdown { _tx: tx }, ShutdownSignal { rx })
}

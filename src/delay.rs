//! Cancellable delayed transitions
//!
//! Stands in for the backend round trips that do not exist yet (sign-in,
//! photo analysis). A worker thread waits for the delay on a cancellation
//! channel; the event loop polls for the result. Cancelling or dropping the
//! handle before the deadline means it never fires.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

/// Handle to a pending transition
#[derive(Debug)]
pub struct DelayedTransition {
    label: &'static str,
    delay: Duration,
    started: Instant,
    fired: bool,
    fired_rx: Receiver<()>,
    cancel_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl DelayedTransition {
    /// Start waiting for `delay`
    pub fn start(label: &'static str, delay: Duration) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let (fired_tx, fired_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            // A message or a dropped sender both mean cancellation
            if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                let _ = fired_tx.send(());
            }
        });

        debug!(label, delay_ms = delay.as_millis() as u64, "Delayed transition started");

        Self {
            label,
            delay,
            started: Instant::now(),
            fired: false,
            fired_rx,
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Non-blocking check; stays `true` once fired
    pub fn poll(&mut self) -> bool {
        if !self.fired {
            match self.fired_rx.try_recv() {
                Ok(()) => self.fired = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
            }
        }
        self.fired
    }

    /// Block up to `timeout` for the transition to fire
    pub fn wait(&mut self, timeout: Duration) -> bool {
        if !self.fired && self.fired_rx.recv_timeout(timeout).is_ok() {
            self.fired = true;
        }
        self.fired
    }

    /// Elapsed share of the delay, clamped to 1.0
    pub fn progress_ratio(&self) -> f64 {
        if self.fired || self.delay.is_zero() {
            return 1.0;
        }
        (self.started.elapsed().as_secs_f64() / self.delay.as_secs_f64()).min(1.0)
    }

    /// Cancel the transition
    pub fn cancel(self) {
        debug!(label = self.label, "Delayed transition cancelled");
        drop(self);
    }
}

impl Drop for DelayedTransition {
    fn drop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

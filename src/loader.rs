//! Background report loading.
//!
//! Reading and decoding happen on a worker thread. The result travels back
//! over a channel as a [`LoadOutcome`] and is applied by the interaction
//! thread, which is the only place [`StateStore::load`] is ever called.
//!
//! There is no at-most-one-in-flight rule: each request gets its own worker
//! and outcomes are applied in arrival order, so the last completed load
//! wins. A failed load only writes a log entry; the displayed state is left
//! exactly as it was.

use crate::display::StateStore;
use crate::errors::DecodeError;
use crate::report::{read_report, Report};
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Completion message sent from a load worker.
#[derive(Debug)]
pub struct LoadOutcome {
    pub id: u64,
    pub path: PathBuf,
    pub result: Result<Report, DecodeError>,
}

/// Spawns load workers and collects their outcomes.
#[derive(Debug)]
pub struct Loader {
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    next_id: u64,
    pending: Vec<(u64, PathBuf)>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    pub fn new() -> Self {
        let (tx, rx) = channel::unbounded();
        Self {
            tx,
            rx,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Start reading and decoding `path` on a worker thread.
    ///
    /// Returns the request id, or the spawn error if no thread could be started.
    pub fn request(&mut self, path: PathBuf) -> std::io::Result<u64> {
        let id = self.next_id;
        let tx = self.tx.clone();
        let worker_path = path.clone();

        thread::Builder::new()
            .name(format!("covview-load-{id}"))
            .spawn(move || {
                let result = read_report(&worker_path);
                // Receiver gone means the viewer is shutting down
                let _ = tx.send(LoadOutcome {
                    id,
                    path: worker_path,
                    result,
                });
            })?;

        log::info!("Loading coverage report {}", path.display());
        self.next_id += 1;
        self.pending.push((id, path));
        Ok(id)
    }

    /// Paths of loads that have not completed yet, oldest first
    pub fn pending(&self) -> impl Iterator<Item = &Path> {
        self.pending.iter().map(|(_, path)| path.as_path())
    }

    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Apply every outcome that has already arrived. Never blocks.
    ///
    /// Returns the number of outcomes processed.
    pub fn drain(&mut self, store: &mut StateStore) -> usize {
        let mut processed = 0;
        while let Ok(outcome) = self.rx.try_recv() {
            self.complete(store, outcome);
            processed += 1;
        }
        processed
    }

    /// Block up to `timeout` for the next outcome and apply it.
    ///
    /// Returns `false` when nothing arrived in time.
    pub fn wait(&mut self, store: &mut StateStore, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => {
                self.complete(store, outcome);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn complete(&mut self, store: &mut StateStore, outcome: LoadOutcome) {
        self.pending.retain(|(id, _)| *id != outcome.id);
        apply(store, outcome);
    }
}

/// Apply one outcome to the store.
///
/// Success replaces the displayed report; failure is logged and leaves the
/// store untouched. Returns whether the state changed.
pub fn apply(store: &mut StateStore, outcome: LoadOutcome) -> bool {
    match outcome.result {
        Ok(report) => {
            log::info!(
                "Loaded {}: {} targets, {} files, {} functions",
                outcome.path.display(),
                report.targets.len(),
                report.file_count(),
                report.function_count()
            );
            store.load(report);
            true
        }
        Err(err) => {
            log::warn!(
                "Failed to load {} ({} error): {}",
                outcome.path.display(),
                err.kind(),
                err.message()
            );
            false
        }
    }
}

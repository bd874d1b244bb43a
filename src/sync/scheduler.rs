//! Periodic sync with an explicit idle/running state.
//!
//! Each tick is spawned as its own task. A tick that arrives while the
//! previous sync is still running is skipped rather than starting a second
//! fetch.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;

use super::reconciler::{reconcile, ReconcileReport};
use super::remote::RemoteSource;
use crate::quotes::QuoteBoard;

/// Whether a sync is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No sync running.
    Idle,
    /// A sync is fetching or reconciling.
    Running,
}

/// Result of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The remote was fetched and reconciled.
    Synced(ReconcileReport),
    /// Another sync was still running.
    Skipped,
    /// Fetching or saving failed. A failed fetch leaves the store untouched;
    /// after a failed save the merged quotes stay in memory but not on disk.
    Failed(String),
}

/// Clears the running flag when a sync finishes, however it finishes.
struct RunningGuard<'a>(&'a AtomicBool);

impl<'a> RunningGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs reconciliation against a remote on a fixed interval.
#[derive(Clone)]
pub struct SyncScheduler {
    board: Arc<Mutex<QuoteBoard>>,
    remote: Arc<dyn RemoteSource>,
    running: Arc<AtomicBool>,
    interval: Duration,
}

impl SyncScheduler {
    /// Create a scheduler over a shared board.
    #[must_use]
    pub fn new(
        board: Arc<Mutex<QuoteBoard>>,
        remote: Arc<dyn RemoteSource>,
        interval: Duration,
    ) -> Self {
        Self {
            board,
            remote,
            running: Arc::new(AtomicBool::new(false)),
            interval,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SyncState {
        if self.running.load(Ordering::Acquire) {
            SyncState::Running
        } else {
            SyncState::Idle
        }
    }

    /// Fetch once and reconcile.
    ///
    /// The board lock is only taken after the fetch completes. Failures are
    /// logged and reported, never propagated.
    pub async fn run_once(&self) -> TickOutcome {
        let Some(_guard) = RunningGuard::acquire(&self.running) else {
            log::debug!("Sync still running, skipping tick");
            return TickOutcome::Skipped;
        };

        let remote = match self.remote.fetch_quotes().await {
            Ok(quotes) => quotes,
            Err(e) => {
                log::error!("Sync failed: {e}");
                return TickOutcome::Failed(e.to_string());
            }
        };

        let mut board = self.board.lock().await;
        match reconcile(board.store_mut(), remote) {
            Ok(report) => TickOutcome::Synced(report),
            Err(e) => {
                log::error!("Sync failed: {e}");
                TickOutcome::Failed(e.to_string())
            }
        }
    }

    /// Tick immediately, then every interval, until `shutdown` resolves.
    ///
    /// Every tick outcome is handed to `on_outcome`.
    pub async fn run<S, F>(&self, shutdown: S, on_outcome: F)
    where
        S: Future<Output = ()>,
        F: Fn(TickOutcome) + Send + Sync + 'static,
    {
        let on_outcome = Arc::new(on_outcome);
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        log::info!("Sync started (interval: {}s)", self.interval.as_secs());

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let scheduler = self.clone();
                    let on_outcome = Arc::clone(&on_outcome);
                    tokio::spawn(async move {
                        let outcome = scheduler.run_once().await;
                        on_outcome(outcome);
                    });
                }
                () = &mut shutdown => break,
            }
        }

        log::info!("Sync stopped");
    }
}

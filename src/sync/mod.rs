//! Remote sync.
//!
//! Quotes are pulled from a remote mock endpoint and merged into the local
//! store by exact text match. New local quotes can be posted back.
//!
//! - [`remote`]: the remote source trait and its HTTP implementation
//! - [`reconciler`]: the text-based merge
//! - [`scheduler`]: the interval loop with overlap protection

pub mod reconciler;
pub mod remote;
pub mod scheduler;

pub use reconciler::{reconcile, ReconcileReport, SYNC_NOTIFICATION};
pub use remote::{announce_quote, HttpRemote, RemoteSource};
pub use scheduler::{SyncScheduler, SyncState, TickOutcome};

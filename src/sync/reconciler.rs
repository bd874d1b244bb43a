//! Merge remote quotes into the local store.
//!
//! A remote quote is new when no local quote has the same text. Categories
//! are not compared, local quotes are never edited or removed, and the store
//! only grows.

use crate::error::QuoteboxError;
use crate::quotes::{Quote, QuoteStore};

/// Notification emitted when a pass added anything.
pub const SYNC_NOTIFICATION: &str = "Quotes synced with server!";

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Remote quotes considered.
    pub fetched: usize,
    /// Quotes appended to the store, in order.
    pub added: Vec<Quote>,
}

impl ReconcileReport {
    /// Number of quotes appended.
    #[must_use]
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    /// The user-facing notification, if this pass changed anything.
    #[must_use]
    pub fn notification(&self) -> Option<&'static str> {
        (!self.added.is_empty()).then_some(SYNC_NOTIFICATION)
    }
}

/// Append every remote quote whose text is not yet in the store.
///
/// Quotes appended earlier in the same pass count as present. The store is
/// saved once, and only when something was added.
///
/// # Errors
///
/// Returns an error if persisting the store fails. The in-memory additions
/// are kept in that case.
pub fn reconcile(
    store: &mut QuoteStore,
    remote: Vec<Quote>,
) -> Result<ReconcileReport, QuoteboxError> {
    let mut report = ReconcileReport {
        fetched: remote.len(),
        added: Vec::new(),
    };

    for quote in remote {
        if store.contains_text(&quote.text) {
            continue;
        }
        store.push(quote.clone());
        report.added.push(quote);
    }

    if !report.added.is_empty() {
        store.save()?;
        log::info!(
            "{SYNC_NOTIFICATION} ({} new of {} fetched)",
            report.added_count(),
            report.fetched
        );
    } else {
        log::debug!("Sync found nothing new ({} fetched)", report.fetched);
    }

    Ok(report)
}

//! Sync command implementations.
//!
//! `sync` runs one reconciliation pass; `watch` shows a quote and keeps
//! syncing until interrupted.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use serde_json::json;
use tokio::sync::Mutex;

use super::Context;
use crate::cli::args::OutputFormat;
use crate::error::QuoteboxError;
use crate::output::{format_shown, format_sync, to_json};
use crate::sync::{SyncScheduler, TickOutcome};

/// Run one sync pass.
///
/// A failed fetch is reported but is not an error: the store is untouched
/// and the next run simply tries again.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or formatting fails.
pub async fn sync(ctx: &Context, format: OutputFormat) -> Result<String, QuoteboxError> {
    let board = Arc::new(Mutex::new(ctx.open_board()?));
    let scheduler = SyncScheduler::new(board, Arc::new(ctx.remote()), ctx.interval(None));

    format_outcome(&scheduler.run_once().await, format)
}

/// Show a quote, then sync immediately and on every interval until Ctrl-C.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or the first quote cannot be
/// shown.
pub async fn watch(
    ctx: &Context,
    interval: Option<u64>,
    format: OutputFormat,
) -> Result<String, QuoteboxError> {
    let mut board = ctx.open_board()?;
    let shown = board.show_random(&mut rand::thread_rng())?;
    println!("{}", format_shown(shown.as_ref(), board.filter(), format)?);

    let board = Arc::new(Mutex::new(board));
    let scheduler = SyncScheduler::new(board, Arc::new(ctx.remote()), ctx.interval(interval));

    scheduler
        .run(shutdown_signal(), move |outcome| {
            if matches!(&outcome, TickOutcome::Synced(report) if report.added_count() > 0) {
                match format_outcome(&outcome, format) {
                    Ok(text) => println!("{text}"),
                    Err(e) => log::error!("Failed to format sync result: {e}"),
                }
            }
        })
        .await;

    Ok(String::new())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

fn format_outcome(outcome: &TickOutcome, format: OutputFormat) -> Result<String, QuoteboxError> {
    match outcome {
        TickOutcome::Synced(report) => format_sync(report, format),
        TickOutcome::Skipped => match format {
            OutputFormat::Json => to_json(&json!({"skipped": true})),
            OutputFormat::Pretty => Ok("Sync already running, skipped".dimmed().to_string()),
        },
        TickOutcome::Failed(error) => match format {
            OutputFormat::Json => to_json(&json!({"error": error})),
            OutputFormat::Pretty => Ok(format!("{} {error}", "Sync skipped:".yellow().bold())),
        },
    }
}

impl Context {
    /// Sync interval: the explicit override, else the configured one.
    /// Never zero.
    #[must_use]
    pub fn interval(&self, override_secs: Option<u64>) -> Duration {
        Duration::from_secs(override_secs.unwrap_or(self.config.sync.interval_secs).max(1))
    }
}

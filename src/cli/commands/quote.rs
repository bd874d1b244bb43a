//! Quote commands: show, add, list, categories, filter.

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::{AddArgs, OutputFormat};
use crate::error::QuoteboxError;
use crate::output::{format_categories, format_quotes, format_shown, to_json};
use crate::quotes::CategoryFilter;
use crate::sync::announce_quote;

/// Show a random quote.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or formatting fails.
pub fn show(
    ctx: &Context,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String, QuoteboxError> {
    let mut board = ctx.open_board()?;
    let filter = category.map_or_else(|| board.filter().clone(), CategoryFilter::parse);
    let shown = board.show_random_in(&filter, &mut rand::thread_rng())?;
    format_shown(shown.as_ref(), &filter, format)
}

/// Add a quote, then post it to the remote when enabled.
///
/// A failed post is logged and does not fail the command.
///
/// # Errors
///
/// Returns `QuoteboxError::Validation` for empty input, or a storage error.
pub async fn add(
    ctx: &Context,
    args: AddArgs,
    format: OutputFormat,
) -> Result<String, QuoteboxError> {
    let mut board = ctx.open_board()?;
    let quote = board.add_quote(&args.text, &args.category)?;

    let posted = if ctx.config.sync.post_new_quotes && !args.no_post {
        Some(announce_quote(&ctx.remote(), &quote).await)
    } else {
        None
    };

    match format {
        OutputFormat::Json => to_json(&json!({
            "added": quote,
            "count": board.store().len(),
            "posted": posted,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} \"{}\" {}",
            "Added:".green().bold(),
            quote.text,
            format!("({})", quote.category).dimmed()
        )),
    }
}

/// List quotes, optionally narrowed to one category.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or formatting fails.
pub fn list(
    ctx: &Context,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String, QuoteboxError> {
    let board = ctx.open_board()?;
    let filter = category.map_or(CategoryFilter::All, CategoryFilter::parse);
    let quotes = board.store().filtered(&filter);
    format_quotes(&quotes, &filter, format)
}

/// List categories, marking the selected one.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or formatting fails.
pub fn categories(ctx: &Context, format: OutputFormat) -> Result<String, QuoteboxError> {
    let board = ctx.open_board()?;
    format_categories(&board.store().categories(), board.filter(), format)
}

/// Select a category filter and show a quote under it.
///
/// # Errors
///
/// Returns an error if the selection cannot be persisted.
pub fn filter(ctx: &Context, category: &str, format: OutputFormat) -> Result<String, QuoteboxError> {
    let mut board = ctx.open_board()?;
    let shown = board.select_filter(CategoryFilter::parse(category), &mut rand::thread_rng())?;
    log::debug!("Selected filter: {}", board.filter());
    format_shown(shown.as_ref(), board.filter(), format)
}

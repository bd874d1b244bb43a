//! Output formatting for quotebox.
//!
//! This module provides formatters for displaying quotes in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::QuoteboxError;
use crate::quotes::{CategoryFilter, Quote};
use crate::sync::ReconcileReport;

pub use json::*;
pub use pretty::*;

/// Format a list of quotes based on output format
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn format_quotes(
    quotes: &[&Quote],
    filter: &CategoryFilter,
    format: OutputFormat,
) -> Result<String, QuoteboxError> {
    match format {
        OutputFormat::Pretty => Ok(format_quotes_pretty(quotes, filter)),
        OutputFormat::Json => format_quotes_json(quotes, filter),
    }
}

/// Format the quote picked for display
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn format_shown(
    quote: Option<&Quote>,
    filter: &CategoryFilter,
    format: OutputFormat,
) -> Result<String, QuoteboxError> {
    match format {
        OutputFormat::Pretty => Ok(format_shown_pretty(quote)),
        OutputFormat::Json => format_shown_json(quote, filter),
    }
}

/// Format categories based on output format
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn format_categories(
    categories: &[&str],
    selected: &CategoryFilter,
    format: OutputFormat,
) -> Result<String, QuoteboxError> {
    match format {
        OutputFormat::Pretty => Ok(format_categories_pretty(categories, selected)),
        OutputFormat::Json => format_categories_json(categories, selected),
    }
}

/// Format a sync report based on output format
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn format_sync(report: &ReconcileReport, format: OutputFormat) -> Result<String, QuoteboxError> {
    match format {
        OutputFormat::Pretty => Ok(format_sync_pretty(report)),
        OutputFormat::Json => format_sync_json(report),
    }
}

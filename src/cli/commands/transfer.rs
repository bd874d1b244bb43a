//! Import and export of quote files.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::OutputFormat;
use crate::error::QuoteboxError;
use crate::output::to_json;

/// Append the quotes in a JSON file.
///
/// # Errors
///
/// Returns `QuoteboxError::InvalidImport` if the file does not parse (nothing
/// is imported), or an I/O or storage error.
pub fn import(ctx: &Context, file: &Path, format: OutputFormat) -> Result<String, QuoteboxError> {
    let raw = std::fs::read_to_string(file)?;
    let mut board = ctx.open_board()?;
    let count = board.store_mut().import_json(&raw)?;
    log::info!("Imported {count} quotes from {}", file.display());

    match format {
        OutputFormat::Json => to_json(&json!({
            "imported": count,
            "count": board.store().len(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Quotes imported successfully!".green().bold(),
            format!("({count} added)").dimmed()
        )),
    }
}

/// Write every quote to a JSON file, or return it when `file` is `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export(ctx: &Context, file: &Path, format: OutputFormat) -> Result<String, QuoteboxError> {
    let board = ctx.open_board()?;
    let document = board.store().export_json()?;

    if file == Path::new("-") {
        return Ok(document);
    }

    std::fs::write(file, &document)?;
    let count = board.store().len();

    match format {
        OutputFormat::Json => to_json(&json!({
            "exported": count,
            "file": file.display().to_string(),
        })),
        OutputFormat::Pretty => Ok(format!("Exported {count} quotes to {}", file.display())),
    }
}

//! JSON output formatting for quotebox.

use serde::Serialize;
use serde_json::json;

use crate::error::QuoteboxError;
use crate::quotes::{CategoryFilter, Quote};
use crate::sync::ReconcileReport;

/// Format a list of quotes as JSON.
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn format_quotes_json(quotes: &[&Quote], filter: &CategoryFilter) -> Result<String, QuoteboxError> {
    let output = json!({
        "filter": filter.as_str(),
        "count": quotes.len(),
        "items": quotes
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a shown quote as JSON. `null` when nothing matched.
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn format_shown_json(quote: Option<&Quote>, filter: &CategoryFilter) -> Result<String, QuoteboxError> {
    let output = json!({
        "filter": filter.as_str(),
        "quote": quote
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format categories as JSON.
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn format_categories_json(
    categories: &[&str],
    selected: &CategoryFilter,
) -> Result<String, QuoteboxError> {
    let output = json!({
        "selected": selected.as_str(),
        "count": categories.len(),
        "items": categories
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a sync report as JSON.
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn format_sync_json(report: &ReconcileReport) -> Result<String, QuoteboxError> {
    let output = json!({
        "fetched": report.fetched,
        "added": report.added_count(),
        "items": report.added,
        "notification": report.notification(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `QuoteboxError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, QuoteboxError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quotes_json() {
        let a = Quote::new("One", "A");
        let b = Quote::new("Two", "B");
        let result = format_quotes_json(&[&a, &b], &CategoryFilter::All).unwrap();

        assert!(result.contains("\"filter\": \"all\""));
        assert!(result.contains("\"count\": 2"));
        assert!(result.contains("\"text\": \"One\""));
        assert!(result.contains("\"category\": \"B\""));
    }

    #[test]
    fn test_format_shown_json_none() {
        let result = format_shown_json(None, &CategoryFilter::parse("Empty")).unwrap();
        assert!(result.contains("\"quote\": null"));
        assert!(result.contains("\"filter\": \"Empty\""));
    }

    #[test]
    fn test_format_categories_json() {
        let result =
            format_categories_json(&["Motivation", "Coding"], &CategoryFilter::parse("Coding"))
                .unwrap();
        assert!(result.contains("\"selected\": \"Coding\""));
        assert!(result.contains("\"count\": 2"));
    }

    #[test]
    fn test_format_sync_json() {
        let report = ReconcileReport {
            fetched: 2,
            added: vec![Quote::new("New", "Server")],
        };
        let result = format_sync_json(&report).unwrap();
        assert!(result.contains("\"fetched\": 2"));
        assert!(result.contains("\"added\": 1"));
        assert!(result.contains("Quotes synced with server!"));

        let empty = format_sync_json(&ReconcileReport::default()).unwrap();
        assert!(empty.contains("\"notification\": null"));
    }
}

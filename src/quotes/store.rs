//! The quote store.
//!
//! Owns the ordered list of quotes and the persistent storage it is mirrored
//! to. Every mutation rewrites the whole `quotes` array.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use crate::error::QuoteboxError;
use crate::storage::{KeyValueStore, QUOTES_KEY, SELECTED_CATEGORY_KEY};

use super::{CategoryFilter, Quote};

/// Quotes used when nothing usable is persisted.
#[must_use]
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new("Believe in yourself!", "Motivation"),
        Quote::new("Keep calm and code on.", "Coding"),
    ]
}

/// Parse a JSON array into quotes, one entry at a time.
///
/// A missing or null field becomes empty and a non-string field keeps its
/// JSON text, so odd entries never sink their neighbours. Only a document
/// that is not a JSON array fails.
fn parse_quotes(raw: &str) -> Result<Vec<Quote>, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    Ok(entries
        .iter()
        .map(|entry| Quote::new(field_text(entry, "text"), field_text(entry, "category")))
        .collect())
}

fn field_text(entry: &Value, field: &str) -> String {
    match entry.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// In-memory quote list mirrored to persistent storage.
pub struct QuoteStore {
    quotes: Vec<Quote>,
    storage: Box<dyn KeyValueStore>,
}

impl QuoteStore {
    /// Hydrate the store from persistent storage.
    ///
    /// An absent `quotes` value, or one that is not a JSON array, falls back
    /// to the built-in defaults. The fallback is not written back until the
    /// next save. Malformed entries inside the array are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage itself cannot be read.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Result<Self, QuoteboxError> {
        let quotes = match storage.get_item(QUOTES_KEY)? {
            Some(raw) => match parse_quotes(&raw) {
                Ok(quotes) => quotes,
                Err(e) => {
                    log::warn!("Stored quotes are unreadable, using defaults: {e}");
                    default_quotes()
                }
            },
            None => default_quotes(),
        };

        log::debug!("Loaded {} quotes", quotes.len());
        Ok(Self { quotes, storage })
    }

    /// Write the full quote list to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save(&mut self) -> Result<(), QuoteboxError> {
        let raw = serde_json::to_string(&self.quotes)?;
        self.storage.set_item(QUOTES_KEY, &raw)
    }

    /// Append a new quote and persist.
    ///
    /// Both fields are trimmed; either one being empty afterwards is rejected
    /// without touching the store.
    ///
    /// # Errors
    ///
    /// Returns `QuoteboxError::Validation` for empty input, or a storage error
    /// if persisting fails.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote, QuoteboxError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() || category.is_empty() {
            return Err(QuoteboxError::Validation(
                "Please enter both quote and category.".to_string(),
            ));
        }

        let quote = Quote::new(text, category);
        self.quotes.push(quote.clone());
        self.save()?;
        Ok(quote)
    }

    /// Append quotes as given, without validation, and persist.
    ///
    /// Returns the number of quotes appended.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn import_batch(&mut self, batch: Vec<Quote>) -> Result<usize, QuoteboxError> {
        let count = batch.len();
        self.quotes.extend(batch);
        self.save()?;
        Ok(count)
    }

    /// Parse a JSON array of quote-shaped entries and append them.
    ///
    /// The document is parsed in full before anything is appended, so a parse
    /// failure leaves the store unchanged. Entries are mapped the same way
    /// [`QuoteStore::load`] maps them.
    ///
    /// # Errors
    ///
    /// Returns `QuoteboxError::InvalidImport` if the document is not a JSON
    /// array, or a storage error if persisting fails.
    pub fn import_json(&mut self, raw: &str) -> Result<usize, QuoteboxError> {
        let batch = parse_quotes(raw).map_err(|e| QuoteboxError::InvalidImport(e.to_string()))?;
        self.import_batch(batch)
    }

    /// Serialize every quote as an indented JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> Result<String, QuoteboxError> {
        Ok(serde_json::to_string_pretty(&self.quotes)?)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for quote in &self.quotes {
            if !seen.contains(&quote.category.as_str()) {
                seen.push(&quote.category);
            }
        }
        seen
    }

    /// Quotes passing `filter`, in store order.
    #[must_use]
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| filter.matches(q)).collect()
    }

    /// Pick a random quote passing `filter`.
    pub fn random<R: Rng + ?Sized>(&self, filter: &CategoryFilter, rng: &mut R) -> Option<&Quote> {
        self.filtered(filter).choose(rng).copied()
    }

    /// Check whether any quote has exactly this text.
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.quotes.iter().any(|q| q.text == text)
    }

    /// Append without persisting. Callers batch their own save.
    pub(crate) fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// All quotes in insertion order.
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check if the store holds no quotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// The persisted filter selection, if any.
    ///
    /// An empty stored value counts as no selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub fn selected_filter(&self) -> Result<Option<CategoryFilter>, QuoteboxError> {
        Ok(self
            .storage
            .get_item(SELECTED_CATEGORY_KEY)?
            .filter(|value| !value.is_empty())
            .map(|value| CategoryFilter::parse(&value)))
    }

    /// Persist the filter selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub fn set_selected_filter(&mut self, filter: &CategoryFilter) -> Result<(), QuoteboxError> {
        self.storage.set_item(SELECTED_CATEGORY_KEY, filter.as_str())
    }
}

impl std::fmt::Debug for QuoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteStore")
            .field("quotes", &self.quotes)
            .finish_non_exhaustive()
    }
}

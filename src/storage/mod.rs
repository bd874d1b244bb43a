//! Storage layer for quotebox.
//!
//! Two key/value scopes share one trait:
//! - persistent: the `SQLite` `local_storage` table ([`Database`])
//! - session: an in-process map ([`MemoryStorage`])

mod database;
mod memory;
mod migrations;

pub use database::Database;
pub use memory::MemoryStorage;

use crate::error::QuoteboxError;

/// Persistent storage key holding the JSON array of quotes.
pub const QUOTES_KEY: &str = "quotes";
/// Persistent storage key holding the selected category filter.
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";
/// Session storage key holding the text of the last shown quote.
pub const LAST_QUOTE_KEY: &str = "lastQuote";

/// String-keyed storage of string values.
///
/// Writes overwrite whatever was stored under the key before.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, QuoteboxError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), QuoteboxError>;
}

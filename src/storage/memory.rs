//! In-memory key/value scope.
//!
//! Used for session-scoped values that must not outlive the process, and as a
//! storage double in tests.

use std::collections::HashMap;

use crate::error::QuoteboxError;

use super::KeyValueStore;

/// Key/value storage that lives only as long as the value itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, QuoteboxError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), QuoteboxError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

//! Quote board: the store plus display state.
//!
//! Tracks the active category filter and remembers the last shown quote in
//! session storage.

use rand::Rng;

use crate::error::QuoteboxError;
use crate::storage::{KeyValueStore, MemoryStorage, LAST_QUOTE_KEY};

use super::{CategoryFilter, Quote, QuoteStore};

/// Message shown when the active filter matches nothing.
pub const NO_QUOTES_MESSAGE: &str = "No quotes in this category.";

/// A store with a selected filter and a session scope.
#[derive(Debug)]
pub struct QuoteBoard {
    store: QuoteStore,
    session: MemoryStorage,
    filter: CategoryFilter,
}

impl QuoteBoard {
    /// Hydrate the store and restore the last selected filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Result<Self, QuoteboxError> {
        let store = QuoteStore::load(storage)?;
        let mut board = Self {
            store,
            session: MemoryStorage::new(),
            filter: CategoryFilter::All,
        };
        board.restore_last_filter()?;
        Ok(board)
    }

    /// Re-read the persisted filter selection. No selection means `all`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub fn restore_last_filter(&mut self) -> Result<&CategoryFilter, QuoteboxError> {
        self.filter = self.store.selected_filter()?.unwrap_or_default();
        Ok(&self.filter)
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut QuoteStore {
        &mut self.store
    }

    /// Pick a random quote under the active filter.
    ///
    /// Returns `None` when the filter matches nothing; see
    /// [`NO_QUOTES_MESSAGE`].
    ///
    /// # Errors
    ///
    /// Returns an error if session storage cannot be written.
    pub fn show_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Quote>, QuoteboxError> {
        let filter = self.filter.clone();
        self.show_random_in(&filter, rng)
    }

    /// Pick a random quote under an explicit filter, leaving the active one
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if session storage cannot be written.
    pub fn show_random_in<R: Rng + ?Sized>(
        &mut self,
        filter: &CategoryFilter,
        rng: &mut R,
    ) -> Result<Option<Quote>, QuoteboxError> {
        let Some(quote) = self.store.random(filter, rng).cloned() else {
            return Ok(None);
        };
        self.session.set_item(LAST_QUOTE_KEY, &quote.text)?;
        Ok(Some(quote))
    }

    /// Select a filter, persist the selection, and show a quote under it.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be persisted.
    pub fn select_filter<R: Rng + ?Sized>(
        &mut self,
        filter: CategoryFilter,
        rng: &mut R,
    ) -> Result<Option<Quote>, QuoteboxError> {
        self.filter = filter;
        let shown = self.show_random(rng)?;
        self.store.set_selected_filter(&self.filter)?;
        Ok(shown)
    }

    /// Add a quote through the store.
    ///
    /// # Errors
    ///
    /// See [`QuoteStore::add`].
    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<Quote, QuoteboxError> {
        self.store.add(text, category)
    }

    /// Text of the last quote shown in this session.
    #[must_use]
    pub fn last_quote(&self) -> Option<String> {
        self.session.get_item(LAST_QUOTE_KEY).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Database, SELECTED_CATEGORY_KEY};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_open_without_selection_uses_all() {
        let board = QuoteBoard::open(Box::new(MemoryStorage::new())).unwrap();
        assert_eq!(board.filter(), &CategoryFilter::All);
        assert_eq!(board.store().len(), 2);
        assert!(board.last_quote().is_none());
    }

    #[test]
    fn test_open_restores_selection() {
        let mut storage = MemoryStorage::new();
        storage.set_item(SELECTED_CATEGORY_KEY, "Coding").unwrap();

        let board = QuoteBoard::open(Box::new(storage)).unwrap();
        assert_eq!(board.filter(), &CategoryFilter::parse("Coding"));
    }

    #[test]
    fn test_show_random_records_last_quote() {
        let mut board = QuoteBoard::open(Box::new(MemoryStorage::new())).unwrap();

        let shown = board.show_random(&mut rng()).unwrap().unwrap();
        assert_eq!(board.last_quote(), Some(shown.text));
    }

    #[test]
    fn test_show_random_empty_category() {
        let mut board = QuoteBoard::open(Box::new(MemoryStorage::new())).unwrap();

        let shown = board
            .select_filter(CategoryFilter::parse("Nothing here"), &mut rng())
            .unwrap();
        assert!(shown.is_none());
        assert!(board.last_quote().is_none());
    }

    #[test]
    fn test_show_random_in_does_not_change_filter() {
        let mut board = QuoteBoard::open(Box::new(MemoryStorage::new())).unwrap();

        let shown = board
            .show_random_in(&CategoryFilter::parse("Coding"), &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(shown.category, "Coding");
        assert_eq!(board.filter(), &CategoryFilter::All);
    }

    #[test]
    fn test_select_filter_survives_reopen() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("board.db");

        {
            let db = Database::open_at(&db_path).unwrap();
            let mut board = QuoteBoard::open(Box::new(db)).unwrap();
            let shown = board
                .select_filter(CategoryFilter::parse("Motivation"), &mut rng())
                .unwrap()
                .unwrap();
            assert_eq!(shown.text, "Believe in yourself!");
        }

        let db = Database::open_at(&db_path).unwrap();
        let board = QuoteBoard::open(Box::new(db)).unwrap();
        assert_eq!(board.filter(), &CategoryFilter::parse("Motivation"));
        // Session values do not survive
        assert!(board.last_quote().is_none());
    }

    #[test]
    fn test_add_quote_then_show_in_new_category() {
        let mut board = QuoteBoard::open(Box::new(MemoryStorage::new())).unwrap();
        board.add_quote("Fresh", "New").unwrap();

        let shown = board
            .select_filter(CategoryFilter::parse("New"), &mut rng())
            .unwrap();
        assert_eq!(shown, Some(Quote::new("Fresh", "New")));
    }
}

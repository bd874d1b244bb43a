//! Command implementations for quotebox.
//!
//! Each command opens the store, acts, and returns the text to print.

mod completions;
mod quote;
mod sync;
mod transfer;

pub use completions::completions;
pub use quote::{add, categories, filter, list, show};
pub use sync::{sync, watch};
pub use transfer::{export, import};

use crate::config::{Config, Paths};
use crate::error::QuoteboxError;
use crate::quotes::QuoteBoard;
use crate::storage::Database;
use crate::sync::HttpRemote;

/// Everything a command needs: where data lives and how to behave.
#[derive(Debug, Clone)]
pub struct Context {
    /// Data and config locations.
    pub paths: Paths,
    /// Loaded configuration.
    pub config: Config,
}

impl Context {
    /// Create a command context.
    #[must_use]
    pub const fn new(paths: Paths, config: Config) -> Self {
        Self { paths, config }
    }

    /// Open the persistent store and restore the selected filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open_board(&self) -> Result<QuoteBoard, QuoteboxError> {
        self.paths.ensure_dirs()?;
        let db = Database::open_at(&self.paths.database)?;
        QuoteBoard::open(Box::new(db))
    }

    /// The configured remote.
    #[must_use]
    pub fn remote(&self) -> HttpRemote {
        HttpRemote::new(&self.config.sync)
    }
}

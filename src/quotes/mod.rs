//! Quotes, the store that owns them, and the board that displays them.

mod board;
mod store;
mod types;

pub use board::{QuoteBoard, NO_QUOTES_MESSAGE};
pub use store::{default_quotes, QuoteStore};
pub use types::{CategoryFilter, Quote, ALL_CATEGORIES};

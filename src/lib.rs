//! quotebox - a quote keeper with remote sync
//!
//! Quotes are kept in a local store, shown at random by category, imported
//! and exported as JSON, and reconciled against a remote endpoint by exact
//! text match.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod quotes;
pub mod storage;
pub mod sync;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::QuoteboxError;
pub use quotes::{CategoryFilter, Quote, QuoteBoard, QuoteStore};

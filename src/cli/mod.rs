//! Command-line interface for quotebox.

pub mod args;
pub mod commands;

//! Configuration management for quotebox.
//!
//! This module handles loading configuration from `~/.quotebox/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, SyncConfig};

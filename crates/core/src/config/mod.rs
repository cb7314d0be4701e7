//! Configuration loading and management.
//!
//! Reads the `.postline/` directory: global settings from `config.toml`
//! and agent definitions from `agents/*.md`.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_config;
pub use models::{AppConfig, GlobalConfig};

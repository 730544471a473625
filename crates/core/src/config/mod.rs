//! Configuration loading and management.
//!
//! This module loads the optional `.agent-wizard/` project directory.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, CONFIG_DIR};
pub use models::AppConfig;

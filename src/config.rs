//! Configuration
//!
//! Layered settings for the catalog: built-in defaults, an optional global
//! file, an optional `filmkatalog.toml` in the working directory and
//! `FILMKATALOG__*` environment variables. CLI flags are applied on top by the
//! binary.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
mod storage_paths;

pub use facade::ConfigLoader;
pub use storage_paths::{CatalogConfig, DEFAULT_CATALOG_FILE};

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Default number of answers a numeric prompt accepts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilmkatalogConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FilmkatalogConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.file.as_os_str().is_empty() {
            return Err("catalog.file cannot be empty".to_string());
        }
        if self.menu.max_attempts == 0 {
            return Err("menu.max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Interactive menu settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Invalid answers allowed per numeric prompt before the action is cancelled
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Color success and error lines
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_true() -> bool {
    true
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            color: default_true(),
        }
    }
}

//! Built-in defaults, the lowest precedence layer.

use crate::config::{DEFAULT_CATALOG_FILE, DEFAULT_MAX_ATTEMPTS};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("catalog.file", DEFAULT_CATALOG_FILE)?
        .set_default("menu.max_attempts", i64::from(DEFAULT_MAX_ATTEMPTS))?
        .set_default("menu.color", true)
}

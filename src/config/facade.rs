//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::FilmkatalogConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, the working directory file
    /// and the environment.
    pub fn load(working_dir: &Path) -> Result<FilmkatalogConfig, ConfigError> {
        let config = MergeService::load(working_dir)?;
        Self::validated(config)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<FilmkatalogConfig, ConfigError> {
        let config = MergeService::load_from_file(path)?;
        Self::validated(config)
    }

    fn validated(config: FilmkatalogConfig) -> Result<FilmkatalogConfig, ConfigError> {
        config.validate().map_err(ConfigError::Message)?;
        Ok(config)
    }
}

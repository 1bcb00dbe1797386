//! CatalogConfig and path resolution for the catalog file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_FILE: &str = "filmkatalog.json";

fn default_catalog_file() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_FILE)
}

/// Catalog storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (relative paths are resolved against the working directory)
    #[serde(default = "default_catalog_file")]
    pub file: PathBuf,
}

impl CatalogConfig {
    /// Resolve the catalog file against `working_dir`.
    pub fn resolve_file(&self, working_dir: &Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            working_dir.join(&self.file)
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: default_catalog_file(),
        }
    }
}

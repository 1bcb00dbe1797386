//! Error types for the movie catalog.

use thiserror::Error;

/// Errors raised by catalog, storage, menu and configuration code.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("A movie titled '{0}' already exists in the catalog")]
    AlreadyExists(String),

    #[error("No movie titled '{0}' in the catalog")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to load catalog from {location}: {reason}")]
    LoadFailed { location: String, reason: String },

    #[error("Failed to save catalog to {location}: {reason}")]
    SaveFailed { location: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for CatalogError {
    fn from(err: config::ConfigError) -> Self {
        CatalogError::ConfigError(err.to_string())
    }
}


//! In-process storage. Backs the catalog in tests, where no file is wanted.

use crate::error::CatalogError;
use crate::storage::{CatalogStorage, RawCatalog};
use parking_lot::Mutex;

#[derive(Default)]
pub struct MemoryStorage {
    document: Mutex<Option<RawCatalog>>,
    quarantined: Mutex<Option<RawCatalog>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: RawCatalog) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            quarantined: Mutex::new(None),
        }
    }

    /// Copy of the last written document.
    pub fn snapshot(&self) -> Option<RawCatalog> {
        self.document.lock().clone()
    }

    /// Copy of the document last moved aside by `quarantine`.
    pub fn quarantined(&self) -> Option<RawCatalog> {
        self.quarantined.lock().clone()
    }
}

impl CatalogStorage for MemoryStorage {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn read_all(&self) -> Result<Option<RawCatalog>, CatalogError> {
        Ok(self.document.lock().clone())
    }

    fn write_all(&self, document: &RawCatalog) -> Result<(), CatalogError> {
        *self.document.lock() = Some(document.clone());
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<String>, CatalogError> {
        match self.document.lock().take() {
            Some(document) => {
                *self.quarantined.lock() = Some(document);
                Ok(Some("memory (quarantined)".to_string()))
            }
            None => Ok(None),
        }
    }
}

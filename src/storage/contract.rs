use crate::error::CatalogError;

/// Stored catalog document: title to record object, in file order.
pub type RawCatalog = serde_json::Map<String, serde_json::Value>;

/// Whole-state persistence for a catalog. There is no incremental sync;
/// every write replaces everything previously stored.
pub trait CatalogStorage: Send + Sync {
    /// Human readable name of the backing resource, used in messages.
    fn location(&self) -> String;
    /// Read the stored document. `Ok(None)` means nothing has been stored yet.
    fn read_all(&self) -> Result<Option<RawCatalog>, CatalogError>;
    fn write_all(&self, document: &RawCatalog) -> Result<(), CatalogError>;
    /// Move whatever is stored out of the way so the next `write_all` cannot
    /// replace it. Returns where it was kept, or `None` if nothing was stored.
    fn quarantine(&self) -> Result<Option<String>, CatalogError>;
}

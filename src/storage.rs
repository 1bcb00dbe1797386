//! Catalog storage: read and write the whole persisted record set.

pub mod contract;
pub mod json_file;
pub mod memory;

pub use contract::{CatalogStorage, RawCatalog};
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

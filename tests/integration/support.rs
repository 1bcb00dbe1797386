use filmkatalog::config::{FilmkatalogConfig, MenuConfig};
use filmkatalog::storage::JsonFileStorage;
use filmkatalog::{MovieRecord, Rating};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn record(director: &str, year: i32, genre: &str, rating: i64) -> MovieRecord {
    MovieRecord::new(director, year, genre, Rating::new(rating).unwrap())
}

/// Temp directory plus a JSON storage for `filme.json` inside it.
pub fn file_storage() -> (TempDir, JsonFileStorage, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("filme.json");
    let storage = JsonFileStorage::new(&path);
    (temp, storage, path)
}

/// Config pointing at `file`, with plain menu output.
pub fn test_config(file: PathBuf) -> FilmkatalogConfig {
    let mut config = FilmkatalogConfig::default();
    config.catalog.file = file;
    config.menu = MenuConfig {
        max_attempts: 3,
        color: false,
    };
    config
}

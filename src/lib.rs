//! Filmkatalog: a single-user movie catalog
//!
//! Keeps movie records (title, director, year, genre, rating) in memory keyed
//! by title, and loads and saves the whole catalog as one JSON file.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod storage;
pub mod tooling;

pub use catalog::{Catalog, CatalogEntry, Listing, LoadOutcome, MovieRecord, Rating};
pub use error::CatalogError;

//! Movie Catalog
//!
//! In-memory collection of movie records keyed by title. Owns every record,
//! enforces title uniqueness and moves its whole state in and out of a
//! [`CatalogStorage`] with `load`/`save`.

pub mod codec;
pub mod record;

pub use codec::RejectedRecord;
pub use record::{MovieRecord, Rating, MISSING_FIELD};

use crate::error::CatalogError;
use crate::storage::CatalogStorage;
use tracing::{debug, info, warn};

/// One catalog entry: the title key and its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub record: MovieRecord,
}

/// Result of [`Catalog::list`].
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    Empty,
    Entries(Vec<&'a CatalogEntry>),
}

/// Result of [`Catalog::load`]. Loading never fails the caller; every
/// failure leaves an empty catalog and is described here.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        count: usize,
        rejected: Vec<RejectedRecord>,
    },
    /// The storage holds no catalog yet (first run).
    Missing,
    Failed(CatalogError),
}

impl LoadOutcome {
    /// True when saving the catalog this load produced would lose stored
    /// data: the document was unreadable or some records were rejected.
    pub fn is_lossy(&self) -> bool {
        match self {
            LoadOutcome::Failed(_) => true,
            LoadOutcome::Loaded { rejected, .. } => !rejected.is_empty(),
            LoadOutcome::Missing => false,
        }
    }

    /// One-line (or, with rejected records, multi-line) summary for the user.
    pub fn message(&self) -> String {
        match self {
            LoadOutcome::Loaded { count, rejected } if rejected.is_empty() => {
                format!("Loaded {} movie(s).", count)
            }
            LoadOutcome::Loaded { count, rejected } => {
                let mut message = format!(
                    "Loaded {} movie(s); skipped {} invalid record(s):",
                    count,
                    rejected.len()
                );
                for r in rejected {
                    message.push_str(&format!("\n  - '{}': {}", r.title, r.reason));
                }
                message
            }
            LoadOutcome::Missing => "No existing catalog found, starting empty.".to_string(),
            LoadOutcome::Failed(e) => format!("{}. Starting with an empty catalog.", e),
        }
    }
}

/// Movie catalog with insertion-ordered entries.
///
/// Lookups are linear scans over the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of movies in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no movies.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record stored under exactly `title`.
    pub fn get(&self, title: &str) -> Option<&MovieRecord> {
        self.position(title).map(|i| &self.entries[i].record)
    }

    /// Whether a movie with exactly `title` exists.
    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// Insert a new movie. Titles compare exactly (case-sensitive).
    pub fn add(&mut self, title: impl Into<String>, record: MovieRecord) -> Result<(), CatalogError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        if self.contains(&title) {
            return Err(CatalogError::AlreadyExists(title));
        }
        debug!(title = %title, "Adding movie");
        self.entries.push(CatalogEntry { title, record });
        Ok(())
    }

    /// All entries in insertion order, or [`Listing::Empty`] so callers can
    /// print the empty-catalog message instead of an empty table.
    pub fn list(&self) -> Listing<'_> {
        if self.entries.is_empty() {
            Listing::Empty
        } else {
            Listing::Entries(self.entries.iter().collect())
        }
    }

    /// Case-insensitive substring match on titles. An empty query matches
    /// every entry.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Remove a movie by exact title, returning its record.
    pub fn remove(&mut self, title: &str) -> Result<MovieRecord, CatalogError> {
        let index = self
            .position(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;
        debug!(title = %title, "Removing movie");
        Ok(self.entries.remove(index).record)
    }

    /// Replace the whole catalog with the contents of `storage`.
    pub fn load(&mut self, storage: &dyn CatalogStorage) -> LoadOutcome {
        self.entries.clear();

        let document = match storage.read_all() {
            Ok(Some(document)) => document,
            Ok(None) => {
                info!(location = %storage.location(), "No existing catalog found");
                return LoadOutcome::Missing;
            }
            Err(e) => {
                warn!(location = %storage.location(), error = %e, "Catalog load failed");
                return LoadOutcome::Failed(e);
            }
        };

        let decoded = codec::decode(document);
        for rejected in &decoded.rejected {
            warn!(
                title = %rejected.title,
                reason = %rejected.reason,
                "Skipping invalid catalog record"
            );
        }
        self.entries = decoded.entries;
        info!(
            location = %storage.location(),
            count = self.entries.len(),
            rejected = decoded.rejected.len(),
            "Catalog loaded"
        );
        LoadOutcome::Loaded {
            count: self.entries.len(),
            rejected: decoded.rejected,
        }
    }

    /// Write the whole catalog to `storage`. Returns the number of records
    /// written.
    pub fn save(&self, storage: &dyn CatalogStorage) -> Result<usize, CatalogError> {
        let document = codec::encode(&self.entries).map_err(|e| CatalogError::SaveFailed {
            location: storage.location(),
            reason: e.to_string(),
        })?;
        if let Err(e) = storage.write_all(&document) {
            warn!(location = %storage.location(), error = %e, "Catalog save failed");
            return Err(e);
        }
        info!(location = %storage.location(), count = self.entries.len(), "Catalog saved");
        Ok(self.entries.len())
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.title == title)
    }
}

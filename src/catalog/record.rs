//! Movie record and rating types.

use crate::error::CatalogError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Placeholder shown for fields an older record does not carry.
pub const MISSING_FIELD: &str = "N/A";

/// Star rating, always within `Rating::MIN..=Rating::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, CatalogError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(CatalogError::Validation(format!(
                "rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Attributes of one movie. The title is the catalog key and lives outside
/// the record.
///
/// Every field is optional because files written by older versions of the
/// program do not carry all of them. Records created through `Catalog::add`
/// always have every field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    #[serde(rename = "regisseur", skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(rename = "jahr", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(rename = "bewertung", skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl MovieRecord {
    pub fn new(
        director: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        rating: Rating,
    ) -> Self {
        Self {
            director: Some(director.into()),
            year: Some(year),
            genre: Some(genre.into()),
            rating: Some(rating),
        }
    }

    pub fn director_or_placeholder(&self) -> String {
        display_or_placeholder(self.director.as_ref())
    }

    pub fn year_or_placeholder(&self) -> String {
        display_or_placeholder(self.year.as_ref())
    }

    pub fn genre_or_placeholder(&self) -> String {
        display_or_placeholder(self.genre.as_ref())
    }

    pub fn rating_or_placeholder(&self) -> String {
        display_or_placeholder(self.rating.as_ref())
    }
}

fn display_or_placeholder<T: fmt::Display>(value: Option<&T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}

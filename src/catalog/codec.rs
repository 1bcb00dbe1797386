//! Conversion between stored JSON documents and catalog entries.
//!
//! Files written by earlier versions of the program store `jahr` and
//! `bewertung` either as numbers or as text. Decoding coerces both shapes into
//! the canonical schema and rejects records that cannot be coerced.

use super::record::{MovieRecord, Rating};
use super::CatalogEntry;
use crate::error::CatalogError;
use crate::storage::RawCatalog;
use serde_json::{Map, Value};

const KEY_DIRECTOR: &str = "regisseur";
const KEY_YEAR: &str = "jahr";
const KEY_GENRE: &str = "genre";
const KEY_RATING: &str = "bewertung";

/// A stored record left out of the catalog because it violates the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub title: String,
    pub reason: String,
}

/// Decoded document: accepted entries in file order plus rejected records.
#[derive(Debug, Default)]
pub struct Decoded {
    pub entries: Vec<CatalogEntry>,
    pub rejected: Vec<RejectedRecord>,
}

pub fn decode(document: RawCatalog) -> Decoded {
    let mut decoded = Decoded::default();
    for (title, value) in document {
        match decode_record(&title, value) {
            Ok(record) => decoded.entries.push(CatalogEntry { title, record }),
            Err(reason) => decoded.rejected.push(RejectedRecord { title, reason }),
        }
    }
    decoded
}

pub fn encode(entries: &[CatalogEntry]) -> Result<RawCatalog, CatalogError> {
    let mut document = Map::with_capacity(entries.len());
    for entry in entries {
        let value = serde_json::to_value(&entry.record).map_err(|e| {
            CatalogError::Validation(format!("Failed to encode '{}': {}", entry.title, e))
        })?;
        document.insert(entry.title.clone(), value);
    }
    Ok(document)
}

fn decode_record(title: &str, value: Value) -> Result<MovieRecord, String> {
    if title.trim().is_empty() {
        return Err("title is empty".to_string());
    }
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => return Err(format!("expected an object, found {}", kind_of(&other))),
    };

    let director = text_field(fields.remove(KEY_DIRECTOR), KEY_DIRECTOR)?;
    let genre = text_field(fields.remove(KEY_GENRE), KEY_GENRE)?;
    let year = integer_field(fields.remove(KEY_YEAR), KEY_YEAR)?
        .map(|year| {
            i32::try_from(year).map_err(|_| format!("{} value {} is out of range", KEY_YEAR, year))
        })
        .transpose()?;
    let rating = integer_field(fields.remove(KEY_RATING), KEY_RATING)?
        .map(|rating| Rating::new(rating).map_err(|e| format!("{}: {}", KEY_RATING, e)))
        .transpose()?;

    Ok(MovieRecord {
        director,
        year,
        genre,
        rating,
    })
}

fn text_field(value: Option<Value>, key: &str) -> Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(format!("{} must be text, found {}", key, kind_of(&other))),
    }
}

fn integer_field(value: Option<Value>, key: &str) -> Result<Option<i64>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| format!("{} must be an integer, found {}", key, number)),
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("{} must be an integer, found '{}'", key, text)),
        Some(other) => Err(format!("{} must be an integer, found {}", key, kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Text and JSON rendering of catalog entries.

use crate::catalog::CatalogEntry;
use comfy_table::Table;
use serde_json::json;

pub const EMPTY_CATALOG: &str = "The catalog is empty.";

/// Table of entries; absent fields show the `N/A` placeholder.
pub fn render_table(entries: &[&CatalogEntry]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Title", "Director", "Year", "Genre", "Rating"]);
    for entry in entries {
        let record = &entry.record;
        table.add_row(vec![
            entry.title.clone(),
            record.director_or_placeholder(),
            record.year_or_placeholder(),
            record.genre_or_placeholder(),
            record.rating_or_placeholder(),
        ]);
    }
    table.to_string()
}

/// JSON array of entries; absent fields are `null`.
pub fn render_json(entries: &[&CatalogEntry]) -> Result<String, serde_json::Error> {
    let rows: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "title": entry.title,
                "director": entry.record.director,
                "year": entry.record.year,
                "genre": entry.record.genre,
                "rating": entry.record.rating.map(|r| r.get()),
            })
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

//! JSON file storage with whole-file atomic replacement.

use crate::error::CatalogError;
use crate::storage::{CatalogStorage, RawCatalog};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::warn;

const INDENT: &[u8] = b"    ";
const STAGING_SUFFIX: &str = ".tmp";
const QUARANTINE_SUFFIX: &str = ".corrupt";

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling path the document is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        self.sibling_path(STAGING_SUFFIX)
    }

    /// First free `<file>.corrupt`, `<file>.corrupt.1`, ... next to the file.
    fn quarantine_path(&self) -> PathBuf {
        let mut candidate = self.sibling_path(QUARANTINE_SUFFIX);
        let mut n = 1u32;
        while candidate.symlink_metadata().is_ok() {
            candidate = self.sibling_path(&format!("{}.{}", QUARANTINE_SUFFIX, n));
            n += 1;
        }
        candidate
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("catalog"));
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn load_failed(&self, reason: impl ToString) -> CatalogError {
        CatalogError::LoadFailed {
            location: self.location(),
            reason: reason.to_string(),
        }
    }

    fn save_failed(&self, reason: impl ToString) -> CatalogError {
        CatalogError::SaveFailed {
            location: self.location(),
            reason: reason.to_string(),
        }
    }
}

impl CatalogStorage for JsonFileStorage {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&self) -> Result<Option<RawCatalog>, CatalogError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.load_failed(e)),
        };

        let value: Value = serde_json::from_str(&content)
            .map_err(|e| self.load_failed(format!("invalid JSON: {}", e)))?;
        match value {
            Value::Object(document) => Ok(Some(document)),
            _ => Err(self.load_failed("expected a JSON object of movies keyed by title")),
        }
    }

    fn write_all(&self, document: &RawCatalog) -> Result<(), CatalogError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        document
            .serialize(&mut serializer)
            .map_err(|e| self.save_failed(e))?;
        buf.push(b'\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    self.save_failed(format!(
                        "failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let staging = self.staging_path();
        let written = fs::File::create(&staging).and_then(|mut file| {
            file.write_all(&buf)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&staging, &self.path)) {
            let _ = fs::remove_file(&staging);
            return Err(self.save_failed(e));
        }

        Ok(())
    }

    fn quarantine(&self) -> Result<Option<String>, CatalogError> {
        if self.path.symlink_metadata().is_err() {
            return Ok(None);
        }
        let target = self.quarantine_path();
        fs::rename(&self.path, &target).map_err(|e| {
            self.save_failed(format!(
                "failed to move unreadable catalog to {}: {}",
                target.display(),
                e
            ))
        })?;
        warn!(from = %self.location(), to = %target.display(), "Moved unreadable catalog aside");
        Ok(Some(target.display().to_string()))
    }
}

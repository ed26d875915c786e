//! Whole-file JSON storage shared by the collection repositories.

use crate::error::StorageResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A JSON array stored in a single file.
///
/// Every save rewrites the whole file; loading never fails.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for `<storage_dir>/<filename>`, creating the directory.
    pub fn new(storage_dir: impl AsRef<Path>, filename: &str) -> StorageResult<Self> {
        let storage_dir = storage_dir.as_ref();
        fs::create_dir_all(storage_dir)?;
        Ok(Self {
            path: storage_dir.join(filename),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write all records, pretty-printed with four-space indentation.
    pub fn save<T: Serialize>(&self, records: &[T]) -> StorageResult<()> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut serializer)?;
        fs::write(&self.path, buffer)?;

        debug!(path = %self.path.display(), count = records.len(), "Saved records");
        Ok(())
    }

    /// Read all records.
    ///
    /// A missing, unreadable or non-array file gives an empty list. Elements
    /// that fail to decode are skipped.
    pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        if !self.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read storage file");
                return Vec::new();
            }
        };

        let items = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!(path = %self.path.display(), "Storage file is not a JSON array");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Storage file is not valid JSON");
                return Vec::new();
            }
        };

        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        index = index,
                        error = %e,
                        "Skipping invalid record"
                    );
                    None
                }
            })
            .collect()
    }

    /// Delete the file; returns whether it existed.
    pub fn clear(&self) -> StorageResult<bool> {
        if !self.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }
}

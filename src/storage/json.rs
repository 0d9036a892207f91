//! JSON file-based key-value storage backend.
//!
//! This module provides a human-readable storage implementation using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(log n) - the whole document is loaded into memory once
//! - **Write**: O(size) - serializes and writes the entire document
//! - **Best for**: a handful of keys holding small JSON blobs

use crate::domain::error::{CatalogError, Result};
use crate::storage::backend::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// Top-level structure serialized to disk. Values are stored as opaque strings
/// exactly as the caller handed them over.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Time of the last successful save.
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,

    /// Stored entries, ordered by key for stable diffs.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            updated_at: None,
            entries: BTreeMap::new(),
        }
    }
}

#[derive(Debug)]
struct Inner {
    data: StorageData,
    /// Set when an in-memory change has not reached disk yet.
    dirty: bool,
}

/// JSON file key-value backend.
///
/// The whole document is kept in memory and persisted on every modification.
/// A failed save leaves the change in memory and marks the store dirty; the
/// next successful save (or drop) flushes it.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "updated_at": "2024-05-01T10:00:00Z",
///   "entries": {
///     "hero-name-filter": "bat",
///     "super-heroes": "[{\"id\":1,\"name\":\"SUPERMAN\",...}]"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    inner: Mutex<Inner>,
}

impl JsonFileStore {
    /// Creates or opens a JSON storage file.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the file
    /// is created on the first write. Parent directories are created eagerly.
    ///
    /// A file that is not a valid document (bad JSON, unknown version) is
    /// renamed to `<name>.corrupt` and the store starts empty, so the next
    /// write replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hero_catalog::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/tmp/hero-catalog/storage.json"))?;
    /// # Ok::<(), hero_catalog::CatalogError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            let contents = std::fs::read_to_string(&file_path)?;
            Self::parse(&contents).unwrap_or_else(|e| {
                tracing::warn!(error = %e, path = ?file_path, "discarding unreadable storage");
                Self::set_aside(&file_path);
                StorageData::default()
            })
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "storage opened");

        Ok(Self {
            file_path,
            inner: Mutex::new(Inner { data, dirty: false }),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn parse(contents: &str) -> Result<StorageData> {
        let data: StorageData = serde_json::from_str(contents)
            .map_err(|e| CatalogError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != FORMAT_VERSION {
            return Err(CatalogError::Storage(format!(
                "unsupported storage version {} (expected {FORMAT_VERSION})",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Moves a bad document to `<name>.corrupt`, replacing an older one.
    fn set_aside(path: &Path) {
        let mut corrupt = path.as_os_str().to_owned();
        corrupt.push(".corrupt");
        if let Err(e) = std::fs::rename(path, &corrupt) {
            tracing::warn!(error = %e, "failed to move unreadable storage aside");
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| CatalogError::Storage(format!("storage lock poisoned: {e}")))
    }

    /// Saves the document to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path.
    fn save(path: &Path, inner: &mut Inner) -> Result<()> {
        if !inner.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        inner.data.updated_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(&inner.data)?;

        let tmp_path = path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;

        inner.dirty = false;
        tracing::debug!(path = ?path, "storage saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let inner = self.lock()?;
        let value = inner.data.entries.get(key).cloned();
        tracing::trace!(key = %key, found = value.is_some(), "storage get");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key, len = value.len()).entered();

        let mut inner = self.lock()?;
        inner.data.entries.insert(key.to_string(), value.to_string());
        inner.dirty = true;
        Self::save(&self.file_path, &mut inner)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_remove", key = %key).entered();

        let mut inner = self.lock()?;
        if inner.data.entries.remove(key).is_some() {
            inner.dirty = true;
        }
        Self::save(&self.file_path, &mut inner)
    }
}

impl Drop for JsonFileStore {
    /// Flushes changes whose save failed earlier.
    fn drop(&mut self) {
        let Ok(inner) = self.inner.get_mut() else {
            return;
        };
        if inner.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = Self::save(&self.file_path, inner) {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

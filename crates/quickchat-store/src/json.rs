//! JSON-file implementation of the RecordStore trait.
//!
//! Each record lives in its own `message_<id>.json` document inside a
//! directory, as a flat object keyed by the `MESSAGE_*` field names.
//! An `order.json` index next to them lists ids in first-save order so a
//! reload returns records in the order they were saved.

use std::fs;
use std::path::{Path, PathBuf};

use quickchat_core::StoredRecord;

use crate::error::{Result, StoreError};
use crate::traits::RecordStore;

const FILE_PREFIX: &str = "message_";
const FILE_SUFFIX: &str = ".json";
const ORDER_FILE: &str = "order.json";

/// Directory-backed store with one JSON document per record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir` as the record directory. It is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document holding the record with `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{id}{FILE_SUFFIX}"))
    }

    /// Read a single stored message document.
    pub fn read_file(path: impl AsRef<Path>) -> Result<StoredRecord> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn order_path(&self) -> PathBuf {
        self.dir.join(ORDER_FILE)
    }

    fn read_order(&self) -> Result<Vec<String>> {
        let path = self.order_path();
        if !path.is_file() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn is_record_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(FILE_PREFIX) && n.ends_with(FILE_SUFFIX))
    }
}

impl RecordStore for JsonFileStore {
    /// Load every `message_*.json` document in save order.
    ///
    /// Documents missing from the order index follow the indexed ones,
    /// sorted by file name. A missing directory is an empty store.
    fn load(&self) -> Result<Vec<StoredRecord>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut unindexed = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && Self::is_record_file(&path) {
                unindexed.push(path);
            }
        }
        unindexed.sort();

        let mut paths = Vec::with_capacity(unindexed.len());
        for id in self.read_order()? {
            let path = self.path_for(&id);
            if let Some(pos) = unindexed.iter().position(|p| *p == path) {
                paths.push(unindexed.remove(pos));
            }
        }
        paths.extend(unindexed);

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let record = Self::read_file(&path).map_err(|e| {
                tracing::warn!("Unreadable message file {}: {}", path.display(), e);
                e
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn save(&self, record: &StoredRecord) -> Result<()> {
        if record.id.is_empty() || record.id.contains(['/', '\\']) {
            return Err(StoreError::InvalidData(format!(
                "message id {:?} cannot name a file",
                record.id
            )));
        }
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(record)?;
        fs::write(self.path_for(&record.id), json)?;

        let mut order = self.read_order()?;
        if !order.contains(&record.id) {
            order.push(record.id.clone());
            fs::write(self.order_path(), serde_json::to_string(&order)?)?;
        }
        Ok(())
    }
}

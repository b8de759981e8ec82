//! Worksheet stores.
//!
//! A store keeps whole worksheet records keyed by id. Every `upsert` stamps
//! `updatedAt` and either replaces the record in place or appends it, so list
//! order is creation order.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use jyn_core::entities::Worksheet;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StoreError;
use crate::migrate;

/// Persistence of worksheet records.
pub trait WorksheetStore {
    /// All worksheets in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing document cannot be read or decoded.
    fn list_all(&self) -> Result<Vec<Worksheet>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the backing document cannot be read or decoded.
    fn get(&self, id: &str) -> Result<Option<Worksheet>, StoreError> {
        Ok(self.list_all()?.into_iter().find(|w| w.id() == id))
    }

    /// Stamp `updatedAt` and store the record, returning what was stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing document cannot be written.
    fn upsert(&mut self, worksheet: Worksheet) -> Result<Worksheet, StoreError>;

    /// Remove a worksheet. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing document cannot be written.
    fn remove(&mut self, id: &str) -> Result<bool, StoreError>;

    /// A fresh, unsaved worksheet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if an id cannot be generated.
    fn create_blank(&self) -> Result<Worksheet, StoreError> {
        Ok(Worksheet::blank(Utc::now())?)
    }
}

fn upsert_into(worksheets: &mut Vec<Worksheet>, mut worksheet: Worksheet) -> Worksheet {
    worksheet.touch(Utc::now());
    match worksheets.iter_mut().find(|w| w.id() == worksheet.id()) {
        Some(slot) => *slot = worksheet.clone(),
        None => worksheets.push(worksheet.clone()),
    }
    worksheet
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Store kept entirely in memory. Used by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    worksheets: Vec<Worksheet>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorksheetStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<Worksheet>, StoreError> {
        Ok(self.worksheets.clone())
    }

    fn upsert(&mut self, worksheet: Worksheet) -> Result<Worksheet, StoreError> {
        Ok(upsert_into(&mut self.worksheets, worksheet))
    }

    fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.worksheets.len();
        self.worksheets.retain(|w| w.id() != id);
        Ok(self.worksheets.len() != before)
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Store backed by one JSON document on disk.
///
/// The document is re-read on every call and rewritten whole on every
/// mutation through a temporary file renamed over the target. A missing file
/// is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Worksheet>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => migrate::decode(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, worksheets: &[Worksheet]) -> Result<(), StoreError> {
        let encoded = migrate::encode(worksheets)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(encoded.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        debug!(
            "Wrote {} worksheets to {}",
            worksheets.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl WorksheetStore for FileStore {
    fn list_all(&self) -> Result<Vec<Worksheet>, StoreError> {
        self.read()
    }

    fn upsert(&mut self, worksheet: Worksheet) -> Result<Worksheet, StoreError> {
        let mut worksheets = self.read()?;
        let stored = upsert_into(&mut worksheets, worksheet);
        self.write(&worksheets)?;
        Ok(stored)
    }

    fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut worksheets = self.read()?;
        let before = worksheets.len();
        worksheets.retain(|w| w.id() != id);
        if worksheets.len() == before {
            return Ok(false);
        }
        self.write(&worksheets)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn upsert_appends_then_replaces() {
        let mut store = MemoryStore::new();
        let a = store.upsert(store.create_blank().unwrap()).unwrap();
        let b = store.upsert(store.create_blank().unwrap()).unwrap();
        let again = store.upsert(a.clone()).unwrap();

        let ids: Vec<_> = store
            .list_all()
            .unwrap()
            .iter()
            .map(|w| w.id().to_string())
            .collect();
        assert_eq!(ids, vec![a.id().to_string(), b.id().to_string()]);
        assert!(again.updated_at() >= a.updated_at());
    }

    #[test]
    fn create_blank_is_not_persisted() {
        let store = MemoryStore::new();
        let blank = store.create_blank().unwrap();
        assert!(store.get(blank.id()).unwrap().is_none());
    }

    #[test]
    fn remove_reports_existence() {
        let mut store = MemoryStore::new();
        let ws = store.upsert(store.create_blank().unwrap()).unwrap();
        assert!(store.remove(ws.id()).unwrap());
        assert!(!store.remove(ws.id()).unwrap());
        assert!(store.list_all().unwrap().is_empty());
    }
}

//! Placement record persistence.
//!
//! The whole collection lives as one JSON array under a single storage key.
//! Every write replaces the array; there is no per-record update.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::PlacementRecord;
use crate::storage::Storage;

/// Default storage key for the record collection.
pub const DEFAULT_RECORDS_KEY: &str = "placements";

/// Reads and writes the placement collection.
#[derive(Debug)]
pub struct RecordStore {
    storage: Storage,
    key: String,
}

impl RecordStore {
    /// Wrap `storage`, keeping the collection under `key`.
    #[must_use]
    pub fn new(storage: Storage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Open an in-memory store under the default key.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(Storage::open_in_memory()?, DEFAULT_RECORDS_KEY))
    }

    /// The storage key holding the collection.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying key-value store.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Load the full collection. An absent key is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptRecords`] if the stored value is not a valid
    /// record array, or a database error if the read fails.
    pub fn load(&self) -> Result<Vec<PlacementRecord>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            debug!(key = %self.key, "No stored records");
            return Ok(Vec::new());
        };

        let records: Vec<PlacementRecord> =
            serde_json::from_str(&raw).map_err(|source| {
                warn!(key = %self.key, error = %source, "Stored records are malformed");
                Error::CorruptRecords {
                    key: self.key.clone(),
                    source,
                }
            })?;
        debug!(key = %self.key, count = records.len(), "Loaded records");
        Ok(records)
    }

    /// Replace the stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, records: &[PlacementRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.storage.set(&self.key, &raw)?;
        debug!(key = %self.key, count = records.len(), "Saved records");
        Ok(())
    }

    /// Remove the stored collection entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)?;
        Ok(())
    }
}

//! Favorites collection
//!
//! Ordered mapping from record identifier (its URL) to the record itself,
//! serialized as a single JSON object under one storage key.

use crate::data::storage::KeyValueStore;
use crate::error::{AppError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use skyfolio::config::storage::{FAVORITES_BACKUP_KEY, FAVORITES_KEY};
use skyfolio::DailyRecord;
use tracing::warn;

/// Result of a favorites mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// A record was inserted under this key
    Added(String),
    /// The record under this key was deleted
    Removed(String),
    /// Nothing changed
    Unchanged,
}

impl Mutation {
    pub fn is_change(&self) -> bool {
        !matches!(self, Mutation::Unchanged)
    }
}

/// Locate a record in a fetched batch
///
/// Exact URL matches win. Failing that, the first record whose URL merely
/// contains `identifier` is returned, so an identifier that is a substring
/// of another record's URL can pick that record.
pub fn find_in_results<'a>(results: &'a [DailyRecord], identifier: &str) -> Option<&'a DailyRecord> {
    if identifier.is_empty() {
        return None;
    }
    results
        .iter()
        .find(|r| r.id() == identifier)
        .or_else(|| results.iter().find(|r| r.id().contains(identifier)))
}

/// Favorites keyed by record URL, in insertion order
///
/// Invariant: every value's `url` equals its key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesCollection {
    entries: IndexMap<String, DailyRecord>,
}

impl FavoritesCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from durable storage; missing key yields an empty collection
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        match store.get(FAVORITES_KEY)? {
            Some(blob) => Self::from_json(&blob),
            None => Ok(Self::new()),
        }
    }

    /// Copy the stored blob, as is, to the backup key
    ///
    /// Returns false when there was nothing stored.
    pub fn back_up(store: &mut dyn KeyValueStore) -> Result<bool> {
        match store.get(FAVORITES_KEY)? {
            Some(blob) => {
                store.set(FAVORITES_BACKUP_KEY, &blob)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Overwrite the stored blob with the whole collection
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let blob = self.to_json()?;
        store.set(FAVORITES_KEY, &blob)
    }

    /// Parse a stored blob
    ///
    /// Entries stored under a key other than their own `url` are re-keyed.
    pub fn from_json(blob: &str) -> Result<Self> {
        let raw: IndexMap<String, DailyRecord> = serde_json::from_str(blob)
            .map_err(|e| AppError::Storage(format!("Corrupt favorites blob: {}", e)))?;

        let mut entries = IndexMap::with_capacity(raw.len());
        for (key, record) in raw {
            if key != record.url {
                warn!(key = %key, url = %record.url, "favorite stored under foreign key, re-keying");
            }
            entries.insert(record.id().to_string(), record);
        }
        Ok(Self { entries })
    }

    /// Serialize to the compact storage format
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AppError::Storage(format!("Failed to serialize favorites: {}", e)))
    }

    /// Insert a record keyed by its own URL; no-op if the key is present
    pub fn insert(&mut self, record: DailyRecord) -> Mutation {
        if self.entries.contains_key(record.id()) {
            return Mutation::Unchanged;
        }
        let key = record.id().to_string();
        self.entries.insert(key.clone(), record);
        Mutation::Added(key)
    }

    /// Add the batch record matching `identifier`
    pub fn add_from_results(&mut self, results: &[DailyRecord], identifier: &str) -> Mutation {
        match find_in_results(results, identifier) {
            Some(record) => self.insert(record.clone()),
            None => Mutation::Unchanged,
        }
    }

    /// Remove the record stored under `identifier`
    pub fn remove(&mut self, identifier: &str) -> Mutation {
        // shift_remove keeps the remaining entries in insertion order
        match self.entries.shift_remove(identifier) {
            Some(_) => Mutation::Removed(identifier.to_string()),
            None => Mutation::Unchanged,
        }
    }

    /// Remove if present, otherwise add from the batch
    pub fn toggle(&mut self, results: &[DailyRecord], identifier: &str) -> Mutation {
        if self.contains(identifier) {
            self.remove(identifier)
        } else {
            self.add_from_results(results, identifier)
        }
    }

    /// Check if an identifier is a favorite
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &DailyRecord> {
        self.entries.values()
    }

    /// Key/record pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DailyRecord)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

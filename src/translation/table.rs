//! Exact-match string table

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::types::{
    TableKind,
    TranslationEntry,
    TranslationError,
};
use crate::config::DuplicatePolicy;

/// Key to replacement map. Keys are unique; lookups are exact.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    /// Reported in errors and logs
    kind: TableKind,
    /// key → replacement
    entries: HashMap<String, String>,
}

impl TranslationTable {
    #[must_use]
    pub fn new(kind: TableKind) -> Self {
        Self { kind, entries: HashMap::new() }
    }

    #[must_use]
    pub const fn kind(&self) -> TableKind {
        self.kind
    }

    /// Stores `value` under `key`.
    ///
    /// # Errors
    /// `DuplicateKey` when `key` exists and `policy` is `Reject`. The stored
    /// entry is left untouched in that case.
    pub fn insert(
        &mut self,
        key: String,
        value: String,
        policy: DuplicatePolicy,
    ) -> Result<(), TranslationError> {
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                tracing::debug!(table = %self.kind, key = %slot.key(), "Adding translation");
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(TranslationError::DuplicateKey {
                        table: self.kind,
                        key: slot.key().clone(),
                    });
                }
                DuplicatePolicy::Overwrite => {
                    tracing::debug!(table = %self.kind, key = %slot.key(), "Replacing translation");
                    *slot.get_mut() = value;
                }
            },
        }
        Ok(())
    }

    /// Removes `key`, returning the entry if it was present
    pub fn remove(&mut self, key: &str) -> Option<TranslationEntry> {
        let (key, value) = self.entries.remove_entry(key)?;
        tracing::debug!(table = %self.kind, key = %key, "Removed translation");
        Some(TranslationEntry { key, value })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! Internal substitution and language lookup

use super::escape::normalize_escapes;
use super::table::TranslationTable;
use super::types::{
    TableKind,
    TranslationEntry,
    TranslationError,
};
use crate::config::{
    DuplicatePolicy,
    TranslationSettings,
};

/// The two translation tables and the lookup that chains them.
///
/// A string is first rewritten through the internal table (if it has an
/// entry), then the result is looked up in the language table.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Verbatim rewrites, e.g. service name substitutions
    internal: TranslationTable,
    /// Locale replacements, keys and values escape-normalized
    language: TranslationTable,
    /// Byte bound for language table strings
    max_string_length: usize,
    /// Applied to both tables
    duplicate_policy: DuplicatePolicy,
}

impl Translator {
    #[must_use]
    pub fn new(settings: &TranslationSettings) -> Self {
        Self {
            internal: TranslationTable::new(TableKind::Internal),
            language: TranslationTable::new(TableKind::Language),
            max_string_length: settings.max_string_length,
            duplicate_policy: settings.duplicate_policy,
        }
    }

    /// Looks `text` up, returning the replacement or `text` itself.
    ///
    /// Never allocates. The result borrows either `text` or a table entry.
    #[must_use]
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        let text = self.internal.get(text).unwrap_or(text);
        self.language.get(text).unwrap_or(text)
    }

    /// Registers a verbatim internal substitution.
    ///
    /// # Errors
    /// `DuplicateKey` if `key` is registered and duplicates are rejected.
    pub fn create_internal(&mut self, key: &str, value: &str) -> Result<(), TranslationError> {
        self.internal.insert(key.to_owned(), value.to_owned(), self.duplicate_policy)
    }

    /// Removes an internal substitution. Absent keys are ignored.
    pub fn destroy_internal(&mut self, key: &str) -> Option<TranslationEntry> {
        self.internal.remove(key)
    }

    /// Registers a language translation.
    ///
    /// Both strings are cut to the configured bound and have `\2` rewritten
    /// to the bold control before storage.
    ///
    /// # Errors
    /// `DuplicateKey` if the normalized key is registered and duplicates are
    /// rejected.
    pub fn create(&mut self, key: &str, value: &str) -> Result<(), TranslationError> {
        let key = normalize_escapes(key, self.max_string_length);
        let value = normalize_escapes(value, self.max_string_length);
        if key.truncated || value.truncated {
            tracing::debug!(
                key = %key.text,
                max_length = self.max_string_length,
                "Translation truncated"
            );
        }
        self.language.insert(key.text, value.text, self.duplicate_policy)
    }

    /// Removes a language translation by its stored key.
    ///
    /// `key` is matched as given: pass the normalized form (with `0x02`, not
    /// `\2`). Absent keys are ignored.
    pub fn destroy(&mut self, key: &str) -> Option<TranslationEntry> {
        self.language.remove(key)
    }

    #[must_use]
    pub const fn internal(&self) -> &TranslationTable {
        &self.internal
    }

    #[must_use]
    pub const fn language(&self) -> &TranslationTable {
        &self.language
    }

    /// Drops every entry from both tables
    pub fn clear(&mut self) {
        self.internal.clear();
        self.language.clear();
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(&TranslationSettings::default())
    }
}

//! Translation table type definitions.

use std::fmt;

use thiserror::Error;

/// Which of the two tables an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Verbatim rewrites registered by other services components
    Internal,
    /// Locale replacement strings, stored escape-normalized
    Language,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => f.write_str("internal"),
            Self::Language => f.write_str("language"),
        }
    }
}

/// A key and its replacement, as removed from a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: String,
    pub value: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The key is already registered and the table rejects duplicates
    #[error("Duplicate {table} translation for '{key}'")]
    DuplicateKey { table: TableKind, key: String },
}

//! String translation tables
/// Catalog escape normalization
mod escape;
/// Exact-match string table
mod table;
/// Two-table lookup
mod translator;
/// Entry and error types
mod types;

pub use escape::{
    BOLD,
    ESCAPED_BOLD,
    Normalized,
    normalize_escapes,
};
pub use table::TranslationTable;
pub use translator::Translator;
pub use types::{
    TableKind,
    TranslationEntry,
    TranslationError,
};

//! Locale registry
/// Registry of known locales
mod registry;
/// Locale directory listing
mod scan;
/// Registry entry types
mod types;

pub use registry::LanguageRegistry;
pub use scan::ScanError;
pub use types::{
    Language,
    LanguageNames,
};

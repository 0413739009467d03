//! Settings for the translation tables and the language registry
/// Settings file loader
mod loader;
/// Settings manager
mod manager;
/// Settings types and validation
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    DuplicatePolicy,
    TranslationSettings,
    ValidationError,
};

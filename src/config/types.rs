use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludedEntries[0]")
    pub field_path: String,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders one numbered line per validation error
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// What a table does when a key is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// Keep the first entry and report `DuplicateKey`.
    #[default]
    Reject,
    /// Replace the stored entry.
    Overwrite,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationSettings {
    /// Directory whose entries name the installed catalogs.
    pub locale_dir: PathBuf,

    /// Always registered first and always valid.
    pub default_language: String,

    /// Entry names in `locale_dir` that are never locales.
    pub excluded_entries: Vec<String>,

    /// Byte bound applied to language table keys and values before escape rewriting.
    pub max_string_length: usize,

    /// Byte bound of the string returned by `LanguageRegistry::names`.
    pub max_names_length: usize,

    pub duplicate_policy: DuplicatePolicy,
}

impl TranslationSettings {
    /// # Errors
    /// - Default language is empty or contains whitespace
    /// - A length bound is zero
    /// - An excluded entry is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_language.is_empty() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The default language cannot be empty. Example: \"en\"",
            ));
        } else if self.default_language.chars().any(char::is_whitespace) {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!(
                    "The default language '{}' cannot contain whitespace",
                    self.default_language
                ),
            ));
        }

        for (index, entry) in self.excluded_entries.iter().enumerate() {
            if entry.is_empty() {
                errors.push(ValidationError::new(
                    format!("excludedEntries[{index}]"),
                    "An excluded entry cannot be empty. Remove it or use a file name such as \"locale.alias\"",
                ));
            }
        }

        if self.max_string_length == 0 {
            errors.push(ValidationError::new(
                "maxStringLength",
                "The limit must be greater than zero. Default: 1023",
            ));
        }

        if self.max_names_length == 0 {
            errors.push(ValidationError::new(
                "maxNamesLength",
                "The limit must be greater than zero. Default: 511",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            locale_dir: PathBuf::from("share/locale"),
            default_language: "en".to_string(),
            excluded_entries: vec!["all_languages".to_string(), "locale.alias".to_string()],
            max_string_length: 1023,
            max_names_length: 511,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

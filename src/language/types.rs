//! Language registry type definitions.

use std::fmt;

/// A locale known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Locale identifier, e.g. the catalog directory name
    pub(super) name: String,
    /// A catalog is known to exist for this locale
    pub(super) valid: bool,
}

impl Language {
    pub(super) const fn new(name: String) -> Self {
        Self { name, valid: false }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Space-separated names of the valid languages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageNames {
    pub(super) text: String,
    pub(super) truncated: bool,
}

impl LanguageNames {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The list hit the configured byte bound and was cut
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for LanguageNames {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LanguageNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

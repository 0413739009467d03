//! Language registry: the locales this instance knows about.

use super::scan;
use super::types::{
    Language,
    LanguageNames,
};
use crate::bounded::truncate_to_boundary;
use crate::config::TranslationSettings;

/// Entries starting with this character are never locales
const HIDDEN_MARKER: char = '.';

/// Insertion-ordered list of locales.
///
/// The first entry is always the default language, marked valid.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    /// Registered locales in insertion order
    languages: Vec<Language>,
    /// Directory entry names that are never registered by a scan
    excluded_entries: Vec<String>,
    /// Byte bound for [`Self::names`]
    max_names_length: usize,
}

impl LanguageRegistry {
    /// Creates a registry holding only the default language.
    #[must_use]
    pub fn new(settings: &TranslationSettings) -> Self {
        let mut registry = Self {
            languages: Vec::new(),
            excluded_entries: settings.excluded_entries.clone(),
            max_names_length: settings.max_names_length,
        };
        registry.add_valid(&settings.default_language);
        registry
    }

    /// Creates a registry from the default language plus every locale found
    /// in `settings.locale_dir`.
    ///
    /// A missing or unreadable directory leaves only the default language.
    #[must_use]
    pub fn init(settings: &TranslationSettings) -> Self {
        let mut registry = Self::new(settings);
        match scan::list_entry_names(&settings.locale_dir) {
            Ok(names) => registry.register_discovered(names),
            Err(err) => tracing::debug!(%err, "No locales discovered"),
        }
        registry
    }

    /// Registers directory entry names as valid languages, in order.
    ///
    /// Hidden names and the configured excluded entries are skipped.
    pub fn register_discovered<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if name.starts_with(HIDDEN_MARKER) || self.excluded_entries.iter().any(|e| e == name)
            {
                continue;
            }
            self.add_valid(name);
        }
    }

    /// Returns the entry for `name`, registering it if needed.
    ///
    /// New entries start out invalid; existing entries are returned unchanged.
    pub fn add(&mut self, name: &str) -> &Language {
        self.entry(name)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|language| language.name == name)
    }

    /// Names of the valid languages, space-separated, in insertion order.
    ///
    /// The result never exceeds the configured byte bound; when it would,
    /// it is cut and marked truncated.
    #[must_use]
    pub fn names(&self) -> LanguageNames {
        let mut names = LanguageNames::default();
        for language in self.valid_languages() {
            let separator = if names.text.is_empty() { "" } else { " " };
            let needed = separator.len() + language.name.len();
            let room = self.max_names_length.saturating_sub(names.text.len());
            if needed > room {
                let piece = format!("{separator}{}", language.name);
                names.text.push_str(truncate_to_boundary(&piece, room).0);
                names.truncated = true;
                tracing::debug!(max_length = self.max_names_length, "Language names truncated");
                break;
            }
            names.text.push_str(separator);
            names.text.push_str(&language.name);
        }
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn valid_languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter().filter(|language| language.valid)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Registers `name` and marks it valid
    fn add_valid(&mut self, name: &str) -> &Language {
        let language = self.entry(name);
        language.valid = true;
        language
    }

    /// Existing entry for `name`, or a newly appended invalid one
    #[allow(clippy::indexing_slicing)] // indices come from `position` and `push`
    fn entry(&mut self, name: &str) -> &mut Language {
        if let Some(index) = self.languages.iter().position(|language| language.name == name) {
            return &mut self.languages[index];
        }
        tracing::debug!(language = name, "Registering language");
        self.languages.push(Language::new(name.to_owned()));
        let index = self.languages.len() - 1;
        &mut self.languages[index]
    }
}

impl<'a> IntoIterator for &'a LanguageRegistry {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new(&TranslationSettings::default())
    }
}

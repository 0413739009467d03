//! Translation state owned by a services instance

use crate::config::{
    ConfigManager,
    TranslationSettings,
};
use crate::language::LanguageRegistry;
use crate::translation::Translator;

/// Translation tables and the language registry, built together at startup.
#[derive(Debug, Clone)]
pub struct Localizer {
    /// Internal and language tables
    translator: Translator,
    /// Known locales
    languages: LanguageRegistry,
}

impl Localizer {
    /// Builds empty tables and scans the locale directory.
    #[must_use]
    pub fn init(settings: &TranslationSettings) -> Self {
        let translator = Translator::new(settings);
        let languages = LanguageRegistry::init(settings);
        tracing::debug!(
            locale_dir = %settings.locale_dir.display(),
            languages = %languages.names(),
            "Translation initialized"
        );
        Self { translator, languages }
    }

    #[must_use]
    pub fn from_config(config_manager: &ConfigManager) -> Self {
        Self::init(config_manager.get_settings())
    }

    /// See [`Translator::translate`].
    #[must_use]
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        self.translator.translate(text)
    }

    #[must_use]
    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    pub const fn translator_mut(&mut self) -> &mut Translator {
        &mut self.translator
    }

    #[must_use]
    pub const fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    pub const fn languages_mut(&mut self) -> &mut LanguageRegistry {
        &mut self.languages
    }

    /// Releases every table entry and registered language.
    pub fn shutdown(self) {
        tracing::debug!(
            internal = self.translator.internal().len(),
            language = self.translator.language().len(),
            languages = self.languages.len(),
            "Translation shut down"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn test_init_and_translate() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("es")).unwrap();
        let settings = TranslationSettings {
            locale_dir: temp_dir.path().to_path_buf(),
            ..TranslationSettings::default()
        };

        let mut localizer = Localizer::init(&settings);
        localizer.translator_mut().create("Hello", "Hola").unwrap();

        assert_that!(localizer.translate("Hello"), eq("Hola"));
        assert_that!(localizer.languages().names().as_str(), eq("en es"));
        localizer.shutdown();
    }

    #[rstest]
    fn test_independent_instances() {
        let settings = TranslationSettings::default();
        let mut first = Localizer::init(&settings);
        let second = Localizer::init(&settings);

        first.translator_mut().create_internal("NickServ", "UserServ").unwrap();
        first.languages_mut().add("tlh");

        assert_that!(first.translate("NickServ"), eq("UserServ"));
        assert_that!(second.translate("NickServ"), eq("NickServ"));
        assert!(second.languages().find("tlh").is_none());
    }

    #[rstest]
    fn test_from_config() {
        let mut config_manager = ConfigManager::new();
        config_manager
            .update_settings(TranslationSettings {
                default_language: "pt".to_string(),
                ..TranslationSettings::default()
            })
            .unwrap();

        let localizer = Localizer::from_config(&config_manager);

        assert_that!(localizer.languages().names().as_str(), eq("pt"));
    }
}

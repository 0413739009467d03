//! Settings management

use std::path::PathBuf;

use super::{
    ConfigError,
    TranslationSettings,
    loader,
};

/// Holds the validated settings the translation layer is built from
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    current_settings: TranslationSettings,

    /// Directory the settings were read from
    config_dir: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager holding the default settings
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: TranslationSettings::default(), config_dir: None }
    }

    /// Loads and validates settings
    ///
    /// Without a directory, or when the directory has no settings file, the
    /// defaults are used. Nothing is replaced unless validation passes.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, config_dir: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from: {:?}", config_dir);

        let settings = if let Some(dir) = &config_dir {
            loader::load_from_dir(dir)?.map_or_else(TranslationSettings::default, |loaded| {
                tracing::debug!("Loaded settings: {:?}", loaded);
                loaded
            })
        } else {
            TranslationSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.config_dir = config_dir;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the current settings after validating them
    pub fn update_settings(&mut self, new_settings: TranslationSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// Current settings
    #[must_use]
    pub const fn get_settings(&self) -> &TranslationSettings {
        &self.current_settings
    }

    /// Directory the settings were loaded from
    #[must_use]
    pub const fn config_dir(&self) -> Option<&PathBuf> {
        self.config_dir.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::super::loader::SETTINGS_FILE_NAME;
    use super::*;

    /// new: starts from defaults
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().default_language, "en");
        assert!(manager.config_dir().is_none());
    }

    /// load_settings: no directory given
    #[rstest]
    fn test_load_settings_without_dir() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().default_language, "en");
        assert!(manager.config_dir().is_none());
    }

    /// load_settings: settings file present
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"localeDir": "/var/lib/services/locale"}"#;
        fs::write(temp_dir.path().join(SETTINGS_FILE_NAME), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().locale_dir, PathBuf::from("/var/lib/services/locale"));
        assert!(manager.config_dir().is_some());
    }

    /// load_settings: directory without a settings file uses defaults
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().max_string_length, 1023);
    }

    /// load_settings: an invalid file leaves the previous settings in place
    #[rstest]
    fn test_load_settings_invalid_keeps_previous() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(SETTINGS_FILE_NAME), r#"{"defaultLanguage": ""}"#)
            .unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings().default_language, "en");
        assert!(manager.config_dir().is_none());
    }

    /// update_settings: valid settings are applied
    #[rstest]
    fn test_update_settings_valid() {
        let mut manager = ConfigManager::new();
        let new_settings =
            TranslationSettings { default_language: "fr".to_string(), ..TranslationSettings::default() };

        let result = manager.update_settings(new_settings);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().default_language, "fr");
    }

    /// update_settings: invalid settings are rejected
    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let new_settings =
            TranslationSettings { max_string_length: 0, ..TranslationSettings::default() };

        let result = manager.update_settings(new_settings);

        assert!(result.is_err());
    }
}

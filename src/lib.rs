//! services-i18n
//!
//! Message translation tables and locale registry for IRC services.
//!
//! ```
//! use services_i18n::Localizer;
//! use services_i18n::config::TranslationSettings;
//!
//! let mut localizer = Localizer::init(&TranslationSettings::default());
//! localizer.translator_mut().create("Channel \\2%s\\2 is not registered.", "Le salon \\2%s\\2 n'est pas enregistré.")?;
//!
//! assert_eq!(
//!     localizer.translate("Channel \u{2}%s\u{2} is not registered."),
//!     "Le salon \u{2}%s\u{2} n'est pas enregistré."
//! );
//! assert_eq!(localizer.translate("Unknown command."), "Unknown command.");
//! # Ok::<(), services_i18n::translation::TranslationError>(())
//! ```

/// Byte-bounded string helpers
mod bounded;
pub mod config;
pub mod language;
pub mod localizer;
pub mod logging;
pub mod translation;

pub use localizer::Localizer;

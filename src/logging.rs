//! Tracing subscriber setup for hosts without one

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log directive: {0}")]
    InvalidDirective(#[from] ParseError),

    #[error("Failed to install tracing subscriber: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs a global fmt subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `default_directive` (e.g. `"services_i18n=debug"`).
///
/// # Errors
/// - `default_directive` does not parse
/// - A global subscriber is already installed
pub fn try_init(default_directive: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).try_init().map_err(LoggingError::Install)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_try_init_twice_fails() {
        let _ = try_init("services_i18n=debug");

        let result = try_init("services_i18n=debug");

        assert!(matches!(result, Err(LoggingError::Install(_))));
    }
}

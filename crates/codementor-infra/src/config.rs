//! Environment configuration for codementor.
//!
//! The API key is required before any server socket opens; the model
//! override is optional and an empty value is treated as unset.

use secrecy::SecretString;

use codementor_types::error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding an optional explicit model identifier.
pub const MODEL_ID_VAR: &str = "MODEL_ID";

/// Service configuration resolved from the environment.
///
/// The API key is wrapped in [`SecretString`] so it never appears in
/// Debug output or logs.
pub struct Config {
    pub api_key: SecretString,
    pub model_override: Option<String>,
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// A missing or empty `GEMINI_API_KEY` is
    /// [`ConfigError::MissingApiKey`] -- fatal at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(MODEL_ID_VAR).ok(),
        )
    }

    /// Build configuration from raw variable values.
    ///
    /// Split out of [`from_env`](Self::from_env) so tests can exercise
    /// the rules without mutating process environment.
    pub fn from_vars(
        api_key: Option<String>,
        model_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            model_override: model_id.filter(|id| !id.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = Config::from_vars(None, None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_empty_api_key_is_fatal() {
        let result = Config::from_vars(Some(String::new()), None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_api_key_loaded() {
        let config = Config::from_vars(Some("test-key-not-real".to_string()), None).unwrap();
        assert_eq!(config.api_key.expose_secret(), "test-key-not-real");
        assert!(config.model_override.is_none());
    }

    #[test]
    fn test_model_override_loaded() {
        let config = Config::from_vars(
            Some("test-key".to_string()),
            Some("gemini-2.5-flash".to_string()),
        )
        .unwrap();
        assert_eq!(config.model_override.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn test_empty_model_override_is_unset() {
        let config = Config::from_vars(Some("test-key".to_string()), Some(String::new())).unwrap();
        assert!(config.model_override.is_none());
    }
}

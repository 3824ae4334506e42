use thiserror::Error;

/// Errors raised while loading service configuration.
///
/// All of these are fatal at startup: the process refuses to serve
/// without a usable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY missing from the environment")]
    MissingApiKey,
}

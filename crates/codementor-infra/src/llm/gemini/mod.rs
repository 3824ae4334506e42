//! GeminiProvider -- concrete [`GenerativeProvider`] implementation for
//! the Google Generative Language REST API.
//!
//! Talks to the `v1beta` model-listing and `generateContent` endpoints
//! with the API key as a query parameter. The API key is wrapped in
//! [`secrecy::SecretString`] and is never logged or included in `Debug`
//! output.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use codementor_core::llm::provider::GenerativeProvider;
use codementor_types::llm::{LlmError, ModelDescriptor};

use self::types::{GenerateContentRequest, GenerateContentResponse, ListModelsResponse};

/// Gemini generative-language provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// building request query parameters. `Debug` is intentionally not
/// derived so the key cannot leak through formatting.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiProvider {
    /// Default API endpoint.
    const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Bounded timeout for outbound calls; generation is slow but must
    /// not hang a chat request forever.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a new Gemini provider.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl GenerativeProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmError> {
        let url = self.url("/v1beta/models");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(LlmError::Provider {
                message: format!("ListModels failed: HTTP {status}: {error_body}"),
            });
        }

        let listing: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse model listing: {e}")))?;

        tracing::debug!(count = listing.models.len(), "fetched model listing");
        Ok(listing.models)
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let url = self.url(&format!("/v1beta/models/{model}:generateContent"));
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| LlmError::Provider {
            message: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            // Surface the provider's own error message when the body
            // parses; fall back to the raw body otherwise.
            let detail = serde_json::from_str::<serde_json::Value>(&raw)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(raw);
            return Err(LlmError::Provider {
                message: format!("GenerateContent failed: HTTP {status}: {detail}"),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&raw)
            .map_err(|e| LlmError::Deserialization(format!("non-JSON generation response: {e}")))?;

        let candidate = parsed.candidates.first().ok_or(LlmError::NoCandidates)?;
        tracing::debug!(%model, "generation response received");

        Ok(candidate.text())
    }
}

// GeminiProvider intentionally does NOT derive Debug so the SecretString
// field can never be printed through formatting.

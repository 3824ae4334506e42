//! GenerativeProvider trait definition.
//!
//! The seam between relay logic and the remote generative API. Uses
//! native async fn in traits (RPITIT): the relay and resolver are generic
//! over the provider, so tests inject stubs without any network.

use codementor_types::llm::{LlmError, ModelDescriptor};

/// Trait for generative-language backends.
///
/// The concrete implementation lives in codementor-infra
/// (`GeminiProvider`); tests use in-memory stubs.
pub trait GenerativeProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Fetch the descriptors of all models the provider offers.
    fn list_models(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ModelDescriptor>, LlmError>> + Send;

    /// Send a composed prompt to the given model and return the
    /// normalized reply text.
    fn generate(
        &self,
        model: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}

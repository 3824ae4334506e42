//! Remote model types and the LLM error taxonomy for codementor.
//!
//! `ModelDescriptor` mirrors the provider's model-listing wire shape; the
//! capability fields are optional because older listings omit them.

use serde::{Deserialize, Serialize};

/// A model as described by the provider's listing endpoint.
///
/// `name` is a resource path such as `"models/gemini-2.5-flash"`. The
/// two capability fields vary across provider API versions; either, both,
/// or neither may be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_generation_methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_methods: Option<Vec<String>>,
}

impl ModelDescriptor {
    /// The trailing segment of the resource name after its last `/`.
    ///
    /// Names without a path prefix are returned unchanged. The provider
    /// has not been observed to return bare names, but the split is kept
    /// defensive regardless.
    pub fn short_name(&self) -> &str {
        match self.name.rsplit_once('/') {
            Some((_, short)) => short,
            None => &self.name,
        }
    }

    /// Whether this model can serve content-generation requests.
    ///
    /// Capability metadata is honored when present; a descriptor carrying
    /// neither field is assumed usable (optimistic default).
    pub fn supports_generation(&self) -> bool {
        match (&self.supported_generation_methods, &self.supported_methods) {
            (None, None) => true,
            (gen_methods, methods) => {
                gen_methods
                    .as_ref()
                    .is_some_and(|m| m.iter().any(|s| s == "generateContent"))
                    || methods
                        .as_ref()
                        .is_some_and(|m| m.iter().any(|s| s == "generateContent" || s == "generate"))
            }
        }
    }
}

/// Errors from generative provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("response contained no candidates")]
    NoCandidates,
}

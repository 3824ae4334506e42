//! Model resolution: pick exactly one usable model identifier at startup.
//!
//! An explicit override wins unconditionally with no network call.
//! Otherwise the provider's listing is consulted and a selection policy
//! picks the first family-keyword match, falling back to the first
//! listed model. Resolution failure is reported as `None` -- the startup
//! sequence decides what to do with it (it refuses to serve).

use tracing::{info, warn};

use codementor_types::llm::ModelDescriptor;

use super::provider::GenerativeProvider;

/// Product-family keyword preferred during model selection.
pub const FAMILY_KEYWORD: &str = "gemini";

/// Resolve the model identifier to use for all subsequent requests.
///
/// A present, non-empty `override_id` is returned verbatim without
/// touching the network. Otherwise the provider listing is fetched and
/// passed through [`select_model`]. Transport or status failures while
/// listing resolve to `None` rather than an error; the caller treats an
/// unresolved model as fatal.
pub async fn resolve_model<P: GenerativeProvider>(
    override_id: Option<&str>,
    provider: &P,
) -> Option<String> {
    if let Some(id) = override_id.filter(|id| !id.is_empty()) {
        info!(model = %id, "using model from configuration override");
        return Some(id.to_string());
    }

    match provider.list_models().await {
        Ok(models) => select_model(&models),
        Err(e) => {
            warn!(error = %e, "could not fetch model listing; check the API key and network");
            None
        }
    }
}

/// Selection policy over a model listing, first match wins.
///
/// 1. the first descriptor whose short name contains [`FAMILY_KEYWORD`]
///    (case-insensitive) and whose capability metadata does not rule out
///    generation;
/// 2. else the first descriptor's short name, best-effort;
/// 3. else `None` for an empty listing.
pub fn select_model(models: &[ModelDescriptor]) -> Option<String> {
    for descriptor in models {
        let short = descriptor.short_name();
        if short.to_lowercase().contains(FAMILY_KEYWORD) && descriptor.supports_generation() {
            info!(model = %short, "autoselected model");
            return Some(short.to_string());
        }
    }

    if let Some(first) = models.first() {
        let fallback = first.short_name();
        info!(model = %fallback, "no gemini model detected; falling back to first listed");
        return Some(fallback.to_string());
    }

    warn!("model listing was empty");
    None
}

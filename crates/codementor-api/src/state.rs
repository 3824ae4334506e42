//! Application state wiring the relay together.
//!
//! The relay is generic over its provider; AppState pins it to the
//! concrete Gemini implementation from codementor-infra.

use std::sync::Arc;

use codementor_core::chat::relay::ChatRelay;
use codementor_core::chat::transcript::TranscriptStore;
use codementor_infra::llm::gemini::GeminiProvider;

/// Concrete relay type pinned to the Gemini provider.
pub type ConcreteChatRelay = ChatRelay<GeminiProvider>;

/// Shared application state used by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ConcreteChatRelay>,
}

impl AppState {
    /// Wire the relay from a provider and the model resolved at startup.
    pub fn new(provider: GeminiProvider, model: String) -> Self {
        Self {
            relay: Arc::new(ChatRelay::new(provider, TranscriptStore::new(), model)),
        }
    }
}

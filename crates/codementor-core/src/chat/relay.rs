//! Completion relay: one user message in, one assistant reply out.
//!
//! The relay validates input, appends the user turn before any remote
//! work, composes the prompt from a bounded context window, invokes the
//! provider, and records the assistant turn on success. All failures are
//! reported in-band as fixed sentinel replies; nothing propagates as an
//! HTTP error.

use tracing::{error, warn};
use uuid::Uuid;

use codementor_types::chat::{ChatReply, Turn};

use super::prompt::{self, CONTEXT_WINDOW_TURNS};
use super::transcript::TranscriptStore;
use crate::llm::provider::GenerativeProvider;

/// Reply returned for an empty or missing message. No transcript
/// mutation and no remote call happen on this path.
pub const EMPTY_MESSAGE_REPLY: &str = "Message is required";

/// Reply returned when the remote call fails in any way. The user turn
/// stays in the transcript; the assistant turn is never appended.
pub const REMOTE_FAILURE_REPLY: &str = "remote call failed; check logs";

/// Relays chat messages to a generative provider.
///
/// Generic over the provider so tests inject stubs. Owns the transcript
/// store and the model identifier resolved at startup.
pub struct ChatRelay<P: GenerativeProvider> {
    provider: P,
    store: TranscriptStore,
    model: String,
}

impl<P: GenerativeProvider> ChatRelay<P> {
    /// Create a relay over a provider, a transcript store, and the
    /// resolved model identifier.
    pub fn new(provider: P, store: TranscriptStore, model: String) -> Self {
        Self {
            provider,
            store,
            model,
        }
    }

    /// The model identifier every request is sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Access the transcript store.
    pub fn store(&self) -> &TranscriptStore {
        &self.store
    }

    /// Handle one chat exchange for a session.
    ///
    /// The user turn is appended before the remote call so a failed
    /// exchange still records what the user said. On remote failure the
    /// assistant turn is not appended and the caller receives
    /// [`REMOTE_FAILURE_REPLY`] with no history -- an accepted
    /// inconsistency rather than a rollback.
    pub async fn handle(&self, session: Uuid, message: &str) -> ChatReply {
        if message.trim().is_empty() {
            warn!(%session, "rejected empty chat message");
            return ChatReply {
                reply: EMPTY_MESSAGE_REPLY.to_string(),
                history: None,
            };
        }

        self.store.append(session, Turn::user(message));

        let window = self.store.window(session, CONTEXT_WINDOW_TURNS);
        let composed = prompt::compose(&window, message);

        match self.provider.generate(&self.model, &composed).await {
            Ok(text) => {
                self.store.append(session, Turn::assistant(text.clone()));
                ChatReply {
                    reply: text,
                    history: Some(self.store.history(session)),
                }
            }
            Err(e) => {
                error!(%session, model = %self.model, error = %e, "generation request failed");
                ChatReply {
                    reply: REMOTE_FAILURE_REPLY.to_string(),
                    history: None,
                }
            }
        }
    }
}

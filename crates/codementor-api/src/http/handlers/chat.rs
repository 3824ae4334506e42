//! Chat relay endpoint.
//!
//! POST /chat
//!
//! Accepts `{ "message": "...", "session_id": "..." }` and returns
//! `{ "reply": "...", "history": [...] }`. All relay outcomes are HTTP
//! 200: validation failures and remote failures come back as in-band
//! sentinel replies with no history.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use codementor_types::chat::ChatReply;

use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user message. Defaults to empty when absent so the relay's
    /// validation path handles missing and empty messages identically.
    #[serde(default)]
    pub message: String,
    /// Conversation to continue; the nil session is used when absent,
    /// giving a session-less client one process-wide conversation.
    pub session_id: Option<Uuid>,
}

/// POST /chat -- relay one user message through the resolved model.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatReply> {
    let session = body.session_id.unwrap_or(Uuid::nil());
    Json(state.relay.handle(session, &body.message).await)
}

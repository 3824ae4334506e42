//! In-memory transcript store, keyed by conversation id.
//!
//! Append-only per session, no eviction, no persistence -- transcripts
//! are lost on restart. The per-entry lock of the underlying map
//! serializes appends within one conversation, so turn order per session
//! is preserved even with concurrent requests in flight.

use dashmap::DashMap;
use uuid::Uuid;

use codementor_types::chat::Turn;

/// Session-keyed store of conversation transcripts.
///
/// Injectable state rather than a process global: the relay owns one, and
/// tests construct their own. A session-less caller maps to the nil UUID,
/// which behaves as a single process-wide conversation.
#[derive(Debug, Default)]
pub struct TranscriptStore {
    sessions: DashMap<Uuid, Vec<Turn>>,
}

impl TranscriptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn to a session's transcript, creating the session on
    /// first use.
    pub fn append(&self, session: Uuid, turn: Turn) {
        self.sessions.entry(session).or_default().push(turn);
    }

    /// The last `n` turns of a session's transcript, oldest first.
    ///
    /// Returns fewer turns when the transcript is shorter, and an empty
    /// window for an unknown session.
    pub fn window(&self, session: Uuid, n: usize) -> Vec<Turn> {
        self.sessions
            .get(&session)
            .map(|turns| {
                let start = turns.len().saturating_sub(n);
                turns[start..].to_vec()
            })
            .unwrap_or_default()
    }

    /// A snapshot of a session's full transcript, oldest first.
    pub fn history(&self, session: Uuid) -> Vec<Turn> {
        self.sessions
            .get(&session)
            .map(|turns| turns.value().clone())
            .unwrap_or_default()
    }

    /// Number of turns recorded for a session.
    pub fn turn_count(&self, session: Uuid) -> usize {
        self.sessions.get(&session).map(|turns| turns.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let store = TranscriptStore::new();
        let session = Uuid::nil();

        store.append(session, Turn::user("first"));
        store.append(session, Turn::assistant("second"));
        store.append(session, Turn::user("third"));

        let history = store.history(session);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].content, "first");
        assert_eq!(history[2].content, "third");
    }

    #[test]
    fn test_window_caps_at_n() {
        let store = TranscriptStore::new();
        let session = Uuid::nil();

        for i in 1..=10 {
            store.append(session, Turn::user(format!("turn-{i}")));
        }

        let window = store.window(session, 6);
        assert_eq!(window.len(), 6);
        assert_eq!(window[0].content, "turn-5");
        assert_eq!(window[5].content, "turn-10");
    }

    #[test]
    fn test_window_shorter_transcript() {
        let store = TranscriptStore::new();
        let session = Uuid::nil();
        store.append(session, Turn::user("only"));

        let window = store.window(session, 6);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_unknown_session_is_empty() {
        let store = TranscriptStore::new();
        assert!(store.history(Uuid::nil()).is_empty());
        assert!(store.window(Uuid::nil(), 6).is_empty());
        assert_eq!(store.turn_count(Uuid::nil()), 0);
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = TranscriptStore::new();
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();

        store.append(a, Turn::user("in a"));
        store.append(b, Turn::user("in b"));

        assert_eq!(store.history(a).len(), 1);
        assert_eq!(store.history(a)[0].content, "in a");
        assert_eq!(store.history(b)[0].content, "in b");
    }
}

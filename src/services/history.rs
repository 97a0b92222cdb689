//! Session history store
//!
//! Process-wide mapping from session id to its transcript, lazily populated.
//! This is an explicit state object injected into the engine, not an ambient
//! singleton; the engine's post-answer append step is the sole writer path.

use std::collections::HashMap;

use crate::domain::models::{Role, Transcript, Turn};

/// In-memory store of per-session conversation transcripts.
///
/// Single-session-per-engine usage is assumed; cross-session concurrency
/// must be serialized by the host.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Transcript>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the transcript for a known session id, creating an empty one
    /// for a new id.
    pub fn get_or_create(&mut self, session_id: &str) -> &Transcript {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(Transcript::new)
    }

    /// Append a turn to a session's transcript.
    pub fn append(&mut self, session_id: &str, role: Role, content: impl Into<String>) {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(Transcript::new)
            .push(Turn::new(role, content));
    }

    /// Drop all transcripts. Used when a new document is loaded and the
    /// retain-history policy is off.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_lazily_populates() {
        let mut store = SessionStore::new();
        assert_eq!(store.session_count(), 0);

        let transcript = store.get_or_create("session-1");
        assert!(transcript.is_empty());
        assert_eq!(store.session_count(), 1);

        // Same id returns the same transcript.
        store.append("session-1", Role::User, "hello");
        assert_eq!(store.get_or_create("session-1").len(), 1);
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = SessionStore::new();
        store.append("s", Role::User, "q1");
        store.append("s", Role::Assistant, "a1");
        store.append("s", Role::User, "q2");

        let turns = store.get_or_create("s").turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].content, "q1");
        assert_eq!(turns[2].content, "q2");
    }

    #[test]
    fn test_clear() {
        let mut store = SessionStore::new();
        store.append("a", Role::User, "x");
        store.append("b", Role::User, "y");
        store.clear();
        assert_eq!(store.session_count(), 0);
    }
}

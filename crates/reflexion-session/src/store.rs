use crate::session::SessionId;
use crate::transcript::Transcript;
use std::collections::HashMap;
use tracing::debug;

/// In-memory mapping from session id to its transcript.
///
/// Entries are created lazily on first reference and never removed.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, Transcript>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transcript for `id`, creating an empty one if absent.
    pub fn get_or_create(&mut self, id: impl Into<SessionId>) -> &mut Transcript {
        let id = id.into();
        self.sessions.entry(id).or_insert_with_key(|id| {
            debug!(session_id = %id, "Creating transcript");
            Transcript::new(id.clone())
        })
    }

    pub fn get(&self, id: &SessionId) -> Option<&Transcript> {
        self.sessions.get(id)
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// All known session ids, sorted.
    pub fn ids(&self) -> Vec<&SessionId> {
        let mut ids: Vec<&SessionId> = self.sessions.keys().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SessionId, &Transcript)> {
        self.sessions.iter()
    }
}

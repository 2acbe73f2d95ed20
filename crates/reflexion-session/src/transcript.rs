use crate::session::SessionId;
use chrono::{DateTime, Utc};
use reflexion_core::{Message, Role};
use serde::{Deserialize, Serialize};

/// Ordered, append-only list of turns for one session.
///
/// Turns are never truncated, summarized or evicted; growth is unbounded.
/// The only mutation besides [`Transcript::push`] is the per-session insights
/// slot, which is not part of the turn list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    session_id: SessionId,
    messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    insights: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Transcript {
    pub fn new(session_id: impl Into<SessionId>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
            insights: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Appends a turn at the end of the transcript.
    pub fn push(&mut self, message: Message) {
        self.updated_at = Utc::now();
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of turns authored by `role`.
    pub fn count_role(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    /// Insights learned on behalf of this session alone, if any.
    pub fn insights(&self) -> Option<&str> {
        self.insights.as_deref()
    }

    /// Replaces the per-session insights wholesale.
    pub fn set_insights(&mut self, insights: impl Into<String>) {
        self.updated_at = Utc::now();
        self.insights = Some(insights.into());
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

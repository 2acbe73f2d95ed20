use crate::config::ModelConfig;
use crate::llm::LlmClient;
use crate::reflection;
use reflexion_core::ReflexionResult;
use reflexion_session::{SessionId, SessionStore, Transcript};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Where learned insights are stored and read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightsScope {
    /// One insights value for the whole agent. Learning on behalf of one
    /// session changes the prompt of every other session.
    #[default]
    Shared,
    /// Each transcript keeps its own insights.
    PerSession,
}

/// A conversational agent that reflects on its transcripts and feeds the
/// learned summary back into later prompts.
///
/// Methods take `&mut self`: one caller at a time.
pub struct SelfImprovingAgent {
    llm: LlmClient,
    sessions: SessionStore,
    insights: String,
    scope: InsightsScope,
}

impl SelfImprovingAgent {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            sessions: SessionStore::new(),
            insights: String::new(),
            scope: InsightsScope::default(),
        }
    }

    pub fn from_config(config: ModelConfig) -> Self {
        Self::new(LlmClient::new(config))
    }

    pub fn with_scope(mut self, scope: InsightsScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn scope(&self) -> InsightsScope {
        self.scope
    }

    /// Answers `user_text` in the given session using the current insights.
    pub async fn respond(
        &mut self,
        session_id: impl Into<SessionId>,
        user_text: &str,
    ) -> ReflexionResult<String> {
        let transcript = self.sessions.get_or_create(session_id);
        let insights = match self.scope {
            InsightsScope::Shared => self.insights.clone(),
            InsightsScope::PerSession => transcript.insights().unwrap_or_default().to_string(),
        };
        reflection::respond(&self.llm, transcript, &insights, user_text).await
    }

    /// Critiques the session's transcript. Does not touch any state besides
    /// creating the session if it is new.
    pub async fn reflect(&mut self, session_id: impl Into<SessionId>) -> ReflexionResult<String> {
        let transcript = self.sessions.get_or_create(session_id);
        reflection::reflect(&self.llm, transcript).await
    }

    /// Learns from `insights_text` and makes the result the current insights.
    pub async fn learn(
        &mut self,
        session_id: impl Into<SessionId>,
        insights_text: &str,
    ) -> ReflexionResult<String> {
        let transcript = self.sessions.get_or_create(session_id);
        let learned = reflection::learn(&self.llm, transcript, insights_text).await?;

        match self.scope {
            InsightsScope::Shared => {
                info!(
                    session_id = %transcript.session_id(),
                    "Shared insights replaced for all sessions"
                );
                self.insights = learned.clone();
            }
            InsightsScope::PerSession => transcript.set_insights(learned.clone()),
        }
        Ok(learned)
    }

    /// Runs [`Self::reflect`] and feeds its output to [`Self::learn`].
    pub async fn reflect_and_learn(
        &mut self,
        session_id: impl Into<SessionId>,
    ) -> ReflexionResult<String> {
        let session_id = session_id.into();
        let insights = self.reflect(&session_id).await?;
        self.learn(&session_id, &insights).await
    }

    /// The agent-wide insights value (empty until the first shared learn).
    pub fn insights(&self) -> &str {
        &self.insights
    }

    /// The insights the next `respond` on `session_id` will embed.
    pub fn insights_for(&self, session_id: &SessionId) -> &str {
        match self.scope {
            InsightsScope::Shared => &self.insights,
            InsightsScope::PerSession => self
                .sessions
                .get(session_id)
                .and_then(Transcript::insights)
                .unwrap_or_default(),
        }
    }

    pub fn transcript(&self, session_id: &SessionId) -> Option<&Transcript> {
        self.sessions.get(session_id)
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

//! Prompt construction.
//!
//! Every prompt is a pure function of a fixed instruction, an ordered list of
//! transcript turns and an optional tail. The result is a provider-agnostic
//! [`ChatMessage`] list; backends translate it to their wire format.

use reflexion_core::{Message, Role};
use serde::{Deserialize, Serialize};

/// Prefix of the synthetic system turn appended by the learner.
pub const LEARNED_MARKER: &str = "Learned insights: ";

/// Prefix of the trailing system note carrying the current insights.
pub const INSIGHTS_NOTE_PREFIX: &str = "Insights from previous interactions: ";

pub const RESPONDER_INSTRUCTION: &str = "You are a self-improving AI assistant. \
Answer the user helpfully and accurately. Learn from the conversation so far and \
apply any insights gathered from earlier interactions to give better answers.";

pub const REFLECTOR_INSTRUCTION: &str = "You are an AI assistant reviewing your own \
past conversation. Critically evaluate the answers you gave: what was helpful, \
what was inaccurate, unclear or incomplete, and what the user seemed to need.";

pub const REFLECTION_REQUEST: &str =
    "Reflect on the conversation above and provide insights for improving your future responses.";

pub const LEARNER_INSTRUCTION: &str = "You are an AI assistant that learns from \
reflections on its own behaviour. Turn the insights you are given into a short \
list of concrete guidelines for future answers.";

/// A single provider-agnostic prompt message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

impl From<&Message> for ChatMessage {
    fn from(m: &Message) -> Self {
        Self::new(m.role, m.content.clone())
    }
}

/// Builds `instruction`, then every turn unfiltered, then `tail` in order.
pub fn build_prompt(
    instruction: &str,
    turns: &[Message],
    tail: impl IntoIterator<Item = ChatMessage>,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(turns.len() + 3);
    messages.push(ChatMessage::system(instruction));
    messages.extend(turns.iter().map(ChatMessage::from));
    messages.extend(tail);
    messages
}

/// The trailing system note embedding `insights` verbatim. Present even when
/// `insights` is empty.
pub fn insights_note(insights: &str) -> String {
    format!("{INSIGHTS_NOTE_PREFIX}{insights}")
}

pub fn response_prompt(turns: &[Message], user_text: &str, insights: &str) -> Vec<ChatMessage> {
    build_prompt(
        RESPONDER_INSTRUCTION,
        turns,
        [
            ChatMessage::user(user_text),
            ChatMessage::system(insights_note(insights)),
        ],
    )
}

pub fn reflection_prompt(turns: &[Message]) -> Vec<ChatMessage> {
    build_prompt(
        REFLECTOR_INSTRUCTION,
        turns,
        [ChatMessage::user(REFLECTION_REQUEST)],
    )
}

pub fn learning_prompt(insights: &str) -> Vec<ChatMessage> {
    build_prompt(
        LEARNER_INSTRUCTION,
        &[],
        [ChatMessage::user(format!(
            "Insights:\n{insights}\n\nSummarize the key points to remember from these insights."
        ))],
    )
}

/// Text of a learned turn: [`LEARNED_MARKER`] followed by `learned`.
pub fn learned_turn(learned: &str) -> String {
    format!("{LEARNED_MARKER}{learned}")
}

//! The three model-backed operations of the loop.
//!
//! Each is a stateless transformation over an explicit transcript plus one
//! completion call. A failed call aborts the operation before any mutation.

use crate::llm::LlmClient;
use crate::prompt;
use reflexion_core::{Message, ReflexionResult};
use reflexion_session::Transcript;
use tracing::info;

/// Answers `user_text`, then appends the user turn and the agent turn.
pub async fn respond(
    llm: &LlmClient,
    transcript: &mut Transcript,
    insights: &str,
    user_text: &str,
) -> ReflexionResult<String> {
    let messages = prompt::response_prompt(transcript.messages(), user_text, insights);
    let reply = llm.complete(&messages).await?;

    transcript.push(Message::user(user_text));
    transcript.push(Message::assistant(reply.clone()));

    info!(
        session_id = %transcript.session_id(),
        turns = transcript.len(),
        "Agent responded"
    );
    Ok(reply)
}

/// Asks the model to critique its own answers. Returns the raw text.
pub async fn reflect(llm: &LlmClient, transcript: &Transcript) -> ReflexionResult<String> {
    let messages = prompt::reflection_prompt(transcript.messages());
    let insights = llm.complete(&messages).await?;

    info!(
        session_id = %transcript.session_id(),
        chars = insights.len(),
        "Reflection complete"
    );
    Ok(insights)
}

/// Compresses `insights_text` into key points and appends them as a marked
/// system turn. Returns the learned text without the marker.
pub async fn learn(
    llm: &LlmClient,
    transcript: &mut Transcript,
    insights_text: &str,
) -> ReflexionResult<String> {
    let messages = prompt::learning_prompt(insights_text);
    let learned = llm.complete(&messages).await?;

    transcript.push(Message::system(prompt::learned_turn(&learned)));

    info!(
        session_id = %transcript.session_id(),
        chars = learned.len(),
        "Learned from reflection"
    );
    Ok(learned)
}

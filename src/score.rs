//! Second model call: a numeric score derived from the critique text.

use std::sync::Arc;

use crate::chat::{ChatMessage, ChatProvider};
use crate::error::InferenceError;
use crate::prompts::score_prompt;

/// Returned when the model's reply has no message content.
pub const NO_SCORE: &str = "No score found.";

#[derive(Clone)]
pub struct ScoreRequester {
    provider: Arc<dyn ChatProvider>,
}

impl ScoreRequester {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Asks for a `Score: <number>` line for `critique`. The reply is
    /// returned verbatim; see [`crate::parser::extract_score`].
    pub async fn request_score(&self, critique: &str) -> Result<String, InferenceError> {
        let message = ChatMessage::user().content(score_prompt(critique)).build();
        self.provider.ask(message, NO_SCORE).await
    }
}

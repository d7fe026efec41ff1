use async_trait::async_trait;

use crate::error::InferenceError;

use super::message::ChatMessage;
use super::usage::Usage;

pub trait ChatResponse: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Content of the first choice, `None` when the envelope has none.
    fn text(&self) -> Option<String>;
    fn usage(&self) -> Option<Usage> {
        None
    }
}

/// A hosted model that answers a conversation with free text.
#[async_trait]
pub trait ChatProvider: Sync + Send {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, InferenceError>;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    /// Sends a single user message and returns the reply text, or `fallback`
    /// when the response carries no content.
    async fn ask(&self, message: ChatMessage, fallback: &str) -> Result<String, InferenceError> {
        let response = self.chat(std::slice::from_ref(&message)).await?;
        if let Some(usage) = response.usage() {
            log::debug!("{} usage: {}", self.model(), usage);
        }
        Ok(response.text().unwrap_or_else(|| fallback.to_string()))
    }
}

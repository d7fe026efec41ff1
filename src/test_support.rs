use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::chat::{ChatMessage, ChatProvider, ChatResponse};
use crate::error::InferenceError;

/// `Ok(None)` stands for a well-formed envelope without content.
pub(crate) type ScriptedReply = Result<Option<String>, InferenceError>;

/// Provider that replays canned replies in order and records what it was sent.
pub(crate) struct ScriptedProvider {
    replies: Mutex<VecDeque<ScriptedReply>>,
    sent: Mutex<Vec<ChatMessage>>,
}

impl ScriptedProvider {
    pub(crate) fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<ChatMessage> {
        self.sent.lock().expect("sent lock").clone()
    }
}

#[derive(Debug)]
struct ScriptedResponse(Option<String>);

impl fmt::Display for ScriptedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_deref().unwrap_or_default())
    }
}

impl ChatResponse for ScriptedResponse {
    fn text(&self) -> Option<String> {
        self.0.clone()
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, InferenceError> {
        self.sent
            .lock()
            .expect("sent lock")
            .extend_from_slice(messages);
        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| panic!("scripted replies exhausted"))?;
        Ok(Box::new(ScriptedResponse(reply)))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

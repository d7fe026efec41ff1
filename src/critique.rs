//! First model call: a written critique of one artwork.

use std::sync::Arc;

use crate::chat::{ChatMessage, ChatProvider};
use crate::error::InferenceError;
use crate::fetch::EncodedImage;
use crate::prompts::CRITIQUE_PROMPT;

/// Returned when the model's reply has no message content.
pub const NO_DESCRIPTION: &str = "No description found.";

#[derive(Clone)]
pub struct CritiqueRequester {
    provider: Arc<dyn ChatProvider>,
}

impl CritiqueRequester {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Sends the evaluation prompt with `image` attached. The image is
    /// consumed; nothing keeps it once the request is done.
    pub async fn request_critique(&self, image: EncodedImage) -> Result<String, InferenceError> {
        let message = ChatMessage::user()
            .content(CRITIQUE_PROMPT)
            .image(image.mime, image.bytes)
            .build();
        self.provider.ask(message, NO_DESCRIPTION).await
    }
}

use std::sync::Arc;

use secrecy::SecretString;

use crate::chat::ChatProvider;

use super::state::BuilderState;

/// Builder for configuring an [`crate::ArtJudge`].
#[derive(Default)]
pub struct ArtJudgeBuilder {
    pub(super) state: BuilderState,
}

impl ArtJudgeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key for the inference endpoint.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.state.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Sets the base URL of the OpenAI-compatible endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.state.base_url = Some(url.into());
        self
    }

    /// Sets the vision model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.state.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.state.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.state.temperature = Some(temperature);
        self
    }

    /// Timeout for each model call. Unset means no timeout.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.state.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Timeout for each image download.
    pub fn fetch_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.state.fetch_timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.state.jpeg_quality = Some(quality);
        self
    }

    /// Downscale images whose longer side exceeds `max` pixels.
    pub fn max_dimension(mut self, max: u32) -> Self {
        self.state.max_dimension = Some(max);
        self
    }

    /// Uses `provider` for both model calls instead of the NVIDIA backend.
    /// Endpoint settings and the API key are then ignored.
    pub fn provider(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.state.provider = Some(provider);
        self
    }
}

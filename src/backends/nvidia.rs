//! NVIDIA integrate API client for vision-capable chat completions.
//!
//! The endpoint speaks the OpenAI chat-completions wire format, so the same
//! client works against any compatible server by overriding the base URL.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, ChatProvider, ChatResponse, ImageMime, MessageType, Usage};
use crate::error::InferenceError;

pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1/";
pub const DEFAULT_MODEL: &str = "meta/llama-3.2-90b-vision-instruct";

/// Configuration for the NVIDIA client.
#[derive(Debug)]
pub struct NvidiaConfig {
    /// Bearer token for the integrate API.
    pub api_key: SecretString,
    /// Base URL, always ending with `/`.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Maximum tokens to generate in responses.
    pub max_tokens: Option<u32>,
    /// Sampling temperature for response randomness.
    pub temperature: Option<f32>,
    /// Request timeout in seconds. Unbounded when unset.
    pub timeout_seconds: Option<u64>,
}

/// Client for the NVIDIA chat-completions endpoint.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct Nvidia {
    pub config: Arc<NvidiaConfig>,
    pub client: Client,
}

#[derive(Serialize, Debug)]
struct NvidiaChatRequest<'a> {
    model: &'a str,
    messages: Vec<NvidiaChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Serialize, Debug)]
struct NvidiaChatMessage<'a> {
    role: &'a str,
    content: Vec<NvidiaContentPart<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
enum NvidiaContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: NvidiaImageUrl<'a> },
}

#[derive(Serialize, Debug)]
struct NvidiaImageUrl<'a> {
    url: &'a str,
}

#[derive(Deserialize, Debug)]
struct NvidiaChatResponse {
    #[serde(default)]
    choices: Option<Vec<NvidiaChatChoice>>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize, Debug)]
struct NvidiaChatChoice {
    #[serde(default)]
    message: Option<NvidiaChatMsg>,
}

#[derive(Deserialize, Debug)]
struct NvidiaChatMsg {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse for NvidiaChatResponse {
    fn text(&self) -> Option<String> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .clone()
    }

    fn usage(&self) -> Option<Usage> {
        self.usage.clone()
    }
}

impl std::fmt::Display for NvidiaChatResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "No response content"),
        }
    }
}

impl Nvidia {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token, must not be empty
    /// * `base_url` - Endpoint root (defaults to the NVIDIA integrate API)
    /// * `model` - Model to use (defaults to Llama 3.2 90B Vision Instruct)
    /// * `max_tokens` - Maximum tokens to generate
    /// * `temperature` - Sampling temperature
    /// * `timeout_seconds` - Request timeout in seconds
    pub fn new(
        api_key: SecretString,
        base_url: Option<String>,
        model: Option<String>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, InferenceError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        let client = builder.build()?;
        Self::with_client(
            client,
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            timeout_seconds,
        )
    }

    /// Creates a new client on top of an existing HTTP client.
    pub fn with_client(
        client: Client,
        api_key: SecretString,
        base_url: Option<String>,
        model: Option<String>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, InferenceError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(InferenceError::AuthError(
                "Missing NVIDIA API key".to_string(),
            ));
        }
        Ok(Self {
            config: Arc::new(NvidiaConfig {
                api_key,
                base_url: normalize_base_url(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)),
                model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                max_tokens,
                temperature,
                timeout_seconds,
            }),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.config.timeout_seconds
    }

    fn completions_url(&self) -> String {
        format!("{}chat/completions", self.config.base_url)
    }
}

#[async_trait]
impl ChatProvider for Nvidia {
    /// Sends a chat request to the completions endpoint.
    ///
    /// Non-success statuses and bodies that are not a chat-completion
    /// envelope are errors; an envelope without content is not.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, InferenceError> {
        let image_urls: Vec<Option<String>> = messages.iter().map(image_data_url).collect();
        let nvidia_msgs = messages
            .iter()
            .zip(&image_urls)
            .map(|(message, image_url)| map_message(message, image_url.as_deref()))
            .collect();

        let body = NvidiaChatRequest {
            model: &self.config.model,
            messages: nvidia_msgs,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            stream: false,
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(mut json) = serde_json::to_value(&body) {
                elide_data_urls(&mut json);
                log::trace!("NVIDIA request payload: {}", json);
            }
        }

        let mut request = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body);

        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let resp = request.send().await?;
        let status = resp.status();
        log::debug!("NVIDIA HTTP status: {}", status);

        let raw = resp.text().await?;
        if !status.is_success() {
            return Err(status_error(status, raw));
        }

        let json_resp: NvidiaChatResponse =
            serde_json::from_str(&raw).map_err(|err| InferenceError::ResponseFormatError {
                message: err.to_string(),
                raw_response: raw.clone(),
            })?;

        Ok(Box::new(json_resp))
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn map_message<'a>(message: &'a ChatMessage, image_url: Option<&'a str>) -> NvidiaChatMessage<'a> {
    let mut content = vec![NvidiaContentPart::Text {
        text: &message.content,
    }];
    if let Some(url) = image_url {
        content.push(NvidiaContentPart::ImageUrl {
            image_url: NvidiaImageUrl { url },
        });
    }
    NvidiaChatMessage {
        role: message.role.as_str(),
        content,
    }
}

fn image_data_url(message: &ChatMessage) -> Option<String> {
    match &message.message_type {
        MessageType::Image((mime, bytes)) => Some(data_url(*mime, bytes)),
        MessageType::Text => None,
    }
}

pub(crate) fn data_url(mime: ImageMime, bytes: &[u8]) -> String {
    let encoded = STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime.mime_type(), encoded)
}

fn status_error(status: StatusCode, body: String) -> InferenceError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            InferenceError::AuthError(format!("{status}: {body}"))
        }
        _ => InferenceError::ProviderError {
            status: status.as_u16(),
            body,
        },
    }
}

fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

fn elide_data_urls(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::String(s) if s.starts_with("data:") => {
            let prefix = s.split(',').next().unwrap_or_default().to_string();
            *s = format!("{prefix},<{} chars>", s.len());
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(elide_data_urls),
        serde_json::Value::Object(map) => map.values_mut().for_each(elide_data_urls),
        _ => {}
    }
}

use std::sync::Arc;

use secrecy::SecretString;

use crate::chat::ChatProvider;

#[derive(Default)]
pub(crate) struct BuilderState {
    pub(crate) provider: Option<Arc<dyn ChatProvider>>,
    pub(crate) api_key: Option<SecretString>,
    pub(crate) base_url: Option<String>,
    pub(crate) model: Option<String>,
    pub(crate) max_tokens: Option<u32>,
    pub(crate) temperature: Option<f32>,
    pub(crate) timeout_seconds: Option<u64>,
    pub(crate) fetch_timeout_seconds: Option<u64>,
    pub(crate) jpeg_quality: Option<u8>,
    pub(crate) max_dimension: Option<u32>,
}

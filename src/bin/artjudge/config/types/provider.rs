use serde::Deserialize;

use super::DEFAULT_API_KEY_ENV;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub api_key_env: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl ProviderConfig {
    /// Name of the environment variable consulted for the API key.
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// First non-blank key from `flag`, the config file, then the environment.
    pub fn resolve_api_key(&self, flag: Option<&str>) -> Option<String> {
        let env_key = std::env::var(self.api_key_env()).ok();
        [flag.map(str::to_string), self.api_key.clone(), env_key]
            .into_iter()
            .flatten()
            .find(|key| !key.trim().is_empty())
    }
}

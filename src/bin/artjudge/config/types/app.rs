use serde::Deserialize;

use super::{FetchConfig, LoggingConfig, ProviderConfig};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub fetch: FetchConfig,
    pub logging: LoggingConfig,
}

mod app;
mod fetch;
mod logging;
mod provider;

const DEFAULT_API_KEY_ENV: &str = "NVIDIA_API_KEY";

pub use app::AppConfig;
pub use fetch::FetchConfig;
pub use logging::LoggingConfig;
pub use provider::ProviderConfig;

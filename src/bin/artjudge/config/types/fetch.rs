use serde::Deserialize;

use artjudge::fetch::{DEFAULT_FETCH_TIMEOUT_SECONDS, DEFAULT_JPEG_QUALITY};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
    pub jpeg_quality: u8,
    pub max_dimension: Option<u32>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECONDS,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_dimension: None,
        }
    }
}

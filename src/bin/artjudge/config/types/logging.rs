use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_LOG_FILE: &str = "artjudge.log";
const DEFAULT_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_ROTATE_KEEP: usize = 5;

/// `[logging]` section. `level` accepts any `RUST_LOG`-style spec.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<PathBuf>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_ROTATE_SIZE,
            rotate_keep: DEFAULT_ROTATE_KEEP,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or `artjudge.log` under `logs_dir`.
    pub fn log_file(&self, logs_dir: &Path) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| logs_dir.join(DEFAULT_LOG_FILE))
    }
}

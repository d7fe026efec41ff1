use std::fs;

use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};

use crate::config::{ConfigPaths, LoggingConfig};

/// Starts buffered, size-rotated file logging. `RUST_LOG` overrides the
/// configured level. Log records are flushed when the returned handle drops,
/// so the caller keeps it alive for the whole run.
pub fn init_logging(config: &LoggingConfig, paths: &ConfigPaths) -> anyhow::Result<LoggerHandle> {
    let log_file = config.log_file(&paths.logs_dir);
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir)?;
    }
    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(FileSpec::try_from(log_file)?)
        .write_mode(WriteMode::BufferAndFlush)
        .format(detailed_format)
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    Ok(handle)
}

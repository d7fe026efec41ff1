use std::io;
use std::path::PathBuf;

/// Failure to locate or read the TOML configuration. Both file variants name
/// the offending path so the CLI can report it as-is.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no home directory to resolve the default config location")]
    MissingHome,
}

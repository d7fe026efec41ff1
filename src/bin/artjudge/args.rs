use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "artjudge",
    about = "Critique and score artwork images with a vision-language model"
)]
pub struct CliArgs {
    /// Comma-separated image URLs. Read from stdin when omitted.
    #[arg(index = 1)]
    pub urls: Option<String>,
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub api_key: Option<String>,
    #[arg(long, short = 'm')]
    pub model: Option<String>,
    #[arg(long)]
    pub base_url: Option<String>,
    /// Downscale images whose longer side exceeds this many pixels.
    #[arg(long)]
    pub max_dimension: Option<u32>,
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_urls_and_flags() {
        let args = CliArgs::parse_from([
            "artjudge",
            "https://a.example/1.png,https://a.example/2.jpg",
            "--model",
            "some/vision-model",
            "--format",
            "json",
        ]);
        assert_eq!(
            args.urls.as_deref(),
            Some("https://a.example/1.png,https://a.example/2.jpg")
        );
        assert_eq!(args.model.as_deref(), Some("some/vision-model"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn defaults_to_table_and_stdin() {
        let args = CliArgs::parse_from(["artjudge"]);
        assert!(args.urls.is_none());
        assert_eq!(args.format, OutputFormat::Table);
    }
}

mod events;
mod input;

use anyhow::anyhow;
use clap::Parser;

use artjudge::{parse_submissions, ArtJudge};

use crate::args::CliArgs;
use crate::config::{load_config, AppConfig};
use crate::logging::init_logging;
use crate::render::render;

use events::ConsoleEvents;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;
    log::debug!(
        "config file {} (exists: {})",
        loaded.paths.config_file.display(),
        loaded.config_exists
    );

    let raw = match &args.urls {
        Some(urls) => urls.clone(),
        None => input::read_urls()?,
    };
    let submissions = parse_submissions(&raw);
    if submissions.is_empty() {
        eprintln!("No artwork URLs provided.");
        return Ok(());
    }

    let judge = build_judge(&args, &loaded.config)?;
    let results = judge.evaluate(&submissions, &ConsoleEvents).await;
    print!("{}", render(&results, args.format)?);
    Ok(())
}

fn build_judge(args: &CliArgs, config: &AppConfig) -> anyhow::Result<ArtJudge> {
    let provider = &config.provider;
    let api_key = provider
        .resolve_api_key(args.api_key.as_deref())
        .ok_or_else(|| {
            anyhow!(
                "No API key found. Pass --api-key, set provider.api_key, or export {}.",
                provider.api_key_env()
            )
        })?;

    let mut builder = ArtJudge::builder()
        .api_key(api_key)
        .fetch_timeout_seconds(config.fetch.timeout_seconds)
        .jpeg_quality(config.fetch.jpeg_quality);
    if let Some(url) = args.base_url.clone().or_else(|| provider.base_url.clone()) {
        builder = builder.base_url(url);
    }
    if let Some(model) = args.model.clone().or_else(|| provider.model.clone()) {
        builder = builder.model(model);
    }
    if let Some(max) = args.max_dimension.or(config.fetch.max_dimension) {
        builder = builder.max_dimension(max);
    }
    if let Some(secs) = provider.timeout_seconds {
        builder = builder.timeout_seconds(secs);
    }
    if let Some(max_tokens) = provider.max_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    if let Some(temperature) = provider.temperature {
        builder = builder.temperature(temperature);
    }
    Ok(builder.build()?)
}

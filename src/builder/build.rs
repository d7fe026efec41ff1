use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;

use crate::backends::nvidia::Nvidia;
use crate::chat::ChatProvider;
use crate::error::JudgeError;
use crate::evaluator::ArtJudge;
use crate::fetch::ImageFetcher;

use super::judge_builder::ArtJudgeBuilder;
use super::state::BuilderState;

impl ArtJudgeBuilder {
    pub fn build(self) -> Result<ArtJudge, JudgeError> {
        self.state.build()
    }
}

impl BuilderState {
    fn build(mut self) -> Result<ArtJudge, JudgeError> {
        log::debug!(
            "Building art judge. model={:?} base_url={:?} timeout={:?} fetch_timeout={:?} custom_provider={}",
            self.model,
            self.base_url,
            self.timeout_seconds,
            self.fetch_timeout_seconds,
            self.provider.is_some(),
        );
        let fetcher = self.fetcher();
        let provider = match self.provider.take() {
            Some(provider) => provider,
            None => self.nvidia()?,
        };
        Ok(ArtJudge::new(fetcher, provider))
    }

    fn fetcher(&self) -> ImageFetcher {
        let mut fetcher = ImageFetcher::new().max_dimension(self.max_dimension);
        if let Some(secs) = self.fetch_timeout_seconds {
            fetcher = fetcher.timeout(Duration::from_secs(secs));
        }
        if let Some(quality) = self.jpeg_quality {
            fetcher = fetcher.jpeg_quality(quality);
        }
        fetcher
    }

    fn nvidia(&mut self) -> Result<Arc<dyn ChatProvider>, JudgeError> {
        let api_key = self
            .api_key
            .take()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| JudgeError::Config("No API key provided for NVIDIA".to_string()))?;
        let nvidia = Nvidia::new(
            api_key,
            self.base_url.take(),
            self.model.take(),
            self.max_tokens,
            self.temperature,
            self.timeout_seconds,
        )?;
        Ok(Arc::new(nvidia))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::nvidia::DEFAULT_MODEL;
    use crate::test_support::ScriptedProvider;

    #[test]
    fn missing_key_is_a_config_error() {
        let err = ArtJudgeBuilder::new().build().err().unwrap();
        assert!(matches!(err, JudgeError::Config(_)));

        let err = ArtJudgeBuilder::new().api_key("   ").build().err().unwrap();
        assert!(matches!(err, JudgeError::Config(_)));
    }

    #[test]
    fn builds_nvidia_backed_judge() {
        let judge = ArtJudge::builder()
            .api_key("nvapi-test")
            .timeout_seconds(30)
            .build()
            .unwrap();
        assert!(format!("{:?}", judge.fetcher).contains("jpeg_quality: 75"));
    }

    #[test]
    fn custom_provider_needs_no_key() {
        let provider = Arc::new(ScriptedProvider::new(Vec::new()));
        let judge = ArtJudgeBuilder::new()
            .provider(provider)
            .jpeg_quality(90)
            .max_dimension(512)
            .fetch_timeout_seconds(3)
            .build()
            .unwrap();
        let debug = format!("{:?}", judge.fetcher);
        assert!(debug.contains("jpeg_quality: 90"));
        assert!(debug.contains("max_dimension: Some(512)"));
        assert!(debug.contains("timeout: 3s"));
    }

    #[test]
    fn nvidia_defaults_apply() {
        let mut state = BuilderState {
            api_key: Some(secrecy::SecretString::new("k".to_string())),
            ..Default::default()
        };
        let provider = state.nvidia().unwrap();
        assert_eq!(provider.model(), DEFAULT_MODEL);
    }
}

use std::sync::Arc;

use crate::builder::ArtJudgeBuilder;
use crate::chat::ChatProvider;
use crate::critique::CritiqueRequester;
use crate::error::JudgeError;
use crate::fetch::ImageFetcher;
use crate::parser::{extract_score, parse};
use crate::score::ScoreRequester;
use crate::submission::ArtworkSubmission;

use super::events::EvaluationEvents;
use super::record::{EvaluationRecord, ResultSet};

/// Runs fetch, critique, parse and score for each submission.
pub struct ArtJudge {
    pub(crate) fetcher: ImageFetcher,
    pub(crate) critic: CritiqueRequester,
    pub(crate) scorer: ScoreRequester,
}

impl ArtJudge {
    /// Both model calls go through `provider`.
    pub fn new(fetcher: ImageFetcher, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            fetcher,
            critic: CritiqueRequester::new(provider.clone()),
            scorer: ScoreRequester::new(provider),
        }
    }

    pub fn builder() -> ArtJudgeBuilder {
        ArtJudgeBuilder::new()
    }

    /// Evaluates submissions one at a time, in order.
    ///
    /// An artwork whose image cannot be loaded, or whose model call fails, is
    /// reported through `events` and left out of the result. The remaining
    /// artworks are still processed and keep their original labels.
    pub async fn evaluate(
        &self,
        submissions: &[ArtworkSubmission],
        events: &dyn EvaluationEvents,
    ) -> ResultSet {
        let mut results = ResultSet::default();
        for submission in submissions {
            events.started(submission);
            match self.evaluate_one(submission).await {
                Ok(record) => {
                    events.finished(&record);
                    results.push(record);
                }
                Err(err) => {
                    log::warn!("{} skipped: {err}", submission.label());
                    events.failed(submission, &err);
                }
            }
        }
        log::info!(
            "evaluated {} of {} artworks",
            results.len(),
            submissions.len()
        );
        results
    }

    /// Evaluates a single artwork.
    ///
    /// The score request receives the raw critique text, not the parsed fields.
    pub async fn evaluate_one(
        &self,
        submission: &ArtworkSubmission,
    ) -> Result<EvaluationRecord, JudgeError> {
        let label = submission.label();
        let image = self.fetcher.fetch_and_encode(&submission.url).await?;
        log::debug!(
            "{label}: encoded {}x{} image, {} bytes",
            image.width,
            image.height,
            image.bytes.len()
        );

        let critique = self.critic.request_critique(image).await?;
        let fields = parse(&critique);

        let reply = self.scorer.request_score(&critique).await?;
        let score = extract_score(&reply);
        if score.is_none() {
            log::debug!("{label}: no score in reply {reply:?}");
        }

        Ok(EvaluationRecord::new(label, &fields, score))
    }
}

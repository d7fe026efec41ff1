use crate::error::JudgeError;
use crate::submission::ArtworkSubmission;

use super::record::EvaluationRecord;

/// Side channel for progress and per-artwork failures.
///
/// Failures never abort a batch and never appear in the [`super::ResultSet`];
/// this is the only place they surface.
pub trait EvaluationEvents: Send + Sync {
    fn started(&self, _submission: &ArtworkSubmission) {}

    fn failed(&self, _submission: &ArtworkSubmission, _error: &JudgeError) {}

    fn finished(&self, _record: &EvaluationRecord) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl EvaluationEvents for NoopEvents {}

use artjudge::error::JudgeError;
use artjudge::{ArtworkSubmission, EvaluationEvents};

/// Progress and per-artwork warnings on stderr, keeping stdout for results.
pub struct ConsoleEvents;

impl EvaluationEvents for ConsoleEvents {
    fn started(&self, submission: &ArtworkSubmission) {
        eprintln!("Analyzing {}...", submission.label());
    }

    fn failed(&self, submission: &ArtworkSubmission, error: &JudgeError) {
        if error.is_fetch() {
            eprintln!("Failed to load {}: {error}", submission.label());
        } else {
            eprintln!("API Error for {}: {error}", submission.label());
        }
    }
}

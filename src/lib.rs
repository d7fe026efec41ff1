//! Art critique pipeline backed by a hosted vision-language model.
//!
//! Each submitted image URL is downloaded, normalized to JPEG, and sent to an
//! OpenAI-compatible chat-completions endpoint twice: once for a written
//! critique across five criteria, once for a numeric score derived from that
//! critique. The free-text answers are turned into [`EvaluationRecord`]s by a
//! best-effort line parser.
//!
//! ```no_run
//! use artjudge::{parse_submissions, ArtJudge, NoopEvents};
//!
//! # async fn run() -> Result<(), artjudge::error::JudgeError> {
//! let judge = ArtJudge::builder()
//!     .api_key(std::env::var("NVIDIA_API_KEY").unwrap_or_default())
//!     .build()?;
//! let submissions = parse_submissions("https://example.com/a.jpg, https://example.com/b.png");
//! let results = judge.evaluate(&submissions, &NoopEvents).await;
//! for record in results.iter() {
//!     println!("{}: {:?}", record.artwork, record.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod builder;
pub mod chat;
pub mod critique;
pub mod error;
pub mod evaluator;
pub mod fetch;
pub mod parser;
pub mod prompts;
pub mod score;
pub mod submission;

#[cfg(test)]
mod test_support;

pub use builder::ArtJudgeBuilder;
pub use evaluator::{ArtJudge, EvaluationEvents, EvaluationRecord, NoopEvents, ResultSet};
pub use fetch::{EncodedImage, ImageFetcher};
pub use parser::{extract_score, parse, CanonicalField, CritiqueFields, SkillLevel};
pub use submission::{parse_submissions, ArtworkSubmission};

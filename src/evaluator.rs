#[path = "evaluator/record.rs"]
mod record;

#[path = "evaluator/events.rs"]
mod events;

#[path = "evaluator/judge.rs"]
mod judge;

pub use events::{EvaluationEvents, NoopEvents};
pub use judge::ArtJudge;
pub use record::{EvaluationRecord, ResultSet, COLUMNS};

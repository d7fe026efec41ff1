#[path = "builder/state.rs"]
mod state;

#[path = "builder/judge_builder.rs"]
mod judge_builder;

#[path = "builder/build.rs"]
mod build;

pub use judge_builder::ArtJudgeBuilder;

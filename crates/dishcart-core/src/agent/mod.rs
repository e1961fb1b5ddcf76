//! Turn orchestration: classify a message, then dispatch it.

pub mod orchestrator;
pub mod prompt;

pub use orchestrator::{Orchestrator, OrchestratorOptions};

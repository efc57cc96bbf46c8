// ATS scoring: deterministic heuristic plus an optional LLM analysis that
// falls back to the heuristic when the model's output is unusable.

pub mod analyzer;
pub mod handlers;
pub mod heuristic;
pub mod keywords;
pub mod prompts;
pub mod report;

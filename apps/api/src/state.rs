use std::sync::Arc;

use crate::ats::analyzer::AtsAnalyzer;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable ATS analyzer. Default: LlmAtsAnalyzer. Swap via ENABLE_LLM_ATS env.
    pub ats_analyzer: Arc<dyn AtsAnalyzer>,
}

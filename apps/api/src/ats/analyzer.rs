//! ATS analysis: pluggable, trait-based analyzer over resume text.
//!
//! Default: `LlmAtsAnalyzer` (model judgement, heuristic breakdown attached).
//! `HeuristicAtsAnalyzer` is pure Rust and used when `ENABLE_LLM_ATS=false`.
//!
//! `AppState` holds an `Arc<dyn AtsAnalyzer>`, chosen at startup via config.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::ats::heuristic::calculate_ats_score;
use crate::ats::prompts::{
    ATS_ANALYSIS_PROMPT_TEMPLATE, ATS_ANALYSIS_SYSTEM, JOB_SECTION_TEMPLATE, NO_JOB_SECTION,
};
use crate::ats::report::{clamp_score, summarize_score, AtsReport};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// The ATS analyzer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait AtsAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AtsReport, AppError>;
}

/// Builds the analyzer selected by configuration.
pub fn build_ats_analyzer(enable_llm: bool, llm: LlmClient) -> Arc<dyn AtsAnalyzer> {
    if enable_llm {
        Arc::new(LlmAtsAnalyzer(llm))
    } else {
        Arc::new(HeuristicAtsAnalyzer)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAtsAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic analyzer, no LLM call.
pub struct HeuristicAtsAnalyzer;

#[async_trait]
impl AtsAnalyzer for HeuristicAtsAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AtsReport, AppError> {
        Ok(calculate_ats_score(resume_text, job_description))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAtsAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Model-backed analyzer. Transport and API errors are surfaced; output that
/// is not the expected JSON falls back to the heuristic report.
pub struct LlmAtsAnalyzer(pub LlmClient);

#[derive(Debug, Deserialize)]
struct ModelAssessment {
    score: f64,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    improvements: Vec<String>,
    #[serde(default)]
    matched_keywords: Vec<String>,
    #[serde(default)]
    missing_keywords: Vec<String>,
}

#[async_trait]
impl AtsAnalyzer for LlmAtsAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AtsReport, AppError> {
        let heuristic = calculate_ats_score(resume_text, job_description);

        let prompt = build_analysis_prompt(resume_text, job_description);
        let system = format!("{ATS_ANALYSIS_SYSTEM} {JSON_ONLY_SYSTEM}");
        let assessment = self.0.generate_json::<ModelAssessment>(&prompt, &system).await;

        let report = report_from_assessment(assessment, heuristic)?;
        info!(
            "ATS analysis: score={} backend={}",
            report.score, report.scorer_backend
        );
        Ok(report)
    }
}

fn build_analysis_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let job_section = match job_description.map(str::trim) {
        Some(jd) if !jd.is_empty() => fill_template(JOB_SECTION_TEMPLATE, &[("job_description", jd)]),
        _ => NO_JOB_SECTION.to_string(),
    };
    fill_template(
        ATS_ANALYSIS_PROMPT_TEMPLATE,
        &[("job_section", job_section.as_str()), ("resume_text", resume_text.trim())],
    )
}

/// Merges the model's assessment into a report. Output that did not parse
/// yields the heuristic report with `fallback_reason` set; transport and API
/// errors are returned as-is.
fn report_from_assessment(
    assessment: Result<ModelAssessment, LlmError>,
    heuristic: AtsReport,
) -> Result<AtsReport, AppError> {
    let assessment = match assessment {
        Ok(a) if a.score.is_finite() => a,
        Ok(a) => {
            return Ok(fallback(
                heuristic,
                format!("model returned a non-numeric score ({})", a.score),
            ))
        }
        Err(LlmError::Parse(e)) => {
            return Ok(fallback(heuristic, format!("model output was not valid JSON: {e}")))
        }
        Err(e) => return Err(e.into()),
    };

    let score = clamp_score(assessment.score.round() as i64);
    Ok(AtsReport {
        score,
        breakdown: heuristic.breakdown,
        matched_keywords: non_empty_or(assessment.matched_keywords, heuristic.matched_keywords),
        missing_keywords: non_empty_or(assessment.missing_keywords, heuristic.missing_keywords),
        strengths: non_empty_or(assessment.strengths, heuristic.strengths),
        improvements: non_empty_or(assessment.improvements, heuristic.improvements),
        summary: if assessment.summary.trim().is_empty() {
            summarize_score(score)
        } else {
            assessment.summary.trim().to_string()
        },
        scorer_backend: "llm".to_string(),
        fallback_reason: None,
    })
}

fn fallback(mut heuristic: AtsReport, reason: String) -> AtsReport {
    warn!("ATS analysis falling back to heuristic: {reason}");
    heuristic.fallback_reason = Some(reason);
    heuristic
}

fn non_empty_or(preferred: Vec<String>, otherwise: Vec<String>) -> Vec<String> {
    if preferred.is_empty() {
        otherwise
    } else {
        preferred
    }
}

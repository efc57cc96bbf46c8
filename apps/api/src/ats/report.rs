use serde::{Deserialize, Serialize};

/// Lowest score any ATS backend may report.
pub const MIN_SCORE: u32 = 15;
/// Highest score any ATS backend may report.
pub const MAX_SCORE: u32 = 100;

/// Clamps a raw score into the reportable range.
pub fn clamp_score(raw: i64) -> u32 {
    raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u32
}

/// Points awarded per heuristic component. Maxima sum to exactly 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub baseline: u32,
    pub contact: u32,
    pub sections: u32,
    pub keywords: u32,
    pub action_verbs: u32,
    pub quantified_achievements: u32,
    pub word_count: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.baseline
            + self.contact
            + self.sections
            + self.keywords
            + self.action_verbs
            + self.quantified_achievements
            + self.word_count
    }
}

/// Full ATS report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32, // 15 – 100
    pub breakdown: ScoreBreakdown,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub summary: String,
    pub scorer_backend: String, // "heuristic" | "llm"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// One-line verdict for a score.
pub fn summarize_score(score: u32) -> String {
    if score >= 80 {
        format!("Excellent ATS compatibility ({score}/100).")
    } else if score >= 60 {
        format!("Good ATS compatibility ({score}/100) with room for improvement.")
    } else if score >= 40 {
        format!("Fair ATS compatibility ({score}/100). Several improvements recommended.")
    } else {
        format!("Low ATS compatibility ({score}/100). Significant improvements needed.")
    }
}

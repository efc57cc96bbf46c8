//! Deterministic ATS heuristic.
//!
//! Tallies fixed point values for regex-matched signals and clamps the sum to
//! [`MIN_SCORE`, `MAX_SCORE`]. Component maxima:
//!
//! | component               | max |
//! |-------------------------|-----|
//! | baseline                | 15  |
//! | contact details         | 20  |
//! | section headings        | 20  |
//! | keywords                | 15  |
//! | action verbs            | 10  |
//! | quantified achievements | 10  |
//! | word count              | 10  |
//!
//! Contact details are left out of the word count, so adding an email and a
//! phone number to a text raises its score by at least 16.

use std::sync::OnceLock;

use regex::Regex;

use crate::ats::keywords::{
    contains_term, extract_jd_keywords, matching_terms, ACTION_VERBS, INDUSTRY_KEYWORDS,
    MAX_JD_KEYWORDS, VAGUE_PHRASES,
};
use crate::ats::report::{clamp_score, summarize_score, AtsReport, ScoreBreakdown};

const BASELINE_POINTS: u32 = 15;

const EMAIL_POINTS: u32 = 8;
const PHONE_POINTS: u32 = 8;
const PROFILE_LINK_POINTS: u32 = 4;
const CONTACT_CAP: u32 = EMAIL_POINTS + PHONE_POINTS + PROFILE_LINK_POINTS;

const SECTION_POINTS: u32 = 4;
const SECTION_CAP: u32 = 20;

const KEYWORD_CAP: u32 = 15;
const INDUSTRY_KEYWORD_POINTS: u32 = 2;

const ACTION_VERB_POINTS: u32 = 2;
const ACTION_VERB_CAP: u32 = 10;

const METRIC_POINTS: u32 = 2;
const METRIC_CAP: u32 = 10;

const WORD_COUNT_FULL: u32 = 10;
const WORD_COUNT_PARTIAL: u32 = 5;
const IDEAL_WORDS: std::ops::RangeInclusive<usize> = 300..=900;
const ACCEPTABLE_WORDS: std::ops::RangeInclusive<usize> = 150..=1200;

/// (display name, header alternatives). The first four are core sections.
const SECTIONS: &[(&str, &str)] = &[
    (
        "Summary",
        "professional summary|career summary|summary|career objective|objective|profile|about me",
    ),
    (
        "Experience",
        "work experience|professional experience|experience|employment history|work history|internships?",
    ),
    ("Education", "education|academic background|academics|qualifications"),
    ("Skills", "technical skills|key skills|core competencies|skills"),
    ("Projects", "projects|personal projects|academic projects|key projects"),
    ("Certifications", "certifications?|certificates|licenses"),
    ("Achievements", "achievements|awards|honors|honours|accomplishments"),
];
const CORE_SECTION_COUNT: usize = 4;

struct Patterns {
    email: Regex,
    phone: Regex,
    profile_link: Regex,
    metric: Regex,
    sections: Vec<(&'static str, Regex)>,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        email: compile(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"),
        phone: compile(
            r"(?:\+?\d{1,3}[\s.-]?)?(?:\(\d{3}\)|\d{3})[\s.-]?\d{3}[\s.-]?\d{4}\b|(?:\+?\d{2}[\s.-]?)?\d{5}[\s.-]?\d{5}\b",
        ),
        profile_link: compile(
            r"(?i)\b(?:linkedin\.com/in/|github\.com/|gitlab\.com/|behance\.net/|dribbble\.com/|https?://)\S+",
        ),
        metric: compile(
            r"(?i)\d+(?:\.\d+)?\s?%|[$€£₹]\s?\d[\d,]*(?:\.\d+)?\s?(?:k|m|mm|b|million|billion)?\b|\b\d+(?:\.\d+)?x\b|\b\d[\d,]*\+?\s+(?:users|customers|clients|projects|people|employees|members|engineers|students|hours|days|weeks|months|teams|countries|downloads|transactions|requests|stores|applications)\b",
        ),
        sections: SECTIONS
            .iter()
            .map(|(name, alternatives)| {
                let pattern =
                    format!(r"(?im)^[ \t#*>•-]*(?:{alternatives})\b[ \t]*(?::|$)");
                (*name, compile(&pattern))
            })
            .collect(),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Scores `resume_text` for ATS friendliness, optionally against a job description.
pub fn calculate_ats_score(resume_text: &str, job_description: Option<&str>) -> AtsReport {
    let p = patterns();
    let lower = resume_text.to_lowercase();

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    // Contact details
    let has_email = p.email.is_match(resume_text);
    let has_phone = p.phone.is_match(resume_text);
    let has_profile = p.profile_link.is_match(resume_text);
    let contact = has_email as u32 * EMAIL_POINTS
        + has_phone as u32 * PHONE_POINTS
        + has_profile as u32 * PROFILE_LINK_POINTS;
    if contact == CONTACT_CAP {
        strengths.push("Complete contact information".to_string());
    }
    if !has_email {
        improvements.push("Add a professional email address to your contact details.".to_string());
    }
    if !has_phone {
        improvements.push("Add a phone number so recruiters can reach you.".to_string());
    }
    if !has_profile {
        improvements.push("Add a LinkedIn, GitHub, or portfolio link.".to_string());
    }

    // Section headings
    let found_sections: Vec<bool> = p.sections.iter().map(|(_, re)| re.is_match(resume_text)).collect();
    let section_hits = found_sections.iter().filter(|found| **found).count() as u32;
    let sections = (section_hits * SECTION_POINTS).min(SECTION_CAP);
    if sections == SECTION_CAP {
        strengths.push("Well structured with standard section headings".to_string());
    }
    for ((name, _), found) in p.sections.iter().zip(&found_sections).take(CORE_SECTION_COUNT) {
        if !found {
            improvements.push(format!("Add a clearly labelled '{name}' section heading."));
        }
    }

    // Keywords
    let (keywords, matched_keywords, missing_keywords) = score_keywords(&lower, job_description);
    if keywords == KEYWORD_CAP {
        strengths.push("Strong keyword alignment".to_string());
    } else if !missing_keywords.is_empty() {
        let sample: Vec<&str> = missing_keywords.iter().take(5).map(String::as_str).collect();
        improvements.push(format!(
            "Work these job keywords into your resume where they are true for you: {}.",
            sample.join(", ")
        ));
    } else {
        improvements.push("Use more industry keywords relevant to your target role.".to_string());
    }

    // Action verbs
    let verbs = matching_terms(&lower, ACTION_VERBS).len() as u32;
    let action_verbs = (verbs * ACTION_VERB_POINTS).min(ACTION_VERB_CAP);
    if action_verbs == ACTION_VERB_CAP {
        strengths.push("Uses strong action verbs".to_string());
    } else {
        improvements.push(
            "Start bullets with strong action verbs such as Led, Built, Delivered, or Optimized."
                .to_string(),
        );
    }
    if let Some(vague) = VAGUE_PHRASES.iter().find(|phrase| contains_term(&lower, phrase)) {
        improvements.push(format!(
            "Replace vague phrasing like '{vague}' with a specific action and its outcome."
        ));
    }

    // Quantified achievements
    let metrics = p.metric.find_iter(resume_text).count() as u32;
    let quantified_achievements = (metrics * METRIC_POINTS).min(METRIC_CAP);
    if quantified_achievements == METRIC_CAP {
        strengths.push("Achievements are well quantified".to_string());
    } else {
        improvements.push(
            "Quantify achievements with numbers, percentages, or amounts (e.g. 'cut costs by 20%')."
                .to_string(),
        );
    }

    // Length
    let words = count_words(p, resume_text);
    let word_count = if IDEAL_WORDS.contains(&words) {
        strengths.push("Appropriate length for ATS parsing".to_string());
        WORD_COUNT_FULL
    } else if ACCEPTABLE_WORDS.contains(&words) {
        WORD_COUNT_PARTIAL
    } else {
        0
    };
    if words < *IDEAL_WORDS.start() {
        improvements.push(format!(
            "Expand your resume ({words} words); aim for {}-{} words.",
            IDEAL_WORDS.start(),
            IDEAL_WORDS.end()
        ));
    } else if words > *IDEAL_WORDS.end() {
        improvements.push(format!(
            "Tighten your resume ({words} words); aim for {}-{} words.",
            IDEAL_WORDS.start(),
            IDEAL_WORDS.end()
        ));
    }

    let breakdown = ScoreBreakdown {
        baseline: BASELINE_POINTS,
        contact,
        sections,
        keywords,
        action_verbs,
        quantified_achievements,
        word_count,
    };
    let score = clamp_score(breakdown.total() as i64);

    AtsReport {
        score,
        breakdown,
        matched_keywords,
        missing_keywords,
        strengths,
        improvements,
        summary: summarize_score(score),
        scorer_backend: "heuristic".to_string(),
        fallback_reason: None,
    }
}

/// Counts words that carry letters or digits, ignoring contact details and
/// separators such as `|` or bullet dashes.
fn count_words(p: &Patterns, resume_text: &str) -> usize {
    let without_email = p.email.replace_all(resume_text, " ");
    let without_phone = p.phone.replace_all(&without_email, " ");
    let without_links = p.profile_link.replace_all(&without_phone, " ");
    without_links
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}

/// Returns (points, matched, missing). Uses the job description's own terms
/// when it yields any, otherwise the built-in industry vocabulary.
fn score_keywords(
    resume_lower: &str,
    job_description: Option<&str>,
) -> (u32, Vec<String>, Vec<String>) {
    let jd_keywords = job_description
        .map(|jd| extract_jd_keywords(jd, MAX_JD_KEYWORDS))
        .unwrap_or_default();

    if jd_keywords.is_empty() {
        let matched = matching_terms(resume_lower, INDUSTRY_KEYWORDS);
        let points = (matched.len() as u32 * INDUSTRY_KEYWORD_POINTS).min(KEYWORD_CAP);
        return (
            points,
            matched.into_iter().map(String::from).collect(),
            Vec::new(),
        );
    }

    let (matched, missing): (Vec<String>, Vec<String>) = jd_keywords
        .into_iter()
        .partition(|kw| contains_term(resume_lower, kw));
    let total = matched.len() + missing.len();
    let points = (KEYWORD_CAP as f64 * matched.len() as f64 / total as f64).round() as u32;
    (points.min(KEYWORD_CAP), matched, missing)
}

//! Style calibration maps the chosen resume style to verb sets and layout
//! guidance, then filters verbs by career stage.
//!
//! A candidate with no work history never gets senior-leadership verbs,
//! regardless of the selected style.

use serde::{Deserialize, Serialize};

use crate::resume::models::ResumeForm;

/// Visual/voice style the user picked in the builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStyle {
    #[default]
    Professional,
    Modern,
    Creative,
    Executive,
    Technical,
}

/// Verb sets and phrasing calibrated to a resume style.
#[derive(Debug, Clone)]
pub struct StyleGuide {
    pub strong_verbs: Vec<&'static str>,
    pub layout_hint: &'static str,
    pub avoid_phrases: Vec<&'static str>,
}

/// How far along the candidate is, inferred from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerStage {
    Student,
    EarlyCareer,
    Experienced,
}

impl CareerStage {
    pub fn from_form(form: &ResumeForm) -> Self {
        match form.experience.len() {
            0 => CareerStage::Student,
            1 | 2 => CareerStage::EarlyCareer,
            _ => CareerStage::Experienced,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CareerStage::Student => "student or fresher",
            CareerStage::EarlyCareer => "early-career professional",
            CareerStage::Experienced => "experienced professional",
        }
    }
}

/// Returns style-calibrated verb sets for the chosen style.
pub fn get_style_guide(style: ResumeStyle) -> StyleGuide {
    match style {
        ResumeStyle::Professional => StyleGuide {
            strong_verbs: vec![
                "Managed",
                "Delivered",
                "Coordinated",
                "Implemented",
                "Improved",
                "Led",
            ],
            layout_hint: "Conservative, formal tone. Reverse-chronological order.",
            avoid_phrases: vec!["rockstar", "ninja", "guru"],
        },
        ResumeStyle::Modern => StyleGuide {
            strong_verbs: vec![
                "Built",
                "Launched",
                "Shipped",
                "Scaled",
                "Automated",
                "Collaborated on",
            ],
            layout_hint: "Crisp, concise bullets. Lead with impact. Skills grouped by category.",
            avoid_phrases: vec!["responsible for", "duties included"],
        },
        ResumeStyle::Creative => StyleGuide {
            strong_verbs: vec![
                "Designed",
                "Conceptualized",
                "Crafted",
                "Produced",
                "Reimagined",
                "Launched",
            ],
            layout_hint: "Warm, confident voice. Open with a memorable one-line headline.",
            avoid_phrases: vec!["synergy", "go-getter", "think outside the box"],
        },
        ResumeStyle::Executive => StyleGuide {
            strong_verbs: vec![
                "Directed",
                "Spearheaded",
                "Transformed",
                "Championed",
                "Orchestrated",
                "Grew",
            ],
            layout_hint: "Strategic outcomes first: revenue, cost, scale, and team size.",
            avoid_phrases: vec!["helped", "assisted", "worked on"],
        },
        ResumeStyle::Technical => StyleGuide {
            strong_verbs: vec![
                "Architected",
                "Engineered",
                "Optimized",
                "Implemented",
                "Debugged",
                "Deployed",
            ],
            layout_hint: "Name technologies explicitly in each bullet. Skills section near the top.",
            avoid_phrases: vec!["various technologies", "etc."],
        },
    }
}

/// Verbs that claim organisational leadership. Never suggested to students.
const LEADERSHIP_VERBS: &[&str] = &[
    "Directed",
    "Spearheaded",
    "Championed",
    "Orchestrated",
    "Managed",
    "Grew",
    "Transformed",
];

/// Verbs that fit coursework, internships, and personal projects.
const STUDENT_VERBS: &[&str] = &["Built", "Developed", "Designed", "Researched", "Presented"];

/// Filters a verb set based on the candidate's career stage.
///
/// Students lose leadership verbs and get study-appropriate ones instead
/// if nothing is left. Early-career candidates lose only "Directed".
pub fn filter_verbs_for_stage<'a>(verbs: &[&'a str], stage: CareerStage) -> Vec<&'a str> {
    match stage {
        CareerStage::Experienced => verbs.to_vec(),
        CareerStage::EarlyCareer => verbs
            .iter()
            .filter(|&&v| !v.eq_ignore_ascii_case("Directed"))
            .copied()
            .collect(),
        CareerStage::Student => {
            let kept: Vec<&str> = verbs
                .iter()
                .filter(|&&v| !LEADERSHIP_VERBS.iter().any(|&lv| lv.eq_ignore_ascii_case(v)))
                .copied()
                .collect();
            if kept.is_empty() {
                STUDENT_VERBS.to_vec()
            } else {
                kept
            }
        }
    }
}

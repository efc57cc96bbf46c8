//! Resume form data and the basic form validation applied before generation.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::report::AtsReport;
use crate::errors::AppError;
use crate::resume::style::ResumeStyle;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Everything the user typed into the resume builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeForm {
    pub personal: PersonalInfo,
    pub target_role: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub style: ResumeStyle,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// Output of the generation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResume {
    pub resume_text: String,
    pub word_count: usize,
    pub style: ResumeStyle,
    /// Heuristic ATS score of the generated text.
    pub ats_preview: AtsReport,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ResumeForm {
    /// Checks required fields. Every failure is reported, not just the first.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut problems = Vec::new();

        if is_blank(&self.personal.full_name) {
            problems.push("personal.full_name is required".to_string());
        }
        if is_blank(&self.personal.email) {
            problems.push("personal.email is required".to_string());
        } else if !email_pattern().is_match(self.personal.email.trim()) {
            problems.push("personal.email is not a valid email address".to_string());
        }
        if is_blank(&self.target_role) {
            problems.push("target_role is required".to_string());
        }
        for (i, exp) in self.experience.iter().enumerate() {
            if is_blank(&exp.title) {
                problems.push(format!("experience[{i}].title is required"));
            }
            if is_blank(&exp.company) {
                problems.push(format!("experience[{i}].company is required"));
            }
        }
        for (i, edu) in self.education.iter().enumerate() {
            if is_blank(&edu.degree) {
                problems.push(format!("education[{i}].degree is required"));
            }
            if is_blank(&edu.institution) {
                problems.push(format!("education[{i}].institution is required"));
            }
        }
        for (i, project) in self.projects.iter().enumerate() {
            if is_blank(&project.name) {
                problems.push(format!("projects[{i}].name is required"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(problems.join("; ")))
        }
    }

    /// Skills with blanks removed and duplicates (case-insensitive) dropped, order kept.
    pub fn clean_skills(&self) -> Vec<&str> {
        let mut seen = Vec::<String>::new();
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .filter(|s| {
                let key = s.to_lowercase();
                if seen.contains(&key) {
                    false
                } else {
                    seen.push(key);
                    true
                }
            })
            .collect()
    }
}

//! Resume generation: turns validated form data into resume text.
//!
//! Flow: validate form → style calibration → prompt interpolation →
//!       LLM generate → normalise text → heuristic ATS preview.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::heuristic::calculate_ats_score;
use crate::errors::AppError;
use crate::llm_client::prompts::{
    fill_template, or_not_provided, ATS_FORMAT_INSTRUCTION, GROUNDING_INSTRUCTION,
    PLAIN_TEXT_SYSTEM,
};
use crate::llm_client::{LlmClient, LlmError};
use crate::resume::models::{GeneratedResume, ResumeForm};
use crate::resume::prompts::{
    ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM, RESUME_JOB_SECTION_TEMPLATE, RESUME_PROMPT_TEMPLATE,
    RESUME_SYSTEM,
};
use crate::resume::style::{filter_verbs_for_stage, get_style_guide, CareerStage};

/// Longest section text accepted for enhancement, in characters.
const MAX_SECTION_CHARS: usize = 8_000;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Resume sections that can be rewritten on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Summary,
    Experience,
    Skills,
    Projects,
}

impl ResumeSection {
    pub fn label(self) -> &'static str {
        match self {
            ResumeSection::Summary => "PROFESSIONAL SUMMARY",
            ResumeSection::Experience => "EXPERIENCE",
            ResumeSection::Skills => "SKILLS",
            ResumeSection::Projects => "PROJECTS",
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            ResumeSection::Summary => {
                "Write 3-4 lines: who the candidate is, their strongest skills, and what they bring to the role."
            }
            ResumeSection::Experience => {
                "Return one bullet per line starting with '- '. Start each bullet with a strong action verb and keep any existing metrics."
            }
            ResumeSection::Skills => {
                "Group skills into short labelled lines such as 'Languages:' and 'Tools:'. Do not add skills that are not listed."
            }
            ResumeSection::Projects => {
                "For each project give a one-line description followed by 1-2 bullets naming the technologies and the outcome."
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceRequest {
    pub section: ResumeSection,
    pub content: String,
    #[serde(default)]
    pub target_role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhanceResponse {
    pub section: ResumeSection,
    pub enhanced: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Validates the form, asks the LLM for resume text, and scores the result.
pub async fn generate_resume(llm: &LlmClient, form: &ResumeForm) -> Result<GeneratedResume, AppError> {
    form.validate()?;

    let prompt = build_resume_prompt(form);
    let system = format!("{RESUME_SYSTEM} {PLAIN_TEXT_SYSTEM}");

    info!(
        "Generating {:?} resume for target role '{}'",
        form.style,
        form.target_role.trim()
    );
    let raw = llm.generate(&prompt, &system).await?;
    let resume_text = normalize_generated_text(&raw);
    if resume_text.is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    let ats_preview = calculate_ats_score(&resume_text, form.job_description.as_deref());
    let word_count = resume_text.split_whitespace().count();
    info!(
        "Generated resume: {} words, ATS preview {}/100",
        word_count, ats_preview.score
    );

    Ok(GeneratedResume {
        resume_text,
        word_count,
        style: form.style,
        ats_preview,
    })
}

/// Rewrites a single section for the target role.
pub async fn enhance_section(
    llm: &LlmClient,
    request: &EnhanceRequest,
) -> Result<EnhanceResponse, AppError> {
    let content = request.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    if content.chars().count() > MAX_SECTION_CHARS {
        return Err(AppError::Validation(format!(
            "content exceeds {MAX_SECTION_CHARS} characters"
        )));
    }

    let target_role = match request.target_role.as_deref().map(str::trim) {
        Some(role) if !role.is_empty() => role,
        _ => "general",
    };
    let prompt = build_enhance_prompt(request.section, content, target_role);
    let system = format!("{ENHANCE_SYSTEM} {PLAIN_TEXT_SYSTEM}");

    let enhanced = normalize_generated_text(&llm.generate(&prompt, &system).await?);
    if enhanced.is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    Ok(EnhanceResponse {
        section: request.section,
        enhanced,
    })
}

fn build_enhance_prompt(section: ResumeSection, content: &str, target_role: &str) -> String {
    fill_template(
        ENHANCE_PROMPT_TEMPLATE,
        &[
            ("section_guidance", section.guidance()),
            ("grounding_instruction", GROUNDING_INSTRUCTION),
            ("target_role", target_role),
            ("section", section.label()),
            ("content", content),
        ],
    )
}

/// Builds the generation prompt by filling the template with form data.
fn build_resume_prompt(form: &ResumeForm) -> String {
    let guide = get_style_guide(form.style);
    let stage = CareerStage::from_form(form);
    let verbs = filter_verbs_for_stage(&guide.strong_verbs, stage);

    let job_section = match form.job_description.as_deref().map(str::trim) {
        Some(jd) if !jd.is_empty() => {
            fill_template(RESUME_JOB_SECTION_TEMPLATE, &[("job_description", jd)])
        }
        _ => String::new(),
    };
    let style_name = format!("{:?}", form.style);
    let strong_verbs = verbs.join(", ");
    let avoid_phrases = guide.avoid_phrases.join(", ");
    let candidate_details = render_candidate_details(form);

    fill_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("grounding_instruction", GROUNDING_INSTRUCTION),
            ("ats_format_instruction", ATS_FORMAT_INSTRUCTION),
            ("career_stage", stage.label()),
            ("style_name", style_name.as_str()),
            ("layout_hint", guide.layout_hint),
            ("strong_verbs", strong_verbs.as_str()),
            ("avoid_phrases", avoid_phrases.as_str()),
            ("job_section", job_section.as_str()),
            ("candidate_details", candidate_details.as_str()),
            ("target_role", form.target_role.trim()),
        ],
    )
}

/// Renders the form as a labelled plain-text block for the prompt.
fn render_candidate_details(form: &ResumeForm) -> String {
    let p = &form.personal;
    let mut out = vec![
        format!("Name: {}", p.full_name.trim()),
        format!("Email: {}", p.email.trim()),
        format!("Phone: {}", or_not_provided(p.phone.as_deref())),
        format!("Location: {}", or_not_provided(p.location.as_deref())),
        format!("LinkedIn: {}", or_not_provided(p.linkedin.as_deref())),
        format!("Portfolio: {}", or_not_provided(p.portfolio.as_deref())),
        format!("Summary (draft): {}", or_not_provided(form.summary.as_deref())),
    ];

    out.push("Experience:".to_string());
    if form.experience.is_empty() {
        out.push("  None".to_string());
    }
    for exp in &form.experience {
        let end = if exp.current {
            "Present"
        } else {
            or_not_provided(exp.end_date.as_deref())
        };
        out.push(format!(
            "  - {} at {} ({}), {} to {}",
            exp.title.trim(),
            exp.company.trim(),
            or_not_provided(exp.location.as_deref()),
            or_not_provided(exp.start_date.as_deref()),
            end
        ));
        if let Some(desc) = exp.description.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            out.push(format!("    Details: {desc}"));
        }
    }

    out.push("Education:".to_string());
    if form.education.is_empty() {
        out.push("  None".to_string());
    }
    for edu in &form.education {
        out.push(format!(
            "  - {}, {} (year: {}, grade: {})",
            edu.degree.trim(),
            edu.institution.trim(),
            or_not_provided(edu.year.as_deref()),
            or_not_provided(edu.grade.as_deref())
        ));
    }

    let skills = form.clean_skills();
    out.push(format!(
        "Skills: {}",
        if skills.is_empty() {
            "Not provided".to_string()
        } else {
            skills.join(", ")
        }
    ));

    if !form.projects.is_empty() {
        out.push("Projects:".to_string());
        for project in &form.projects {
            let tech = if project.technologies.is_empty() {
                String::new()
            } else {
                format!(" [{}]", project.technologies.join(", "))
            };
            out.push(format!(
                "  - {}{}: {} (link: {})",
                project.name.trim(),
                tech,
                or_not_provided(project.description.as_deref()),
                or_not_provided(project.link.as_deref())
            ));
        }
    }

    let certifications: Vec<&str> = form
        .certifications
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();
    if !certifications.is_empty() {
        out.push(format!("Certifications: {}", certifications.join("; ")));
    }

    out.join("\n")
}

/// Cleans model output into plain resume text: drops code fences and bold
/// markers, trims trailing spaces, and collapses runs of blank lines.
pub fn normalize_generated_text(raw: &str) -> String {
    let mut lines: Vec<&str> = raw.trim().lines().collect();
    if lines.first().is_some_and(|l| l.trim_start().starts_with("```")) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| l.trim() == "```") {
        lines.pop();
    }

    let mut out = String::new();
    let mut blank_run = 0;
    for line in lines {
        let cleaned = line.replace("**", "");
        let cleaned = cleaned.trim_end();
        if cleaned.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(cleaned);
        out.push('\n');
    }
    out.trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::llm_client::retry::RetryPolicy;
    use crate::resume::models::{Experience, PersonalInfo};
    use crate::resume::style::ResumeStyle;

    fn form() -> ResumeForm {
        ResumeForm {
            personal: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane.doe@example.com".to_string(),
                phone: Some("+1 555 123 4567".to_string()),
                ..Default::default()
            },
            target_role: "Data Analyst".to_string(),
            experience: vec![Experience {
                title: "Analyst Intern".to_string(),
                company: "Acme".to_string(),
                current: true,
                description: Some("Built weekly sales dashboards".to_string()),
                ..Default::default()
            }],
            skills: vec!["SQL".to_string(), "Excel".to_string()],
            style: ResumeStyle::Executive,
            job_description: Some("Looking for SQL and Tableau skills".to_string()),
            ..Default::default()
        }
    }

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::new(
            "test-key".to_string(),
            "test-model".to_string(),
            server.base_url(),
            RetryPolicy::new(3, Duration::from_millis(1)),
        )
        .unwrap()
    }

    fn reply(text: &str) -> serde_json::Value {
        json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})
    }

    #[test]
    fn test_prompt_is_interpolated_from_form() {
        let prompt = build_resume_prompt(&form());
        assert!(prompt.contains("targeting the role of Data Analyst"));
        assert!(prompt.contains("early-career professional"));
        assert!(prompt.contains("Analyst Intern at Acme"));
        assert!(prompt.contains("to Present"));
        assert!(prompt.contains("Skills: SQL, Excel"));
        assert!(prompt.contains("Tableau"));
        assert!(prompt.contains("STYLE: Executive"));
        // early-career candidates never get "Directed"
        assert!(!prompt.contains("Directed"));
        assert!(!prompt.contains('{'), "unfilled placeholder in prompt");
    }

    #[test]
    fn test_prompt_keeps_braces_in_user_text() {
        let mut f = form();
        f.job_description = Some("Template work: fill {target_role} and {skills} fields".to_string());
        f.experience[0].description = Some("Maintained {candidate_details} macros".to_string());
        let prompt = build_resume_prompt(&f);
        assert!(prompt.contains("fill {target_role} and {skills} fields"));
        assert!(prompt.contains("Maintained {candidate_details} macros"));
        assert!(prompt.contains("targeting the role of Data Analyst"));
    }

    #[test]
    fn test_enhance_prompt_keeps_braces_in_content() {
        let prompt = build_enhance_prompt(
            ResumeSection::Skills,
            "Jinja {section} blocks, {content} slots",
            "Backend Engineer",
        );
        assert!(prompt.contains("Jinja {section} blocks, {content} slots"));
        assert!(prompt.contains("Backend Engineer"));
    }

    #[test]
    fn test_prompt_omits_job_block_without_description() {
        let mut f = form();
        f.job_description = None;
        let prompt = build_resume_prompt(&f);
        assert!(!prompt.contains("TARGET JOB DESCRIPTION"));
    }

    #[test]
    fn test_candidate_details_mark_missing_values() {
        let details = render_candidate_details(&form());
        assert!(details.contains("Location: Not provided"));
        assert!(details.contains("Details: Built weekly sales dashboards"));
        assert!(!details.contains("Projects:"));
    }

    #[test]
    fn test_normalize_strips_fences_and_bold() {
        let raw = "```text\n**JANE DOE**\n\n\n\nEXPERIENCE   \n- Built dashboards\n```";
        assert_eq!(
            normalize_generated_text(raw),
            "JANE DOE\n\nEXPERIENCE\n- Built dashboards"
        );
    }

    #[test]
    fn test_normalize_blank_output_is_empty() {
        assert_eq!(normalize_generated_text("```\n```"), "");
    }

    #[test]
    fn test_section_serde() {
        let request: EnhanceRequest = serde_json::from_value(json!({
            "section": "summary",
            "content": "I like data."
        }))
        .unwrap();
        assert_eq!(request.section, ResumeSection::Summary);
        assert!(request.target_role.is_none());
    }

    #[tokio::test]
    async fn test_generate_resume_returns_text_with_ats_preview() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).body_contains("Jane Doe");
                then.status(200).json_body(reply(
                    "JANE DOE\njane.doe@example.com | +1 555 123 4567\n\nEXPERIENCE\n- Built 12 dashboards with SQL",
                ));
            })
            .await;

        let generated = generate_resume(&client_for(&server), &form()).await.unwrap();

        mock.assert_hits_async(1).await;
        assert!(generated.resume_text.starts_with("JANE DOE"));
        assert_eq!(generated.style, ResumeStyle::Executive);
        assert!(generated.word_count > 5);
        assert!(generated.ats_preview.breakdown.contact >= 16);
        assert_eq!(generated.ats_preview.matched_keywords, vec!["sql"]);
    }

    #[tokio::test]
    async fn test_generate_resume_rejects_invalid_form_without_calling_llm() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(reply("unused"));
            })
            .await;

        let mut f = form();
        f.target_role = "  ".to_string();
        let result = generate_resume(&client_for(&server), &f).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_enhance_section_rejects_blank_content() {
        let server = MockServer::start_async().await;
        let request = EnhanceRequest {
            section: ResumeSection::Experience,
            content: "   ".to_string(),
            target_role: None,
        };
        let result = enhance_section(&client_for(&server), &request).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_enhance_section_returns_rewritten_text() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).body_contains("ORIGINAL EXPERIENCE");
                then.status(200)
                    .json_body(reply("- Led migration of 3 services to AWS, cutting costs by 20%"));
            })
            .await;

        let request = EnhanceRequest {
            section: ResumeSection::Experience,
            content: "worked on aws migration".to_string(),
            target_role: Some("Cloud Engineer".to_string()),
        };
        let response = enhance_section(&client_for(&server), &request).await.unwrap();
        assert_eq!(response.section, ResumeSection::Experience);
        assert!(response.enhanced.starts_with("- Led migration"));
    }
}

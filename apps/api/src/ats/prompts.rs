// All LLM prompt constants for the ATS module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for ATS analysis. Append `JSON_ONLY_SYSTEM` before sending.
pub const ATS_ANALYSIS_SYSTEM: &str = "You are an applicant tracking system (ATS) expert \
    and senior technical recruiter. You evaluate resumes the way ATS parsers and \
    recruiters screen them.";

/// ATS analysis prompt template. Replace `{resume_text}` and `{job_section}` before sending.
pub const ATS_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the resume below for ATS compatibility.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 78,
  "summary": "One or two sentences on overall ATS readiness",
  "strengths": ["Clear section headings", "Quantified achievements"],
  "improvements": ["Add a LinkedIn profile link", "Mention Kubernetes if you have used it"],
  "matched_keywords": ["python", "sql"],
  "missing_keywords": ["kubernetes"]
}

Scoring guidance (score is an integer from 0 to 100):
- Contact details present (email, phone, profile link)
- Standard section headings (Summary, Experience, Education, Skills, Projects)
- Relevant keywords and skills for the role
- Strong action verbs and quantified achievements
- Appropriate length and simple, parseable formatting

{job_section}

RESUME:
{resume_text}"#;

/// Job-description block inserted into the analysis prompt when one is supplied.
pub const JOB_SECTION_TEMPLATE: &str = "Compare keywords against this JOB DESCRIPTION:\n{job_description}";

/// Job-description block used when no job description is supplied.
pub const NO_JOB_SECTION: &str =
    "No job description was supplied. Judge keywords against the role the resume targets.";

// All LLM prompt constants for the resume module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for full resume generation. Append `PLAIN_TEXT_SYSTEM` before sending.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer and career coach. \
    You write concise, truthful, ATS-optimized resumes.";

/// Resume generation prompt template.
/// Replace: {career_stage}, {target_role}, {grounding_instruction}, {ats_format_instruction},
///          {style_name}, {layout_hint}, {strong_verbs}, {avoid_phrases},
///          {candidate_details}, {job_section}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Write a complete resume for a {career_stage} targeting the role of {target_role}.

{grounding_instruction}

{ats_format_instruction}

STYLE: {style_name}. {layout_hint}
Prefer these verbs where they fit the facts: {strong_verbs}
Avoid these phrases: {avoid_phrases}

CANDIDATE DETAILS:
{candidate_details}

{job_section}

Structure the resume as:
1. Full name on the first line, then one contact line
2. PROFESSIONAL SUMMARY: 3-4 lines tailored to {target_role}
3. EXPERIENCE: 3-5 bullets per role, most recent first (omit if none)
4. PROJECTS (omit if none)
5. EDUCATION
6. SKILLS
7. CERTIFICATIONS (omit if none)

Keep the whole resume between 300 and 700 words."#;

/// Job-description block for the generation prompt.
pub const RESUME_JOB_SECTION_TEMPLATE: &str = "TARGET JOB DESCRIPTION (mirror its keywords where the candidate's facts support them):\n{job_description}";

/// System prompt for single-section enhancement. Append `PLAIN_TEXT_SYSTEM` before sending.
pub const ENHANCE_SYSTEM: &str = "You are an expert resume editor. \
    You rewrite one resume section at a time, keeping every fact intact.";

/// Section enhancement prompt template.
/// Replace: {section}, {target_role}, {section_guidance}, {grounding_instruction}, {content}
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Rewrite the {section} section below so it is stronger for a {target_role} application.

{section_guidance}

{grounding_instruction}

Return only the rewritten section text, without a heading.

ORIGINAL {section}:
{content}"#;

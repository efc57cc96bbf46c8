// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt fragment that enforces plain-text resume output.
pub const PLAIN_TEXT_SYSTEM: &str = "Respond with plain text only. \
    Do NOT use markdown syntax such as **, #, or code fences. \
    Do NOT add commentary before or after the requested content.";

/// Common instruction appended to all writing prompts.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Use only the facts supplied by the candidate. \
    Do NOT invent employers, dates, degrees, certifications, or metrics. \
    Where a metric would help but none is given, phrase the bullet so it reads well without one.";

/// Instruction that keeps output parseable by applicant tracking systems.
pub const ATS_FORMAT_INSTRUCTION: &str = "\
    Keep the layout ATS-friendly: standard section headings in capitals \
    (PROFESSIONAL SUMMARY, EXPERIENCE, EDUCATION, SKILLS, PROJECTS, CERTIFICATIONS), \
    one bullet per line starting with '- ', no tables, no columns, no images, no emojis.";

/// Renders an optional value as a prompt line, or "Not provided".
pub fn or_not_provided(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => "Not provided",
    }
}

/// Fills `{name}` placeholders in one pass. Braces that name no known
/// placeholder are copied through, and inserted values are never rescanned,
/// so user text containing `{...}` reaches the model unchanged.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_substitutes_known_placeholders() {
        let out = fill_template("Hi {name}, role: {role}.", &[("name", "Jane"), ("role", "Analyst")]);
        assert_eq!(out, "Hi Jane, role: Analyst.");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let template = "Reply as {\"score\": 0} for {name}. Dangling {";
        let out = fill_template(template, &[("name", "Jane")]);
        assert_eq!(out, "Reply as {\"score\": 0} for Jane. Dangling {");
    }

    #[test]
    fn test_fill_template_does_not_rescan_inserted_values() {
        let out = fill_template(
            "{content} / {role}",
            &[("content", "uses {role} and {content}"), ("role", "Analyst")],
        );
        assert_eq!(out, "uses {role} and {content} / Analyst");
    }

    #[test]
    fn test_or_not_provided() {
        assert_eq!(or_not_provided(Some(" Pune ")), "Pune");
        assert_eq!(or_not_provided(Some("   ")), "Not provided");
        assert_eq!(or_not_provided(None), "Not provided");
    }
}

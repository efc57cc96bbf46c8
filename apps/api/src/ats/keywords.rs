//! Keyword vocabularies and term matching used by the ATS heuristic.

use std::collections::HashMap;

/// Maximum number of keywords pulled from a job description.
pub const MAX_JD_KEYWORDS: usize = 20;

/// Generic industry keywords used when no job description is supplied.
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "leadership",
    "management",
    "communication",
    "teamwork",
    "problem solving",
    "analytics",
    "agile",
    "scrum",
    "project management",
    "stakeholder",
    "strategy",
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "node",
    "sql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "machine learning",
    "data analysis",
    "cloud",
    "api",
    "git",
    "ci/cd",
    "testing",
    "excel",
    "marketing",
    "sales",
    "customer",
    "budget",
    "operations",
    "research",
    "design",
    "automation",
    "optimization",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "accelerated",
    "analyzed",
    "architected",
    "automated",
    "built",
    "collaborated",
    "coordinated",
    "created",
    "delivered",
    "deployed",
    "designed",
    "developed",
    "drove",
    "engineered",
    "established",
    "executed",
    "generated",
    "implemented",
    "increased",
    "initiated",
    "launched",
    "led",
    "managed",
    "mentored",
    "negotiated",
    "optimized",
    "orchestrated",
    "reduced",
    "resolved",
    "spearheaded",
    "streamlined",
    "transformed",
];

/// Phrases that read as filler when not followed by a measurable outcome.
pub const VAGUE_PHRASES: &[&str] = &[
    "helped",
    "worked on",
    "assisted",
    "participated",
    "involved in",
    "responsible for",
    "duties included",
];

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "you", "your", "our", "are", "will", "have", "has", "this",
    "that", "from", "into", "who", "what", "can", "all", "any", "not", "but", "their", "they",
    "them", "its", "was", "were", "been", "being", "about", "over", "such", "other", "more",
    "most", "well", "also", "able", "ability", "across", "within", "using", "use", "etc",
    "including", "include", "must", "should", "would", "plus", "preferred", "required",
    "requirements", "responsibilities", "qualifications", "experience", "years", "year", "work",
    "working", "team", "teams", "role", "job", "company", "join", "looking", "candidate",
    "strong", "skills", "knowledge", "understanding", "good", "great", "excellent", "new",
    "help", "make", "day", "based", "per", "one", "two", "three", "least", "minimum", "bonus",
    "nice", "opportunity", "environment", "position", "we're", "you'll", "who'll",
];

/// Returns true if `term` occurs in `haystack` with non-alphanumeric neighbours.
/// Both arguments must already be lowercase.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(term) {
        let start = from + pos;
        let end = start + term.len();
        let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return true;
        }
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Returns the entries of `vocabulary` that occur in `text_lower`, in vocabulary order.
pub fn matching_terms<'a>(text_lower: &str, vocabulary: &[&'a str]) -> Vec<&'a str> {
    vocabulary
        .iter()
        .copied()
        .filter(|term| contains_term(text_lower, term))
        .collect()
}

/// Extracts the most frequent meaningful terms from a job description.
/// Ties are broken by first appearance so the output is deterministic.
pub fn extract_jd_keywords(job_description: &str, limit: usize) -> Vec<String> {
    let lower = job_description.to_lowercase();
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    let tokens = lower
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#' || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| t.chars().count() >= 3 || matches!(*t, "c#" | "go" | "r" | "ml" | "ai"))
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .filter(|t| !STOPWORDS.contains(t));

    for (index, token) in tokens.enumerate() {
        counts.entry(token).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(token, _, _)| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_term_respects_word_boundaries() {
        assert!(contains_term("built apis in java and go", "java"));
        assert!(!contains_term("wrote javascript daily", "java"));
        assert!(contains_term("ran ci/cd pipelines", "ci/cd"));
        assert!(contains_term("led a team", "led"));
        assert!(!contains_term("scaled the system", "led"));
    }

    #[test]
    fn test_contains_term_handles_multibyte_text() {
        assert!(contains_term("café — résumé with python", "python"));
        assert!(!contains_term("naïve", "python"));
    }

    #[test]
    fn test_matching_terms_keeps_vocabulary_order() {
        let found = matching_terms("docker and python on aws", INDUSTRY_KEYWORDS);
        assert_eq!(found, vec!["python", "aws", "docker"]);
    }

    #[test]
    fn test_extract_jd_keywords_ranks_by_frequency() {
        let jd = "Rust engineer. We use Rust, Kafka and Kubernetes. Kafka streams. Rust required.";
        let keywords = extract_jd_keywords(jd, 3);
        assert_eq!(keywords, vec!["rust", "kafka", "engineer"]);
    }

    #[test]
    fn test_extract_jd_keywords_drops_stopwords_and_numbers() {
        let keywords = extract_jd_keywords("5+ years of experience with the team in 2024", 10);
        assert!(!keywords.contains(&"years".to_string()));
        assert!(!keywords.contains(&"2024".to_string()));
        assert!(!keywords.contains(&"the".to_string()));
    }

    #[test]
    fn test_extract_jd_keywords_respects_limit() {
        let jd = "alpha beta gamma delta epsilon zeta eta theta";
        assert_eq!(extract_jd_keywords(jd, 4).len(), 4);
    }
}

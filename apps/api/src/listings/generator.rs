//! Listing generator. Builds fabricated job, internship, and freelance
//! listings from the hard-coded catalogs.
//!
//! Output is a pure function of the query: the catalog picks are driven by a
//! `StdRng` seeded with the SHA-256 of the normalised role,
//! location, and listing kind.

use rand::seq::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::AppError;
use crate::listings::catalog::{
    COMPANIES, FREELANCE_PROJECTS, FREELANCE_RATES, INTERNSHIP_DURATIONS, INTERNSHIP_STIPENDS,
    INTERNSHIP_TITLE_FORMATS, JOB_SALARIES, JOB_SENIORITY, WORK_MODES,
};
use crate::listings::links::{directory_links, mailto_link, DeepLink};

pub const DEFAULT_COUNT: usize = 6;
pub const MAX_COUNT: usize = 20;
pub const DEFAULT_LOCATION: &str = "Remote";
const MAX_TAGS: usize = 8;
const MAX_POSTED_DAYS: u32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Job,
    Internship,
    Freelance,
}

impl ListingKind {
    fn slug(self) -> &'static str {
        match self {
            ListingKind::Job => "job",
            ListingKind::Internship => "internship",
            ListingKind::Freelance => "freelance",
        }
    }

    /// Tag used when the query names no skills.
    fn default_tag(self) -> &'static str {
        match self {
            ListingKind::Job => "Full-time",
            ListingKind::Internship => "Internship",
            ListingKind::Freelance => "Contract",
        }
    }
}

/// Normalised listing query. Build it with [`ListingQuery::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub role: String,
    pub location: String,
    pub skills: Vec<String>,
    pub count: usize,
}

impl ListingQuery {
    /// Trims inputs, defaults the location, splits comma-separated skills,
    /// and clamps the count. A blank role is a validation error.
    pub fn new(
        role: &str,
        location: Option<&str>,
        skills: Option<&str>,
        count: Option<usize>,
    ) -> Result<Self, AppError> {
        let role = role.split_whitespace().collect::<Vec<_>>().join(" ");
        if role.is_empty() {
            return Err(AppError::Validation("role is required".to_string()));
        }
        if !role.chars().any(char::is_alphanumeric) {
            return Err(AppError::Validation(
                "role must contain letters or digits".to_string(),
            ));
        }

        let location = match location.map(str::trim) {
            Some(loc) if !loc.is_empty() => loc.to_string(),
            _ => DEFAULT_LOCATION.to_string(),
        };

        let mut tags: Vec<String> = Vec::new();
        for skill in skills.unwrap_or_default().split(',').map(str::trim) {
            if skill.is_empty() || tags.iter().any(|t| t.eq_ignore_ascii_case(skill)) {
                continue;
            }
            tags.push(skill.to_string());
            if tags.len() == MAX_TAGS {
                break;
            }
        }

        Ok(Self {
            role,
            location,
            skills: tags,
            count: count.unwrap_or(DEFAULT_COUNT).clamp(1, MAX_COUNT),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: String,
    pub kind: ListingKind,
    pub title: String,
    pub company: String,
    pub location: String,
    pub compensation: String,
    pub posted_days_ago: u32,
    pub tags: Vec<String>,
    pub description: String,
    pub apply_links: Vec<DeepLink>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Builds `query.count` listings of the given kind. Companies never repeat
/// within one response.
pub fn generate_listings(kind: ListingKind, query: &ListingQuery) -> Result<Vec<Listing>, AppError> {
    let seed: [u8; 32] = Sha256::digest(
        format!(
            "{}|{}|{}",
            kind.slug(),
            query.role.to_lowercase(),
            query.location.to_lowercase()
        )
        .as_bytes(),
    )
    .into();
    let mut rng = StdRng::from_seed(seed);
    let query_tag = u32::from_be_bytes([seed[0], seed[1], seed[2], seed[3]]);

    let mut company_order: Vec<usize> = (0..COMPANIES.len()).collect();
    company_order.shuffle(&mut rng);

    let directory = directory_links(kind, &query.role, &query.location)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to build directory links: {e}")))?;
    let tags = if query.skills.is_empty() {
        vec![kind.default_tag().to_string()]
    } else {
        query.skills.clone()
    };

    let mut listings = Vec::with_capacity(query.count);
    for (n, &company_idx) in company_order.iter().cycle().take(query.count).enumerate() {
        let company = &COMPANIES[company_idx];
        let (title, compensation, description) = match kind {
            ListingKind::Job => job_details(&mut rng, query, company.name),
            ListingKind::Internship => internship_details(&mut rng, query, company.name),
            ListingKind::Freelance => freelance_details(&mut rng, query, company.name),
        };
        let posted_days_ago = rng.gen_range(0..MAX_POSTED_DAYS);

        let mut apply_links = directory.clone();
        apply_links.push(
            mailto_link(company.domain, &title)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to build mailto link: {e}")))?,
        );

        listings.push(Listing {
            id: format!("{}-{:08x}-{}", kind.slug(), query_tag, n + 1),
            kind,
            title,
            company: company.name.to_string(),
            location: query.location.clone(),
            compensation,
            posted_days_ago,
            tags: tags.clone(),
            description,
            apply_links,
        });
    }

    Ok(listings)
}

fn job_details(rng: &mut StdRng, query: &ListingQuery, company: &str) -> (String, String, String) {
    let title = format!("{}{}", pick(rng, JOB_SENIORITY), query.role);
    let mode = if query.location.eq_ignore_ascii_case(DEFAULT_LOCATION) {
        "Remote"
    } else {
        pick(rng, WORK_MODES)
    };
    let description = format!(
        "{company} is hiring a {title} ({mode}). {}",
        skills_sentence(query, "You will work with")
    );
    (title, pick(rng, JOB_SALARIES).to_string(), description)
}

fn internship_details(
    rng: &mut StdRng,
    query: &ListingQuery,
    company: &str,
) -> (String, String, String) {
    let title = pick(rng, INTERNSHIP_TITLE_FORMATS).replace("{role}", &query.role);
    let description = format!(
        "A {} internship at {company} for students and recent graduates. {}",
        pick(rng, INTERNSHIP_DURATIONS),
        skills_sentence(query, "You will learn")
    );
    (title, pick(rng, INTERNSHIP_STIPENDS).to_string(), description)
}

fn freelance_details(
    rng: &mut StdRng,
    query: &ListingQuery,
    company: &str,
) -> (String, String, String) {
    let project = pick(rng, FREELANCE_PROJECTS);
    let title = format!("Freelance {}: {project}", query.role);
    let description = format!(
        "{company} needs a {} for a {project}. {}",
        query.role,
        skills_sentence(query, "Experience expected with")
    );
    (title, pick(rng, FREELANCE_RATES).to_string(), description)
}

fn skills_sentence(query: &ListingQuery, lead: &str) -> String {
    if query.skills.is_empty() {
        format!("{lead} a collaborative {} team.", query.role)
    } else {
        format!("{lead} {}.", query.skills.join(", "))
    }
}

/// Uniform pick from a non-empty catalog.
fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn query(role: &str) -> ListingQuery {
        ListingQuery::new(role, Some("Bengaluru"), Some("Python, SQL"), None).unwrap()
    }

    #[test]
    fn test_query_defaults() {
        let q = ListingQuery::new("  Data   Analyst ", None, None, None).unwrap();
        assert_eq!(q.role, "Data Analyst");
        assert_eq!(q.location, "Remote");
        assert!(q.skills.is_empty());
        assert_eq!(q.count, DEFAULT_COUNT);
    }

    #[test]
    fn test_query_rejects_blank_role() {
        assert!(matches!(
            ListingQuery::new("   ", None, None, None),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            ListingQuery::new("+++", None, None, None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_query_clamps_count() {
        assert_eq!(ListingQuery::new("Dev", None, None, Some(0)).unwrap().count, 1);
        assert_eq!(ListingQuery::new("Dev", None, None, Some(500)).unwrap().count, MAX_COUNT);
    }

    #[test]
    fn test_skills_are_split_and_deduped() {
        let q = ListingQuery::new("Dev", None, Some(" Rust, ,rust, Go ,SQL"), None).unwrap();
        assert_eq!(q.skills, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_same_query_yields_same_listings() {
        let a = generate_listings(ListingKind::Job, &query("Backend Engineer")).unwrap();
        let b = generate_listings(ListingKind::Job, &query("backend engineer")).unwrap();
        let keys = |ls: &[Listing]| ls.iter().map(|l| (l.company.clone(), l.id.clone())).collect::<Vec<_>>();
        assert_eq!(keys(&a), keys(&b));
    }

    #[test]
    fn test_different_kinds_differ() {
        let jobs = generate_listings(ListingKind::Job, &query("Designer")).unwrap();
        let gigs = generate_listings(ListingKind::Freelance, &query("Designer")).unwrap();
        assert_ne!(jobs[0].id, gigs[0].id);
        assert!(gigs.iter().all(|g| g.title.starts_with("Freelance Designer: ")));
    }

    #[test]
    fn test_full_page_has_distinct_companies() {
        let mut q = query("Engineer");
        q.count = MAX_COUNT;
        let listings = generate_listings(ListingKind::Job, &q).unwrap();
        assert_eq!(listings.len(), MAX_COUNT);
        let companies: HashSet<_> = listings.iter().map(|l| l.company.as_str()).collect();
        assert_eq!(companies.len(), MAX_COUNT);
    }

    #[test]
    fn test_listing_links_and_tags() {
        let listings = generate_listings(ListingKind::Internship, &query("Data Analyst")).unwrap();
        assert_eq!(listings.len(), DEFAULT_COUNT);
        for listing in &listings {
            assert_eq!(listing.kind, ListingKind::Internship);
            assert_eq!(listing.tags, vec!["Python", "SQL"]);
            assert_eq!(listing.location, "Bengaluru");
            assert!(listing.title.contains("Data Analyst"));
            assert!(listing.posted_days_ago < 30);
            // three directories plus the mailto
            assert_eq!(listing.apply_links.len(), 4);
            let mail = &listing.apply_links[3];
            assert!(mail.url.starts_with("mailto:careers@"));
            assert!(mail.url.contains("subject=Application%20for%20"));
        }
    }

    #[test]
    fn test_default_tag_without_skills() {
        let q = ListingQuery::new("Writer", None, None, Some(2)).unwrap();
        let listings = generate_listings(ListingKind::Freelance, &q).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].tags, vec!["Contract"]);
        assert_eq!(listings[0].apply_links.len(), 4);
    }
}

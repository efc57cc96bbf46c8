//! Static deep links into third-party job directories.
//!
//! Every query string is built with `Url::parse_with_params`, so roles and
//! locations are always percent-encoded.

use serde::Serialize;
use url::Url;

use crate::listings::generator::ListingKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    pub platform: String,
    pub url: String,
}

fn link(platform: &str, base: &str, params: &[(&str, &str)]) -> Result<DeepLink, url::ParseError> {
    let url = if params.is_empty() {
        Url::parse(base)?
    } else {
        Url::parse_with_params(base, params)?
    };
    Ok(DeepLink {
        platform: platform.to_string(),
        url: url.to_string(),
    })
}

/// Directory search links for a role, per listing kind.
pub fn directory_links(
    kind: ListingKind,
    role: &str,
    location: &str,
) -> Result<Vec<DeepLink>, url::ParseError> {
    // Non-ASCII roles have no slug; those links fall back to the plain search pages.
    let slug = slugify(role);
    let naukri_base = if slug.is_empty() {
        "https://www.naukri.com/jobs-in-india".to_string()
    } else {
        format!("https://www.naukri.com/{slug}-jobs")
    };
    let internshala_base = if slug.is_empty() {
        "https://internshala.com/internships/".to_string()
    } else {
        format!("https://internshala.com/internships/{slug}-internship/")
    };
    match kind {
        ListingKind::Job => Ok(vec![
            link(
                "LinkedIn",
                "https://www.linkedin.com/jobs/search/",
                &[("keywords", role), ("location", location)],
            )?,
            link("Indeed", "https://www.indeed.com/jobs", &[("q", role), ("l", location)])?,
            link(
                "Glassdoor",
                "https://www.glassdoor.com/Job/jobs.htm",
                &[("sc.keyword", role), ("locKeyword", location)],
            )?,
            link(
                "Naukri",
                &naukri_base,
                &[("k", role), ("l", location)],
            )?,
        ]),
        ListingKind::Internship => {
            let query = format!("{role} internship");
            Ok(vec![
                link(
                    "Internshala",
                    &internshala_base,
                    &[],
                )?,
                // f_E=1 is LinkedIn's "Internship" experience filter
                link(
                    "LinkedIn",
                    "https://www.linkedin.com/jobs/search/",
                    &[("keywords", role), ("location", location), ("f_E", "1")],
                )?,
                link("Indeed", "https://www.indeed.com/jobs", &[("q", query.as_str()), ("l", location)])?,
            ])
        }
        ListingKind::Freelance => Ok(vec![
            link("Upwork", "https://www.upwork.com/nx/search/jobs/", &[("q", role)])?,
            link("Fiverr", "https://www.fiverr.com/search/gigs", &[("query", role)])?,
            link(
                "Freelancer",
                "https://www.freelancer.com/search/projects",
                &[("q", role)],
            )?,
        ]),
    }
}

/// `mailto:careers@<domain>?subject=Application for <title>`.
pub fn mailto_link(domain: &str, title: &str) -> Result<DeepLink, url::ParseError> {
    // Mail clients read `+` literally, so the subject uses %20 rather than
    // the form-encoding of `parse_with_params`.
    let subject = urlencoding::encode(&format!("Application for {title}")).into_owned();
    let url = Url::parse(&format!("mailto:careers@{domain}?subject={subject}"))?;
    Ok(DeepLink {
        platform: "Email".to_string(),
        url: url.to_string(),
    })
}

/// Lowercase ASCII slug: alphanumerics kept, everything else folded into single dashes.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

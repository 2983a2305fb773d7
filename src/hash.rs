//! Profile fingerprints and the markers that carry them.
//!
//! Every hash-tracked artifact starts (or, for HTML, contains) a comment
//! like `<!-- Profile hash: 1a2b3c4d5e6f -->`. Comparing that value with a
//! freshly computed fingerprint tells the pipeline whether the artifact
//! needs to be rebuilt.

use crate::{
    profile::{Language, PersonalInfo, ProfileRecord, Recommendation, SocialLink, TimelineEntry},
    utils::fs::ArtifactFs,
};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::{path::Path, sync::LazyLock};

/// Fingerprint length in digest bytes (12 hex characters).
const FINGERPRINT_BYTES: usize = 6;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!-- Profile hash: ([a-f0-9]+) -->").expect("marker pattern is valid")
});

/// The fields that influence the fingerprint.
///
/// Declared alphabetically; serde_json emits them in declaration order,
/// which keeps the digest stable across runs.
#[derive(Serialize)]
struct HashSubset<'a> {
    availability: &'a str,
    company: &'a str,
    education: &'a [TimelineEntry],
    experience: &'a [TimelineEntry],
    languages: &'a [Language],
    location: &'a str,
    name: &'a str,
    personal: &'a PersonalInfo,
    pronouns: &'a str,
    recommendations: &'a [Recommendation],
    skills: &'a [String],
    socials: &'a [SocialLink],
    summary: &'a str,
    title: &'a str,
    years_experience: &'a str,
}

impl<'a> From<&'a ProfileRecord> for HashSubset<'a> {
    fn from(p: &'a ProfileRecord) -> Self {
        Self {
            availability: &p.availability,
            company: &p.company,
            education: &p.education,
            experience: &p.experience,
            languages: &p.languages,
            location: &p.location,
            name: &p.name,
            personal: &p.personal,
            pronouns: &p.pronouns,
            recommendations: &p.recommendations,
            skills: &p.skills,
            socials: &p.socials,
            summary: &p.summary,
            title: &p.title,
            years_experience: &p.years_experience,
        }
    }
}

/// 12 lowercase hex characters identifying the hash-relevant profile content.
pub fn compute_fingerprint(profile: &ProfileRecord) -> String {
    // Serializing borrowed strings and plain structs cannot fail.
    let canonical = serde_json::to_vec(&HashSubset::from(profile)).unwrap_or_default();
    let digest = blake3::hash(&canonical);
    hex::encode(&digest.as_bytes()[..FINGERPRINT_BYTES])
}

pub fn format_marker(fingerprint: &str) -> String {
    format!("<!-- Profile hash: {fingerprint} -->")
}

/// The first fingerprint embedded in `document`, if any.
pub fn extract_marker(document: &str) -> Option<&str> {
    MARKER_RE
        .captures(document)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Decide whether the artifact at `path` is stale.
///
/// `force` short-circuits without touching the file. A missing file, a
/// file without a marker, or a differing marker all mean "regenerate".
pub fn needs_regeneration(
    fs: &dyn ArtifactFs,
    path: &Path,
    current: &str,
    force: bool,
) -> Result<bool> {
    if force || !fs.exists(path) {
        return Ok(true);
    }

    let content = fs
        .read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(extract_marker(&content) != Some(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        profile::LlmProvider,
        testing::{entry, sample_profile},
        utils::fs::MemoryFs,
    };

    const PATH: &str = "public/robots.txt";

    #[test]
    fn test_fingerprint_shape() {
        let fp = compute_fingerprint(&sample_profile());
        let re = Regex::new("^[a-f0-9]{12}$").unwrap();
        assert!(re.is_match(&fp), "unexpected fingerprint `{fp}`");
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(
            compute_fingerprint(&profile),
            compute_fingerprint(&profile.clone())
        );
    }

    #[test]
    fn test_fingerprint_tracks_relevant_fields() {
        let base = compute_fingerprint(&sample_profile());

        let mut p = sample_profile();
        p.name = "Other Person".into();
        assert_ne!(compute_fingerprint(&p), base);

        let mut p = sample_profile();
        p.title = "Staff Engineer".into();
        assert_ne!(compute_fingerprint(&p), base);

        let mut p = sample_profile();
        p.skills.push("Rust".into());
        assert_ne!(compute_fingerprint(&p), base);

        let mut p = sample_profile();
        p.experience
            .push(entry("Intern", "Acme", "2010-01-01", Some("2010-06-01")));
        assert_ne!(compute_fingerprint(&p), base);

        let mut p = sample_profile();
        p.socials[0].href = "https://www.linkedin.com/in/else/".into();
        assert_ne!(compute_fingerprint(&p), base);

        let mut p = sample_profile();
        p.personal.interests.clear();
        assert_ne!(compute_fingerprint(&p), base);
    }

    #[test]
    fn test_fingerprint_ignores_presentation_fields() {
        let base = compute_fingerprint(&sample_profile());

        let mut p = sample_profile();
        p.avatar_path = "/img/new-avatar.png".into();
        p.llm_providers.push(LlmProvider {
            id: "gemini".into(),
            name: "Gemini".into(),
            icon: "sparkles".into(),
            color: "#4285F4".into(),
            url: "https://gemini.google.com/app".into(),
        });
        assert_eq!(compute_fingerprint(&p), base);
    }

    #[test]
    fn test_marker_format_and_extract() {
        let marker = format_marker("abc123def456");
        assert_eq!(marker, "<!-- Profile hash: abc123def456 -->");

        let doc = format!("<?xml version=\"1.0\"?>\n{marker}\n<urlset/>");
        assert_eq!(extract_marker(&doc), Some("abc123def456"));
    }

    #[test]
    fn test_extract_marker_first_match_only() {
        let doc = "<!-- Profile hash: aaaaaa -->\n<!-- Profile hash: bbbbbb -->";
        assert_eq!(extract_marker(doc), Some("aaaaaa"));
    }

    #[test]
    fn test_extract_marker_rejects_uppercase_and_absent() {
        assert_eq!(extract_marker("<!-- Profile hash: ABCDEF -->"), None);
        assert_eq!(extract_marker("User-agent: *"), None);
    }

    #[test]
    fn test_force_skips_read() {
        let fs = MemoryFs::new().with_file(PATH, format_marker("abc123def456"));
        let stale = needs_regeneration(&fs, Path::new(PATH), "abc123def456", true).unwrap();

        assert!(stale);
        assert_eq!(fs.reads(), 0);
    }

    #[test]
    fn test_missing_file_is_stale() {
        let fs = MemoryFs::new();
        assert!(needs_regeneration(&fs, Path::new(PATH), "abc123def456", false).unwrap());
        assert_eq!(fs.reads(), 0);
    }

    #[test]
    fn test_matching_marker_is_fresh() {
        let content = format!("{}\nUser-agent: *\n", format_marker("abc123def456"));
        let fs = MemoryFs::new().with_file(PATH, content);

        assert!(!needs_regeneration(&fs, Path::new(PATH), "abc123def456", false).unwrap());
    }

    #[test]
    fn test_differing_marker_is_stale() {
        let content = format!("{}\nUser-agent: *\n", format_marker("000000000000"));
        let fs = MemoryFs::new().with_file(PATH, content);

        assert!(needs_regeneration(&fs, Path::new(PATH), "abc123def456", false).unwrap());
    }

    #[test]
    fn test_unmarked_file_is_stale() {
        let fs = MemoryFs::new().with_file(PATH, "User-agent: *\n");
        assert!(needs_regeneration(&fs, Path::new(PATH), "abc123def456", false).unwrap());
    }

    #[test]
    fn test_unreadable_file_propagates() {
        let fs = MemoryFs::new().with_file(PATH, vec![0xff, 0xfe, 0xfd]);
        assert!(needs_regeneration(&fs, Path::new(PATH), "abc123def456", false).is_err());
    }
}

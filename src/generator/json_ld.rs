//! JSON-LD structured data for `index.html`.
//!
//! Builds schema.org `Person` and `WebSite` objects from the profile and
//! splices them, together with the profile marker, into the region found by
//! [`SpliceRegion`]. Everything outside that region is left byte-for-byte
//! intact.

use super::{GenerateContext, GenerateError, write_artifact};
use crate::{
    config::BaseConfig,
    hash::format_marker,
    lookup::{expand_skills, language_code, organization_url},
    profile::ProfileRecord,
    utils::{
        fs::ArtifactFs,
        region::{PERSON_SENTINEL, SpliceRegion, WEBSITE_SENTINEL},
    },
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// How many leading skills the description names.
const TOP_SKILLS: usize = 5;

// ============================================================================
// Schema Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    address: PostalAddress<'a>,
    alumni_of: Organization<'a>,
    description: String,
    email: &'a str,
    family_name: &'a str,
    given_name: &'a str,
    image: String,
    job_title: &'a str,
    knows_about: Vec<String>,
    knows_language: Vec<LanguageSchema<'a>>,
    name: &'a str,
    same_as: Vec<&'a str>,
    url: &'a str,
    works_for: Organization<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    address_country: &'a str,
    address_region: &'a str,
}

/// `Organization` or `EducationalOrganization`.
#[derive(Debug, Serialize)]
struct Organization<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    url: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguageSchema<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    alternate_name: String,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct WebSiteSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    author: Author<'a>,
    description: String,
    name: String,
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct Author<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

// ============================================================================
// Schema Construction
// ============================================================================

/// Text before the first space, and everything after it.
fn split_name(name: &str) -> (&str, &str) {
    name.split_once(' ').unwrap_or((name, ""))
}

fn person_schema<'a>(profile: &'a ProfileRecord, base: &'a BaseConfig) -> PersonSchema<'a> {
    let (given_name, family_name) = split_name(&profile.name);
    let school = profile
        .education
        .first()
        .map_or("", |entry| entry.company.as_str());
    let top_skills = profile
        .skills
        .iter()
        .take(TOP_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    PersonSchema {
        context: SCHEMA_CONTEXT,
        kind: "Person",
        address: PostalAddress {
            kind: "PostalAddress",
            address_country: &base.country,
            address_region: &base.region,
        },
        alumni_of: Organization {
            kind: "EducationalOrganization",
            name: school,
            url: organization_url(school),
        },
        description: format!(
            "{} with {} years of experience building production web applications. \
             Specializes in {top_skills}, and real-time applications.",
            profile.title, profile.years_experience
        ),
        email: profile.email().unwrap_or_default(),
        family_name,
        given_name,
        image: base.image_url(),
        job_title: &profile.title,
        knows_about: expand_skills(&profile.skills),
        knows_language: profile
            .languages
            .iter()
            .map(|lang| LanguageSchema {
                kind: "Language",
                alternate_name: language_code(&lang.name),
                name: &lang.name,
            })
            .collect(),
        name: &profile.name,
        same_as: profile
            .public_socials()
            .map(|social| social.href.as_str())
            .collect(),
        url: base.site_url(),
        works_for: Organization {
            kind: "Organization",
            name: &profile.company,
            url: organization_url(&profile.company),
        },
    }
}

fn website_schema<'a>(profile: &'a ProfileRecord, base: &'a BaseConfig) -> WebSiteSchema<'a> {
    WebSiteSchema {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        author: Author {
            kind: "Person",
            name: &profile.name,
        },
        description: format!(
            "Personal portfolio website of {}, {}",
            profile.name, profile.title
        ),
        name: format!("{} Portfolio", profile.name),
        url: base.site_url(),
    }
}

/// Serialize with a 4-space indent.
///
/// `</` is written as `<\/` so profile text can never close the
/// surrounding `<script>` element.
fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(1024);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).replace("</", "<\\/"))
}

/// The text that replaces the located region.
fn render_block(ctx: &GenerateContext<'_>) -> serde_json::Result<String> {
    let person = to_pretty_json(&person_schema(ctx.profile, ctx.base))?;
    let website = to_pretty_json(&website_schema(ctx.profile, ctx.base))?;

    Ok(format!(
        r#"{marker}
        {PERSON_SENTINEL}
        <script type="application/ld+json">
        {person}
        </script>

        {WEBSITE_SENTINEL}
        <script type="application/ld+json">
        {website}
        </script>"#,
        marker = format_marker(ctx.fingerprint),
    ))
}

// ============================================================================
// Public API
// ============================================================================

/// Rewrite the structured-data region of the host document at `path`.
pub fn generate(
    ctx: &GenerateContext<'_>,
    fs: &dyn ArtifactFs,
    path: &Path,
) -> Result<(), GenerateError> {
    let host = fs
        .read_to_string(path)
        .map_err(|err| GenerateError::io(path, err))?;

    let region = SpliceRegion::locate(&host).ok_or_else(|| GenerateError::MissingAnchor {
        path: path.to_path_buf(),
    })?;

    let block = render_block(ctx).map_err(|err| GenerateError::io(path, err.into()))?;
    write_artifact(fs, path, &region.splice(&host, &block))
}

// ============================================================================
// Tests
// ============================================================================

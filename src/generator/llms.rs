//! llms.txt generation.
//!
//! The profile is flattened into a markdown context, wrapped in a fixed
//! instruction prompt and handed to the text generator. Its answer, trimmed,
//! becomes the file body under the profile marker.

use super::{GenerateContext, GenerateError, write_artifact};
use crate::{
    hash::format_marker,
    log,
    lookup::categorize_skills,
    profile::{ProfileRecord, TimelineEntry},
    utils::fs::ArtifactFs,
};
use std::{fmt::Write, path::Path};

pub fn generate(
    ctx: &GenerateContext<'_>,
    fs: &dyn ArtifactFs,
    path: &Path,
) -> Result<(), GenerateError> {
    let prompt = build_prompt(&profile_context(ctx.profile, ctx.base.site_url()));
    let answer = ctx
        .textgen
        .generate(&prompt)
        .map_err(GenerateError::TextGeneration)?;

    let body = answer.trim();
    log!("llms"; "received {} bytes", body.len());

    write_artifact(
        fs,
        path,
        &format!("{}\n{body}\n", format_marker(ctx.fingerprint)),
    )
}

// ============================================================================
// Profile Context
// ============================================================================

fn date_range(entry: &TimelineEntry) -> String {
    let end = entry
        .end_date
        .map_or_else(|| "Present".to_owned(), |date| date.month_year_long());
    format!("{} - {end}", entry.start_date.month_year_long())
}

fn format_experience(entry: &TimelineEntry) -> String {
    let mut out = format!(
        "### {} at {} ({})\nLocation: {}\n{}\n",
        entry.title,
        entry.company,
        date_range(entry),
        entry.location,
        entry.description
    );
    if !entry.skills().is_empty() {
        let _ = write!(out, "Skills: {}", entry.skills().join(", "));
    }
    out
}

fn format_education(entry: &TimelineEntry) -> String {
    let graduated = entry
        .end_date
        .map(|date| date.month_year_long())
        .unwrap_or_default();
    format!(
        "### {}\n{}, {}\nGraduated: {graduated}\n{}",
        entry.title, entry.company, entry.location, entry.description
    )
}

fn format_skills(skills: &[String]) -> String {
    categorize_skills(skills)
        .into_iter()
        .map(|(category, matched)| {
            let items: Vec<String> = matched.iter().map(|skill| format!("- {skill}")).collect();
            format!("### {category}\n{}", items.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Markdown summary of everything the model should know about the person.
fn profile_context(profile: &ProfileRecord, site_url: &str) -> String {
    let social_links: Vec<String> = profile
        .public_socials()
        .map(|social| format!("- {}: {}", social.name, social.href))
        .collect();

    let experiences: Vec<String> = profile.experience.iter().map(format_experience).collect();
    let education: Vec<String> = profile.education.iter().map(format_education).collect();

    let languages: Vec<String> = profile
        .languages
        .iter()
        .map(|lang| format!("- {}: {}", lang.name, lang.level))
        .collect();

    let recommendations: Vec<String> = profile
        .recommendations
        .iter()
        .map(|rec| format!("\"{}\" - {}, {}", rec.text, rec.name, rec.title))
        .collect();

    let personal = &profile.personal;
    let side_projects: Vec<String> = personal
        .side_projects
        .iter()
        .map(|project| format!("{} ({})", project.name, project.description))
        .collect();

    format!(
        "## IDENTITY
- Full Name: {name}
- Title: {title}
- Current Employer: {company}
- Location: {location}
- Pronouns: {pronouns}
- Portfolio: {site_url}
- Email: {email}
{social_links}

## PROFESSIONAL SUMMARY
{summary}

## TECHNICAL SKILLS

{skills}

## WORK EXPERIENCE
{experiences}

## EDUCATION
{education}

## LANGUAGES
{languages}

## RECOMMENDATIONS
{recommendations}

## PERSONAL
- Originally from: {origin}
- Current chapter: {chapter}
- Interests: {interests}
- AI tools: {ai_tools}
- Side projects: {side_projects}
- Side project status: {status}

## AVAILABILITY
{availability}",
        name = profile.name,
        title = profile.title,
        company = profile.company,
        location = profile.location,
        pronouns = profile.pronouns,
        email = profile.email().unwrap_or_default(),
        social_links = social_links.join("\n"),
        summary = profile.summary,
        skills = format_skills(&profile.skills),
        experiences = experiences.join("\n\n"),
        education = education.join("\n\n"),
        languages = languages.join("\n"),
        recommendations = recommendations.join("\n\n"),
        origin = personal.origin,
        chapter = personal.current_chapter,
        interests = personal.interests.join(", "),
        ai_tools = personal.ai_tools.join(", "),
        side_projects = side_projects.join(", "),
        status = personal.side_project_status,
        availability = profile.availability,
    )
}

// ============================================================================
// Prompt
// ============================================================================

fn build_prompt(context: &str) -> String {
    format!(
        r#"You are generating an llms.txt file for a developer's portfolio website. This file follows the llmstxt.org specification and is designed to help LLMs understand who this person is.

Generate a comprehensive, well-structured llms.txt file in markdown format based on the profile data below.

REQUIREMENTS:
1. Start with a level-1 heading with the person's name and title
2. Include a blockquote explaining the file's purpose
3. Organize into clear sections: Identity, Professional Summary, Technical Skills, Work Experience, Education, Languages, Recommendations, Unique Value Proposition, Ideal Role Fit, Key Questions, Availability, Contact
4. Use markdown formatting (headers, lists, bold for labels)
5. Write in third person ("Andres is..." not "I am...")
6. Keep it professional but personable
7. Include a "Key Questions This Profile Answers" section with Q&A format
8. Include a "Unique Value Proposition" section highlighting 4-5 differentiators
9. Include an "Ideal Role Fit" section
10. DO NOT include any code blocks, just raw markdown

IMPORTANT: Output ONLY the raw markdown content. No explanations, no code fences, just the llms.txt content.

PROFILE DATA:
{context}"#
    )
}

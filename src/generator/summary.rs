//! The short AI summary shown on the portfolio landing page.
//!
//! Unlike the hash-tracked artifacts this is JSON, which has no comment
//! syntax to carry a marker, so it is regenerated on every run. The model
//! must answer with a bare JSON object; anything else is rejected and
//! nothing is written.

use super::{GenerateError, write_artifact};
use crate::{
    profile::{ProfileRecord, TimelineEntry},
    textgen::TextGenerator,
    utils::fs::ArtifactFs,
};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::path::Path;

/// Experience entries quoted as career highlights.
const HIGHLIGHTS: usize = 3;

/// Characters kept from each recommendation.
const QUOTE_CHARS: usize = 100;

const REQUIRED_FIELDS: [&str; 2] = ["summary", "generatedAt"];

/// Ask for a summary, validate it and write it to `path`.
///
/// Returns the JSON text that was written.
pub fn generate(
    profile: &ProfileRecord,
    textgen: &dyn TextGenerator,
    today: NaiveDate,
    fs: &dyn ArtifactFs,
    path: &Path,
) -> Result<String, GenerateError> {
    let generated_at = format!("{}T00:00:00.000Z", today.format("%Y-%m-%d"));
    let prompt = build_prompt(&profile_context(profile), &generated_at);

    let answer = textgen
        .generate(&prompt)
        .map_err(GenerateError::TextGeneration)?;
    let summary = parse_response(&answer)?;

    let mut json = serde_json::to_string_pretty(&Value::Object(summary))
        .map_err(|err| GenerateError::io(path, err.into()))?;
    json.push('\n');

    write_artifact(fs, path, &json)?;
    Ok(json)
}

/// Strictly parse the model's answer into an object with non-empty
/// `summary` and `generatedAt` strings. Extra fields are kept.
fn parse_response(answer: &str) -> Result<Map<String, Value>, GenerateError> {
    let value: Value = serde_json::from_str(answer.trim())
        .map_err(|err| GenerateError::MalformedResponse(format!("not valid JSON: {err}")))?;

    let Value::Object(object) = value else {
        return Err(GenerateError::MalformedResponse(
            "Invalid JSON structure: expected an object".into(),
        ));
    };

    for field in REQUIRED_FIELDS {
        let present = object
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|text| !text.is_empty());
        if !present {
            return Err(GenerateError::MalformedResponse(format!(
                "Invalid JSON structure: missing `{field}`"
            )));
        }
    }

    Ok(object)
}

// ============================================================================
// Prompt
// ============================================================================

/// `- Title at Company (2018-2023): First sentence`
fn format_highlight(entry: &TimelineEntry) -> String {
    let end = entry
        .end_date
        .map_or_else(|| "Present".to_owned(), |date| date.year.to_string());
    let first_sentence = entry.description.split('.').next().unwrap_or_default();
    format!(
        "- {} at {} ({}-{end}): {first_sentence}",
        entry.title, entry.company, entry.start_date.year
    )
}

fn profile_context(profile: &ProfileRecord) -> String {
    let highlights: Vec<String> = profile
        .experience
        .iter()
        .take(HIGHLIGHTS)
        .map(format_highlight)
        .collect();

    let recommendations: Vec<String> = profile
        .recommendations
        .iter()
        .map(|rec| {
            let quote: String = rec.text.chars().take(QUOTE_CHARS).collect();
            format!("- \"{quote}...\" - {}", rec.name)
        })
        .collect();

    let education: Vec<String> = profile
        .education
        .iter()
        .map(|edu| format!("{} - {}", edu.title, edu.company))
        .collect();

    let languages: Vec<String> = profile
        .languages
        .iter()
        .map(|lang| format!("{} ({})", lang.name, lang.level))
        .collect();

    format!(
        "Name: {}
Title: {} at {}
Location: {}
Experience: {} years

Summary:
{}

Key Skills: {}

Career Highlights:
{}

Recommendations:
{}

Education: {}
Languages: {}",
        profile.name,
        profile.title,
        profile.company,
        profile.location,
        profile.years_experience,
        profile.summary,
        profile.skills.join(", "),
        highlights.join("\n"),
        recommendations.join("\n"),
        education.join(", "),
        languages.join(", "),
    )
}

fn build_prompt(context: &str, generated_at: &str) -> String {
    format!(
        r#"You are writing a professional summary for a portfolio website. Based on the profile data below, write a compelling 2-3 sentence executive summary that highlights:
- Years of experience and current role
- Core technical expertise (especially Vue.js/TypeScript)
- Leadership experience and key achievements
- Professional qualities mentioned in recommendations

Output ONLY valid JSON in this exact format (no markdown, no code blocks, just raw JSON):
{{"summary": "Your summary here", "generatedAt": "{generated_at}"}}

Profile Data:
{context}"#
    )
}

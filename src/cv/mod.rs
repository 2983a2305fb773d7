//! PDF résumé.
//!
//! [`layout`] places the profile onto A4 pages with a running cursor,
//! breaking pages before a section or timeline entry that would not fit.
//! [`download`] serializes the result and saves it next to the site.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ NAME / title / loc | company │  banner
//! ├──────────────────────────────┤
//! │ contact                      │
//! │ PROFESSIONAL SUMMARY         │
//! │ SKILLS        (4 columns)    │
//! │ EXPERIENCE                   │
//! │ EDUCATION                    │
//! │ LANGUAGES                    │
//! └──────────────────────────────┘
//! ```

mod document;
mod metrics;
mod render;

pub use document::Document;

use crate::{
    log,
    profile::{ProfileRecord, TimelineEntry},
    utils::{date::IsoDate, fs::ArtifactFs},
};
use anyhow::{Context, Result};
use document::{CONTENT_WIDTH, Font, MARGIN, PAGE_WIDTH, Rgb, line_height};
use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

// ============================================================================
// Style
// ============================================================================

const PRIMARY: Rgb = (37, 99, 235);
const TEXT: Rgb = (31, 41, 55);
const MUTED: Rgb = (107, 114, 128);
const WHITE: Rgb = (255, 255, 255);

const BANNER_HEIGHT: f32 = 40.0;
const SKILL_COLUMNS: usize = 4;

/// Minimum room (mm) needed before starting each block.
mod room {
    pub const SKILLS: f32 = 30.0;
    pub const EXPERIENCE: f32 = 40.0;
    pub const EXPERIENCE_ENTRY: f32 = 35.0;
    pub const EDUCATION: f32 = 30.0;
    pub const EDUCATION_ENTRY: f32 = 20.0;
    pub const LANGUAGES: f32 = 20.0;
}

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// ============================================================================
// Public API
// ============================================================================

/// `cv_<lowercase name, whitespace runs as _>.pdf`
pub fn filename(name: &str) -> String {
    format!("cv_{}.pdf", WHITESPACE_RE.replace_all(&name.to_lowercase(), "_"))
}

/// `"Nov 2023"`
pub fn format_date(date: IsoDate) -> String {
    date.month_year_short()
}

/// Lay the profile out into pages. Empty sections are left out.
pub fn layout(profile: &ProfileRecord) -> (Document, String) {
    let mut doc = Document::new();

    header(&mut doc, profile);
    contact(&mut doc, profile);
    summary(&mut doc, &profile.summary);
    skills(&mut doc, &profile.skills);
    experience(&mut doc, &profile.experience);
    education(&mut doc, &profile.education);
    languages(&mut doc, profile);

    (doc, filename(&profile.name))
}

/// Write the résumé into `dir` and return its path.
pub fn download(profile: &ProfileRecord, fs: &dyn ArtifactFs, dir: &Path) -> Result<PathBuf> {
    let (doc, name) = layout(profile);
    let bytes = render::render(&doc);
    let path = dir.join(name);

    fs.write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log!("cv"; "{} ({} page(s), {} bytes)", path.display(), doc.pages().len(), bytes.len());
    Ok(path)
}

// ============================================================================
// Sections
// ============================================================================

fn heading(doc: &mut Document, title: &str) {
    doc.text(MARGIN, 12.0, Font::Bold, PRIMARY, title);
}

fn header(doc: &mut Document, profile: &ProfileRecord) {
    doc.fill_rect(0.0, 0.0, PAGE_WIDTH, BANNER_HEIGHT, PRIMARY);
    doc.text_at(MARGIN, 18.0, 24.0, Font::Bold, WHITE, &profile.name);
    doc.text_at(MARGIN, 28.0, 14.0, Font::Regular, WHITE, &profile.title);
    doc.text_at(
        MARGIN,
        36.0,
        10.0,
        Font::Regular,
        WHITE,
        &format!("{} | {}", profile.location, profile.company),
    );
    doc.set_cursor(BANNER_HEIGHT + 10.0);
}

/// Email and the first public link.
fn contact(doc: &mut Document, profile: &ProfileRecord) {
    let parts: Vec<&str> = profile
        .email()
        .into_iter()
        .chain(profile.public_socials().next().map(|s| s.href.as_str()))
        .collect();

    if parts.is_empty() {
        return;
    }
    doc.text(MARGIN, 9.0, Font::Regular, MUTED, &parts.join(" | "));
    doc.advance(8.0);
}

fn summary(doc: &mut Document, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    heading(doc, "PROFESSIONAL SUMMARY");
    doc.advance(6.0);
    let height = doc.wrapped(text, CONTENT_WIDTH, 10.0, TEXT);
    doc.advance(height + 8.0);
}

fn skills(doc: &mut Document, skills: &[String]) {
    if skills.is_empty() {
        return;
    }
    doc.ensure_space(room::SKILLS);
    heading(doc, "SKILLS");
    doc.advance(6.0);

    let column = CONTENT_WIDTH / SKILL_COLUMNS as f32;
    for row in skills.chunks(SKILL_COLUMNS) {
        doc.ensure_space(line_height(10.0));
        for (i, skill) in row.iter().enumerate() {
            let x = MARGIN + i as f32 * column;
            doc.text(x, 10.0, Font::Regular, TEXT, &format!("• {skill}"));
        }
        doc.advance(5.0);
    }
    doc.advance(6.0);
}

fn date_range(entry: &TimelineEntry) -> String {
    let end = entry
        .end_date
        .map_or_else(|| "Present".to_owned(), format_date);
    format!("{} - {end}", format_date(entry.start_date))
}

/// Title with the date range on the right, then `company | location`.
fn entry_heading(doc: &mut Document, entry: &TimelineEntry) {
    doc.text(MARGIN, 11.0, Font::Bold, TEXT, &entry.title);
    doc.text_right(PAGE_WIDTH - MARGIN, 9.0, MUTED, &date_range(entry));
    doc.advance(5.0);

    doc.text(
        MARGIN,
        10.0,
        Font::Regular,
        MUTED,
        &format!("{} | {}", entry.company, entry.location),
    );
}

fn experience(doc: &mut Document, entries: &[TimelineEntry]) {
    if entries.is_empty() {
        return;
    }
    doc.ensure_space(room::EXPERIENCE);
    heading(doc, "EXPERIENCE");
    doc.advance(8.0);

    for entry in entries {
        doc.ensure_space(room::EXPERIENCE_ENTRY);
        entry_heading(doc, entry);
        doc.advance(5.0);

        let height = doc.wrapped(&entry.description, CONTENT_WIDTH, 9.0, TEXT);
        doc.advance(height);

        if !entry.skills().is_empty() {
            doc.advance(2.0);
            let technologies = format!("Technologies: {}", entry.skills().join(", "));
            let height = doc.wrapped(&technologies, CONTENT_WIDTH, 8.0, MUTED);
            doc.advance(height);
        }
        doc.advance(8.0);
    }
}

fn education(doc: &mut Document, entries: &[TimelineEntry]) {
    if entries.is_empty() {
        return;
    }
    doc.ensure_space(room::EDUCATION);
    heading(doc, "EDUCATION");
    doc.advance(8.0);

    for entry in entries {
        doc.ensure_space(room::EDUCATION_ENTRY);
        entry_heading(doc, entry);
        doc.advance(4.0);

        let height = doc.wrapped(&entry.description, CONTENT_WIDTH, 9.0, MUTED);
        doc.advance(height + 4.0);
    }
}

fn languages(doc: &mut Document, profile: &ProfileRecord) {
    if profile.languages.is_empty() {
        return;
    }
    doc.ensure_space(room::LANGUAGES);
    heading(doc, "LANGUAGES");
    doc.advance(6.0);

    let line = profile
        .languages
        .iter()
        .map(|lang| format!("{} ({})", lang.name, lang.level))
        .collect::<Vec<_>>()
        .join(", ");
    let height = doc.wrapped(&line, CONTENT_WIDTH, 10.0, TEXT);
    doc.advance(height);
}

// ============================================================================
// Tests
// ============================================================================

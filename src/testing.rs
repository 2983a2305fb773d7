//! Shared fixtures for unit tests.

use crate::{
    config::BaseConfig,
    generator::GenerateContext,
    profile::{
        Language, LlmProvider, MAIL_ICON, PersonalInfo, ProfileRecord, Recommendation,
        SideProject, SocialLink, TimelineEntry,
    },
    textgen::TextGenerator,
    utils::date::IsoDate,
};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use std::cell::RefCell;

pub const FINGERPRINT: &str = "abc123def456";

/// Generator context pinned to a fixed date and fingerprint.
pub fn context<'a>(
    profile: &'a ProfileRecord,
    base: &'a BaseConfig,
    textgen: &'a dyn TextGenerator,
) -> GenerateContext<'a> {
    GenerateContext {
        profile,
        fingerprint: FINGERPRINT,
        base,
        today: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        textgen,
    }
}

pub fn entry(title: &str, company: &str, start: &str, end: Option<&str>) -> TimelineEntry {
    TimelineEntry {
        title: title.into(),
        company: company.into(),
        location: "London, UK".into(),
        start_date: IsoDate::parse(start).unwrap(),
        end_date: end.map(|end| IsoDate::parse(end).unwrap()),
        description: format!("Worked as {title} at {company}. Shipped things."),
        skills: None,
    }
}

pub fn sample_profile() -> ProfileRecord {
    let mut current = entry("Senior Software Engineer", "Cision", "2023-11-01", None);
    current.skills = Some(vec!["Vue.js".into(), "Ruby on Rails".into(), "GCP".into()]);

    let previous = entry(
        "Lead Frontend Developer",
        "Windsor Telecom",
        "2018-07-01",
        Some("2023-11-01"),
    );

    let mut degree = entry(
        "BSc IT Management for Business",
        "University of the West of England",
        "2011-09-01",
        Some("2014-07-01"),
    );
    degree.location = "Bristol, UK".into();
    degree.description = "Bachelor's Degree - 2:1".into();

    ProfileRecord {
        name: "Test Person".into(),
        title: "Software Engineer".into(),
        company: "Cision".into(),
        location: "Remote, United Kingdom".into(),
        pronouns: "They/Them".into(),
        years_experience: "5+".into(),
        availability: "Open to opportunities".into(),
        summary: "A skilled developer with experience in various technologies.".into(),
        avatar_path: "/img/profile.webp".into(),
        skills: vec![
            "Vue.js / Vue 3".into(),
            "TypeScript".into(),
            "Ruby on Rails".into(),
            "PostgreSQL".into(),
            "Docker".into(),
            "Testing (Vitest, Cypress)".into(),
            "Juggling".into(),
        ],
        experience: vec![current, previous],
        education: vec![degree],
        languages: vec![
            Language {
                name: "English".into(),
                level: "Native".into(),
            },
            Language {
                name: "Spanish".into(),
                level: "Professional".into(),
            },
        ],
        socials: vec![
            SocialLink {
                name: "LinkedIn".into(),
                href: "https://www.linkedin.com/in/test/".into(),
                icon: "linkedin".into(),
            },
            SocialLink {
                name: "Email".into(),
                href: "mailto:test@example.com".into(),
                icon: MAIL_ICON.into(),
            },
            SocialLink {
                name: "GitHub".into(),
                href: "https://github.com/test".into(),
                icon: "github".into(),
            },
        ],
        recommendations: vec![Recommendation {
            name: "Jamie Reviewer".into(),
            title: "Director".into(),
            text: "A professional, efficient, solution orientated developer.".into(),
            url: "https://www.linkedin.com/in/test/details/recommendations/".into(),
        }],
        personal: PersonalInfo {
            origin: "Colombia".into(),
            current_chapter: "New parent".into(),
            interests: vec!["Football".into(), "Coffee".into()],
            ai_tools: vec!["Claude Code".into(), "Cursor".into()],
            side_projects: vec![SideProject {
                name: "feed-ai".into(),
                description: "RSS reader with AI summaries".into(),
                url: Some("https://feed-ai.example.com".into()),
            }],
            side_project_status: "Always building something".into(),
        },
        llm_providers: vec![LlmProvider {
            id: "claude".into(),
            name: "Claude".into(),
            icon: "brain".into(),
            color: "#D97757".into(),
            url: "https://claude.ai/new".into(),
        }],
    }
}

/// Text generator that replays a canned response and records every prompt.
pub struct ScriptedGenerator {
    response: Result<String, String>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(response: &str) -> Self {
        Self {
            response: Ok(response.to_owned()),
            prompts: RefCell::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_owned()),
            prompts: RefCell::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.borrow().last().cloned().unwrap_or_default()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_owned());
        self.response.clone().map_err(|message| anyhow!(message))
    }
}

//! Records nested inside a [`ProfileRecord`](super::ProfileRecord).

use crate::utils::date::IsoDate;
use serde::{Deserialize, Serialize};

/// Icon tag that marks a social entry as the contact email.
pub const MAIL_ICON: &str = "mail";

/// One job or one degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: IsoDate,
    /// `None` means the entry is current.
    #[serde(default)]
    pub end_date: Option<IsoDate>,
    pub description: String,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

impl TimelineEntry {
    /// Skills attached to this entry, empty when none were listed.
    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Language {
    pub name: String,
    /// Proficiency label, e.g. "Native".
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: String,
    /// Link target, `mailto:` for the email entry.
    pub href: String,
    pub icon: String,
}

impl SocialLink {
    pub fn is_mail(&self) -> bool {
        self.icon == MAIL_ICON
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendation {
    /// Author name.
    pub name: String,
    /// Author's job title.
    pub title: String,
    pub text: String,
    /// Where the endorsement was published.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SideProject {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalInfo {
    pub origin: String,
    pub current_chapter: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub ai_tools: Vec<String>,
    #[serde(default)]
    pub side_projects: Vec<SideProject>,
    pub side_project_status: String,
}

/// External AI chat service the site can deep-link into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmProvider {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub url: String,
}

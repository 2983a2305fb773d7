//! The canonical professional profile.
//!
//! A [`ProfileRecord`] is loaded once per run from a TOML file, validated,
//! and then only ever borrowed. Every generator reads from the same value.
//!
//! # Example
//!
//! ```toml
//! name = "Andres Janes"
//! title = "Senior Software Engineer"
//! skills = ["Vue.js / Vue 3", "TypeScript"]
//!
//! [[experience]]
//! title = "Senior Software Engineer"
//! company = "Cision"
//! location = "Remote, UK"
//! start_date = "2023-11-01"
//! description = "..."
//! ```

mod types;

pub use types::{Language, LlmProvider, PersonalInfo, Recommendation, SocialLink, TimelineEntry};

#[cfg(test)]
pub use types::{MAIL_ICON, SideProject};

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Profile loading and validation errors
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error when reading profile `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Profile parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("{section}[{index}] `{title}` ends ({end}) before it starts ({start})")]
    InvertedDates {
        section: &'static str,
        index: usize,
        title: String,
        start: String,
        end: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileRecord {
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub pronouns: String,
    pub years_experience: String,
    pub availability: String,
    pub summary: String,

    #[serde(default)]
    pub avatar_path: String,

    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub llm_providers: Vec<LlmProvider>,
}

impl ProfileRecord {
    /// Parse and validate a profile from TOML text.
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let profile: Self = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile file.
    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let content =
            fs::read_to_string(path).map_err(|err| ProfileError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Check that no timeline entry ends before it starts.
    ///
    /// Date syntax is already enforced by `IsoDate` during parsing.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let sections = [("experience", &self.experience), ("education", &self.education)];

        for (section, entries) in sections {
            for (index, entry) in entries.iter().enumerate() {
                if let Some(end) = entry.end_date
                    && end < entry.start_date
                {
                    return Err(ProfileError::InvertedDates {
                        section,
                        index,
                        title: entry.title.clone(),
                        start: entry.start_date.to_string(),
                        end: end.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// The contact email: first `mail` social, `mailto:` stripped.
    pub fn email(&self) -> Option<&str> {
        self.socials
            .iter()
            .find(|social| social.is_mail())
            .map(|social| social.href.strip_prefix("mailto:").unwrap_or(&social.href))
    }

    /// Every social entry except mail ones.
    pub fn public_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|social| !social.is_mail())
    }
}

//! Artifact generators.
//!
//! Each hash-tracked artifact is one [`ArtifactKind`]; the pipeline walks
//! [`ArtifactKind::ALL`] in order. The short AI summary lives in
//! [`summary`] and is driven by its own command.

mod error;
pub mod json_ld;
pub mod llms;
pub mod robots;
pub mod sitemap;
pub mod summary;

pub use error::GenerateError;

use crate::{
    config::{BaseConfig, BuildConfig},
    profile::ProfileRecord,
    textgen::TextGenerator,
    utils::fs::ArtifactFs,
};
use chrono::NaiveDate;
use std::path::Path;

/// Everything a generator may read.
pub struct GenerateContext<'a> {
    pub profile: &'a ProfileRecord,
    /// Current profile fingerprint, embedded as the marker.
    pub fingerprint: &'a str,
    pub base: &'a BaseConfig,
    pub today: NaiveDate,
    pub textgen: &'a dyn TextGenerator,
}

/// Hash-tracked artifacts, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Robots,
    Sitemap,
    Llms,
    JsonLd,
}

impl ArtifactKind {
    pub const ALL: [Self; 4] = [Self::Robots, Self::Sitemap, Self::Llms, Self::JsonLd];

    /// Display name used in logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Robots => "robots.txt",
            Self::Sitemap => "sitemap.xml",
            Self::Llms => "llms.txt (AI)",
            Self::JsonLd => "index.html (JSON-LD)",
        }
    }

    pub fn path(self, build: &BuildConfig) -> &Path {
        match self {
            Self::Robots => &build.robots,
            Self::Sitemap => &build.sitemap,
            Self::Llms => &build.llms,
            Self::JsonLd => &build.index_html,
        }
    }

    /// Whether the artifact calls the text generator.
    pub const fn uses_ai(self) -> bool {
        matches!(self, Self::Llms)
    }

    /// HTML artifacts get the formatter pass.
    pub fn is_html(self, build: &BuildConfig) -> bool {
        self.path(build)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
    }

    pub fn generate(
        self,
        ctx: &GenerateContext<'_>,
        fs: &dyn ArtifactFs,
        path: &Path,
    ) -> Result<(), GenerateError> {
        match self {
            Self::Robots => robots::generate(ctx, fs, path),
            Self::Sitemap => sitemap::generate(ctx, fs, path),
            Self::Llms => llms::generate(ctx, fs, path),
            Self::JsonLd => json_ld::generate(ctx, fs, path),
        }
    }
}

/// Write one artifact, mapping the failure to [`GenerateError::Io`].
fn write_artifact(fs: &dyn ArtifactFs, path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs.write(path, contents.as_bytes())
        .map_err(|err| GenerateError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_order_and_names() {
        let names: Vec<_> = ArtifactKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(
            names,
            ["robots.txt", "sitemap.xml", "llms.txt (AI)", "index.html (JSON-LD)"]
        );
    }

    #[test]
    fn test_only_index_is_html() {
        let build = BuildConfig::default();
        let html: Vec<_> = ArtifactKind::ALL
            .into_iter()
            .filter(|kind| kind.is_html(&build))
            .collect();
        assert_eq!(html, [ArtifactKind::JsonLd]);
    }

    #[test]
    fn test_paths_follow_build_config() {
        let build = BuildConfig::default();
        assert_eq!(ArtifactKind::Robots.path(&build), build.robots.as_path());
        assert_eq!(ArtifactKind::JsonLd.path(&build), build.index_html.as_path());
        assert!(ArtifactKind::Llms.uses_ai());
        assert!(!ArtifactKind::Sitemap.uses_ai());
    }
}

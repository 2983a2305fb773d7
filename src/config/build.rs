//! `[build]` section configuration.
//!
//! Where the profile comes from and where each artifact is written.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - input and output paths.
///
/// Relative paths are resolved against the project root.
///
/// # Example
/// ```toml
/// [build]
/// profile = "profile.toml"
/// robots = "public/robots.txt"
/// index_html = "index.html"
///
/// [build.format]
/// enable = true
/// command = ["npx", "prettier", "--write"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Profile data file (TOML).
    #[serde(default = "defaults::build::profile")]
    #[educe(Default = defaults::build::profile())]
    pub profile: PathBuf,

    #[serde(default = "defaults::build::robots")]
    #[educe(Default = defaults::build::robots())]
    pub robots: PathBuf,

    #[serde(default = "defaults::build::sitemap")]
    #[educe(Default = defaults::build::sitemap())]
    pub sitemap: PathBuf,

    /// AI-written llms.txt.
    #[serde(default = "defaults::build::llms")]
    #[educe(Default = defaults::build::llms())]
    pub llms: PathBuf,

    /// Host document that receives the JSON-LD blocks.
    #[serde(default = "defaults::build::index_html")]
    #[educe(Default = defaults::build::index_html())]
    pub index_html: PathBuf,

    /// Short AI summary consumed by the site.
    #[serde(default = "defaults::build::ai_summary")]
    #[educe(Default = defaults::build::ai_summary())]
    pub ai_summary: PathBuf,

    /// Directory the PDF résumé is saved into.
    #[serde(default = "defaults::build::cv_dir")]
    #[educe(Default = defaults::build::cv_dir())]
    pub cv_dir: PathBuf,

    /// Formatter run over HTML artifacts after generation.
    #[serde(default)]
    pub format: FormatConfig,
}

/// `[build.format]` section - optional post-generation formatter.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Command prefix; the file path is appended as the last argument.
    #[serde(default = "defaults::build::format::command")]
    #[educe(Default = defaults::build::format::command())]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::Path;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.profile, Path::new("profile.toml"));
        assert_eq!(config.build.robots, Path::new("public/robots.txt"));
        assert_eq!(config.build.sitemap, Path::new("public/sitemap.xml"));
        assert_eq!(config.build.llms, Path::new("public/llms.txt"));
        assert_eq!(config.build.index_html, Path::new("index.html"));
        assert_eq!(config.build.ai_summary, Path::new("src/data/ai-summary.json"));
        assert!(config.build.format.enable);
        assert_eq!(config.build.format.command, ["npx", "prettier", "--write"]);
    }

    #[test]
    fn test_format_can_be_disabled() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build.format]
            enable = false
        "#,
        )
        .unwrap();

        assert!(!config.build.format.enable);
        assert_eq!(config.build.format.command.len(), 3);
    }

    #[test]
    fn test_custom_paths() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build]
            robots = "dist/robots.txt"
            cv_dir = "downloads"
        "#,
        )
        .unwrap();

        assert_eq!(config.build.robots, Path::new("dist/robots.txt"));
        assert_eq!(config.build.cv_dir, Path::new("downloads"));
        assert_eq!(config.build.sitemap, Path::new("public/sitemap.xml"));
    }
}

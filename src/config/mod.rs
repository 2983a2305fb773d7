//! Project configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site facts (url, image, address)                 |
//! | `[build]`   | Profile path and artifact output paths           |
//! | `[ai]`      | External text generator command                  |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://andresjanes.com"
//!
//! [build]
//! profile = "profile.toml"
//! llms = "public/llms.txt"
//!
//! [ai]
//! command = ["claude", "-p"]
//! ```

mod ai;
mod base;
mod build;
pub mod defaults;
mod error;

pub use ai::AiConfig;
pub use base::BaseConfig;
pub use build::BuildConfig;
pub use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root every relative path is resolved against
    #[serde(skip)]
    pub root: PathBuf,

    /// Site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Input and output paths
    #[serde(default)]
    pub build: BuildConfig,

    /// Text generator settings
    #[serde(default)]
    pub ai: AiConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named on the command line, or defaults when the
    /// file does not exist, then apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)
                .with_context(|| format!("Failed to load {}", config_path.display()))?
        } else {
            Self::default()
        };

        config.config_path = Self::normalize_path(&config_path);
        config.update_with_cli(cli, &root);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    fn update_with_cli(&mut self, cli: &Cli, root: &Path) {
        if let Commands::Cv {
            output: Some(output),
        } = &cli.command
        {
            self.build.cv_dir = output.clone();
        }
        self.update_path_with_root(root);
    }

    /// Resolve all paths relative to root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);

        let profile = shellexpand::tilde(&self.build.profile.to_string_lossy()).into_owned();
        self.build.profile = Self::normalize_path(&root.join(profile));
        self.build.robots = Self::normalize_path(&root.join(&self.build.robots));
        self.build.sitemap = Self::normalize_path(&root.join(&self.build.sitemap));
        self.build.llms = Self::normalize_path(&root.join(&self.build.llms));
        self.build.index_html = Self::normalize_path(&root.join(&self.build.index_html));
        self.build.ai_summary = Self::normalize_path(&root.join(&self.build.ai_summary));
        self.build.cv_dir = Self::normalize_path(&root.join(&self.build.cv_dir));

        self.root = root;
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate settings every command relies on
    pub fn validate(&self) -> Result<()> {
        if !self.base.url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.build.format.enable && self.build.format.command.is_empty() {
            bail!(ConfigError::Validation(
                "[build.format.command] must have at least one element".into()
            ));
        }

        Ok(())
    }

    /// The formatter command, when enabled
    pub fn formatter(&self) -> Option<&[String]> {
        self.build
            .format
            .enable
            .then_some(self.build.format.command.as_slice())
    }
}

/// Check that the first element of `command` resolves on `PATH`.
pub fn check_command_installed(field: &str, command: &[String]) -> Result<()> {
    let Some(cmd) = command.first() else {
        bail!(ConfigError::Validation(format!(
            "{field} must have at least one element"
        )));
    };

    which::which(cmd).with_context(|| format!("`{cmd}` not found. Please install it first."))?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

//! Change-aware regeneration of the hash-tracked artifacts.
//!
//! # Flow
//!
//! ```text
//! run()
//!     │
//!     ├── compute_fingerprint()      once per run
//!     │
//!     ├── partition()                needs_regeneration() per artifact
//!     │
//!     ├── check-only ──► Clean | Dirty(pending)
//!     │
//!     └── generate pending in order ──► UpToDate | Generated { .. }
//!             │
//!             └── format_html()      HTML only, failure is a warning
//! ```

use crate::{
    config::SiteConfig,
    exec,
    generator::{ArtifactKind, GenerateContext},
    hash::{compute_fingerprint, needs_regeneration},
    log,
    logger::log_warn,
    profile::ProfileRecord,
    textgen::TextGenerator,
    utils::fs::ArtifactFs,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Flags of the `seo` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Regenerate everything, ignoring markers.
    pub force: bool,
    /// Report stale artifacts without writing anything.
    pub check_only: bool,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Check-only, nothing stale.
    Clean,
    /// Check-only, these artifacts are stale.
    Dirty(Vec<&'static str>),
    /// Nothing stale, nothing written.
    UpToDate,
    Generated {
        generated: Vec<&'static str>,
        skipped: Vec<&'static str>,
    },
}

impl Outcome {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Dirty(_) => 1,
            Self::Clean | Self::UpToDate | Self::Generated { .. } => 0,
        }
    }
}

/// Everything a run needs, borrowed for its duration.
pub struct Pipeline<'a> {
    pub config: &'a SiteConfig,
    pub profile: &'a ProfileRecord,
    pub textgen: &'a dyn TextGenerator,
    pub fs: &'a dyn ArtifactFs,
    pub today: NaiveDate,
}

impl Pipeline<'_> {
    pub fn run(&self, options: RunOptions) -> Result<Outcome> {
        let fingerprint = compute_fingerprint(self.profile);
        log!("seo"; "profile hash: {fingerprint}");

        let (pending, fresh) = self.partition(&fingerprint, options.force)?;

        if options.check_only {
            if pending.is_empty() {
                log!("check"; "all artifacts are up to date");
                return Ok(Outcome::Clean);
            }
            let names: Vec<_> = pending.iter().map(|kind| kind.name()).collect();
            for name in &names {
                log!("check"; "needs update: {name}");
            }
            return Ok(Outcome::Dirty(names));
        }

        if pending.is_empty() {
            log!("seo"; "all artifacts are up to date, use --force to regenerate");
            return Ok(Outcome::UpToDate);
        }

        if pending.iter().any(|kind| kind.uses_ai()) {
            self.textgen.check()?;
        }

        log!("seo"; "generating {} file(s)", pending.len());

        let ctx = GenerateContext {
            profile: self.profile,
            fingerprint: &fingerprint,
            base: &self.config.base,
            today: self.today,
            textgen: self.textgen,
        };

        let mut generated = Vec::with_capacity(pending.len());
        for kind in pending {
            let path = kind.path(&self.config.build);
            log!("seo"; "generating {}", kind.name());

            kind.generate(&ctx, self.fs, path)
                .with_context(|| format!("Error generating {}", kind.name()))?;

            if kind.is_html(&self.config.build) {
                self.format_html(path);
            }

            log!("done"; "{}", path.display());
            generated.push(kind.name());
        }

        let skipped: Vec<_> = fresh.iter().map(|kind| kind.name()).collect();

        log!("seo"; "generated: {}", generated.join(", "));
        if !skipped.is_empty() {
            log!("seo"; "skipped (up to date): {}", skipped.join(", "));
        }

        Ok(Outcome::Generated { generated, skipped })
    }

    /// Split artifacts into (stale, fresh), both in generation order.
    fn partition(
        &self,
        fingerprint: &str,
        force: bool,
    ) -> Result<(Vec<ArtifactKind>, Vec<ArtifactKind>)> {
        let mut pending = Vec::new();
        let mut fresh = Vec::new();

        for kind in ArtifactKind::ALL {
            let path = kind.path(&self.config.build);
            if needs_regeneration(self.fs, path, fingerprint, force)? {
                pending.push(kind);
            } else {
                fresh.push(kind);
            }
        }

        Ok((pending, fresh))
    }

    /// Run the configured formatter over a generated HTML file.
    fn format_html(&self, path: &Path) {
        let Some(command) = self.config.formatter() else {
            return;
        };

        if let Err(err) = exec!(self.config.root.as_path(); command; path) {
            log_warn("format", &format!("could not format {}: {err:#}", path.display()));
        }
    }
}

//! Folio - SEO, AI and résumé artifacts generated from a portfolio profile.

mod cli;
mod config;
mod cv;
mod generator;
mod hash;
mod logger;
mod lookup;
mod pipeline;
mod profile;
mod textgen;
mod utils;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use logger::log_error;
use pipeline::{Pipeline, RunOptions};
use profile::ProfileRecord;
use std::process::ExitCode;
use textgen::{CommandGenerator, TextGenerator};
use utils::fs::DiskFs;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            log_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let config = SiteConfig::load(cli)?;
    let profile = ProfileRecord::from_path(&config.build.profile)
        .with_context(|| format!("Failed to load profile {}", config.build.profile.display()))?;
    let textgen = CommandGenerator::new(&config.ai);

    match &cli.command {
        Commands::Seo { force, check_only } => {
            let pipeline = Pipeline {
                config: &config,
                profile: &profile,
                textgen: &textgen,
                fs: &DiskFs,
                today: today(),
            };
            let options = RunOptions {
                force: *force,
                check_only: *check_only,
            };
            Ok(pipeline.run(options)?.exit_code())
        }
        Commands::Summary => {
            textgen.check()?;
            let path = &config.build.ai_summary;
            generator::summary::generate(&profile, &textgen, today(), &DiskFs, path)
                .context("Error generating ai-summary.json")?;
            log!("done"; "{}", path.display());
            Ok(0)
        }
        Commands::Cv { .. } => {
            cv::download(&profile, &DiskFs, &config.build.cv_dir)?;
            Ok(0)
        }
    }
}

/// The UTC calendar date stamped into every generated artifact.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

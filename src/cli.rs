//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio portfolio artifact generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Project root every configured path is relative to
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Regenerate robots.txt, sitemap.xml, llms.txt and the JSON-LD block
    /// when the profile changed
    Seo {
        /// Regenerate every artifact regardless of its stored hash
        #[arg(short, long)]
        force: bool,

        /// Only report which artifacts are stale; exit 1 if any are
        #[arg(long, conflicts_with = "force")]
        check_only: bool,
    },

    /// Regenerate the AI summary JSON
    Summary,

    /// Write the PDF résumé
    Cv {
        /// Output directory (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

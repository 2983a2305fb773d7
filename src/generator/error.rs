//! Artifact generation errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The host document has no structured-data region to replace.
    #[error("Could not find JSON-LD section in `{path}`")]
    MissingAnchor { path: PathBuf },

    #[error("Malformed text generator response: {0}")]
    MalformedResponse(String),

    #[error("Text generation failed: {0:#}")]
    TextGeneration(anyhow::Error),

    #[error("IO error on `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

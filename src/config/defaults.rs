//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> String {
        "https://andresjanes.com".into()
    }

    pub fn image() -> String {
        "/img/profile.webp".into()
    }

    pub fn country() -> String {
        "GB".into()
    }

    pub fn region() -> String {
        "United Kingdom".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn profile() -> PathBuf {
        "profile.toml".into()
    }

    pub fn robots() -> PathBuf {
        "public/robots.txt".into()
    }

    pub fn sitemap() -> PathBuf {
        "public/sitemap.xml".into()
    }

    pub fn llms() -> PathBuf {
        "public/llms.txt".into()
    }

    pub fn index_html() -> PathBuf {
        "index.html".into()
    }

    pub fn ai_summary() -> PathBuf {
        "src/data/ai-summary.json".into()
    }

    pub fn cv_dir() -> PathBuf {
        ".".into()
    }

    pub mod format {
        pub fn command() -> Vec<String> {
            vec!["npx".into(), "prettier".into(), "--write".into()]
        }
    }
}

// ============================================================================
// [ai] Section Defaults
// ============================================================================

pub mod ai {
    pub fn command() -> Vec<String> {
        vec!["claude".into(), "-p".into()]
    }

    pub fn args() -> Vec<String> {
        vec!["--output-format".into(), "text".into()]
    }
}

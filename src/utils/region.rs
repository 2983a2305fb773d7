//! Sentinel-delimited regions inside a host HTML document.
//!
//! The site's `index.html` carries two JSON-LD `<script>` blocks, each
//! introduced by a fixed comment. [`SpliceRegion::locate`] finds the span
//! covering both blocks (plus a profile marker directly in front of them,
//! if one is there) so it can be replaced without touching anything else.
//!
//! ```text
//! <!-- Profile hash: 1a2b3c4d5e6f -->            <- optional
//! <!-- JSON-LD Structured Data -->               <- PERSON_SENTINEL
//! <script type="application/ld+json">...</script>
//!                                                <- whitespace only
//! <!-- WebSite Schema for search engines -->     <- WEBSITE_SENTINEL
//! <script type="application/ld+json">...</script>
//! ```

use regex::Regex;
use std::{ops::Range, sync::LazyLock};

pub const PERSON_SENTINEL: &str = "<!-- JSON-LD Structured Data -->";
pub const WEBSITE_SENTINEL: &str = "<!-- WebSite Schema for search engines -->";

static REGION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:<!-- Profile hash: [a-f0-9]+ -->\s*)?{}(?s:.*?)</script>\s*{}(?s:.*?)</script>",
        regex::escape(PERSON_SENTINEL),
        regex::escape(WEBSITE_SENTINEL),
    ))
    .expect("region pattern is valid")
});

/// Byte span of the structured-data region within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceRegion {
    span: Range<usize>,
}

impl SpliceRegion {
    /// Locate the region. `None` when either sentinel or closing tag is missing.
    pub fn locate(document: &str) -> Option<Self> {
        REGION_RE.find(document).map(|m| Self { span: m.range() })
    }

    #[cfg(test)]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Replace the region with `replacement`, keeping every other byte.
    pub fn splice(&self, document: &str, replacement: &str) -> String {
        let mut out =
            String::with_capacity(document.len() - self.span.len() + replacement.len());
        out.push_str(&document[..self.span.start]);
        out.push_str(replacement);
        out.push_str(&document[self.span.end..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <title>Test</title>

    <!-- Profile hash: abcdef123456 -->
    <!-- JSON-LD Structured Data -->
    <script type="application/ld+json">
    { "old": "person schema" }
    </script>

    <!-- WebSite Schema for search engines -->
    <script type="application/ld+json">
    { "old": "website schema" }
    </script>

    <style>body {}</style>
  </head>
</html>"#;

    #[test]
    fn test_locate_includes_existing_marker() {
        let region = SpliceRegion::locate(HOST).unwrap();
        let text = &HOST[region.span()];

        assert!(text.starts_with("<!-- Profile hash: abcdef123456 -->"));
        assert!(text.ends_with("</script>"));
        assert!(text.contains("website schema"));
        assert!(!text.contains("<style>"));
    }

    #[test]
    fn test_locate_without_marker_starts_at_sentinel() {
        let host = HOST.replace("<!-- Profile hash: abcdef123456 -->\n", "");
        let region = SpliceRegion::locate(&host).unwrap();

        assert!(host[region.span()].starts_with(PERSON_SENTINEL));
    }

    #[test]
    fn test_locate_missing_website_block() {
        let host = HOST.replace(WEBSITE_SENTINEL, "<!-- something else -->");
        assert_eq!(SpliceRegion::locate(&host), None);
    }

    #[test]
    fn test_locate_plain_document() {
        assert_eq!(SpliceRegion::locate("<html><head></head></html>"), None);
    }

    #[test]
    fn test_splice_preserves_surroundings() {
        let region = SpliceRegion::locate(HOST).unwrap();
        let out = region.splice(HOST, "NEW");

        let span = region.span();
        assert_eq!(&out[..span.start], &HOST[..span.start]);
        assert!(out.ends_with(&HOST[span.end..]));
        assert!(out.contains("    NEW\n\n    <style>body {}</style>"));
    }
}

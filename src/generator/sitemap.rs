//! Sitemap generation.
//!
//! The portfolio is a single page, so the sitemap lists the site root with
//! today's date as `lastmod`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!-- Profile hash: 1a2b3c4d5e6f -->
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!     <url>
//!         <loc>https://example.com/</loc>
//!         <lastmod>2025-01-01</lastmod>
//!         <changefreq>monthly</changefreq>
//!         <priority>1.0</priority>
//!     </url>
//! </urlset>
//! ```

use super::{GenerateContext, GenerateError, write_artifact};
use crate::{hash::format_marker, utils::fs::ArtifactFs};
use quick_xml::escape::escape;
use std::path::Path;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

pub fn generate(
    ctx: &GenerateContext<'_>,
    fs: &dyn ArtifactFs,
    path: &Path,
) -> Result<(), GenerateError> {
    let sitemap = Sitemap {
        urls: vec![UrlEntry {
            loc: format!("{}/", ctx.base.site_url()),
            lastmod: ctx.today.format("%Y-%m-%d").to_string(),
            changefreq: "monthly",
            priority: "1.0",
        }],
    };
    write_artifact(fs, path, &sitemap.into_xml(ctx.fingerprint))
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    loc: String,
    /// YYYY-MM-DD
    lastmod: String,
    changefreq: &'static str,
    priority: &'static str,
}

impl Sitemap {
    /// Generate sitemap XML with the marker right after the declaration.
    fn into_xml(self, fingerprint: &str) -> String {
        let mut xml = String::with_capacity(512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format_marker(fingerprint));
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("    <url>\n");
            xml.push_str(&format!("        <loc>{}</loc>\n", escape(&entry.loc)));
            xml.push_str(&format!("        <lastmod>{}</lastmod>\n", entry.lastmod));
            xml.push_str(&format!(
                "        <changefreq>{}</changefreq>\n",
                entry.changefreq
            ));
            xml.push_str(&format!("        <priority>{}</priority>\n", entry.priority));
            xml.push_str("    </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

// ============================================================================
// Tests
// ============================================================================

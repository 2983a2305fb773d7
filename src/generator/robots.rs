//! robots.txt generation.
//!
//! Fixed crawl policy: everything allowed, with pointers to the sitemap
//! and llms.txt.

use super::{GenerateContext, GenerateError, write_artifact};
use crate::{hash::format_marker, utils::fs::ArtifactFs};
use std::path::Path;

pub fn generate(
    ctx: &GenerateContext<'_>,
    fs: &dyn ArtifactFs,
    path: &Path,
) -> Result<(), GenerateError> {
    write_artifact(fs, path, &render(ctx.fingerprint, ctx.base.site_url()))
}

fn render(fingerprint: &str, url: &str) -> String {
    format!(
        "{marker}
# robots.txt for {url}
# Generated automatically from profile data

User-agent: *
Allow: /

Sitemap: {url}/sitemap.xml
Llms-txt: {url}/llms.txt
Crawl-delay: 1
",
        marker = format_marker(fingerprint),
    )
}

// src/scanner/kind.rs
// =============================================================================
// Sorts link targets into a few buckets so the output is easier to read.
//
// This is display-only: we never fetch or validate anything here.
// =============================================================================

use serde::Serialize;
use url::Url;

use super::files::MARKDOWN_EXTENSION;

/// What a link target points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Absolute URL with a scheme (https:, mailto:, ...)
    External,
    /// Jump to a heading in the same file (#installation)
    Anchor,
    /// Another Markdown file of the tutorial (chapter2.md)
    Markdown,
    /// Any other relative path (images/logo.png)
    Local,
}

impl LinkKind {
    // Classifies a link target
    //
    // Url::parse only succeeds for absolute URLs, so relative paths like
    // "docs/intro.md" fall through to the checks below.
    pub fn classify(target: &str) -> LinkKind {
        let target = target.trim();

        if target.starts_with('#') {
            LinkKind::Anchor
        } else if Url::parse(target).is_ok() {
            LinkKind::External
        } else if target.ends_with(MARKDOWN_EXTENSION) {
            LinkKind::Markdown
        } else {
            LinkKind::Local
        }
    }
}

// src/scanner/mod.rs
// =============================================================================
// This module contains everything that reads Markdown.
//
// Submodules:
// - links: Finds [text](target) links, two lines at a time
// - files: Lists README.md and the .md files it links to
// - kind: Sorts link targets into external/anchor/markdown/local
// =============================================================================

mod files;
mod kind;
mod links;

pub use files::{markdown_files, markdown_files_in, ROOT_FILE};
pub use kind::LinkKind;
pub use links::{find_links, find_links_in_str, LinkMatch};


// src/scanner/files.rs
// =============================================================================
// This module lists the Markdown files of a tutorial.
//
// Strategy:
// - The tutorial's README.md is the table of contents
// - Every chapter is linked from it, so scanning README.md once is enough
// - We only go one level deep: links inside the chapters are NOT followed
//
// Rust concepts:
// - File I/O: Opening a file and wrapping it in a BufReader
// - anyhow::Context: Adding "which file?" to an error message
// - Path and PathBuf: Building file paths in a portable way
// =============================================================================

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

use super::links::find_links;

// The entry-point file of every tutorial
pub const ROOT_FILE: &str = "README.md";

// Only link targets ending with this count as tutorial files
pub const MARKDOWN_EXTENSION: &str = ".md";

// Lists README.md and every .md file it links to, using the current directory
//
// Returns: Vec of file names, README.md always first
//
// Example README.md:
//   [Basics](basics.md) and [License](LICENSE.txt)
//
// Example output:
//   vec!["README.md", "basics.md"]
pub fn markdown_files() -> Result<Vec<String>> {
    markdown_files_in(Path::new("."))
}

// Same as markdown_files(), but looks for README.md inside `dir`
//
// Errors:
//   If README.md can't be opened. The io::Error (e.g. NotFound) stays in
//   the error chain so callers can downcast to it.
pub fn markdown_files_in(dir: &Path) -> Result<Vec<String>> {
    let root_path = dir.join(ROOT_FILE);
    debug!(path = %root_path.display(), "opening root file");

    let file = File::open(&root_path)
        .with_context(|| format!("Could not open {}", root_path.display()))?;

    let mut files = vec![ROOT_FILE.to_string()];

    for found in find_links(BufReader::new(file)) {
        let found = found.with_context(|| format!("Could not read {}", root_path.display()))?;
        let target = found.link.target;

        // README.md linking to itself would otherwise be listed twice
        if target.ends_with(MARKDOWN_EXTENSION) && target != ROOT_FILE {
            files.push(target);
        }
    }

    info!(count = files.len(), "listed markdown files");
    Ok(files)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does .with_context() do?
//    - It wraps an error with an extra message, like "Could not open README.md"
//    - The original error is still inside, so nothing is lost
//    - It takes a closure, so the message is only built if there IS an error
//
// 2. Why BufReader?
//    - File reads go straight to the operating system
//    - BufReader reads bigger chunks and hands out lines from memory
//    - It also gives us the BufRead trait that find_links() needs
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn tutorial(readme: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ROOT_FILE), readme).unwrap();
        dir
    }

    #[test]
    fn test_lists_only_markdown_targets() {
        let dir = tutorial("[x](a.md)\n[y](b.txt)\n");
        let files = markdown_files_in(dir.path()).unwrap();
        assert_eq!(files, vec!["README.md", "a.md"]);
    }

    #[test]
    fn test_readme_comes_first_even_without_links() {
        let dir = tutorial("# Tutorial\n\nNothing here yet.\n");
        let files = markdown_files_in(dir.path()).unwrap();
        assert_eq!(files, vec!["README.md"]);
    }

    #[test]
    fn test_skips_link_to_itself() {
        let dir = tutorial("[home](README.md)\n[intro](intro.md)\n\n");
        let files = markdown_files_in(dir.path()).unwrap();
        assert_eq!(files, vec!["README.md", "intro.md"]);
    }

    #[test]
    fn test_keeps_link_order() {
        let dir = tutorial(
            "# Chapters\n\n1. [Basics](basics.md)\n2. [Loops](loops.md)\n3. [Files](files.md)\n",
        );
        let files = markdown_files_in(dir.path()).unwrap();
        assert_eq!(files, vec!["README.md", "basics.md", "loops.md", "files.md"]);
    }

    #[test]
    fn test_does_not_follow_chapter_links() {
        let dir = tutorial("[Basics](basics.md)\n\n");
        fs::write(dir.path().join("basics.md"), "[Deep](deep.md)\n\n").unwrap();
        let files = markdown_files_in(dir.path()).unwrap();
        assert_eq!(files, vec!["README.md", "basics.md"]);
    }

    #[test]
    fn test_missing_readme_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = markdown_files_in(dir.path()).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("README.md"));
    }
}

// tests/cli.rs
// =============================================================================
// End-to-end tests: run the real mdlinks binary and check what it prints
// and which exit code it returns.
// =============================================================================

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tutorial(readme: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), readme).unwrap();
    dir
}

fn mdlinks() -> Command {
    Command::cargo_bin("mdlinks").unwrap()
}

#[test]
fn test_files_lists_markdown_links() {
    let dir = tutorial("[x](a.md)\n[y](b.txt)\n");

    mdlinks()
        .current_dir(dir.path())
        .arg("files")
        .assert()
        .success()
        .stdout("README.md\na.md\n");
}

#[test]
fn test_files_with_dir_and_json() {
    let dir = tutorial("[Basics](basics.md)\n[Loops](loops.md)\n");

    mdlinks()
        .args(["files", "--json", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"basics.md\""))
        .stdout(predicate::str::contains("\"loops.md\""));
}

#[test]
fn test_files_without_readme_fails() {
    let dir = TempDir::new().unwrap();

    mdlinks()
        .current_dir(dir.path())
        .arg("files")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("README.md"));
}

#[test]
fn test_links_reports_second_line_number() {
    let dir = tutorial("[a](b)\nx\n");

    mdlinks()
        .current_dir(dir.path())
        .args(["links", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"line\": 2"))
        .stdout(predicate::str::contains("\"text\": \"a\""))
        .stdout(predicate::str::contains("\"target\": \"b\""))
        .stdout(predicate::str::contains("\"kind\": \"local\""));
}

#[test]
fn test_links_table_output() {
    let dir = tutorial("# Tutorial\n[Rust](https://www.rust-lang.org)\n\n");

    mdlinks()
        .current_dir(dir.path())
        .args(["links", "README.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("external"))
        .stdout(predicate::str::contains("https://www.rust-lang.org"))
        .stdout(predicate::str::contains("Total: 1"));
}

#[test]
fn test_ask_default_yes() {
    mdlinks()
        .args(["ask", "Continue?"])
        .write_stdin("\n")
        .assert()
        .code(0)
        .stdout("Continue? [Y/n] ");
}

#[test]
fn test_ask_no_after_invalid_answer() {
    mdlinks()
        .args(["ask", "Continue?", "--default-no"])
        .write_stdin("maybe\nn\n")
        .assert()
        .code(1)
        .stdout("Continue? [y/N] Continue? [y/N] ");
}

#[test]
fn test_ask_closed_stdin_is_an_error() {
    mdlinks()
        .args(["ask", "Continue?"])
        .write_stdin("")
        .assert()
        .code(2);
}

#[test]
fn test_verbose_and_quiet_conflict() {
    mdlinks()
        .args(["-v", "-q", "files"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tutorial("[x](a.md)\n\n");

    mdlinks()
        .current_dir(dir.path())
        .args(["files", "--verbose"])
        .assert()
        .success()
        .stdout("README.md\na.md\n")
        .stderr(predicate::str::contains("opening root file"));
}

#[test]
fn test_quiet_keeps_stderr_clean() {
    let dir = tutorial("[x](a.md)\n\n");

    mdlinks()
        .current_dir(dir.path())
        .args(["--quiet", "files"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_links_windows_line_breaks() {
    let dir = tutorial("[x](\r\nchapter.md)\r\nend\r\n");

    mdlinks()
        .current_dir(dir.path())
        .args(["links", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target\": \"\\nchapter.md\""));
}

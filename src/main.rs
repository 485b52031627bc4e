// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so stdout stays clean for --json)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success / yes, 1 = no, 2 = error)
//
// Rust concepts used:
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// - Iterators: collect() turns a stream of Results into one Result
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod prompt;        // src/prompt/ - yes/no questions
mod scanner;       // src/scanner/ - finding links in Markdown

use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Installs the tracing subscriber that prints log events to stderr
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = success (or "yes" for ask)
//   Ok(1) = "no" for ask
//   Err = something went wrong (missing file, stdin closed, ...)
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Links { file, json } => {
            let path = file.unwrap_or_else(|| PathBuf::from(scanner::ROOT_FILE));
            handle_links(&path, json)
        }
        Commands::Files { dir, json } => handle_files(dir.as_deref(), json),
        Commands::Ask { question, default_no } => handle_ask(&question, !default_no),
    }
}

// Handles the 'links' subcommand
// Parameters:
//   path: Markdown file to scan
//   json: whether to output JSON format
fn handle_links(path: &Path, json: bool) -> Result<i32> {
    // One chapter fits in memory easily; reading it up front also catches
    // files that aren't valid UTF-8 before anything is printed
    let content = fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    let found = scanner::find_links_in_str(&content).collect::<Result<Vec<_>, _>>()?;

    tracing::info!(count = found.len(), file = %path.display(), "scan finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        print_table(&found);
    }

    Ok(0)
}

// Handles the 'files' subcommand
// Parameters:
//   dir: directory holding README.md, or None for the current directory
//   json: whether to output JSON format
fn handle_files(dir: Option<&Path>, json: bool) -> Result<i32> {
    let files = match dir {
        Some(dir) => scanner::markdown_files_in(dir)?,
        None => scanner::markdown_files()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for name in &files {
            println!("{}", name);
        }
    }

    Ok(0)
}

// Handles the 'ask' subcommand
// Parameters:
//   question: text to show
//   default: what pressing Enter means
fn handle_ask(question: &str, default: bool) -> Result<i32> {
    if prompt::ask_yes_no(question, default)? {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Prints links as a human-readable table in the terminal
fn print_table(found: &[scanner::LinkMatch]) {
    if found.is_empty() {
        println!("No links found");
        return;
    }

    println!("{:<6} {:<10} {:<40} {}", "LINE", "KIND", "TARGET", "TEXT");
    println!("{}", "=".repeat(80));

    for m in found {
        // Split links contain a newline; keep each row on one line
        let target = m.link.target.replace('\n', " ");
        let text = m.link.text.replace('\n', " ");

        // Truncate target if too long for display
        let target_display = if target.chars().count() > 37 {
            format!("{}...", target.chars().take(37).collect::<String>())
        } else {
            target
        };

        println!(
            "{:<6} {:<10} {:<40} {}",
            m.line,
            format_kind(m.kind),
            target_display,
            text
        );
    }

    println!();
    println!("📋 Total: {}", found.len());
}

fn format_kind(kind: scanner::LinkKind) -> &'static str {
    match kind {
        scanner::LinkKind::External => "external",
        scanner::LinkKind::Anchor => "anchor",
        scanner::LinkKind::Markdown => "markdown",
        scanner::LinkKind::Local => "local",
    }
}

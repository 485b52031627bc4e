// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Option<T>: Arguments the user may leave out
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "mdlinks",
    version = "0.1.0",
    about = "Find links in Markdown tutorials and ask yes/no questions",
    long_about = "mdlinks finds [text](target) links in Markdown files (even when a link is \
                  wrapped onto the next line), lists the chapters a README.md links to, \
                  and asks yes/no questions for tutorial scripts."
)]
pub struct Cli {
    /// Show debug logging on stderr
    ///
    /// `global = true` lets the flag go before or after the subcommand
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (links, files, ask)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every link in a Markdown file
    ///
    /// Example: mdlinks links docs/basics.md
    Links {
        /// Markdown file to scan (default: README.md)
        file: Option<PathBuf>,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List README.md and the .md files it links to
    ///
    /// Example: mdlinks files --dir my-tutorial
    Files {
        /// Directory that contains README.md (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output results in JSON format instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Ask a yes/no question; exit code 0 means yes, 1 means no
    ///
    /// Example: mdlinks ask "Overwrite the file?" --default-no
    Ask {
        /// The question to show
        question: String,

        /// Make an empty answer mean "no" instead of "yes"
        #[arg(long)]
        default_no: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<PathBuf> instead of default_value?
//    - None means "the user didn't say", so the code can pick README.md or
//      the current directory itself
//    - PathBuf is an owned file path, like String is an owned string
//
// 2. How does --default-no get its name?
//    - clap turns the field name default_no into the flag --default-no
// -----------------------------------------------------------------------------

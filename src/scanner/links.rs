// src/scanner/links.rs
// =============================================================================
// This module finds Markdown links of the form [text](target) in text.
//
// We use a regular expression instead of a full Markdown parser because the
// tutorial files sometimes wrap a long link so that its closing ")" lands on
// the next line. To catch those we look at the text TWO lines at a time:
//
//   window 1: line 1 + line 2   (reported as line 2)
//   window 2: line 2 + line 3   (reported as line 3)
//   ...
//
// A link that sits entirely on line 1 is therefore reported as line 2.
// Every link shows up in two windows, so we remember the exact text of every
// match we already returned and skip repeats.
//
// Rust concepts:
// - Iterator trait: The scanner is lazy and produces one match at a time
// - BufRead: Reading a file (or any byte source) line by line
// - OnceLock: Compile the regex once, reuse it forever
// =============================================================================

use regex::Regex;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::io::{self, BufRead};
use std::sync::OnceLock;
use tracing::{debug, trace};

use super::kind::LinkKind;

// (?s) lets "." match newlines, so a match can cross the line break between
// the two lines of a window. Both groups are non-greedy.
static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn link_regex() -> &'static Regex {
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\[(.*?)\]\((.*?)\)").expect("Link regex should compile")
    })
}

/// A Markdown link: the text in square brackets and the target in parentheses
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    /// Display text, e.g. "Rust" in [Rust](https://www.rust-lang.org)
    pub text: String,
    /// Where the link points, e.g. "https://www.rust-lang.org"
    pub target: String,
}

impl Link {
    /// What kind of target this is (external URL, anchor, .md file, ...)
    pub fn kind(&self) -> LinkKind {
        LinkKind::classify(&self.target)
    }
}

/// One link found by the scanner, plus the line it was reported on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkMatch {
    /// 1-based number of the second line of the window that found the link
    pub line: usize,
    #[serde(flatten)]
    pub link: Link,
    /// The whole matched text, e.g. "[a](b)", used to skip duplicates
    pub raw: String,
    pub kind: LinkKind,
}

// Lines of a BufRead, each one still ending in its "\n"
//
// BufRead::lines() strips the line break, but we want "[a](\nb)" to come
// back exactly as it was written. Windows ("\r\n") and old Mac ("\r") line
// breaks are turned into a plain "\n", so a file scans the same no matter
// which editor saved it.
pub struct RawLines<R> {
    reader: R,
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        read_line_normalized(&mut self.reader).transpose()
    }
}

// Reads bytes up to the next "\n", "\r\n" or "\r" and returns them as a line
// ending in "\n". The last line keeps no line break if the file has none.
// Returns Ok(None) at end of input.
fn read_line_normalized<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let was_cr = buf[end] == b'\r';
                bytes.extend_from_slice(&buf[..end]);
                bytes.push(b'\n');
                reader.consume(end + 1);

                // "\r\n" is one line break, even if the "\n" is in the next chunk
                if was_cr && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                break;
            }
            None => {
                let len = buf.len();
                bytes.extend_from_slice(buf);
                reader.consume(len);
            }
        }
    }

    if bytes.is_empty() {
        return Ok(None);
    }

    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

// Lazy scanner over a sequence of lines
//
// Created by find_links(). Each call to next() either hands out
// a match that is already waiting in `pending`, or pulls one more line,
// builds the next window and searches it.
pub struct LinkScanner<I> {
    lines: I,
    // First line of the next window. None until we read line 1.
    current: Option<String>,
    // Matches from the last window that haven't been returned yet
    pending: VecDeque<LinkMatch>,
    // Raw "[text](target)" strings we already returned
    seen: HashSet<String>,
    // Line number of the second line of the last window
    line: usize,
    finished: bool,
}

// Finds all Markdown links in a reader, two lines at a time
//
// Parameters:
//   reader: anything line-readable (a BufReader<File>, &[u8], Cursor, ...)
//
// Returns: an iterator of io::Result<LinkMatch>
//   The iterator stops after the first read error.
//
// Example input:
//   "[a](b)\n"
//   "x\n"
//
// Example output:
//   LinkMatch { line: 2, link: Link { text: "a", target: "b" }, .. }
pub fn find_links<R: BufRead>(reader: R) -> LinkScanner<RawLines<R>> {
    LinkScanner::new(RawLines { reader })
}

// Same as find_links(), but for text that is already in memory
pub fn find_links_in_str(text: &str) -> LinkScanner<RawLines<&[u8]>> {
    find_links(text.as_bytes())
}

impl<I> LinkScanner<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn new(lines: I) -> Self {
        LinkScanner {
            lines,
            current: None,
            pending: VecDeque::new(),
            seen: HashSet::new(),
            line: 1,
            finished: false,
        }
    }

    // Returns Ok(None) at end of input
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next().transpose()
    }

    // Moves the window one line forward and queues its new matches.
    // Returns Ok(false) once there is no line left to complete a window.
    fn advance(&mut self) -> io::Result<bool> {
        let first = match self.current.take() {
            Some(line) => line,
            None => match self.next_line()? {
                Some(line) => line,
                None => return Ok(false),
            },
        };

        let Some(second) = self.next_line()? else {
            return Ok(false);
        };

        self.line += 1;
        let window = format!("{}{}", first, second);
        trace!(line = self.line, "scanning window");

        for captures in link_regex().captures_iter(&window) {
            let raw = captures[0].to_string();

            // insert() returns false if the value was already in the set
            if !self.seen.insert(raw.clone()) {
                continue;
            }

            let link = Link {
                text: captures[1].to_string(),
                target: captures[2].to_string(),
            };
            debug!(line = self.line, target = %link.target, "found link");

            self.pending.push_back(LinkMatch {
                line: self.line,
                kind: link.kind(),
                link,
                raw,
            });
        }

        self.current = Some(second);
        Ok(true)
    }
}

impl<I> Iterator for LinkScanner<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<LinkMatch>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(found) = self.pending.pop_front() {
                return Some(Ok(found));
            }

            if self.finished {
                return None;
            }

            match self.advance() {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a struct that implements Iterator instead of returning a Vec?
//    - The caller decides how much to read (e.g. stop at the first link)
//    - Big files are never loaded into memory all at once
//    - for loops, .filter(), .collect() etc. all work on it for free
//
// 2. What is `let ... else`?
//    - `let Some(second) = x else { return ... };` binds `second` if x is
//      Some, and otherwise runs the else block (which must leave the function)
//
// 3. Why does HashSet::insert return a bool?
//    - true = the value was new, false = it was already there
//    - That gives us "check and remember" in a single call
//
// 4. Why fill_buf()/consume() instead of read_line()?
//    - read_line() only knows "\n" as a line break
//    - fill_buf() shows us the bytes already buffered without using them up,
//      consume() tells the reader how many we actually took
//
// 5. What does .transpose() do?
//    - It flips Option<Result<T, E>> into Result<Option<T>, E>
//    - That lets us use ? on "maybe a line, maybe an error"
// -----------------------------------------------------------------------------

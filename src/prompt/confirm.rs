// src/prompt/confirm.rs
// =============================================================================
// Asks the user a yes/no question on the terminal.
//
//   Delete the build folder? [Y/n] maybe
//   Delete the build folder? [Y/n] n
//
// The capital letter in [Y/n] / [y/N] shows what pressing Enter means.
// Anything that isn't y, n or empty just asks again, as many times as needed.
// =============================================================================

use anyhow::{bail, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

// Asks `question` on stdout and reads the answer from stdin
//
// Parameters:
//   question: the question text, without the [Y/n] part
//   default: what an empty answer means
//
// Returns: Ok(true) for yes, Ok(false) for no
//
// Errors:
//   If stdin is closed before a valid answer arrives, or if reading or
//   writing the terminal fails.
pub fn ask_yes_no(question: &str, default: bool) -> Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask_yes_no_with_io(question, default, &mut stdin.lock(), &mut stdout.lock())
}

// The real prompt loop, with the input and output passed in so tests can
// use in-memory buffers instead of a terminal
pub fn ask_yes_no_with_io<R, W>(
    question: &str,
    default: bool,
    reader: &mut R,
    writer: &mut W,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    let prompt = if default {
        format!("{} [Y/n] ", question)
    } else {
        format!("{} [y/N] ", question)
    };

    loop {
        write!(writer, "{}", prompt)?;
        // print!-style output is line buffered, so push the prompt out now
        writer.flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            bail!("Input closed before answering: {}", question);
        }

        match input.to_uppercase().trim() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => return Ok(default),
            other => {
                debug!(answer = other, "not a yes/no answer, asking again");
            }
        }
    }
}

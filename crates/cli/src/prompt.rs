//! Interactive search method selection.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;
use sightings_engine::SearchStrategy;

pub const PROMPT: &str = "Choice of search method ([l]inear, [b]inary)? ";
pub const INCORRECT_CHOICE: &str = "Incorrect choice";

#[derive(Debug)]
pub enum PromptError {
    /// Input ended before a valid choice was made.
    NoSelection,
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no search method selected (input closed)"),
            Self::Io(e) => write!(f, "prompt I/O error: {e}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Ask on `out` until `input` yields a valid method.
///
/// Invalid answers print [`INCORRECT_CHOICE`] on `err` and ask again. Blank
/// lines just ask again.
pub fn ask_strategy<R, W, E>(input: &mut R, out: &mut W, err: &mut E) -> Result<SearchStrategy, PromptError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::NoSelection);
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<SearchStrategy>() {
            Ok(strategy) => return Ok(strategy),
            Err(e) => {
                debug!("{e}");
                writeln!(err, "{INCORRECT_CHOICE}")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (Result<SearchStrategy, PromptError>, String, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = ask_strategy(&mut input, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn first_answer_valid() {
        let (result, out, err) = ask("b\n");
        assert_eq!(result.unwrap(), SearchStrategy::Binary);
        assert_eq!(out, PROMPT);
        assert!(err.is_empty());
    }

    #[test]
    fn long_form_and_no_trailing_newline() {
        let (result, _, _) = ask("linear");
        assert_eq!(result.unwrap(), SearchStrategy::Linear);
    }

    #[test]
    fn invalid_answers_reprompt() {
        let (result, out, err) = ask("x\nquick\nl\n");
        assert_eq!(result.unwrap(), SearchStrategy::Linear);
        assert_eq!(out, PROMPT.repeat(3));
        assert_eq!(err, format!("{INCORRECT_CHOICE}\n{INCORRECT_CHOICE}\n"));
    }

    #[test]
    fn blank_lines_reprompt_silently() {
        let (result, out, err) = ask("\n   \nB\n");
        assert_eq!(result.unwrap(), SearchStrategy::Binary);
        assert_eq!(out, PROMPT.repeat(3));
        assert!(err.is_empty());
    }

    #[test]
    fn eof_without_choice() {
        let (result, _, err) = ask("x\n");
        assert!(matches!(result, Err(PromptError::NoSelection)));
        assert_eq!(err, format!("{INCORRECT_CHOICE}\n"));

        let (result, out, _) = ask("");
        assert!(matches!(result, Err(PromptError::NoSelection)));
        assert_eq!(out, PROMPT);
    }
}

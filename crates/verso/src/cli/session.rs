//! The interactive search session.
//!
//! Each input line is either a `:`-prefixed session command or a query. Queries are
//! evaluated against the whole corpus and their results printed before the next line is
//! read.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;
use verso_corpus::Corpus;
use verso_match::{Query, SearchOutcome};

use super::output::write_results;

/// Banner printed when a session starts.
pub const BANNER: &str = "verso: search the sonnets for lines containing every word you type.\n\
Type :help for commands.";

/// Help text for session commands.
pub const HELP: &str = "Commands:
  <words>              Show documents containing every word (case-insensitive)
  :highlight on|off    Toggle match highlighting
  :help                Show this help
  :quit                Leave the session";

/// A parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line.
    Empty,
    /// Leave the session.
    Quit,
    /// Print the help text.
    Help,
    /// Turn highlighting on or off.
    Highlight(bool),
    /// Search for documents containing every word.
    Query(Query),
}

/// Invalid session commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// `:highlight` without a single `on` or `off` argument.
    #[error("Usage: :highlight on|off")]
    HighlightUsage,
    /// Any other `:`-prefixed input.
    #[error("Unknown command. Type :help for commands.")]
    Unknown(String),
}

/// Parses one line of session input.
pub fn parse_input(line: &str) -> Result<Input, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Empty);
    }

    if !line.starts_with(':') {
        return Ok(Query::parse(line).map_or(Input::Empty, Input::Query));
    }

    match line {
        ":quit" => return Ok(Input::Quit),
        ":help" => return Ok(Input::Help),
        _ => {}
    }

    if line.starts_with(":highlight") {
        let parts: Vec<&str> = line.split_whitespace().collect();
        return match parts.as_slice() {
            [_, arg] if arg.eq_ignore_ascii_case("on") => Ok(Input::Highlight(true)),
            [_, arg] if arg.eq_ignore_ascii_case("off") => Ok(Input::Highlight(false)),
            _ => Err(CommandError::HighlightUsage),
        };
    }

    Err(CommandError::Unknown(line.to_string()))
}

/// State carried across session input lines.
#[derive(Debug, Clone)]
pub struct Session {
    /// Whether results are highlighted.
    pub highlight: bool,
    /// Prompt printed before each line.
    pub prompt: String,
    /// Noun used in result summaries.
    pub noun: String,
}

impl Session {
    /// Reads lines from `input` until `:quit` or end of input, writing to `output`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        corpus: &Corpus,
        mut input: R,
        output: &mut W,
    ) -> io::Result<()> {
        writeln!(output, "{BANNER}")?;
        writeln!(output)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                writeln!(output, "Bye.")?;
                return Ok(());
            }

            match parse_input(&line) {
                Ok(Input::Empty) => {}
                Ok(Input::Quit) => {
                    writeln!(output, "Bye.")?;
                    return Ok(());
                }
                Ok(Input::Help) => writeln!(output, "{HELP}")?,
                Ok(Input::Highlight(on)) => {
                    self.highlight = on;
                    debug!(highlight = on, "toggled highlighting");
                    writeln!(output, "Highlighting {}", if on { "ON" } else { "OFF" })?;
                }
                Ok(Input::Query(query)) => {
                    let outcome = SearchOutcome::run(corpus, query);
                    write_results(output, &outcome, &self.noun, self.highlight)?;
                }
                Err(e) => writeln!(output, "{e}")?,
            }
        }
    }
}

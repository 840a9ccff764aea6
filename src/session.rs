//! The interactive reader loop.
//!
//! A [`Session`] remembers the passage last shown so `:next` and `:prev` have somewhere to
//! start from. Nothing is global: each session owns its position and borrows the corpus, so
//! several can run side by side.

use crate::corpus::CorpusAccess;
use crate::error::Boundary;
use crate::locator::Locator;
use crate::lookup::{passage, resolve_locator};
use crate::navigator::{next, prev};
use crate::parser::parse;
use crate::render::{render_passage, RenderOptions};
use std::io::{self, BufRead, Write};

/// Greeting shown when the reader starts.
pub const BANNER: &str = "VERBUM · Scripture at your fingertips.
Type a reference (e.g. 'John 1' or 'Psalm 23:1-4')
Commands: :help  |  :next / :prev  |  :quit";

/// Command summary shown by `:help`.
pub const HELP_TEXT: &str = "Available commands
────────────────────────────
:next       Move forward to the next passage
:prev       Return to the previous passage
:help       Show this list
:quit, q    Exit Verbum

You can enter any reference directly:
  John 3:16     single verse
  Genesis 1     full chapter
  Psalm 23:1-4  range";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a line of input asks for.
pub enum Command {
    /// Leave the reader.
    Quit,
    /// Show the command summary.
    Help,
    /// Step forward from the current passage.
    Next,
    /// Step backward from the current passage.
    Prev,
    /// A `:`-prefixed word that is not a command.
    Unknown,
    /// Anything else is read as a reference.
    Reference,
    /// Blank input.
    Empty,
}

impl Command {
    #[must_use]
    /// Classify one line of input.
    pub fn classify(input: &str) -> Self {
        let command = input.trim().to_lowercase();
        match command.as_str() {
            "" => Self::Empty,
            "quit" | "exit" | "q" | ":quit" | ":q" => Self::Quit,
            ":help" | "help" | "h" | "?" => Self::Help,
            ":next" | "next" | "nxt" => Self::Next,
            ":prev" | "prev" | "previous" | "back" => Self::Prev,
            other if other.starts_with(':') => Self::Unknown,
            _ => Self::Reference,
        }
    }
}

/// Reading state for one user.
pub struct Session<'c, C: CorpusAccess + ?Sized> {
    corpus: &'c C,
    current: Option<Locator>,
    options: RenderOptions,
}

impl<'c, C: CorpusAccess + ?Sized> Session<'c, C> {
    #[must_use]
    /// Start a session with no current passage.
    pub const fn new(corpus: &'c C, options: RenderOptions) -> Self {
        Self {
            corpus,
            current: None,
            options,
        }
    }

    #[must_use]
    /// The passage last shown, if any.
    pub const fn current(&self) -> Option<&Locator> {
        self.current.as_ref()
    }

    /// Run the read–print loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{BANNER}")?;
        for line in input.lines() {
            let line = line?;
            if !self.handle(&line, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Act on one line of input. Returns `false` when the session should end.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing output fails.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        match Command::classify(line) {
            Command::Empty => {}
            Command::Quit => {
                writeln!(out, "Closing.")?;
                return Ok(false);
            }
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::Next => self.step(out, next, "ahead")?,
            Command::Prev => self.step(out, prev, "back")?,
            Command::Unknown => writeln!(out, "Unrecognized command. Type :help for guidance.")?,
            Command::Reference => self.open(line, out)?,
        }
        Ok(true)
    }

    fn open<W: Write>(&mut self, raw: &str, out: &mut W) -> io::Result<()> {
        let Ok(parsed) = parse(raw) else {
            return friendly_error(
                out,
                "Reference not recognized. Check your input and try again.",
                Some("Examples: John 1, John 1:1, Psalm 23:1-4"),
            );
        };
        let resolved = match resolve_locator(self.corpus, parsed) {
            Ok(resolved) => resolved,
            Err(err) => return friendly_error(out, &err.to_string(), None),
        };
        if let Some(typed) = &resolved.corrected_from {
            writeln!(
                out,
                "Interpreting book as {} (entered '{typed}')",
                resolved.locator.section
            )?;
        }
        self.show(resolved.locator, out)
    }

    fn step<W: Write>(
        &mut self,
        out: &mut W,
        direction: fn(&C, &Locator) -> Result<Locator, Boundary>,
        word: &str,
    ) -> io::Result<()> {
        let Some(current) = &self.current else {
            let message =
                format!("No prior passage stored. Enter a reference before moving {word}.");
            return friendly_error(out, &message, None);
        };
        match direction(self.corpus, current) {
            Ok(locator) => self.show(locator, out),
            Err(boundary) => friendly_error(out, &boundary.to_string(), None),
        }
    }

    fn show<W: Write>(&mut self, locator: Locator, out: &mut W) -> io::Result<()> {
        match passage(self.corpus, &locator) {
            Ok(passage) => {
                writeln!(out, "{}", render_passage(&passage, self.options))?;
                writeln!(out, "Loaded passage: {}", passage.reference)?;
                self.current = Some(locator);
                Ok(())
            }
            Err(err) => friendly_error(out, &err.to_string(), None),
        }
    }
}

fn friendly_error<W: Write>(out: &mut W, message: &str, hint: Option<&str>) -> io::Result<()> {
    writeln!(out, "{message}")?;
    if let Some(hint) = hint {
        writeln!(out, "{hint}")?;
    }
    writeln!(out)
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod tests;

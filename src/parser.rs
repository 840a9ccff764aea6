//! Turns loosely typed references like `"song of solomon 2 : 1 - 4,"` into a [`Locator`].
//!
//! Parsing is purely structural. The section name keeps the user's spelling and casing, and
//! numbers are not checked against the corpus; [`crate::lookup`] does both afterwards.

use crate::error::ParseError;
use crate::locator::{LineSelector, Locator};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static AROUND_COLON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*:\s*").unwrap());
static AROUND_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-\s*").unwrap());

const TRAILING_PUNCTUATION: &[char] = &[',', '.', ';', ':'];

/// Parse a human-entered reference.
///
/// Accepted shapes are `"<section> <n>"`, `"<section> <n>:<m>"` and `"<section> <n>:<m>-<k>"`,
/// where the section may span several words. Spaces around `:` and `-` are ignored and
/// trailing `,.;:` is dropped.
///
/// # Errors
///
/// Returns [`ParseError`] when there is no section or no chapter expression, or when any
/// number fails to parse. No partial result is ever produced.
pub fn parse(raw: &str) -> Result<Locator, ParseError> {
    let normalized = AROUND_COLON.replace_all(raw.trim(), ":");
    let normalized = AROUND_DASH.replace_all(&normalized, "-");
    let normalized = normalized.trim_end_matches(TRAILING_PUNCTUATION);

    let parts: Vec<&str> = normalized.split_whitespace().collect();
    let Some((expression, name)) = parts.split_last() else {
        return Err(ParseError);
    };
    if name.is_empty() {
        return Err(ParseError);
    }
    let section = name.join(" ");

    let Some((chapter, verses)) = expression.split_once(':') else {
        return Ok(Locator::whole(section, number(expression)?));
    };
    let subsection = number(chapter)?;

    let lines = match verses.split_once('-') {
        Some((start, end)) => LineSelector::Range {
            start: number(start)?,
            end: number(end)?,
        },
        None => LineSelector::Line {
            line: number(verses)?,
        },
    };

    Ok(Locator {
        section,
        subsection,
        lines,
    })
}

/// Strict integer token: digits only (a leading `+` is tolerated), no stray separators.
fn number(token: &str) -> Result<u32, ParseError> {
    token.parse().map_err(|_| ParseError)
}

impl FromStr for Locator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;

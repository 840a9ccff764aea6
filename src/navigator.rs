//! Sequential movement through the corpus.
//!
//! Both directions cross subsection and section boundaries in document order and stop with a
//! [`Boundary`] at either end. Line-mode positions move line by line and land on a single line
//! when they cross into another subsection. Whole-subsection positions move a subsection at a
//! time and stay whole.
//!
//! Inputs must already be resolved: canonical section, numbers in bounds.

use crate::corpus::CorpusAccess;
use crate::error::Boundary;
use crate::locator::{LineSelector, Locator};

/// The locator after `at`, or [`Boundary::EndOfCorpus`].
///
/// A range continues from its last line.
///
/// # Errors
///
/// Returns [`Boundary::EndOfCorpus`] when `at` is the last position of the corpus.
pub fn next<C: CorpusAccess + ?Sized>(corpus: &C, at: &Locator) -> Result<Locator, Boundary> {
    let section = at.section.as_str();
    let whole = at.is_whole();

    let current_line = match at.lines {
        LineSelector::Whole => None,
        LineSelector::Line { line } | LineSelector::Range { end: line, .. } => Some(line),
    };
    if let Some(line) = current_line {
        if line < corpus.line_count(section, at.subsection).unwrap_or(0) {
            return Ok(Locator::line(section, at.subsection, line + 1));
        }
    }

    if at.subsection < corpus.subsection_count(section).unwrap_or(0) {
        return Ok(opening(section, at.subsection + 1, whole));
    }

    let names = corpus.section_names();
    let following = names
        .iter()
        .position(|name| *name == section)
        .and_then(|index| names.get(index + 1));
    match following {
        Some(name) => Ok(opening(name, 1, whole)),
        None => Err(Boundary::EndOfCorpus),
    }
}

/// The locator before `at`, or [`Boundary::StartOfCorpus`].
///
/// A range steps back from its last line.
///
/// # Errors
///
/// Returns [`Boundary::StartOfCorpus`] when `at` is the first position of the corpus.
pub fn prev<C: CorpusAccess + ?Sized>(corpus: &C, at: &Locator) -> Result<Locator, Boundary> {
    let section = at.section.as_str();
    let whole = at.is_whole();

    let current_line = match at.lines {
        LineSelector::Whole => None,
        LineSelector::Line { line } | LineSelector::Range { end: line, .. } => Some(line),
    };
    if let Some(line) = current_line {
        if line > 1 {
            return Ok(Locator::line(section, at.subsection, line - 1));
        }
    }

    if at.subsection > 1 {
        return Ok(closing(corpus, section, at.subsection - 1, whole));
    }

    let names = corpus.section_names();
    let preceding = names
        .iter()
        .position(|name| *name == section)
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| names.get(index));
    match preceding {
        Some(name) => {
            let last = corpus.subsection_count(name).unwrap_or(1);
            Ok(closing(corpus, name, last, whole))
        }
        None => Err(Boundary::StartOfCorpus),
    }
}

/// First line of the corpus, if it has any sections.
#[must_use]
pub fn first<C: CorpusAccess + ?Sized>(corpus: &C) -> Option<Locator> {
    corpus
        .section_names()
        .first()
        .map(|name| Locator::line(*name, 1, 1))
}

/// Entry point of a subsection reached moving forward.
fn opening(section: &str, subsection: u32, whole: bool) -> Locator {
    if whole {
        Locator::whole(section, subsection)
    } else {
        Locator::line(section, subsection, 1)
    }
}

/// Entry point of a subsection reached moving backward.
fn closing<C: CorpusAccess + ?Sized>(
    corpus: &C,
    section: &str,
    subsection: u32,
    whole: bool,
) -> Locator {
    if whole {
        Locator::whole(section, subsection)
    } else {
        let last = corpus.line_count(section, subsection).unwrap_or(1);
        Locator::line(section, subsection, last)
    }
}

#[cfg(test)]
#[path = "tests/navigator.rs"]
mod tests;

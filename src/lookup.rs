//! Resolution of parsed references against the corpus, and passage extraction.
//!
//! A parsed [`Locator`] may name a section loosely and ask for numbers the corpus does not
//! have. [`resolve_locator`] canonicalizes the section and checks every number; only its
//! output is valid input for [`crate::navigator`] and [`passage`].

use crate::corpus::CorpusAccess;
use crate::error::{LookupError, Result};
use crate::locator::{LineSelector, Locator};
use crate::parser::parse;
use crate::resolver::resolve;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A locator checked against the corpus.
pub struct Resolved {
    /// Canonical, in-bounds locator.
    pub locator: Locator,
    /// The section name as typed, when a fuzzy correction replaced it.
    pub corrected_from: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One numbered line of a passage.
pub struct Verse {
    /// Line number within its subsection.
    pub number: u32,
    /// Line text.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// The lines a resolved locator denotes, in order.
pub struct Passage {
    /// Canonical reference label, e.g. `"John 3:16-18"`.
    pub reference: String,
    /// Locator the passage was read from.
    pub locator: Locator,
    /// Lines of the passage.
    pub verses: Vec<Verse>,
}

/// Canonicalize the section of `locator` and check its numbers against `corpus`.
///
/// # Errors
///
/// Returns [`LookupError::UnknownSection`] when no section matches, [`LookupError::BelowOne`]
/// for a zero subsection or line, and the out-of-range variants when a number exceeds what the
/// corpus holds or a range is reversed.
pub fn resolve_locator<C: CorpusAccess + ?Sized>(
    corpus: &C,
    locator: Locator,
) -> Result<Resolved> {
    let names = corpus.section_names();
    let resolution = resolve(&names, &locator.section);
    if !resolution.is_known(&names) {
        return Err(LookupError::UnknownSection(locator.section));
    }
    let corrected_from = resolution.corrected.then(|| {
        log::info!(
            "autosuggest: corrected '{}' to '{}'",
            locator.section,
            resolution.name
        );
        locator.section.clone()
    });

    let section = resolution.name;
    let subsection = locator.subsection;
    if subsection == 0 {
        return Err(LookupError::BelowOne { unit: "Chapters" });
    }
    let chapters = corpus.subsection_count(&section).unwrap_or(0);
    if subsection > chapters {
        return Err(LookupError::SubsectionOutOfRange {
            section,
            requested: subsection,
            available: chapters,
        });
    }
    let available = corpus.line_count(&section, subsection).unwrap_or(0);

    match locator.lines {
        LineSelector::Whole => {}
        LineSelector::Line { line: 0 } => return Err(LookupError::BelowOne { unit: "Verses" }),
        LineSelector::Line { line } if line > available => {
            return Err(LookupError::LineOutOfRange {
                section,
                subsection,
                requested: line,
                available,
            });
        }
        LineSelector::Line { .. } => {}
        LineSelector::Range { start, end } if start < 1 || start > end || end > available => {
            return Err(LookupError::InvalidRange {
                section,
                subsection,
                start,
                end,
                available,
            });
        }
        LineSelector::Range { .. } => {}
    }

    Ok(Resolved {
        locator: Locator {
            section,
            subsection,
            lines: locator.lines,
        },
        corrected_from,
    })
}

/// Collect the lines a resolved locator denotes.
///
/// # Errors
///
/// Returns [`LookupError::UnknownSection`] or an out-of-range error if `locator` does not
/// actually fit the corpus.
pub fn passage<C: CorpusAccess + ?Sized>(corpus: &C, locator: &Locator) -> Result<Passage> {
    let section = locator.section.as_str();
    let available = corpus
        .line_count(section, locator.subsection)
        .ok_or_else(|| match corpus.subsection_count(section) {
            Some(chapters) => LookupError::SubsectionOutOfRange {
                section: section.to_string(),
                requested: locator.subsection,
                available: chapters,
            },
            None => LookupError::UnknownSection(section.to_string()),
        })?;

    let verses = locator
        .line_numbers(available)
        .into_iter()
        .map(|number| {
            corpus
                .line(section, locator.subsection, number)
                .map(|text| Verse {
                    number,
                    text: text.to_string(),
                })
                .ok_or_else(|| LookupError::LineOutOfRange {
                    section: section.to_string(),
                    subsection: locator.subsection,
                    requested: number,
                    available,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Passage {
        reference: locator.to_string(),
        locator: locator.clone(),
        verses,
    })
}

/// Parse, resolve and read a reference in one step.
///
/// # Errors
///
/// Returns [`LookupError::Parse`] for malformed input and any error of [`resolve_locator`].
pub fn lookup_reference<C: CorpusAccess + ?Sized>(
    corpus: &C,
    raw: &str,
) -> Result<(Resolved, Passage)> {
    let resolved = resolve_locator(corpus, parse(raw)?)?;
    let passage = passage(corpus, &resolved.locator)?;
    Ok((resolved, passage))
}

#[cfg(test)]
#[path = "tests/lookup.rs"]
mod tests;

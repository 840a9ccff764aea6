//! Structured references into the corpus.
//!
//! A locator names a section, a subsection within it, and which lines of that subsection are
//! wanted. Locators are plain values: the parser and navigator build fresh ones and nothing
//! mutates them in place.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Which lines of a subsection a locator denotes.
pub enum LineSelector {
    /// The whole subsection.
    Whole,
    /// A single line.
    Line {
        /// 1-indexed line number.
        line: u32,
    },
    /// An inclusive run of lines. The parser does not order the bounds; lookup rejects
    /// `start > end`.
    Range {
        /// First line of the run.
        start: u32,
        /// Last line of the run (inclusive).
        end: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
/// A section, subsection and line selection.
///
/// Straight out of the parser the section is spelled however the user typed it. After
/// [`crate::lookup::resolve_locator`] it is the canonical corpus name and every number is in
/// bounds.
pub struct Locator {
    /// Section name (canonical once resolved).
    pub section: String,
    /// 1-indexed subsection number.
    pub subsection: u32,
    /// Line selection within the subsection.
    pub lines: LineSelector,
}

impl Locator {
    #[must_use]
    /// Locator for a whole subsection.
    pub fn whole(section: impl Into<String>, subsection: u32) -> Self {
        Self {
            section: section.into(),
            subsection,
            lines: LineSelector::Whole,
        }
    }

    #[must_use]
    /// Locator for a single line.
    pub fn line(section: impl Into<String>, subsection: u32, line: u32) -> Self {
        Self {
            section: section.into(),
            subsection,
            lines: LineSelector::Line { line },
        }
    }

    #[must_use]
    /// Locator for an inclusive line range.
    pub fn range(section: impl Into<String>, subsection: u32, start: u32, end: u32) -> Self {
        Self {
            section: section.into(),
            subsection,
            lines: LineSelector::Range { start, end },
        }
    }

    #[must_use]
    /// Same position under a different section name.
    pub fn with_section(&self, section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            subsection: self.subsection,
            lines: self.lines,
        }
    }

    #[must_use]
    /// Whether this locator covers a whole subsection.
    pub const fn is_whole(&self) -> bool {
        matches!(self.lines, LineSelector::Whole)
    }

    #[must_use]
    /// Line numbers this locator denotes, given the subsection's line count.
    ///
    /// Ranges are clipped to `line_count`; a whole subsection yields `1..=line_count`.
    pub fn line_numbers(&self, line_count: u32) -> Vec<u32> {
        match self.lines {
            LineSelector::Whole => (1..=line_count).collect(),
            LineSelector::Line { line } => vec![line],
            LineSelector::Range { start, end } => (start..=end.min(line_count)).collect(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lines {
            LineSelector::Whole => write!(f, "{} {}", self.section, self.subsection),
            LineSelector::Line { line } => {
                write!(f, "{} {}:{line}", self.section, self.subsection)
            }
            LineSelector::Range { start, end } => {
                write!(f, "{} {}:{start}-{end}", self.section, self.subsection)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/locator.rs"]
mod tests;

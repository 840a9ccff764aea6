//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for lookups.
pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Reference not recognized")]
/// The input does not match the reference grammar.
///
/// Deliberately carries no detail: every parse failure is reported the same way.
pub struct ParseError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Expected terminal states of navigation.
pub enum Boundary {
    /// Stepped forward past the last line of the corpus.
    #[error("No further passage found in this direction.")]
    EndOfCorpus,
    /// Stepped backward past the first line of the corpus.
    #[error("No further passage found in this direction.")]
    StartOfCorpus,
}

#[derive(Error, Debug)]
/// Problems reading or interpreting a corpus file.
pub enum CorpusError {
    /// The file could not be read.
    #[error("Unable to read corpus at {path}: {source}")]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not in the expected JSON layout.
    #[error("Malformed corpus: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Failures resolving a reference against the corpus.
pub enum LookupError {
    /// The reference string did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No section matches the name, even fuzzily.
    #[error("Unable to locate the book '{0}'.")]
    UnknownSection(String),

    /// Subsection or line number zero.
    #[error("{unit} begin at 1.")]
    BelowOne {
        /// "Chapters" or "Verses".
        unit: &'static str,
    },

    /// Subsection number past the end of the section.
    #[error("{section} contains only {available} chapters.")]
    SubsectionOutOfRange {
        /// Canonical section name.
        section: String,
        /// Subsection that was asked for.
        requested: u32,
        /// Number of subsections in the section.
        available: u32,
    },

    /// Line number past the end of the subsection.
    #[error("{section} {subsection} contains only {available} verses.")]
    LineOutOfRange {
        /// Canonical section name.
        section: String,
        /// Subsection number.
        subsection: u32,
        /// Line that was asked for.
        requested: u32,
        /// Number of lines in the subsection.
        available: u32,
    },

    /// Range with `start > end`, `start == 0` or `end` past the subsection.
    #[error("Verse range invalid. {section} {subsection} contains {available} verses.")]
    InvalidRange {
        /// Canonical section name.
        section: String,
        /// Subsection number.
        subsection: u32,
        /// First line asked for.
        start: u32,
        /// Last line asked for.
        end: u32,
        /// Number of lines in the subsection.
        available: u32,
    },

    /// Navigation ran off either end of the corpus.
    #[error(transparent)]
    Boundary(#[from] Boundary),

    /// Keyword queries need at least two characters.
    #[error("Search term must be at least 2 characters.")]
    QueryTooShort,
}

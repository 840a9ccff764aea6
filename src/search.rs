//! Keyword lookup: a linear, case-insensitive substring scan in document order.
//!
//! There is no index and no ranking; hits come back in the order they appear in the corpus.
//! [`lookup`] ties the two query styles together by trying a reference first and falling back to
//! a keyword scan.

use crate::corpus::CorpusAccess;
use crate::error::{LookupError, Result};
use crate::lookup::{lookup_reference, Passage};
use crate::resolver::resolve;
use serde::Serialize;

/// Hard ceiling on hits collected by one scan unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 5000;
/// Hits per page unless asked otherwise.
pub const DEFAULT_PER_PAGE: usize = 20;
/// Largest page size accepted.
pub const MAX_PER_PAGE: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A line containing the query.
pub struct Hit {
    /// Canonical section name.
    pub book: String,
    /// Subsection number.
    pub chapter: u32,
    /// Line number.
    pub verse: u32,
    /// Line text.
    pub text: String,
    /// Reference label, e.g. `"John 3:16"`.
    pub reference: String,
}

#[derive(Clone, Debug, Serialize)]
/// All hits in one section.
pub struct Group {
    /// Section name.
    pub book: String,
    /// Number of hits in the group.
    pub count: usize,
    /// Hits in document order.
    pub verses: Vec<Hit>,
}

#[derive(Clone, Debug, Serialize)]
/// One page of grouped results.
pub struct Page {
    /// The trimmed query.
    pub query: String,
    /// Current page, clamped into `1..=total_pages`.
    pub page: usize,
    /// Page size actually used.
    pub per_page: usize,
    /// Hits across all pages.
    pub total: usize,
    /// Number of pages (at least one).
    pub total_pages: usize,
    /// Whether the scan stopped at its limit.
    pub truncated: bool,
    /// This page's hits grouped by section.
    pub results: Vec<Group>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
/// Answer to a free-form query.
pub enum Answer {
    /// The query parsed and resolved as a reference.
    Reference {
        /// The trimmed query.
        query: String,
        /// The passage it denotes.
        result: Passage,
    },
    /// The query was treated as a keyword.
    Keyword(Page),
}

/// Scan for lines containing `query`, optionally within one section.
///
/// `book` goes through the section resolver, so misspellings are tolerated. At most `limit`
/// hits are returned.
///
/// # Errors
///
/// Returns [`LookupError::QueryTooShort`] for queries under two characters and
/// [`LookupError::UnknownSection`] when `book` names no section.
pub fn search<C: CorpusAccess + ?Sized>(
    corpus: &C,
    query: &str,
    book: Option<&str>,
    limit: usize,
) -> Result<Vec<Hit>> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < 2 {
        return Err(LookupError::QueryTooShort);
    }

    let names = corpus.section_names();
    let scope: Vec<&str> = match book {
        Some(typed) => {
            let resolution = resolve(&names, typed);
            if !resolution.is_known(&names) {
                return Err(LookupError::UnknownSection(typed.to_string()));
            }
            names
                .iter()
                .copied()
                .filter(|name| *name == resolution.name)
                .collect()
        }
        None => names.clone(),
    };

    let mut hits = Vec::new();
    for section in scope {
        for chapter in 1..=corpus.subsection_count(section).unwrap_or(0) {
            for verse in 1..=corpus.line_count(section, chapter).unwrap_or(0) {
                let Some(text) = corpus.line(section, chapter, verse) else {
                    continue;
                };
                if !text.to_lowercase().contains(&needle) {
                    continue;
                }
                hits.push(Hit {
                    book: section.to_string(),
                    chapter,
                    verse,
                    text: text.to_string(),
                    reference: format!("{section} {chapter}:{verse}"),
                });
                if hits.len() >= limit {
                    log::debug!("search for '{needle}' stopped at {limit} hits");
                    return Ok(hits);
                }
            }
        }
    }
    Ok(hits)
}

/// Group hits by section, keeping sections in first-seen order.
#[must_use]
pub fn group(hits: Vec<Hit>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for hit in hits {
        match groups.last_mut() {
            Some(current) if current.book == hit.book => {
                current.count += 1;
                current.verses.push(hit);
            }
            _ => groups.push(Group {
                book: hit.book.clone(),
                count: 1,
                verses: vec![hit],
            }),
        }
    }
    groups
}

/// Slice `hits` into one page.
///
/// `per_page` is clamped to `1..=MAX_PER_PAGE` and `page` into the valid page range, so an
/// out-of-range request shows the nearest page instead of nothing.
#[must_use]
pub fn paginate(query: &str, hits: Vec<Hit>, page: usize, per_page: usize, limit: usize) -> Page {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let total = hits.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let results = group(hits.into_iter().skip(start).take(per_page).collect());

    Page {
        query: query.trim().to_string(),
        page,
        per_page,
        total,
        total_pages,
        truncated: total >= limit,
        results,
    }
}

/// Answer `query` as a reference if it is one, otherwise as a keyword search.
///
/// # Errors
///
/// Returns an error only when the query falls through to keyword search and that fails.
pub fn lookup<C: CorpusAccess + ?Sized>(
    corpus: &C,
    query: &str,
    page: usize,
    per_page: usize,
    limit: usize,
) -> Result<Answer> {
    let trimmed = query.trim();
    match lookup_reference(corpus, trimmed) {
        Ok((_, passage)) => Ok(Answer::Reference {
            query: trimmed.to_string(),
            result: passage,
        }),
        Err(err) => {
            log::debug!("'{trimmed}' is not a reference ({err}); searching keywords");
            let hits = search(corpus, trimmed, None, limit)?;
            Ok(Answer::Keyword(paginate(trimmed, hits, page, per_page, limit)))
        }
    }
}

#[cfg(test)]
#[path = "tests/search.rs"]
mod tests;

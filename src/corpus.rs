//! Read-only access to the loaded text.
//!
//! The corpus file is a flat JSON object mapping section names to objects that map
//! subsection numbers to arrays of lines:
//!
//! ```json
//! { "Genesis": { "1": ["Genesis 1:1\tIn the beginning ...", "..."], "2": ["..."] } }
//! ```
//!
//! Section order in the file is document order, which navigation relies on, so the corpus is
//! deserialized with a map visitor rather than through an ordered-by-key map.

use crate::error::CorpusError;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Query surface the lookup, navigation and search code needs from a corpus.
pub trait CorpusAccess {
    /// Section names in document order.
    fn section_names(&self) -> Vec<&str>;
    /// Number of subsections in `section`, if it exists.
    fn subsection_count(&self, section: &str) -> Option<u32>;
    /// Number of lines in a subsection, if it exists.
    fn line_count(&self, section: &str, subsection: u32) -> Option<u32>;
    /// Text of one line, if it exists.
    fn line(&self, section: &str, subsection: u32, line: u32) -> Option<&str>;
}

#[derive(Clone, Debug)]
/// One named section with its subsections in order.
pub struct Section {
    /// Canonical section name.
    pub name: String,
    /// Subsection `n` lives at index `n - 1`; each holds its lines in order.
    pub subsections: Vec<Vec<String>>,
}

#[derive(Clone, Debug, Default)]
/// The whole text held in memory.
pub struct Corpus {
    sections: Vec<Section>,
}

impl Corpus {
    /// Read and parse a corpus file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a well-formed corpus.
    pub fn open(path: &Path) -> Result<Self, CorpusError> {
        let contents = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_json(&contents)?;
        log::info!(
            "loaded {} sections from {}",
            corpus.sections.len(),
            path.display()
        );
        Ok(corpus)
    }

    /// Parse a corpus from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a well-formed corpus.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    fn subsection(&self, section: &str, subsection: u32) -> Option<&Vec<String>> {
        let index = usize::try_from(subsection).ok()?.checked_sub(1)?;
        self.section(section)?.subsections.get(index)
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl CorpusAccess for Corpus {
    fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    fn subsection_count(&self, section: &str) -> Option<u32> {
        self.section(section).map(|s| count(s.subsections.len()))
    }

    fn line_count(&self, section: &str, subsection: u32) -> Option<u32> {
        self.subsection(section, subsection).map(|l| count(l.len()))
    }

    fn line(&self, section: &str, subsection: u32, line: u32) -> Option<&str> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.subsection(section, subsection)?
            .get(index)
            .map(String::as_str)
    }
}

/// Strip the reference prefix some corpus files put in front of each line.
///
/// `"Genesis 1:1\tIn the beginning"` keeps only the text after the tab. Without a tab, a
/// leading `"<section> c:v "` is dropped when the first word is the section name.
fn clean_line(section: &str, raw: &str) -> String {
    if let Some((_, text)) = raw.split_once('\t') {
        return text.trim().to_string();
    }
    let mut words = raw.split(' ');
    if raw.contains(' ') && words.next().is_some_and(|w| w.eq_ignore_ascii_case(section)) {
        // words[1] is the "c:v" marker
        return words.skip(1).collect::<Vec<_>>().join(" ").trim().to_string();
    }
    raw.trim().to_string()
}

struct CorpusVisitor;

impl<'de> Visitor<'de> for CorpusVisitor {
    type Value = Corpus;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of section names to numbered subsections")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Corpus, A::Error> {
        let mut sections: Vec<Section> = Vec::new();
        while let Some((name, numbered)) = map.next_entry::<String, BTreeMap<u32, Vec<String>>>()? {
            if sections.iter().any(|s| s.name == name) {
                return Err(de::Error::custom(format!("duplicate section '{name}'")));
            }
            if numbered.is_empty() {
                return Err(de::Error::custom(format!("section '{name}' has no chapters")));
            }
            let mut subsections = Vec::with_capacity(numbered.len());
            for (expected, (number, lines)) in (1u32..).zip(numbered) {
                if number != expected {
                    return Err(de::Error::custom(format!(
                        "section '{name}' skips from chapter {} to {number}",
                        expected - 1
                    )));
                }
                if lines.is_empty() {
                    return Err(de::Error::custom(format!(
                        "{name} {number} has no verses"
                    )));
                }
                subsections.push(lines.iter().map(|l| clean_line(&name, l)).collect());
            }
            sections.push(Section { name, subsections });
        }
        Ok(Corpus { sections })
    }
}

impl<'de> Deserialize<'de> for Corpus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CorpusVisitor)
    }
}

#[cfg(test)]
#[path = "tests/corpus.rs"]
mod tests;

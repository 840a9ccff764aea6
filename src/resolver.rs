//! Maps a typed section name onto the corpus spelling.
//!
//! An exact match ignoring case always wins. Otherwise the closest corpus name is taken if it
//! is similar enough, and failing that the typed name passes through untouched.

use crate::similarity::close_match;

/// Minimum similarity for a fuzzy correction to be accepted.
pub const FUZZY_CUTOFF: f64 = 0.6;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of resolving a section name.
pub struct Resolution {
    /// Canonical corpus name, or the typed name when nothing matched.
    pub name: String,
    /// Whether `name` came from a fuzzy correction.
    pub corrected: bool,
}

impl Resolution {
    #[must_use]
    /// Whether the resolved name is actually one of `sections`.
    ///
    /// An uncorrected resolution is either already canonical or unknown; this tells them apart.
    pub fn is_known<S: AsRef<str>>(&self, sections: &[S]) -> bool {
        sections.iter().any(|s| s.as_ref() == self.name)
    }
}

/// Resolve `typed` against the ordered corpus section names.
#[must_use]
pub fn resolve<S: AsRef<str>>(sections: &[S], typed: &str) -> Resolution {
    let wanted = typed.trim().to_lowercase();

    if let Some(exact) = sections
        .iter()
        .find(|s| s.as_ref().to_lowercase() == wanted)
    {
        return Resolution {
            name: exact.as_ref().to_string(),
            corrected: false,
        };
    }

    let folded: Vec<String> = sections.iter().map(|s| s.as_ref().to_lowercase()).collect();
    match close_match(&wanted, &folded, FUZZY_CUTOFF) {
        Some(index) => Resolution {
            name: sections[index].as_ref().to_string(),
            corrected: true,
        },
        None => Resolution {
            name: typed.to_string(),
            corrected: false,
        },
    }
}

#[cfg(test)]
#[path = "tests/resolver.rs"]
mod tests;

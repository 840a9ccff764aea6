//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a verbum.toml, and if present we load settings from there.
//! This provides the corpus location, search paging and colour preferences. The corpus path
//! can also come from the `VERBUM_CORPUS` environment variable, which beats the file.

use crate::search::{DEFAULT_LIMIT, DEFAULT_PER_PAGE};
use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked for in the working directory.
pub const CONFIG_FILE: &str = "verbum.toml";
/// Environment variable overriding the corpus location.
pub const CORPUS_ENV: &str = "VERBUM_CORPUS";
/// Corpus location when nothing else is configured.
pub const DEFAULT_CORPUS_PATH: &str = "data/bible.json";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from verbum.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_CORPUS_PATH.to_string())]
    /// JSON corpus to read from.
    pub corpus_path: String,
    #[facet(default = DEFAULT_PER_PAGE)]
    /// Keyword hits shown per page.
    pub page_size: usize,
    #[facet(default = DEFAULT_LIMIT)]
    /// Maximum keyword hits collected by one search.
    pub search_limit: usize,
    #[facet(default = true)]
    /// Style terminal output with colours.
    pub color: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from verbum.toml if present, then apply the environment.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        let mut config = Self::load_from(Path::new(CONFIG_FILE));
        if let Some(path) = std::env::var_os(CORPUS_ENV) {
            config.corpus_path = path.to_string_lossy().into_owned();
        }
        config
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is missing or malformed.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
            log::warn!("ignoring malformed {}", path.display());
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    #[must_use]
    /// The configured corpus location.
    pub fn corpus_path(&self) -> PathBuf {
        PathBuf::from(&self.corpus_path)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;

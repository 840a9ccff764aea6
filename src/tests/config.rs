use super::{Config, DEFAULT_CORPUS_PATH};
use crate::search::{DEFAULT_LIMIT, DEFAULT_PER_PAGE};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/verbum.toml"));
    assert_eq!(config.corpus_path, DEFAULT_CORPUS_PATH);
    assert_eq!(config.page_size, DEFAULT_PER_PAGE);
    assert_eq!(config.search_limit, DEFAULT_LIMIT);
    assert!(config.color);
}

#[test]
fn test_empty_file_takes_field_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = Config::load_from(file.path());
    assert_eq!(config.corpus_path, DEFAULT_CORPUS_PATH);
    assert_eq!(config.page_size, DEFAULT_PER_PAGE);
    assert_eq!(config.search_limit, DEFAULT_LIMIT);
    assert!(config.color);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "corpus_path = \"texts/kjv.json\"\npage_size = 5").unwrap();
    let config = Config::load_from(file.path());
    assert_eq!(config.corpus_path, "texts/kjv.json");
    assert_eq!(config.page_size, 5);
    assert_eq!(config.search_limit, DEFAULT_LIMIT);
    assert_eq!(config.corpus_path(), Path::new("texts/kjv.json"));
}

#[test]
fn test_malformed_file_falls_back() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "page_size = \"many\"").unwrap();
    let config = Config::load_from(file.path());
    assert_eq!(config.page_size, DEFAULT_PER_PAGE);
}

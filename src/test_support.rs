//! Corpora shared by the unit tests.

use crate::corpus::Corpus;
use serde_json::{Map, Value};

fn chapter(book: &str, number: u32, verses: u32) -> Value {
    (1..=verses)
        .map(|v| Value::String(format!("{book} {number}:{v}\t{book} line {number}.{v}")))
        .collect()
}

fn book(name: &str, verse_counts: &[u32]) -> Value {
    let mut chapters = Map::new();
    for (number, verses) in (1u32..).zip(verse_counts) {
        chapters.insert(number.to_string(), chapter(name, number, *verses));
    }
    Value::Object(chapters)
}

/// Genesis (50 chapters; 1 has 31 verses, 2 has 25, the rest 10), Exodus (3, 2 verses) and a
/// one-chapter "Song of Solomon".
pub fn sample() -> Corpus {
    let mut genesis = vec![31, 25];
    genesis.extend(std::iter::repeat_n(10, 48));
    // assembled by hand: a serde_json map would reorder the books
    let text = format!(
        r#"{{"Genesis": {}, "Exodus": {}, "Song of Solomon": {}}}"#,
        book("Genesis", &genesis),
        book("Exodus", &[3, 2]),
        book("Song of Solomon", &[2]),
    );
    Corpus::from_json(&text).unwrap()
}

/// A single book with a single verse.
pub fn single() -> Corpus {
    Corpus::from_json(r#"{"Test": {"1": ["Only verse."]}}"#).unwrap()
}

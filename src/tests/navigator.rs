use super::{first, next, prev};
use crate::corpus::CorpusAccess;
use crate::error::Boundary;
use crate::locator::Locator;
use crate::test_support::{sample, single};

#[test]
fn test_next_line_within_chapter() {
    let corpus = sample();
    assert_eq!(
        next(&corpus, &Locator::line("Genesis", 1, 1)),
        Ok(Locator::line("Genesis", 1, 2))
    );
}

#[test]
fn test_next_crosses_chapter() {
    let corpus = sample();
    assert_eq!(
        next(&corpus, &Locator::line("Genesis", 1, 31)),
        Ok(Locator::line("Genesis", 2, 1))
    );
}

#[test]
fn test_next_crosses_book() {
    let corpus = sample();
    assert_eq!(
        next(&corpus, &Locator::line("Genesis", 50, 10)),
        Ok(Locator::line("Exodus", 1, 1))
    );
}

#[test]
fn test_next_range_continues_from_end() {
    let corpus = sample();
    assert_eq!(
        next(&corpus, &Locator::range("Genesis", 1, 1, 3)),
        Ok(Locator::line("Genesis", 1, 4))
    );
    // range shape never crosses a chapter boundary
    assert_eq!(
        next(&corpus, &Locator::range("Genesis", 1, 29, 31)),
        Ok(Locator::line("Genesis", 2, 1))
    );
}

#[test]
fn test_next_whole_chapter_stays_whole() {
    let corpus = sample();
    assert_eq!(
        next(&corpus, &Locator::whole("Genesis", 1)),
        Ok(Locator::whole("Genesis", 2))
    );
    assert_eq!(
        next(&corpus, &Locator::whole("Genesis", 50)),
        Ok(Locator::whole("Exodus", 1))
    );
}

#[test]
fn test_next_at_end_of_corpus() {
    let corpus = sample();
    assert_eq!(
        next(&corpus, &Locator::line("Song of Solomon", 1, 2)),
        Err(Boundary::EndOfCorpus)
    );
    assert_eq!(
        next(&corpus, &Locator::whole("Song of Solomon", 1)),
        Err(Boundary::EndOfCorpus)
    );
}

#[test]
fn test_prev_line_within_chapter() {
    let corpus = sample();
    assert_eq!(
        prev(&corpus, &Locator::line("Genesis", 1, 2)),
        Ok(Locator::line("Genesis", 1, 1))
    );
}

#[test]
fn test_prev_crosses_chapter_to_last_line() {
    let corpus = sample();
    assert_eq!(
        prev(&corpus, &Locator::line("Genesis", 2, 1)),
        Ok(Locator::line("Genesis", 1, 31))
    );
}

#[test]
fn test_prev_crosses_book_to_last_chapter() {
    let corpus = sample();
    assert_eq!(
        prev(&corpus, &Locator::line("Exodus", 1, 1)),
        Ok(Locator::line("Genesis", 50, 10))
    );
    assert_eq!(
        prev(&corpus, &Locator::whole("Exodus", 1)),
        Ok(Locator::whole("Genesis", 50))
    );
}

#[test]
fn test_prev_range_steps_back_from_end() {
    let corpus = sample();
    assert_eq!(
        prev(&corpus, &Locator::range("Genesis", 1, 4, 6)),
        Ok(Locator::line("Genesis", 1, 5))
    );
    assert_eq!(
        prev(&corpus, &Locator::range("Exodus", 2, 1, 2)),
        Ok(Locator::line("Exodus", 2, 1))
    );
    assert_eq!(
        prev(&corpus, &Locator::range("Exodus", 2, 1, 1)),
        Ok(Locator::line("Exodus", 1, 3))
    );
}

#[test]
fn test_prev_whole_chapter_stays_whole() {
    let corpus = sample();
    assert_eq!(
        prev(&corpus, &Locator::whole("Genesis", 2)),
        Ok(Locator::whole("Genesis", 1))
    );
}

#[test]
fn test_prev_at_start_of_corpus() {
    let corpus = sample();
    assert_eq!(
        prev(&corpus, &Locator::line("Genesis", 1, 1)),
        Err(Boundary::StartOfCorpus)
    );
    assert_eq!(
        prev(&corpus, &Locator::whole("Genesis", 1)),
        Err(Boundary::StartOfCorpus)
    );
}

#[test]
fn test_single_verse_corpus_has_no_neighbours() {
    let corpus = single();
    let only = Locator::line("Test", 1, 1);
    assert_eq!(next(&corpus, &only), Err(Boundary::EndOfCorpus));
    assert_eq!(prev(&corpus, &only), Err(Boundary::StartOfCorpus));
}

#[test]
fn test_next_and_prev_are_inverse_away_from_boundaries() {
    let corpus = sample();
    for locator in [
        Locator::line("Genesis", 1, 15),
        Locator::line("Genesis", 1, 31),
        Locator::line("Genesis", 2, 1),
        Locator::line("Genesis", 50, 10),
        Locator::line("Exodus", 1, 1),
        Locator::whole("Genesis", 2),
        Locator::whole("Exodus", 1),
    ] {
        let forward = next(&corpus, &locator).unwrap();
        assert_eq!(prev(&corpus, &forward), Ok(locator.clone()));
        let backward = prev(&corpus, &locator).unwrap();
        assert_eq!(next(&corpus, &backward), Ok(locator));
    }
}

#[test]
fn test_forward_walk_visits_every_line_once() {
    let corpus = sample();
    let mut expected = Vec::new();
    for name in corpus.section_names() {
        for chapter in 1..=corpus.subsection_count(name).unwrap() {
            for verse in 1..=corpus.line_count(name, chapter).unwrap() {
                expected.push(Locator::line(name, chapter, verse));
            }
        }
    }

    let mut visited = Vec::new();
    let mut at = first(&corpus);
    while let Some(locator) = at {
        at = next(&corpus, &locator).ok();
        visited.push(locator);
    }
    assert_eq!(visited, expected);
}

#[test]
fn test_whole_chapter_walk_never_collapses() {
    let corpus = sample();
    let mut at = Locator::whole("Genesis", 1);
    let mut steps = 1;
    while let Ok(following) = next(&corpus, &at) {
        assert!(following.is_whole(), "{following} lost whole-chapter mode");
        at = following;
        steps += 1;
    }
    assert_eq!(steps, 50 + 2 + 1);
    assert_eq!(at, Locator::whole("Song of Solomon", 1));
}

#[test]
fn test_first_of_empty_corpus() {
    assert_eq!(first(&crate::corpus::Corpus::default()), None);
}

use super::{close_match, ratio};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_identical_and_disjoint() {
    assert_close(ratio("genesis", "genesis"), 1.0);
    assert_close(ratio("abc", "xyz"), 0.0);
    assert_close(ratio("", ""), 1.0);
    assert_close(ratio("abc", ""), 0.0);
}

#[test]
fn test_overlapping_block() {
    // "bcd" is shared: 2 * 3 / 8
    assert_close(ratio("abcd", "bcde"), 0.75);
}

#[test]
fn test_recurses_either_side_of_longest_block() {
    // "genes" then "is": 2 * 7 / 15
    assert_close(ratio("genessis", "genesis"), 14.0 / 15.0);
    // "jo" then "n": 2 * 3 / 7
    assert_close(ratio("jon", "john"), 6.0 / 7.0);
}

#[test]
fn test_counts_chars_not_bytes() {
    assert_close(ratio("ésaïe", "esaie"), 2.0 * 3.0 / 10.0);
}

#[test]
fn test_cutoff_is_inclusive() {
    // 2 * 3 / 10 == 0.6 exactly
    assert_eq!(close_match("abcxy", &["abcde"], 0.6), Some(0));
    assert_eq!(close_match("abc", &["abde"], 0.6), None);
}

#[test]
fn test_best_candidate_wins() {
    let candidates = ["exodus", "genesis", "genes"];
    assert_eq!(close_match("genessis", &candidates, 0.6), Some(1));
}

#[test]
fn test_ties_go_to_first_candidate() {
    assert_eq!(close_match("ab", &["ac", "ad"], 0.0), Some(0));
    assert_eq!(close_match("jxde", &["jade", "jude"], 0.6), Some(0));
    assert_eq!(close_match("jxde", &["jude", "jade"], 0.6), Some(0));
}

#[test]
fn test_no_candidates() {
    let empty: [&str; 0] = [];
    assert_eq!(close_match("genesis", &empty, 0.6), None);
}

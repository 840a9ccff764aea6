//! Gestalt string similarity (Ratcliff/Obershelp).
//!
//! The score of two strings is `2 * M / T`, where `T` is their combined length in chars and
//! `M` is the number of chars covered by matching blocks. Matching blocks are found by taking
//! the longest common substring, then recursing into the unmatched text on either side of it.

/// Similarity of `a` and `b` in `0.0..=1.0`. Two empty strings are identical.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Index of the candidate most similar to `word`, if it scores at least `cutoff`.
///
/// Only one candidate is ever returned. On equal scores the earliest candidate wins.
#[must_use]
pub fn close_match<S: AsRef<str>>(word: &str, candidates: &[S], cutoff: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let score = ratio(word, candidate.as_ref());
        if score < cutoff {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Total length of the matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`. Among runs of equal length the one starting earliest in `a` wins,
/// then the one starting earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run[j] is the length of the common run ending at a[i - 1] and b[j - 1].
    let mut run = vec![0usize; b.len() + 1];
    for i in alo..ahi {
        let mut next = vec![0usize; b.len() + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let size = run[j] + 1;
                next[j + 1] = size;
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        run = next;
    }
    (best_i, best_j, best_size)
}

#[cfg(test)]
#[path = "tests/similarity.rs"]
mod tests;

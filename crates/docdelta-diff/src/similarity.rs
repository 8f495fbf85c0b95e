//! Similarity scoring by recursive longest matching blocks.
//!
//! The matcher finds the longest contiguous block common to both sequences,
//! then recurses into the unmatched stretches on either side of it. The ratio
//! is `2 * M / T`, where `M` is the total length of all blocks found and `T`
//! the combined length of both sequences.
//!
//! On long second sequences (200 elements or more), elements that occur in
//! more than 1% of its positions are not used to seed a match. A match seeded
//! elsewhere is still extended across them. This keeps character-level
//! comparison of whole documents tractable and can be switched off.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Longest-matching-block comparison of two sequences.
#[derive(Debug)]
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions in `b` of every element usable as a match seed.
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Create a matcher with popular-element skipping enabled.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_autojunk(a, b, true)
    }

    /// Create a matcher, choosing whether popular elements of long sequences
    /// are skipped as match seeds.
    pub fn with_autojunk(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, elem) in b.iter().enumerate() {
            b2j.entry(elem).or_default().push(j);
        }

        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Longest block matching within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    /// Returns a zero-sized match at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut best_a, mut best_b, mut best_size) = (alo, blo, 0);

        // Length of the run ending at (i - 1, j), keyed by j.
        let mut run_ending_at: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_runs = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = j
                        .checked_sub(1)
                        .and_then(|p| run_ending_at.get(&p))
                        .copied()
                        .unwrap_or(0);
                    let k = prev + 1;
                    next_runs.insert(j, k);
                    if k > best_size {
                        best_a = i + 1 - k;
                        best_b = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            run_ending_at = next_runs;
        }

        // Grow the block over equal neighbours, including skipped elements.
        while best_a > alo && best_b > blo && self.a[best_a - 1] == self.b[best_b - 1] {
            best_a -= 1;
            best_b -= 1;
            best_size += 1;
        }
        while best_a + best_size < ahi
            && best_b + best_size < bhi
            && self.a[best_a + best_size] == self.b[best_b + best_size]
        {
            best_size += 1;
        }

        Match {
            a: best_a,
            b: best_b,
            size: best_size,
        }
    }

    /// All non-overlapping matching blocks, ordered by position, with
    /// adjacent blocks merged.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a && blo < m.b {
                pending.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                pending.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            blocks.push(m);
        }

        blocks.sort_by_key(|m| (m.a, m.b));

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len());
        for m in blocks {
            if let Some(last) = merged.last_mut() {
                if last.a + last.size == m.a && last.b + last.size == m.b {
                    last.size += m.size;
                    continue;
                }
            }
            merged.push(m);
        }
        merged
    }

    /// Total number of matched elements.
    pub fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|m| m.size).sum()
    }

    /// Similarity ratio in `[0.0, 1.0]`; two empty sequences score `1.0`.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_len() as f64 / total as f64
    }
}

/// Similarity ratio of two sequences, with popular-element skipping.
pub fn similarity<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}

/// Character-level similarity ratio of two texts.
pub fn text_similarity(a: &str, b: &str, autojunk: bool) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::with_autojunk(&a, &b, autojunk).ratio()
}

//! Common test utilities for aligna tests
//!
//! Reference scorers written independently of the matrix code so the engine
//! can be checked against them.
#![allow(dead_code)]

use aligna::bio::alignment::{AlignedPair, ScoringParameters};
use std::collections::HashMap;

fn pair_score(a: char, b: char, scoring: &ScoringParameters) -> i64 {
    i64::from(if a == b {
        scoring.match_score
    } else {
        scoring.mismatch
    })
}

fn gap(scoring: &ScoringParameters) -> i64 {
    i64::from(scoring.gap)
}

/// Best global score by enumerating every alignment. Only for short inputs.
pub fn brute_force_score(a: &[char], b: &[char], scoring: &ScoringParameters) -> i64 {
    match (a.split_first(), b.split_first()) {
        (None, None) => 0,
        (Some(_), None) => gap(scoring) * a.len() as i64,
        (None, Some(_)) => gap(scoring) * b.len() as i64,
        (Some((&x, rest_a)), Some((&y, rest_b))) => {
            let both = pair_score(x, y, scoring) + brute_force_score(rest_a, rest_b, scoring);
            let skip_a = gap(scoring) + brute_force_score(rest_a, b, scoring);
            let skip_b = gap(scoring) + brute_force_score(a, rest_b, scoring);
            both.max(skip_a).max(skip_b)
        }
    }
}

/// Memoised top-down recursion over suffixes, usable on longer inputs.
pub fn reference_score(a: &str, b: &str, scoring: &ScoringParameters) -> i64 {
    fn go(
        a: &[char],
        b: &[char],
        i: usize,
        j: usize,
        scoring: &ScoringParameters,
        memo: &mut HashMap<(usize, usize), i64>,
    ) -> i64 {
        if let Some(&v) = memo.get(&(i, j)) {
            return v;
        }
        let v = if i == a.len() {
            gap(scoring) * (b.len() - j) as i64
        } else if j == b.len() {
            gap(scoring) * (a.len() - i) as i64
        } else {
            let both = pair_score(a[i], b[j], scoring) + go(a, b, i + 1, j + 1, scoring, memo);
            let skip_a = gap(scoring) + go(a, b, i + 1, j, scoring, memo);
            let skip_b = gap(scoring) + go(a, b, i, j + 1, scoring, memo);
            both.max(skip_a).max(skip_b)
        };
        memo.insert((i, j), v);
        v
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    go(&a, &b, 0, 0, scoring, &mut HashMap::new())
}

/// Score of a given alignment, column by column.
pub fn rescore(pair: &AlignedPair<char>, scoring: &ScoringParameters) -> i64 {
    pair.first
        .iter()
        .zip(pair.second.iter())
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => pair_score(*x, *y, scoring),
            _ => gap(scoring),
        })
        .sum()
}

/// Row with gaps removed.
pub fn ungapped(row: &[Option<char>]) -> String {
    row.iter().flatten().collect()
}

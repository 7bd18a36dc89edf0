/// Scoring models for global alignment
use serde::{Deserialize, Serialize};

/// Pairwise symbol scores plus a linear gap cost.
pub trait ScoringModel<T: ?Sized> {
    fn score(&self, a: &T, b: &T) -> i32;
    fn gap(&self) -> i32;
}

/// Match/mismatch/gap scoring triple.
///
/// Values are used verbatim and never range-checked. A positive `gap` acts
/// as a reward rather than a penalty, and a `mismatch` larger than `match`
/// inverts the usual preference; both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringParameters {
    pub gap: i32,
    #[serde(rename = "match")]
    pub match_score: i32,
    pub mismatch: i32,
}

impl ScoringParameters {
    pub fn new(gap: i32, match_score: i32, mismatch: i32) -> Self {
        Self {
            gap,
            match_score,
            mismatch,
        }
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_scores(mut self, match_score: i32, mismatch: i32) -> Self {
        self.match_score = match_score;
        self.mismatch = mismatch;
        self
    }
}

impl Default for ScoringParameters {
    fn default() -> Self {
        Self::new(0, 1, -1)
    }
}

impl<T: PartialEq + ?Sized> ScoringModel<T> for ScoringParameters {
    fn score(&self, a: &T, b: &T) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    fn gap(&self) -> i32 {
        self.gap
    }
}

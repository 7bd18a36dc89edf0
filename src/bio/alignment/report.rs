/// Summary statistics over a reconstructed alignment
use crate::bio::alignment::traceback::{AlignedPair, Marker};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub match_count: usize,
    pub mismatch_count: usize,
    pub gap_count: usize,
    /// Number of alignment columns
    pub alignment_length: usize,
    /// `match_count / alignment_length * 100`, or 0 for an empty alignment
    pub similarity_percent: f64,
}

impl AlignmentReport {
    pub fn from_pair<T>(pair: &AlignedPair<T>) -> Self {
        Self::from_markers(&pair.markers)
    }

    pub fn from_markers(markers: &[Marker]) -> Self {
        let mut match_count = 0;
        let mut mismatch_count = 0;
        let mut gap_count = 0;

        for marker in markers {
            match marker {
                Marker::Match => match_count += 1,
                Marker::Mismatch => mismatch_count += 1,
                Marker::Gap => gap_count += 1,
            }
        }

        let alignment_length = markers.len();
        let similarity_percent = if alignment_length == 0 {
            0.0
        } else {
            match_count as f64 / alignment_length as f64 * 100.0
        };

        Self {
            match_count,
            mismatch_count,
            gap_count,
            alignment_length,
            similarity_percent,
        }
    }

    /// Similarity as a fraction in `[0, 1]`.
    pub fn identity(&self) -> f64 {
        self.similarity_percent / 100.0
    }
}

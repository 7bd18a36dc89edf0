/// Needleman-Wunsch global alignment pipeline
use crate::bio::alignment::matrix::{build, DirectionMatrix, ScoreMatrix};
use crate::bio::alignment::report::AlignmentReport;
use crate::bio::alignment::scoring::{ScoringModel, ScoringParameters};
use crate::bio::alignment::traceback::{reconstruct, AlignedPair, AlignmentPath};
use crate::error::{AlignaError, AlignaResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything one alignment call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalAlignment<T> {
    /// Optimal global score, `scores[(n, m)]`
    pub score: i64,
    pub scores: ScoreMatrix,
    pub directions: DirectionMatrix,
    pub pair: AlignedPair<T>,
    pub path: AlignmentPath,
    pub report: AlignmentReport,
}

pub struct NeedlemanWunsch<S> {
    scoring: S,
}

impl<S> NeedlemanWunsch<S> {
    pub fn new(scoring: S) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    /// Build both matrices, trace back one optimal path and summarise it.
    pub fn align<T>(&self, seq1: &[T], seq2: &[T]) -> GlobalAlignment<T>
    where
        T: Clone + PartialEq,
        S: ScoringModel<T>,
    {
        let (scores, directions) = build(seq1, seq2, &self.scoring);
        let (pair, path) = reconstruct(seq1, seq2, &directions);
        let report = AlignmentReport::from_pair(&pair);
        let score = scores[(seq1.len(), seq2.len())];

        debug!(
            score,
            length = report.alignment_length,
            matches = report.match_count,
            "global alignment finished"
        );

        GlobalAlignment {
            score,
            scores,
            directions,
            pair,
            path,
            report,
        }
    }
}

/// Convenience entry points over text sequences.
pub struct Alignment;

impl Alignment {
    pub fn global(seq1: &str, seq2: &str, scoring: ScoringParameters) -> GlobalAlignment<char> {
        let seq1: Vec<char> = seq1.chars().collect();
        let seq2: Vec<char> = seq2.chars().collect();
        NeedlemanWunsch::new(scoring).align(&seq1, &seq2)
    }
}

/// One alignment job as it arrives from configuration or the command line.
///
/// Sequences are optional here because they come from optional fields;
/// a missing one is rejected before any matrix is allocated. Empty
/// sequences are valid and produce an all-gap alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub seq1: Option<String>,
    pub seq2: Option<String>,
    #[serde(default)]
    pub scoring: ScoringParameters,
    /// Upper-case both sequences before comparing symbols
    #[serde(default = "default_uppercase")]
    pub uppercase: bool,
}

fn default_uppercase() -> bool {
    true
}

impl Default for AlignmentRequest {
    fn default() -> Self {
        Self {
            name: None,
            seq1: None,
            seq2: None,
            scoring: ScoringParameters::default(),
            uppercase: default_uppercase(),
        }
    }
}

impl AlignmentRequest {
    pub fn new(seq1: impl Into<String>, seq2: impl Into<String>, scoring: ScoringParameters) -> Self {
        Self {
            seq1: Some(seq1.into()),
            seq2: Some(seq2.into()),
            scoring,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.uppercase = false;
        self
    }

    /// Check that both sequences are present and return them as symbol vectors.
    pub fn validate(&self) -> AlignaResult<(Vec<char>, Vec<char>)> {
        let seq1 = self.prepare(self.seq1.as_deref(), "seq1")?;
        let seq2 = self.prepare(self.seq2.as_deref(), "seq2")?;
        Ok((seq1, seq2))
    }

    fn prepare(&self, seq: Option<&str>, field: &str) -> AlignaResult<Vec<char>> {
        let seq = seq.ok_or_else(|| {
            let context = match &self.name {
                Some(name) => format!("{} is missing in '{}'", field, name),
                None => format!("{} is missing", field),
            };
            AlignaError::InvalidInput(context)
        })?;

        let symbols = if self.uppercase {
            seq.chars().flat_map(char::to_uppercase).collect()
        } else {
            seq.chars().collect()
        };
        Ok(symbols)
    }

    pub fn run(&self) -> AlignaResult<GlobalAlignment<char>> {
        let (seq1, seq2) = self.validate()?;
        Ok(NeedlemanWunsch::new(self.scoring).align(&seq1, &seq2))
    }
}

/// Align independent requests in parallel. Results keep the input order.
pub fn align_batch(requests: &[AlignmentRequest]) -> Vec<AlignaResult<GlobalAlignment<char>>> {
    info!("Aligning {} sequence pairs", requests.len());

    requests.par_iter().map(AlignmentRequest::run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::alignment::matrix::Direction;

    #[test]
    fn test_simple_alignment() {
        let aligner = NeedlemanWunsch::new(ScoringParameters::new(-2, 1, -1));
        let result = aligner.align(b"ACGT", b"AGGT");

        assert_eq!(result.score, 2);
        assert_eq!(result.report.match_count, 3);
        assert_eq!(result.report.alignment_length, 4);
        assert_eq!(result.report.similarity_percent, 75.0);
        assert_eq!(result.directions[(4, 4)], Direction::Diagonal);
    }

    #[test]
    fn test_global_on_text() {
        let result = Alignment::global("", "ACGT", ScoringParameters::new(-2, 1, -1));

        assert_eq!(result.score, -8);
        assert_eq!(result.pair.first_string(), "----");
        assert_eq!(result.pair.second_string(), "ACGT");
        assert_eq!(result.report.similarity_percent, 0.0);
    }

    #[test]
    fn test_request_missing_sequence() {
        let request = AlignmentRequest {
            seq1: Some("ACGT".to_string()),
            ..Default::default()
        };
        let err = request.run().unwrap_err();
        assert!(matches!(err, AlignaError::InvalidInput(ref msg) if msg.contains("seq2")));

        let named = AlignmentRequest::default().with_name("broken");
        let err = named.validate().unwrap_err();
        assert!(err.to_string().contains("seq1 is missing in 'broken'"));
    }

    #[test]
    fn test_request_empty_sequences_are_valid() {
        let request = AlignmentRequest::new("", "", ScoringParameters::default());
        let result = request.run().unwrap();
        assert_eq!(result.score, 0);
        assert!(result.pair.is_empty());
        assert_eq!(result.report.similarity_percent, 0.0);
    }

    #[test]
    fn test_request_case_handling() {
        let scoring = ScoringParameters::new(-2, 1, -1);

        let folded = AlignmentRequest::new("acgt", "ACGT", scoring).run().unwrap();
        assert_eq!(folded.report.match_count, 4);
        assert_eq!(folded.pair.first_string(), "ACGT");

        let exact = AlignmentRequest::new("acgt", "ACGT", scoring)
            .case_sensitive()
            .run()
            .unwrap();
        assert_eq!(exact.report.match_count, 0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let scoring = ScoringParameters::new(-2, 1, -1);
        let requests = vec![
            AlignmentRequest::new("ACGT", "ACGT", scoring),
            AlignmentRequest {
                seq2: Some("A".to_string()),
                ..Default::default()
            },
            AlignmentRequest::new("", "ACGT", scoring),
        ];

        let results = align_batch(&requests);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().score, 4);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().score, -8);
    }
}

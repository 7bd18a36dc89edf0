use crate::bio::alignment::{AlignmentRequest, NeedlemanWunsch};
use crate::cli::commands::print_result;
use crate::core::{Config, OutputFormat};
use clap::Args;

#[derive(Args)]
pub struct AlignArgs {
    /// First sequence (rows of the score matrix)
    #[arg(value_name = "SEQ1")]
    pub seq1: String,

    /// Second sequence (columns of the score matrix)
    #[arg(value_name = "SEQ2")]
    pub seq2: String,

    /// Score added per gap column (positive values reward gaps)
    #[arg(long, allow_negative_numbers = true)]
    pub gap: Option<i32>,

    /// Score for identical symbols
    #[arg(long = "match", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Score for differing symbols
    #[arg(long, allow_negative_numbers = true)]
    pub mismatch: Option<i32>,

    /// Compare symbols exactly instead of upper-casing first
    #[arg(long)]
    pub case_sensitive: bool,

    /// Print the score matrix with the traceback route highlighted
    #[arg(long)]
    pub matrix: bool,

    /// Output format (text, json)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

impl AlignArgs {
    /// Command line values override the configured ones.
    pub fn to_request(&self, config: &Config) -> AlignmentRequest {
        let mut scoring = config.scoring;
        if let Some(gap) = self.gap {
            scoring.gap = gap;
        }
        if let Some(match_score) = self.match_score {
            scoring.match_score = match_score;
        }
        if let Some(mismatch) = self.mismatch {
            scoring.mismatch = mismatch;
        }

        AlignmentRequest {
            name: None,
            seq1: Some(self.seq1.clone()),
            seq2: Some(self.seq2.clone()),
            scoring,
            uppercase: config.output.uppercase && !self.case_sensitive,
        }
    }
}

pub fn run(args: AlignArgs, config: &Config) -> anyhow::Result<()> {
    let request = args.to_request(config);
    let (seq1, seq2) = request.validate()?;

    tracing::info!(
        len1 = seq1.len(),
        len2 = seq2.len(),
        gap = request.scoring.gap,
        "aligning sequences"
    );

    let result = NeedlemanWunsch::new(request.scoring).align(&seq1, &seq2);
    let format = args.format.unwrap_or(config.output.format);
    let show_matrix = args.matrix || config.output.show_matrix;

    print_result(None, &seq1, &seq2, &result, format, show_matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::alignment::ScoringParameters;

    fn args(seq1: &str, seq2: &str) -> AlignArgs {
        AlignArgs {
            seq1: seq1.to_string(),
            seq2: seq2.to_string(),
            gap: None,
            match_score: None,
            mismatch: None,
            case_sensitive: false,
            matrix: false,
            format: None,
        }
    }

    #[test]
    fn test_config_scoring_used_by_default() {
        let config = Config::default();
        let request = args("ACGT", "AC").to_request(&config);
        assert_eq!(request.scoring, config.scoring);
        assert!(request.uppercase);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();
        let mut a = args("acgt", "ACGT");
        a.gap = Some(-2);
        a.mismatch = Some(-3);
        a.case_sensitive = true;

        let request = a.to_request(&config);
        assert_eq!(request.scoring, ScoringParameters::new(-2, 1, -3));
        assert!(!request.uppercase);
    }
}

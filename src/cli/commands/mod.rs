pub mod align;
pub mod config;
pub mod preset;

use crate::bio::alignment::GlobalAlignment;
use crate::cli::formatter::{
    format_alignment_lines, format_summary, score_matrix_table, AlignmentSummary,
};
use crate::cli::output::*;
use crate::core::OutputFormat;

/// Print one alignment in the requested format.
pub(crate) fn print_result(
    name: Option<&str>,
    seq1: &[char],
    seq2: &[char],
    result: &GlobalAlignment<char>,
    format: OutputFormat,
    show_matrix: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let summary = AlignmentSummary::new(name.map(str::to_string), result, show_matrix);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            section_header_with_line(name.unwrap_or("Global Alignment"));
            println!("{}\n", format_alignment_lines(result));
            println!("{}", format_summary(result));

            if show_matrix {
                subsection_header("Score Matrix");
                println!("{}", score_matrix_table(&result.scores, seq1, seq2, Some(&result.path)));
            }
        }
    }
    Ok(())
}

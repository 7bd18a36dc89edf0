/// Rendering of alignment results for the terminal and for JSON
use crate::bio::alignment::{
    AlignmentPath, AlignmentReport, GlobalAlignment, Marker, ScoreMatrix,
};
use crate::cli::output::{create_standard_table, header_cell, highlight_cell};
use comfy_table::{Cell, Table};
use serde::Serialize;

/// Flat, display-oriented view of one alignment.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub score: i64,
    pub seq1_aligned: String,
    pub markers: String,
    pub seq2_aligned: String,
    pub report: AlignmentReport,
    pub path: Vec<(usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_matrix: Option<Vec<Vec<i64>>>,
}

impl AlignmentSummary {
    pub fn new(name: Option<String>, result: &GlobalAlignment<char>, with_matrix: bool) -> Self {
        Self {
            name,
            score: result.score,
            seq1_aligned: result.pair.first_string(),
            markers: result.pair.marker_string(),
            seq2_aligned: result.pair.second_string(),
            report: result.report.clone(),
            path: result.path.cells().to_vec(),
            score_matrix: with_matrix
                .then(|| result.scores.iter_rows().map(|row| row.to_vec()).collect()),
        }
    }
}

/// Aligned first row, marker row, aligned second row.
///
/// The panel only flags matches: mismatches and gaps both show as a space.
/// `AlignmentSummary::markers` keeps the distinct mismatch glyph.
pub fn format_alignment_lines(result: &GlobalAlignment<char>) -> String {
    let markers: String = result
        .pair
        .markers
        .iter()
        .map(|&m| if m == Marker::Match { '|' } else { ' ' })
        .collect();

    format!(
        "{}\n{}\n{}",
        result.pair.first_string(),
        markers,
        result.pair.second_string()
    )
}

/// Match count, length, whole-number similarity and the traceback origin.
pub fn format_summary(result: &GlobalAlignment<char>) -> String {
    let (n, m) = result.path.start().unwrap_or((0, 0));
    format!(
        "Score = {}\nMatches = {}\nLength = {}\n\nSimilarity = {:.0} %\n\nTracing back: M[{},{}]",
        result.score,
        result.report.match_count,
        result.report.alignment_length,
        result.report.similarity_percent,
        n,
        m
    )
}

/// Score matrix as a table labelled with the sequence symbols; cells on the
/// traceback route are highlighted when a path is given.
pub fn score_matrix_table(
    scores: &ScoreMatrix,
    seq1: &[char],
    seq2: &[char],
    path: Option<&AlignmentPath>,
) -> Table {
    let mask = path.map(|p| p.to_mask(scores.rows(), scores.cols()));

    let mut table = create_standard_table();
    let mut header = vec![header_cell(""), header_cell("")];
    header.extend(seq2.iter().map(|c| header_cell(&c.to_string())));
    table.set_header(header);

    for (i, row) in scores.iter_rows().enumerate() {
        let label = if i == 0 {
            String::new()
        } else {
            seq1.get(i - 1).map(|c| c.to_string()).unwrap_or_default()
        };
        let mut cells = vec![header_cell(&label)];
        for (j, value) in row.iter().enumerate() {
            let on_path = mask.as_ref().map(|m| m[i][j]).unwrap_or(false);
            let text = value.to_string();
            cells.push(if on_path {
                highlight_cell(&text)
            } else {
                Cell::new(text)
            });
        }
        table.add_row(cells);
    }

    table
}

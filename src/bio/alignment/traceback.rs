/// Traceback over a filled direction matrix
use crate::bio::alignment::matrix::{Direction, DirectionMatrix};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::trace;

pub const GAP_CHAR: char = '-';

/// Classification of one alignment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    Match,
    Mismatch,
    Gap,
}

impl Marker {
    /// '|' for match, 'X' for mismatch, ' ' for gap
    pub fn symbol(self) -> char {
        match self {
            Marker::Match => '|',
            Marker::Mismatch => 'X',
            Marker::Gap => ' ',
        }
    }
}

/// Two gapped rows of equal length plus one marker per column.
///
/// `None` stands for a gap in that row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair<T> {
    pub first: Vec<Option<T>>,
    pub second: Vec<Option<T>>,
    pub markers: Vec<Marker>,
}

impl<T> AlignedPair<T> {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn marker_string(&self) -> String {
        self.markers.iter().map(|m| m.symbol()).collect()
    }

    /// Exchange the two rows. Markers are symmetric and stay as they are.
    pub fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
            markers: self.markers,
        }
    }

    /// Iterate over `(first, second, marker)` columns.
    pub fn columns(&self) -> impl Iterator<Item = (Option<&T>, Option<&T>, Marker)> + '_ {
        self.first
            .iter()
            .zip(self.second.iter())
            .zip(self.markers.iter())
            .map(|((a, b), m)| (a.as_ref(), b.as_ref(), *m))
    }
}

impl<T: Display> AlignedPair<T> {
    pub fn first_string(&self) -> String {
        render_row(&self.first)
    }

    pub fn second_string(&self) -> String {
        render_row(&self.second)
    }
}

fn render_row<T: Display>(row: &[Option<T>]) -> String {
    row.iter()
        .map(|symbol| match symbol {
            Some(s) => s.to_string(),
            None => GAP_CHAR.to_string(),
        })
        .collect()
}

/// Cells visited by the traceback, from `(n, m)` down to `(0, 0)` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentPath {
    cells: Vec<(usize, usize)>,
}

impl AlignmentPath {
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<(usize, usize)> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<(usize, usize)> {
        self.cells.last().copied()
    }

    /// True if every step moves by (1,1), (1,0) or (0,1) and the walk ends at the origin.
    pub fn is_valid(&self) -> bool {
        let steps_ok = self.cells.windows(2).all(|w| {
            let ((i0, j0), (i1, j1)) = (w[0], w[1]);
            i1 <= i0 && j1 <= j0 && matches!((i0 - i1, j0 - j1), (1, 1) | (1, 0) | (0, 1))
        });
        steps_ok && self.end() == Some((0, 0))
    }

    /// Boolean grid with the visited cells set, for heat-map style rendering.
    pub fn to_mask(&self, rows: usize, cols: usize) -> Vec<Vec<bool>> {
        let mut mask = vec![vec![false; cols]; rows];
        for &(i, j) in &self.cells {
            if i < rows && j < cols {
                mask[i][j] = true;
            }
        }
        mask
    }
}

/// Walk the direction matrix from `(n, m)` back to the origin.
///
/// The move at each interior cell is the direction stored there; nothing is
/// recomputed, so a given matrix always yields the same alignment. Column 0
/// always moves Up and row 0 always moves Left, whatever the matrix holds,
/// and a `None` away from the origin is taken as Left. Any matrix of the
/// right shape therefore yields a path ending at `(0, 0)`.
///
/// # Panics
///
/// If `directions` is not `(seq1.len() + 1) x (seq2.len() + 1)`.
pub fn reconstruct<T: Clone + PartialEq>(
    seq1: &[T],
    seq2: &[T],
    directions: &DirectionMatrix,
) -> (AlignedPair<T>, AlignmentPath) {
    assert!(
        directions.rows() == seq1.len() + 1 && directions.cols() == seq2.len() + 1,
        "direction matrix is {}x{}, sequences need {}x{}",
        directions.rows(),
        directions.cols(),
        seq1.len() + 1,
        seq2.len() + 1
    );

    let capacity = seq1.len() + seq2.len();
    let mut first = Vec::with_capacity(capacity);
    let mut second = Vec::with_capacity(capacity);
    let mut markers = Vec::with_capacity(capacity);

    let mut i = seq1.len();
    let mut j = seq2.len();
    let mut cells = Vec::with_capacity(capacity + 1);
    cells.push((i, j));

    while i > 0 || j > 0 {
        let direction = if j == 0 {
            Direction::Up
        } else if i == 0 {
            Direction::Left
        } else {
            directions[(i, j)]
        };

        match direction {
            Direction::Diagonal => {
                let (a, b) = (&seq1[i - 1], &seq2[j - 1]);
                markers.push(if a == b { Marker::Match } else { Marker::Mismatch });
                first.push(Some(a.clone()));
                second.push(Some(b.clone()));
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                first.push(Some(seq1[i - 1].clone()));
                second.push(None);
                markers.push(Marker::Gap);
                i -= 1;
            }
            Direction::Left | Direction::None => {
                first.push(None);
                second.push(Some(seq2[j - 1].clone()));
                markers.push(Marker::Gap);
                j -= 1;
            }
        }
        cells.push((i, j));
    }

    first.reverse();
    second.reverse();
    markers.reverse();

    trace!(columns = markers.len(), steps = cells.len(), "traceback complete");

    (
        AlignedPair {
            first,
            second,
            markers,
        },
        AlignmentPath { cells },
    )
}

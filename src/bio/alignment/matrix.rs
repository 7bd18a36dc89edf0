/// Score and direction matrices for Needleman-Wunsch
use crate::bio::alignment::scoring::ScoringModel;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use tracing::debug;

/// Which neighbour a cell's optimal score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Diagonal,
    Up,
    Left,
}

/// Dense row-major grid of `rows x cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Cells are `i64`; sums of `i32` scores stay in range.
pub type ScoreMatrix = Grid<i64>;
pub type DirectionMatrix = Grid<Direction>;

impl<T: Clone> Grid<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.cells.get(i * self.cols + j)
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks() rejects a zero size, and a grid always has at least one column
        self.cells.chunks(self.cols.max(1))
    }

    /// Value in the bottom-right cell.
    pub fn last(&self) -> Option<&T> {
        self.cells.last()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({}, {}) outside {}x{} grid",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({}, {}) outside {}x{} grid",
            i,
            j,
            self.rows,
            self.cols
        );
        &mut self.cells[i * self.cols + j]
    }
}

/// Fill the global alignment score matrix and its parallel direction matrix.
///
/// Both grids are `(seq1.len() + 1) x (seq2.len() + 1)`. Row `i` corresponds
/// to the prefix `seq1[..i]`, column `j` to `seq2[..j]`. When candidates tie
/// the first of Diagonal, Up, Left that reaches the maximum is recorded; the
/// traceback depends on this order.
pub fn build<T, S>(seq1: &[T], seq2: &[T], scoring: &S) -> (ScoreMatrix, DirectionMatrix)
where
    S: ScoringModel<T> + ?Sized,
{
    let rows = seq1.len() + 1;
    let cols = seq2.len() + 1;

    let mut scores = Grid::filled(rows, cols, 0i64);
    let mut directions = Grid::filled(rows, cols, Direction::None);

    initialize_matrices(&mut scores, &mut directions, scoring.gap());
    fill_matrices(&mut scores, &mut directions, seq1, seq2, scoring);

    debug!(
        rows,
        cols,
        score = scores[(rows - 1, cols - 1)],
        "built alignment matrices"
    );

    (scores, directions)
}

fn initialize_matrices(scores: &mut ScoreMatrix, directions: &mut DirectionMatrix, gap: i32) {
    let gap = i64::from(gap);
    for i in 1..scores.rows() {
        scores[(i, 0)] = gap * i as i64;
        directions[(i, 0)] = Direction::Up;
    }

    for j in 1..scores.cols() {
        scores[(0, j)] = gap * j as i64;
        directions[(0, j)] = Direction::Left;
    }

    scores[(0, 0)] = 0;
    directions[(0, 0)] = Direction::None;
}

fn fill_matrices<T, S>(
    scores: &mut ScoreMatrix,
    directions: &mut DirectionMatrix,
    seq1: &[T],
    seq2: &[T],
    scoring: &S,
) where
    S: ScoringModel<T> + ?Sized,
{
    let gap = i64::from(scoring.gap());

    for i in 1..=seq1.len() {
        for j in 1..=seq2.len() {
            let diagonal =
                scores[(i - 1, j - 1)] + i64::from(scoring.score(&seq1[i - 1], &seq2[j - 1]));
            let up = scores[(i - 1, j)] + gap;
            let left = scores[(i, j - 1)] + gap;

            let best = diagonal.max(up).max(left);
            let direction = if diagonal == best {
                Direction::Diagonal
            } else if up == best {
                Direction::Up
            } else {
                Direction::Left
            };

            scores[(i, j)] = best;
            directions[(i, j)] = direction;
        }
    }
}

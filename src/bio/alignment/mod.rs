pub mod matrix;
pub mod nw_aligner;
pub mod report;
pub mod scoring;
pub mod traceback;

pub use matrix::{build, Direction, DirectionMatrix, Grid, ScoreMatrix};
pub use nw_aligner::{align_batch, Alignment, AlignmentRequest, GlobalAlignment, NeedlemanWunsch};
pub use report::AlignmentReport;
pub use scoring::{ScoringModel, ScoringParameters};
pub use traceback::{reconstruct, AlignedPair, AlignmentPath, Marker, GAP_CHAR};

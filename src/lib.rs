//! Needleman-Wunsch global sequence alignment.
//!
//! The core lives in [`bio::alignment`]: a scoring model, the score and
//! direction matrix builder, the traceback reconstructor and the summary
//! report. [`core`] holds configuration and [`cli`] the command line front end.
//!
//! ```
//! use aligna::bio::alignment::{Alignment, ScoringParameters};
//!
//! let result = Alignment::global("ACGT", "AGGT", ScoringParameters::new(-2, 1, -1));
//! assert_eq!(result.score, 2);
//! assert_eq!(result.pair.marker_string(), "|X||");
//! ```

pub mod bio;
pub mod cli;
pub mod core;
pub mod error;

pub use crate::bio::alignment::{
    Alignment, AlignmentReport, AlignmentRequest, GlobalAlignment, NeedlemanWunsch,
    ScoringParameters,
};
pub use crate::error::{AlignaError, AlignaResult};

/// Version information for aligna
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

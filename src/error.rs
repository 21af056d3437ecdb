//! Error types for board construction and search.

use derive_more::{Display, Error};

use crate::search::SearchStats;

/// A grid that is not a permutation of `0..=8`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidBoardError {
    /// Wrong number of cells.
    #[display("expected 9 tiles, got {len}")]
    WrongLength {
        /// Number of tiles supplied.
        len: usize,
    },
    /// A tile value outside `0..=8`.
    #[display("tile value {value} is out of range 0..=8")]
    OutOfRange {
        /// Offending value.
        value: u8,
    },
    /// A tile value that appears more than once.
    #[display("tile value {value} appears more than once")]
    Duplicate {
        /// Repeated value.
        value: u8,
    },
    /// A token that is not a tile number at all.
    #[display("could not parse tile {token:?}")]
    Parse {
        /// Raw token from the input.
        token: String,
    },
}

/// Failure modes of [`solve`](crate::solve).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// The starting grid was rejected before any search happened.
    #[display("invalid board: {_0}")]
    InvalidBoard(#[error(source)] InvalidBoardError),
    /// The reachable state space was exhausted without meeting the goal.
    ///
    /// This is the expected outcome for boards in the other parity class.
    #[display("no solution found after expanding {} states", stats.expanded)]
    NoSolutionFound {
        /// Work done before giving up.
        stats: SearchStats,
    },
}

impl From<InvalidBoardError> for SolverError {
    fn from(err: InvalidBoardError) -> Self {
        Self::InvalidBoard(err)
    }
}

//! Optimal solver for the 3x3 sliding puzzle.
//!
//! [`solve`] runs A* with a Manhattan-distance heuristic and returns the
//! shortest sequence of boards from the first slide to the goal.

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod puzzle;
pub mod render;
pub mod search;

pub use error::{InvalidBoardError, SolverError};
pub use puzzle::{Board, Move};
pub use search::{solve, solve_board, solve_with, SearchStats, Solution, SolverConfig, Step};

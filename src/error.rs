//! Error types for the rules engine.

use thiserror::Error;

use crate::board::Point;

/// Reason a placement was rejected.
///
/// Every variant is detected before the board is touched, so a rejected
/// move never leaves partial state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Point index lies outside `[0, size*size)`.
    #[error("illegal move: point {0} is off the board")]
    OutOfBounds(Point),
    /// Point already holds a stone.
    #[error("illegal move: point {0} not empty")]
    Occupied(Point),
    /// Placement leaves its own group without liberties and captures nothing.
    #[error("illegal move: suicide at {0}")]
    Suicide(Point),
    /// Placement would recreate the grid from before the previous placement.
    #[error("illegal move: retakes ko at {0}")]
    RecaptureViolation(Point),
}

impl MoveError {
    /// The point the rejected move targeted.
    pub fn point(&self) -> Point {
        match *self {
            MoveError::OutOfBounds(pt)
            | MoveError::Occupied(pt)
            | MoveError::Suicide(pt)
            | MoveError::RecaptureViolation(pt) => pt,
        }
    }
}

/// A board dimension the engine cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("board size must be positive")]
    Zero,
    #[error("board size {0} is too large")]
    TooLarge(usize),
}

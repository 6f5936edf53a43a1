//! Move legality: occupancy, suicide and the recapture rule.
//!
//! A candidate placement is played out on a clone of the grid, so checking
//! a move never touches the board it is asked about.

use crate::board::{Board, Grid, Point};
use crate::error::MoveError;

/// A legal placement worked out on a scratch grid, ready to be committed.
#[derive(Debug)]
pub(crate) struct Placement {
    /// Grid after the stone lands and captures are removed.
    pub grid: Grid,
    /// Opponent stones removed by the placement, sorted.
    pub captured: Vec<Point>,
}

impl Board {
    /// Check whether the player to move may place a stone at `pt`.
    ///
    /// # Errors
    /// - [`MoveError::OutOfBounds`] - `pt` is not on the board
    /// - [`MoveError::Occupied`] - `pt` already holds a stone
    /// - [`MoveError::Suicide`] - the new group would have no liberties and
    ///   nothing is captured
    /// - [`MoveError::RecaptureViolation`] - the resulting grid equals the
    ///   grid from before the previous placement
    pub fn check_move(&self, pt: Point) -> Result<(), MoveError> {
        self.resolve(pt).map(|_| ())
    }

    pub fn is_legal(&self, pt: Point) -> bool {
        self.resolve(pt).is_ok()
    }

    /// Every point where the player to move could legally place a stone.
    pub fn legal_points(&self) -> Vec<Point> {
        (0..self.grid.area()).filter(|&pt| self.is_legal(pt)).collect()
    }

    pub(crate) fn resolve(&self, pt: Point) -> Result<Placement, MoveError> {
        if !self.grid.contains(pt) {
            return Err(MoveError::OutOfBounds(pt));
        }
        if !self.grid.is_empty(pt) {
            return Err(MoveError::Occupied(pt));
        }

        let mut scratch = self.grid.clone();
        scratch.set(pt, Some(self.to_move));

        // Own liberties are counted before opponent stones come off.
        let libs = scratch.group_liberties(pt);
        let captured = scratch.remove_captured(pt);
        if libs == 0 && captured.is_empty() {
            return Err(MoveError::Suicide(pt));
        }

        // Whole-grid comparison, not just the single retaken stone.
        if let Some(prior) = &self.prior {
            if prior.area() == scratch.area() && prior.cells() == scratch.cells() {
                return Err(MoveError::RecaptureViolation(pt));
            }
        }

        Ok(Placement {
            grid: scratch,
            captured,
        })
    }
}

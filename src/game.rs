//! Turn order, move history and game termination.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Point};
use crate::error::{MoveError, SizeError};

/// One entry in the game record. Never modified once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Who moved.
    pub color: Color,
    /// Where the stone went; `None` for a pass.
    pub point: Option<Point>,
    /// Opponent stones removed by this move, sorted.
    pub captured: Vec<Point>,
}

impl Move {
    pub fn is_pass(&self) -> bool {
        self.point.is_none()
    }
}

/// Why a recorded game could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error(transparent)]
    Size(#[from] SizeError),
    #[error("move {index} by {color}: {source}")]
    Move {
        index: usize,
        color: Color,
        #[source]
        source: MoveError,
    },
}

impl Board {
    /// Place a stone for the player to move.
    ///
    /// On success the pre-move grid becomes the recapture snapshot, captured
    /// opponent stones are removed and tallied, the move is recorded and the
    /// turn passes. On failure the board is left exactly as it was.
    pub fn play(&mut self, pt: Point) -> Result<&Move, MoveError> {
        let color = self.to_move;
        let placement = self.resolve(pt).inspect_err(|err| {
            debug!("{color} rejected: {err}");
        })?;

        let previous = std::mem::replace(&mut self.grid, placement.grid);
        self.prior = Some(previous);

        if !placement.captured.is_empty() {
            debug!("{color} at {pt} captures {:?}", placement.captured);
            self.captures.add(color, placement.captured.len() as u32);
        }
        self.history.push(Move {
            color,
            point: Some(pt),
            captured: placement.captured,
        });
        self.to_move = color.opponent();
        Ok(&self.history[self.history.len() - 1])
    }

    /// Give up the turn. Always succeeds.
    pub fn pass(&mut self) {
        let color = self.to_move;
        self.history.push(Move {
            color,
            point: None,
            captured: Vec::new(),
        });
        self.to_move = color.opponent();
        if self.is_game_over() {
            info!("game over after {} moves: both players passed", self.history.len());
        }
    }

    /// True once the last two moves are both passes.
    pub fn is_game_over(&self) -> bool {
        match self.history.as_slice() {
            [.., a, b] => a.is_pass() && b.is_pass(),
            _ => false,
        }
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Rebuild a board by playing `moves` in order from an empty grid.
    ///
    /// The color recorded on each move is ignored; turns alternate from
    /// Black exactly as they did when the record was made.
    pub fn replay(size: usize, moves: &[Move]) -> Result<Board, ReplayError> {
        let mut board = Board::new(size)?;
        for (index, mv) in moves.iter().enumerate() {
            match mv.point {
                Some(pt) => {
                    let color = board.to_move;
                    board
                        .play(pt)
                        .map_err(|source| ReplayError::Move { index, color, source })?;
                }
                None => board.pass(),
            }
        }
        Ok(board)
    }

    /// Take back the last move by replaying the rest of the history.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some((_, earlier)) = self.history.split_last() else {
            return false;
        };
        match Board::replay(self.size(), earlier) {
            Ok(board) => {
                *self = board;
                true
            }
            // Every recorded move was legal when played, so replaying a
            // prefix cannot fail.
            Err(err) => {
                debug!("undo replay failed: {err}");
                false
            }
        }
    }
}

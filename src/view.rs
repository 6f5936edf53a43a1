//! Read-only snapshot of a board for hosts to serialize.

use serde::Serialize;

use crate::board::{Board, Captures, Color};

/// What a serving layer needs to render a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub size: usize,
    /// Row-major cells: 0 empty, 1 black, 2 white.
    pub grid: Vec<u8>,
    pub to_move: Color,
    pub captures: Captures,
    pub moves_played: usize,
    pub game_over: bool,
}

fn cell_code(cell: Option<Color>) -> u8 {
    match cell {
        None => 0,
        Some(Color::Black) => 1,
        Some(Color::White) => 2,
    }
}

impl Board {
    pub fn view(&self) -> BoardView {
        BoardView {
            size: self.size(),
            grid: self.grid.cells().iter().copied().map(cell_code).collect(),
            to_move: self.to_move,
            captures: self.captures,
            moves_played: self.history.len(),
            game_over: self.is_game_over(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.view())
    }
}

//! Board state: the grid of intersections plus the per-game bookkeeping.
//!
//! The grid is a flat row-major array (`index = row * size + col`) with no
//! padding; neighbor lookups clip against the edges instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DIRECTIONS, EMPTY, MAX_GTP_SIZE, STONE_BLACK, STONE_WHITE};
use crate::coord::column_letter;
use crate::error::SizeError;
use crate::game::Move;

/// A point on the board, represented as a row-major index into the grid.
pub type Point = usize;

/// Stone color. Black is the first player and moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn stone_char(self) -> char {
        match self {
            Color::Black => STONE_BLACK,
            Color::White => STONE_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// The raw intersections of a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    pub fn new(size: usize) -> Result<Self, SizeError> {
        if size == 0 {
            return Err(SizeError::Zero);
        }
        let area = size.checked_mul(size).ok_or(SizeError::TooLarge(size))?;
        Ok(Self {
            size,
            cells: vec![None; area],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of intersections (`size * size`).
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Option<Color>] {
        &self.cells
    }

    pub fn contains(&self, pt: Point) -> bool {
        pt < self.cells.len()
    }

    /// Stone at `pt`, or `None` for an empty or off-board point.
    pub fn get(&self, pt: Point) -> Option<Color> {
        self.cells.get(pt).copied().flatten()
    }

    pub fn is_empty(&self, pt: Point) -> bool {
        self.contains(pt) && self.cells[pt].is_none()
    }

    pub(crate) fn set(&mut self, pt: Point, stone: Option<Color>) {
        self.cells[pt] = stone;
    }

    pub fn is_on_board(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Convert (row, col) to a point, or `None` when off the board.
    pub fn point(&self, row: usize, col: usize) -> Option<Point> {
        self.is_on_board(row, col).then(|| row * self.size + col)
    }

    /// Convert a point back to (row, col).
    pub fn coords(&self, pt: Point) -> (usize, usize) {
        (pt / self.size, pt % self.size)
    }

    /// The orthogonal neighbors of `pt` that lie on the board.
    ///
    /// Corner points have two neighbors, edge points three.
    pub fn neighbors(&self, pt: Point) -> impl Iterator<Item = Point> + '_ {
        let (row, col) = self.coords(pt);
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.point(r, c)
        })
    }

    /// Number of stones of `color` on the grid.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labelled = self.size <= MAX_GTP_SIZE;
        if labelled {
            write!(f, "   ")?;
            for col in 0..self.size {
                write!(f, "{} ", column_letter(col).unwrap_or('?'))?;
            }
            writeln!(f)?;
        }
        for row in 0..self.size {
            if labelled {
                write!(f, "{:>2} ", self.size - row)?;
            }
            for col in 0..self.size {
                let ch = match self.cells[row * self.size + col] {
                    Some(color) => color.stone_char(),
                    None => EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Stones captured by each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, color: Color, count: u32) {
        match color {
            Color::Black => self.black += count,
            Color::White => self.white += count,
        }
    }
}

/// A game in progress.
///
/// Mutated only through [`Board::play`] and [`Board::pass`]; every other
/// method is a read-only query.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) to_move: Color,
    pub(crate) captures: Captures,
    /// Grid as it stood right before the most recent placement.
    pub(crate) prior: Option<Grid>,
    pub(crate) history: Vec<Move>,
}

impl Board {
    /// Create an empty board with Black to move.
    pub fn new(size: usize) -> Result<Self, SizeError> {
        Ok(Self {
            grid: Grid::new(size)?,
            to_move: Color::Black,
            captures: Captures::default(),
            prior: None,
            history: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    pub fn prior(&self) -> Option<&Grid> {
        self.prior.as_ref()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn stone_at(&self, pt: Point) -> Option<Color> {
        self.grid.get(pt)
    }

    pub fn is_empty(&self, pt: Point) -> bool {
        self.grid.is_empty(pt)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(
            f,
            "to move: {}  captures: black {} white {}",
            self.to_move, self.captures.black, self.captures.white
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.grid().area(), 81);
        assert!(board.grid().cells().iter().all(Option::is_none));
        assert_eq!(board.to_move(), Color::Black);
        assert_eq!(board.captures(), Captures::default());
        assert!(board.prior().is_none());
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0).unwrap_err(), SizeError::Zero);
        assert_eq!(
            Grid::new(usize::MAX).unwrap_err(),
            SizeError::TooLarge(usize::MAX)
        );
    }

    #[test]
    fn test_coords_roundtrip() {
        let grid = Grid::new(9).unwrap();
        for pt in 0..grid.area() {
            let (row, col) = grid.coords(pt);
            assert_eq!(grid.point(row, col), Some(pt));
        }
        assert_eq!(grid.point(9, 0), None);
        assert_eq!(grid.point(0, 9), None);
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let grid = Grid::new(9).unwrap();
        let mut corner: Vec<_> = grid.neighbors(0).collect();
        corner.sort_unstable();
        assert_eq!(corner, vec![1, 9]);

        let mut edge: Vec<_> = grid.neighbors(4).collect();
        edge.sort_unstable();
        assert_eq!(edge, vec![3, 5, 13]);

        let mut center: Vec<_> = grid.neighbors(40).collect();
        center.sort_unstable();
        assert_eq!(center, vec![31, 39, 41, 49]);

        let mut far: Vec<_> = grid.neighbors(80).collect();
        far.sort_unstable();
        assert_eq!(far, vec![71, 79]);
    }

    #[test]
    fn test_single_point_board_has_no_neighbors() {
        let grid = Grid::new(1).unwrap();
        assert_eq!(grid.neighbors(0).count(), 0);
    }

    #[test]
    fn test_get_off_board_is_none() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.get(9), None);
        assert!(!grid.is_empty(9));
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, Some(Color::Black));
        grid.set(4, Some(Color::White));
        let text = grid.to_string();
        assert_eq!(text, "   A B C \n 3 X . . \n 2 . O . \n 1 . . . \n");
    }
}

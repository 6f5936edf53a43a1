//! Goban-Rules: a rules engine for the game of Go.
//!
//! This crate decides what happens when a stone is placed: it finds
//! connected groups, counts their liberties, removes captured stones and
//! rejects illegal moves (occupied points, suicide, and recreating the
//! position from before the previous placement). It also keeps the move
//! record, alternates turns, and ends the game after two passes in a row.
//!
//! Scoring, handicap and move generation are deliberately absent.
//!
//! ## Modules
//!
//! - [`board`] - Board state: grid, player to move, captures, history
//! - [`group`] - Group discovery and liberty counting
//! - [`rules`] - Move legality checks
//! - [`capture`] - Removal of captured groups
//! - [`game`] - Placing stones, passing, undo and game end
//! - [`view`] - Serializable snapshot for hosts
//! - [`registry`] - Per-game locked store for serving layers
//! - [`coord`] - "D4"-style vertex notation
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use goban_rules::board::{Board, Color};
//!
//! let mut board = Board::new(9).unwrap();
//! board.play(0).unwrap(); // Black in the corner
//! board.play(1).unwrap(); // White
//! board.pass();           // Black
//! board.play(9).unwrap(); // White captures the corner stone
//!
//! assert_eq!(board.stone_at(0), None);
//! assert_eq!(board.captures().get(Color::White), 1);
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod group;
pub mod gtp;
pub mod registry;
pub mod rules;
pub mod view;

pub use board::{Board, Captures, Color, Grid, Point};
pub use error::{MoveError, SizeError};
pub use game::{Move, ReplayError};
pub use registry::{GameId, GameRegistry, RegistryError};
pub use view::BoardView;

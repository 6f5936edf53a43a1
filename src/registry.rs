//! In-memory store of running games for a serving layer.
//!
//! The map is guarded by a read-write lock that is only held long enough
//! to look up or insert an entry. Each board sits behind its own mutex, so
//! moves in one game never wait on another game.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use log::{debug, info};
use thiserror::Error;

use crate::board::{Board, Point};
use crate::error::{MoveError, SizeError};
use crate::view::BoardView;

/// Identifier handed out by [`GameRegistry::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(u64);

impl GameId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown game {0}")]
    UnknownGame(GameId),
    #[error(transparent)]
    Size(#[from] SizeError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

type Shared = Arc<Mutex<Board>>;

/// Games keyed by id, one lock per game.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: RwLock<HashMap<GameId, Shared>>,
}

// Boards are only written after a move validates, so a poisoned lock
// still guards a consistent board.
fn lock_board(board: &Shared) -> MutexGuard<'_, Board> {
    board.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game and return its id.
    pub fn create(&self, size: usize) -> Result<GameId, RegistryError> {
        let board = Arc::new(Mutex::new(Board::new(size)?));
        let mut games = self.games.write().unwrap_or_else(|p| p.into_inner());
        let id = loop {
            let candidate = GameId(fastrand::u64(..));
            if !games.contains_key(&candidate) {
                break candidate;
            }
        };
        games.insert(id, board);
        info!("created game {id} ({size}x{size})");
        Ok(id)
    }

    fn entry(&self, id: GameId) -> Result<Shared, RegistryError> {
        let games = self.games.read().unwrap_or_else(|p| p.into_inner());
        games.get(&id).cloned().ok_or(RegistryError::UnknownGame(id))
    }

    /// Run `f` with exclusive access to one game's board.
    pub fn with_board<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut Board) -> T,
    ) -> Result<T, RegistryError> {
        let shared = self.entry(id)?;
        let mut board = lock_board(&shared);
        Ok(f(&mut board))
    }

    pub fn play(&self, id: GameId, pt: Point) -> Result<BoardView, RegistryError> {
        self.with_board(id, |board| -> Result<BoardView, RegistryError> {
            board.play(pt)?;
            Ok(board.view())
        })?
    }

    pub fn pass(&self, id: GameId) -> Result<BoardView, RegistryError> {
        self.with_board(id, |board| {
            board.pass();
            board.view()
        })
    }

    pub fn view(&self, id: GameId) -> Result<BoardView, RegistryError> {
        self.with_board(id, |board| board.view())
    }

    /// Drop a game. Returns `false` if it was not registered.
    pub fn remove(&self, id: GameId) -> bool {
        let mut games = self.games.write().unwrap_or_else(|p| p.into_inner());
        let removed = games.remove(&id).is_some();
        if removed {
            debug!("removed game {id}");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Error types for the engine and the game session

use thiserror::Error;

use crate::board::Pos;

/// A move or query that breaks a board precondition.
///
/// Whenever one of these is returned the board has not been modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("cell {0} holds no stone")]
    EmptyCell(Pos),
}

/// Errors raised by [`crate::game::Game`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),
    #[error("the game is already over")]
    GameOver,
    #[error("it is the engine's turn")]
    NotHumanTurn,
    #[error("it is the human player's turn")]
    NotEngineTurn,
    #[error("no legal move is left on the board")]
    NoMoveAvailable,
}

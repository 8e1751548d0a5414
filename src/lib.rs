//! Gomoku decision engine
//!
//! Picks the computer's move in standard Gomoku:
//! - 15x15 board, Black moves first
//! - five or more in a row wins (overlines allowed)
//! - no captures, no forbidden moves
//!
//! # Architecture
//!
//! - [`board`]: board representation with bitboards, scoped placement
//! - [`rules`]: win detection
//! - [`eval`]: static evaluation from a fixed run table
//! - [`search`]: candidate moves and minimax with alpha-beta pruning
//! - [`engine`]: decision policy (easy / hard) and the [`AIEngine`]
//! - [`game`]: game session bookkeeping for a host application
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{choose_move, is_winning_move, Board, Pos, Side};
//!
//! let mut board = Board::new();
//! board.try_place(Pos::new(7, 7), Side::Black).unwrap();
//!
//! // Engine answers as White
//! if let Some(pos) = choose_move(&board, Side::White, true) {
//!     board.try_place(pos, Side::White).unwrap();
//!     assert_eq!(is_winning_move(&board, pos), Ok(false));
//! }
//! ```
//!
//! The engine never modifies the caller's board; it searches on a copy and
//! every speculative stone is taken back before a call returns.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side, Stone, BOARD_SIZE};
pub use engine::{
    choose_move, AIEngine, DepthSchedule, Difficulty, EngineConfig, MoveResult, SearchType,
};
pub use error::{GameError, InvalidMoveError};
pub use game::{Game, GameMode, GameStatus};
pub use rules::is_winning_move;

//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


use std::fmt;

use crate::error::InvalidMoveError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Placement};

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// A player. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }

    /// Sign of this side's scores under the Black-positive convention
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        side.stone()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

/// Position on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Checked constructor for coordinates coming from outside the engine.
    pub fn try_new(x: i32, y: i32) -> Result<Self, InvalidMoveError> {
        if Self::is_valid(x, y) {
            Ok(Self::new(x as u8, y as u8))
        } else {
            Err(InvalidMoveError::OutOfBounds { x, y })
        }
    }

    /// `self` if it lies on the board.
    ///
    /// The fields are public, so a position built by hand may point past
    /// the edge; entry points taking outside input check it here.
    pub fn check(self) -> Result<Self, InvalidMoveError> {
        Self::try_new(i32::from(self.x), i32::from(self.y))
    }

    /// Center of the board, (7, 7)
    #[inline]
    pub const fn center() -> Self {
        Self {
            x: (BOARD_SIZE / 2) as u8,
            y: (BOARD_SIZE / 2) as u8,
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Neighbor at offset `(dx, dy)`, `None` when it falls off the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        Self::is_valid(x, y).then(|| Pos::new(x as u8, y as u8))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Row-major: y first, then x.
impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

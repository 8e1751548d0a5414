//! Board structure and scoped speculative placement

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Pos, Side, Stone, BOARD_SIZE};
use crate::error::InvalidMoveError;

/// Game board: one bitboard per color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without validation.
    /// Use `try_place` for moves coming from outside the engine.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "cell {pos} is already occupied");
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Place `side`'s stone at `pos` if it is on the board and free.
    ///
    /// The board is left untouched when an error is returned.
    pub fn try_place(&mut self, pos: Pos, side: Side) -> Result<(), InvalidMoveError> {
        let pos = pos.check()?;
        if !self.is_empty(pos) {
            return Err(InvalidMoveError::Occupied(pos));
        }
        self.place_stone(pos, side.stone());
        Ok(())
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Place `side`'s stone for the lifetime of the returned guard.
    ///
    /// The stone is removed when the guard drops, whichever way the
    /// caller's scope is left.
    #[inline]
    pub fn place_scoped(&mut self, pos: Pos, side: Side) -> Placement<'_> {
        self.place_stone(pos, side.stone());
        Placement { board: self, pos }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == super::TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            write!(f, "{x:3}")?;
        }
        writeln!(f)?;

        for y in 0..BOARD_SIZE {
            write!(f, "{y:3}")?;
            for x in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(x as u8, y as u8)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{ch:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A stone placed by [`Board::place_scoped`]; removed again on drop.
///
/// Derefs to the board so search code can keep working on it while the
/// stone is down.
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placement<'_> {
    /// The cell this guard occupies
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

//! Win condition checking
//!
//! A player wins with five or more contiguous stones on a row, column or
//! diagonal. Overlines count.

use tracing::instrument;

use crate::board::{Board, Pos, Stone};
use crate::error::InvalidMoveError;

/// Axis vectors as `(dx, dy)`; the reverse ray is scanned separately.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Stones of `color` contiguous to `pos` along `(dx, dy)`, not counting `pos`.
#[inline]
fn count_ray(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> i32 {
    let mut count = 0;
    let mut cur = pos.offset(dx, dy);
    while let Some(p) = cur {
        if board.get(p) != color {
            break;
        }
        count += 1;
        cur = p.offset(dx, dy);
    }
    count
}

/// Fast five-in-a-row check through a specific position.
///
/// Only checks the 4 axes through `pos`. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dx, dy)| {
        1 + count_ray(board, pos, dx, dy, color) + count_ray(board, pos, -dx, -dy, color) >= 5
    })
}

/// Does the stone just played at `pos` end the game?
///
/// `pos` must be on the board and hold a stone; otherwise
/// [`InvalidMoveError::OutOfBounds`] or [`InvalidMoveError::EmptyCell`].
#[instrument(level = "trace", skip(board))]
pub fn is_winning_move(board: &Board, pos: Pos) -> Result<bool, InvalidMoveError> {
    let pos = pos.check()?;
    match board.get(pos) {
        Stone::Empty => Err(InvalidMoveError::EmptyCell(pos)),
        color => Ok(has_five_at_pos(board, pos, color)),
    }
}

/// Five contiguous cells through `pos` forming a win, if there are any.
///
/// For overlines the five returned start at the far end of the backward ray.
pub fn find_five_line(board: &Board, pos: Pos) -> Option<[Pos; 5]> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dx, dy) in &DIRECTIONS {
        let back = count_ray(board, pos, -dx, -dy, color);
        let fwd = count_ray(board, pos, dx, dy, color);
        if 1 + back + fwd >= 5 {
            let start = pos.offset(-dx * back, -dy * back)?;
            let mut line = [start; 5];
            for (i, cell) in line.iter_mut().enumerate().skip(1) {
                let step = i as i32;
                *cell = start.offset(dx * step, dy * step)?;
            }
            return Some(line);
        }
    }
    None
}

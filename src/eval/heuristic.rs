//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores are Black-positive: the evaluator itself has no point of view,
//! Black's runs add and White's runs subtract.
//!
//! Every stone starts a forward scan in each of the four axis directions,
//! so a run of three is scored as a three, then as a two and a one from
//! its later stones. The point table assumes this over-counting.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{run_score, PatternScore};

/// Longest run worth scanning; five is already a win.
const MAX_RUN: u32 = 5;

/// Evaluate the board, Black-positive.
///
/// Returns `PatternScore::WIN` as soon as a Black five is seen and
/// `-PatternScore::WIN` for a White five, whatever was accumulated before.
#[must_use]
pub fn evaluate_board(board: &Board) -> i32 {
    let mut score = 0;

    for pos in board.occupied().iter_ones() {
        let color = board.get(pos);
        let sign = match color {
            Stone::Black => 1,
            Stone::White => -1,
            Stone::Empty => continue,
        };

        for &(dx, dy) in &DIRECTIONS {
            let (length, blocked) = forward_run(board, pos, dx, dy, color);
            if length >= MAX_RUN {
                return sign * PatternScore::WIN;
            }
            score += sign * run_score(length, blocked);
        }
    }

    score
}

/// Length of the run of `color` starting at `pos` and heading `(dx, dy)`,
/// capped at five, and whether it ended against the edge or the opponent.
fn forward_run(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> (u32, bool) {
    let mut length = 1;
    let mut cur = pos;

    while length < MAX_RUN {
        let Some(next) = cur.offset(dx, dy) else {
            return (length, true);
        };
        match board.get(next) {
            s if s == color => {
                length += 1;
                cur = next;
            }
            Stone::Empty => return (length, false),
            _ => return (length, true),
        }
    }

    (length, false)
}

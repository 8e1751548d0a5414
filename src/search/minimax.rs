//! Depth-bounded minimax with alpha-beta pruning
//!
//! Black maximizes and White minimizes over the Black-positive evaluation.
//! Candidates are tried in generation order, so ties always go to the
//! first candidate and the same board always searches the same way.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::eval::PatternScore;
//! use gomoku::search::minimax;
//!
//! let mut board = Board::new();
//! for x in 3..7 {
//!     board.place_stone(Pos::new(x, 7), Stone::Black);
//! }
//! let before = board.clone();
//!
//! let score = minimax(&mut board, 2, -PatternScore::INF, PatternScore::INF, true);
//! assert_eq!(score, PatternScore::WIN);
//! assert_eq!(board, before);
//! ```

use tracing::trace;

use crate::board::{Board, Side};
use crate::eval::{evaluate_board, PatternScore};
use crate::rules::has_five_at_pos;

use super::movegen::candidate_moves;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Calls to the static evaluator
    pub leaf_evals: u64,
    /// Loops cut short by `beta <= alpha`
    pub beta_cutoffs: u64,
    /// Nodes that returned early on an immediate five
    pub wins_found: u64,
}

/// Minimax searcher. Holds nothing but counters, so one can be reused
/// across calls or thrown away after each.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since creation or the last reset
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Score `board` by searching `depth` plies.
    ///
    /// `maximizing_for_black` says who places the next stone: Black
    /// (maximizing) when true, White (minimizing) when false. A stone that
    /// makes five returns the win sentinel straight away without looking at
    /// the remaining siblings. The board is back to its original occupancy
    /// when this returns.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing_for_black: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.leaf(board);
        }

        let moves = candidate_moves(board);
        if moves.is_empty() {
            return self.leaf(board);
        }

        let side = if maximizing_for_black {
            Side::Black
        } else {
            Side::White
        };
        let mut best = -side.sign() * PatternScore::INF;

        for pos in moves {
            let score = {
                let mut placed = board.place_scoped(pos, side);
                if has_five_at_pos(&placed, pos, side.stone()) {
                    self.stats.wins_found += 1;
                    trace!(%pos, %side, depth, "five found");
                    return side.sign() * PatternScore::WIN;
                }
                self.minimax(&mut placed, depth - 1, alpha, beta, !maximizing_for_black)
            };

            if maximizing_for_black {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        best
    }

    #[inline]
    fn leaf(&mut self, board: &Board) -> i32 {
        self.stats.leaf_evals += 1;
        evaluate_board(board)
    }
}

/// One-shot [`Searcher::minimax`] without keeping the statistics.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing_for_black: bool,
) -> i32 {
    Searcher::new().minimax(board, depth, alpha, beta, maximizing_for_black)
}

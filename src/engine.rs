//! Decision policy: picks the engine's move for one side
//!
//! Every candidate from the move generator is tried in order:
//!
//! 1. **Immediate win**: a stone that makes five is played at once
//! 2. **Easy**: otherwise the position after the stone is scored by the
//!    static evaluator
//! 3. **Hard**: otherwise it is scored by a minimax search (depth 3 by
//!    default)
//!
//! The best candidate for the side to move wins; ties go to the earlier
//! candidate, so the same board always gets the same answer.
//!
//! # Example
//!
//! ```
//! use gomoku::{choose_move, Board, Pos, Side};
//!
//! let board = Board::new();
//! assert_eq!(choose_move(&board, Side::Black, false), Some(Pos::new(7, 7)));
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::board::{Board, Pos, Side};
use crate::eval::{evaluate_board, PatternScore};
use crate::rules::has_five_at_pos;
use crate::search::{candidate_moves, Searcher};

/// Search depth used by hard mode unless configured otherwise
pub const DEFAULT_HARD_DEPTH: u8 = 3;

/// How hard the engine thinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One ply: static evaluation of each candidate
    Easy,
    /// Minimax search below each candidate
    #[default]
    Hard,
}

/// Search depth for hard mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthSchedule {
    /// Always search this many plies
    Fixed(u8),
    /// Deeper in the opening: 5 plies under 10 stones, 4 afterwards
    ByStoneCount,
}

impl Default for DepthSchedule {
    fn default() -> Self {
        DepthSchedule::Fixed(DEFAULT_HARD_DEPTH)
    }
}

impl DepthSchedule {
    /// Depth to search on `board`
    #[must_use]
    pub fn depth_for(self, board: &Board) -> u8 {
        match self {
            DepthSchedule::Fixed(depth) => depth,
            DepthSchedule::ByStoneCount => match board.stone_count() {
                0..=9 => 5,
                _ => 4,
            },
        }
    }
}

/// Engine settings. Every field has a default, so a partial TOML table
/// is enough:
///
/// ```
/// use gomoku::{DepthSchedule, Difficulty, EngineConfig};
///
/// let config: EngineConfig = toml::from_str("difficulty = \"easy\"").unwrap();
/// assert_eq!(config.difficulty, Difficulty::Easy);
/// assert_eq!(config.depth, DepthSchedule::Fixed(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub depth: DepthSchedule,
}

/// Which rule picked the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// The stone makes five
    ImmediateWin,
    /// Best static evaluation (easy mode)
    Heuristic,
    /// Best minimax score (hard mode)
    Minimax,
    /// The board is full
    NoMove,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Score of the chosen move for the side that moves (higher is better)
    pub score: i32,
    /// Rule that picked the move
    pub search_type: SearchType,
    /// Plies searched below each candidate (0 in easy mode)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Candidates scored plus search nodes visited
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: PatternScore::WIN,
            search_type: SearchType::ImmediateWin,
            depth: 0,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            depth: 0,
            time_ms,
            nodes: 0,
        }
    }
}

/// Pick a move for `side`; easy mode when `hard` is false.
///
/// The caller's board is not modified. Returns `None` only when no empty
/// cell is left.
#[must_use]
pub fn choose_move(board: &Board, side: Side, hard: bool) -> Option<Pos> {
    let difficulty = if hard {
        Difficulty::Hard
    } else {
        Difficulty::Easy
    };
    AIEngine::with_config(EngineConfig {
        difficulty,
        ..EngineConfig::default()
    })
    .get_move(board, side)
}

/// Main AI engine.
///
/// ```
/// use gomoku::{AIEngine, Board, Pos, Side, Stone};
///
/// let mut engine = AIEngine::hard();
/// let mut board = Board::new();
/// board.place_stone(Pos::new(7, 7), Stone::Black);
///
/// let result = engine.get_move_with_stats(&board, Side::White);
/// assert!(result.best_move.is_some());
/// ```
#[derive(Debug, Default)]
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Hard mode at depth 3
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            searcher: Searcher::new(),
        }
    }

    #[must_use]
    pub fn easy() -> Self {
        Self::with_config(EngineConfig {
            difficulty: Difficulty::Easy,
            ..EngineConfig::default()
        })
    }

    #[must_use]
    pub fn hard() -> Self {
        Self::with_config(EngineConfig {
            difficulty: Difficulty::Hard,
            ..EngineConfig::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    pub fn set_depth(&mut self, depth: DepthSchedule) {
        self.config.depth = depth;
    }

    /// Best move for `side`, see [`AIEngine::get_move_with_stats`].
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Pos> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Best move for `side` with search statistics.
    ///
    /// Works on a copy of `board`; the caller's board is never touched.
    #[instrument(level = "debug", skip(self, board), fields(stones = board.stone_count()))]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();
        self.searcher.reset_stats();

        let mut work = board.clone();
        let moves = candidate_moves(&work);
        let difficulty = self.config.difficulty;
        let depth = match difficulty {
            Difficulty::Easy => 0,
            Difficulty::Hard => self.config.depth.depth_for(board),
        };

        let mut best_move = None;
        let mut best_score = -PatternScore::INF;
        let mut scored = 0u64;

        for &pos in &moves {
            let mut placed = work.place_scoped(pos, side);
            scored += 1;

            if has_five_at_pos(&placed, pos, side.stone()) {
                trace!(%pos, %side, "immediate win");
                let nodes = scored + self.searcher.stats().nodes;
                return MoveResult::immediate_win(pos, elapsed_ms(start), nodes);
            }

            let raw = match difficulty {
                Difficulty::Easy => evaluate_board(&placed),
                Difficulty::Hard => self.searcher.minimax(
                    &mut placed,
                    depth,
                    -PatternScore::INF,
                    PatternScore::INF,
                    side == Side::Black,
                ),
            };
            // Flip to the mover's point of view so one comparison serves both sides
            let score = side.sign() * raw;
            trace!(%pos, score, "candidate scored");

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        let Some(best) = best_move.or_else(|| moves.first().copied()) else {
            debug!(%side, "no candidate moves");
            return MoveResult::no_move(elapsed_ms(start));
        };

        let stats = self.searcher.stats();
        let result = MoveResult {
            best_move: Some(best),
            score: best_score,
            search_type: match difficulty {
                Difficulty::Easy => SearchType::Heuristic,
                Difficulty::Hard => SearchType::Minimax,
            },
            depth,
            time_ms: elapsed_ms(start),
            nodes: scored + stats.nodes,
        };
        debug!(
            best = %best,
            score = result.score,
            nodes = result.nodes,
            cutoffs = stats.beta_cutoffs,
            time_ms = result.time_ms,
            "move chosen"
        );
        result
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

//! Evaluation of Gomoku positions
//!
//! A fixed, hand-authored run table scored over every stone and direction.

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate_board;
pub use patterns::{run_score, PatternScore};

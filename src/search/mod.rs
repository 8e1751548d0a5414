//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation restricted to cells next to stones
//! - Minimax with alpha-beta pruning over the static evaluator

pub mod minimax;
pub mod movegen;

pub use minimax::{minimax, SearchStats, Searcher};
pub use movegen::candidate_moves;

//! Game rules
//!
//! Standard Gomoku on a 15x15 board: five or more in a row wins, no
//! captures, no forbidden moves.

pub mod win;

pub use win::{find_five_line, has_five_at_pos, is_winning_move, DIRECTIONS};

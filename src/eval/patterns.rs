//! Run scores for Gomoku evaluation
//!
//! Search depth and pruning behave the way they do because of these exact
//! values; keep them as they are.

/// Score constants shared by the evaluator and the search
pub struct PatternScore;

impl PatternScore {
    /// Five in a row. Sits well inside `i32` so it negates and compares
    /// safely next to [`PatternScore::INF`].
    pub const WIN: i32 = 100_000_000;

    /// Alpha-beta window bound, strictly beyond any reachable score
    pub const INF: i32 = 1_000_000_000;

    /// Four, open end: _OOOO
    pub const OPEN_FOUR: i32 = 2_000;
    /// Four, blocked end: OOOOX or OOOO|
    pub const BLOCKED_FOUR: i32 = 500;

    pub const OPEN_THREE: i32 = 500;
    pub const BLOCKED_THREE: i32 = 100;

    pub const OPEN_TWO: i32 = 50;
    pub const BLOCKED_TWO: i32 = 10;

    /// A lone stone scores the same either way
    pub const SINGLE: i32 = 1;
}

/// Points for a forward run of `length` stones (1..=4).
///
/// `blocked` means the scan stopped on the board edge or an opposing
/// stone rather than an empty cell.
#[inline]
pub const fn run_score(length: u32, blocked: bool) -> i32 {
    match (length, blocked) {
        (4, false) => PatternScore::OPEN_FOUR,
        (4, true) => PatternScore::BLOCKED_FOUR,
        (3, false) => PatternScore::OPEN_THREE,
        (3, true) => PatternScore::BLOCKED_THREE,
        (2, false) => PatternScore::OPEN_TWO,
        (2, true) => PatternScore::BLOCKED_TWO,
        (1, _) => PatternScore::SINGLE,
        _ => 0,
    }
}

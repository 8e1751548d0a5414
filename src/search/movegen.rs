//! Candidate move generation
//!
//! Only empty cells touching an existing stone (Chebyshev distance 1) are
//! considered. That keeps the branching factor small at the cost of never
//! suggesting a move away from the action.

use crate::board::{Board, Pos, TOTAL_CELLS};

/// Empty cells 8-adjacent to at least one stone, in row-major order.
///
/// An empty board yields the center alone; a full board yields nothing.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let occupied = board.occupied();
    let moves: Vec<Pos> = (occupied.neighborhood() - occupied).iter_ones().collect();
    debug_assert!(moves.len() < TOTAL_CELLS);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_empty_board_falls_back_to_center() {
        assert_eq!(candidate_moves(&Board::new()), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_single_stone_ring() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let moves = candidate_moves(&board);
        assert_eq!(
            moves,
            vec![
                Pos::new(6, 6),
                Pos::new(7, 6),
                Pos::new(8, 6),
                Pos::new(6, 7),
                Pos::new(8, 7),
                Pos::new(6, 8),
                Pos::new(7, 8),
                Pos::new(8, 8),
            ]
        );
    }

    #[test]
    fn test_corner_stone_clipped() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        assert_eq!(
            candidate_moves(&board),
            vec![Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
    }

    #[test]
    fn test_overlapping_neighborhoods_deduplicated() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 7), Stone::White);
        let moves = candidate_moves(&board);
        // 3x4 block minus the two stones
        assert_eq!(moves.len(), 10);
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        assert!(moves.iter().all(|&m| board.is_empty(m)));
    }

    #[test]
    fn test_never_far_from_stones() {
        let mut board = Board::new();
        board.place_stone(Pos::new(2, 12), Stone::Black);
        board.place_stone(Pos::new(11, 3), Stone::White);
        for m in candidate_moves(&board) {
            let near = board.occupied().iter_ones().any(|s| {
                (i32::from(s.x) - i32::from(m.x)).abs() <= 1
                    && (i32::from(s.y) - i32::from(m.y)).abs() <= 1
            });
            assert!(near, "{m} is not adjacent to any stone");
        }
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(Pos::from_index(idx), stone);
        }
        assert!(candidate_moves(&board).is_empty());
    }
}

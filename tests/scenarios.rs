//! End-to-end engine scenarios through the public API.

use gomoku::eval::{evaluate_board, PatternScore};
use gomoku::search::{candidate_moves, minimax};
use gomoku::{
    choose_move, is_winning_move, AIEngine, Board, Game, GameError, GameMode, GameStatus,
    InvalidMoveError, Pos, SearchType, Side, Stone,
};

fn row(board: &mut Board, xs: std::ops::Range<u8>, y: u8, stone: Stone) {
    for x in xs {
        board.place_stone(Pos::new(x, y), stone);
    }
}

#[test]
fn test_empty_board_opens_in_center() {
    let board = Board::new();
    assert_eq!(candidate_moves(&board), vec![Pos::new(7, 7)]);
    assert_eq!(choose_move(&board, Side::Black, false), Some(Pos::new(7, 7)));
    assert_eq!(evaluate_board(&board), 0);
}

#[test]
fn test_white_blocks_open_four() {
    let mut board = Board::new();
    row(&mut board, 5..9, 7, Stone::Black);
    let before = board.clone();

    let pos = choose_move(&board, Side::White, true).unwrap();
    assert!(pos == Pos::new(4, 7) || pos == Pos::new(9, 7), "got {pos}");
    assert_eq!(board, before);
}

#[test]
fn test_white_completes_four_in_both_modes() {
    let mut board = Board::new();
    row(&mut board, 3..7, 11, Stone::White);
    board.place_stone(Pos::new(2, 11), Stone::Black);

    for hard in [false, true] {
        let pos = choose_move(&board, Side::White, hard).unwrap();
        assert_eq!(pos, Pos::new(7, 11));

        let mut after = board.clone();
        after.try_place(pos, Side::White).unwrap();
        assert_eq!(is_winning_move(&after, pos), Ok(true));
    }
}

#[test]
fn test_immediate_win_skips_search() {
    let mut board = Board::new();
    row(&mut board, 0..4, 14, Stone::Black);

    let result = AIEngine::hard().get_move_with_stats(&board, Side::Black);
    assert_eq!(result.best_move, Some(Pos::new(4, 14)));
    assert_eq!(result.search_type, SearchType::ImmediateWin);
}

#[test]
fn test_five_scores_as_win() {
    let mut board = Board::new();
    row(&mut board, 2..7, 3, Stone::Black);
    assert_eq!(evaluate_board(&board), PatternScore::WIN);

    let mut board = Board::new();
    row(&mut board, 2..7, 3, Stone::White);
    assert_eq!(evaluate_board(&board), -PatternScore::WIN);
}

#[test]
fn test_gap_is_not_a_win() {
    let mut board = Board::new();
    for x in [3, 4, 6, 7, 8] {
        board.place_stone(Pos::new(x, 5), Stone::Black);
    }
    assert_eq!(is_winning_move(&board, Pos::new(8, 5)), Ok(false));
    assert_eq!(is_winning_move(&board, Pos::new(3, 5)), Ok(false));

    board.place_stone(Pos::new(5, 5), Stone::Black);
    assert_eq!(is_winning_move(&board, Pos::new(5, 5)), Ok(true));
}

#[test]
fn test_overline_wins() {
    let mut board = Board::new();
    for i in 0..6 {
        board.place_stone(Pos::new(i + 1, i + 1), Stone::White);
    }
    assert_eq!(is_winning_move(&board, Pos::new(3, 3)), Ok(true));
}

#[test]
fn test_winning_check_on_empty_cell_fails() {
    let board = Board::new();
    assert_eq!(
        is_winning_move(&board, Pos::new(1, 1)),
        Err(InvalidMoveError::EmptyCell(Pos::new(1, 1)))
    );
}

#[test]
fn test_minimax_leaves_board_untouched() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 7), Stone::Black);
    board.place_stone(Pos::new(8, 7), Stone::White);
    board.place_stone(Pos::new(7, 8), Stone::Black);
    let before = board.clone();

    let score = minimax(&mut board, 2, -PatternScore::INF, PatternScore::INF, true);
    assert!(score.abs() < PatternScore::INF);
    assert_eq!(board, before);
    assert_eq!(
        minimax(&mut board, 0, -PatternScore::INF, PatternScore::INF, false),
        evaluate_board(&board)
    );
}

#[test]
fn test_engine_versus_human_game() {
    let mut game = Game::new(GameMode::PvE { human: Side::Black }, Default::default());
    game.play(Pos::new(7, 7)).unwrap();
    assert!(game.is_engine_turn());

    let (result, status) = game.play_engine().unwrap();
    let reply = result.best_move.unwrap();
    assert_eq!(status, GameStatus::Playing);
    assert_eq!(game.board().get(reply), Stone::White);
    assert_eq!(game.board().stone_count(), 2);

    assert_eq!(
        game.play(reply),
        Err(GameError::InvalidMove(InvalidMoveError::Occupied(reply)))
    );
}

#[test]
fn test_out_of_bounds_coordinates() {
    assert_eq!(
        Pos::try_new(15, 3),
        Err(InvalidMoveError::OutOfBounds { x: 15, y: 3 })
    );
    assert!(Pos::try_new(-1, 0).is_err());
    assert_eq!(Pos::try_new(14, 14), Ok(Pos::new(14, 14)));
}

//! Game session bookkeeping for a host application
//!
//! Tracks the board, whose turn it is and whether the game is over, and
//! applies human and engine moves under the same win rule.

use tracing::{debug, info, instrument};

use crate::board::{Board, Pos, Side};
use crate::engine::{AIEngine, EngineConfig, MoveResult};
use crate::error::GameError;
use crate::rules::{find_five_line, is_winning_move};

/// Who plays which side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans share the board (hotseat); the engine only gives hints
    PvP,
    /// One human against the engine
    PvE { human: Side },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Side::Black }
    }
}

/// Game status after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won {
        winner: Side,
        line: Option<[Pos; 5]>,
    },
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// A single game from the first stone to a win or a full board.
#[derive(Debug)]
pub struct Game {
    board: Board,
    mode: GameMode,
    to_move: Side,
    status: GameStatus,
    last_move: Option<Pos>,
    move_count: u32,
    engine: AIEngine,
}

impl Game {
    #[must_use]
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            to_move: Side::Black,
            status: GameStatus::Playing,
            last_move: None,
            move_count: 0,
            engine: AIEngine::with_config(config),
        }
    }

    /// Clear the board and start again with Black to move
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Side::Black;
        self.status = GameStatus::Playing;
        self.last_move = None;
        self.move_count = 0;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.to_move == human,
            GameMode::PvP => true,
        }
    }

    pub fn is_engine_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.to_move != human,
            GameMode::PvP => false,
        }
    }

    /// Play a human stone for the side to move.
    ///
    /// Nothing changes when an error is returned.
    #[instrument(level = "debug", skip(self), fields(side = %self.to_move))]
    pub fn play(&mut self, pos: Pos) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotHumanTurn);
        }
        self.apply(pos)
    }

    /// Let the engine play for the side to move.
    ///
    /// Refused on the human's turn in [`GameMode::PvE`]; in
    /// [`GameMode::PvP`] the engine may move for either side.
    pub fn play_engine(&mut self) -> Result<(MoveResult, GameStatus), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if matches!(self.mode, GameMode::PvE { .. }) && !self.is_engine_turn() {
            return Err(GameError::NotEngineTurn);
        }

        let result = self.engine.get_move_with_stats(&self.board, self.to_move);
        let pos = result.best_move.ok_or(GameError::NoMoveAvailable)?;
        let status = self.apply(pos)?;
        Ok((result, status))
    }

    /// Engine's choice for the side to move, without playing it
    pub fn suggest(&mut self) -> Option<Pos> {
        if self.status.is_over() {
            return None;
        }
        self.engine.get_move(&self.board, self.to_move)
    }

    fn apply(&mut self, pos: Pos) -> Result<GameStatus, GameError> {
        let side = self.to_move;
        self.board.try_place(pos, side)?;
        self.last_move = Some(pos);
        self.move_count += 1;
        info!(%side, %pos, moves = self.move_count, "stone placed");

        self.status = if is_winning_move(&self.board, pos)? {
            GameStatus::Won {
                winner: side,
                line: find_five_line(&self.board, pos),
            }
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            self.to_move = side.opponent();
            GameStatus::Playing
        };

        if self.status.is_over() {
            debug!(status = ?self.status, "game over");
        }
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default(), EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::engine::Difficulty;
    use crate::error::InvalidMoveError;

    fn easy() -> EngineConfig {
        EngineConfig {
            difficulty: Difficulty::Easy,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::default();
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.is_human_turn());
        assert!(!game.is_engine_turn());
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(GameMode::PvP, easy());
        assert_eq!(game.play(Pos::new(7, 7)), Ok(GameStatus::Playing));
        assert_eq!(game.to_move(), Side::White);
        assert_eq!(game.play(Pos::new(8, 7)), Ok(GameStatus::Playing));
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.board().get(Pos::new(8, 7)), Stone::White);
        assert_eq!(game.last_move(), Some(Pos::new(8, 7)));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new(GameMode::PvP, easy());
        game.play(Pos::new(7, 7)).unwrap();
        let before = game.board().clone();
        assert_eq!(
            game.play(Pos::new(7, 7)),
            Err(GameError::InvalidMove(InvalidMoveError::Occupied(Pos::new(7, 7))))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Side::White);
    }

    #[test]
    fn test_off_board_move_rejected() {
        let mut game = Game::new(GameMode::PvP, easy());
        assert_eq!(
            game.play(Pos { x: 15, y: 0 }),
            Err(GameError::InvalidMove(InvalidMoveError::OutOfBounds { x: 15, y: 0 }))
        );
        assert!(game.board().is_board_empty());
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_black_wins_with_five() {
        let mut game = Game::new(GameMode::PvP, easy());
        for x in 0..4 {
            game.play(Pos::new(x, 0)).unwrap();
            game.play(Pos::new(x, 1)).unwrap();
        }
        let status = game.play(Pos::new(4, 0)).unwrap();
        assert_eq!(
            status,
            GameStatus::Won {
                winner: Side::Black,
                line: Some([
                    Pos::new(0, 0),
                    Pos::new(1, 0),
                    Pos::new(2, 0),
                    Pos::new(3, 0),
                    Pos::new(4, 0),
                ]),
            }
        );
        assert_eq!(game.play(Pos::new(9, 9)), Err(GameError::GameOver));
        assert_eq!(game.suggest(), None);
    }

    #[test]
    fn test_pve_turn_checks() {
        let mut game = Game::new(GameMode::PvE { human: Side::White }, easy());
        assert!(game.is_engine_turn());
        assert_eq!(game.play(Pos::new(7, 7)), Err(GameError::NotHumanTurn));

        let (result, status) = game.play_engine().unwrap();
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(status, GameStatus::Playing);
        assert!(game.is_human_turn());
        assert!(matches!(game.play_engine(), Err(GameError::NotEngineTurn)));

        game.play(Pos::new(8, 8)).unwrap();
        assert!(game.is_engine_turn());
    }

    #[test]
    fn test_engine_completes_five() {
        let mut game = Game::new(GameMode::PvE { human: Side::Black }, easy());
        // White (engine) builds four at y = 10 while Black plays far away
        let black = [(0, 0), (0, 2), (0, 4), (0, 6)];
        for (i, &(x, y)) in black.iter().enumerate() {
            game.play(Pos::new(x, y)).unwrap();
            // place White's stones directly instead of letting the engine choose
            game.apply(Pos::new(3 + i as u8, 10)).unwrap();
        }
        game.play(Pos::new(0, 8)).unwrap();

        let (result, status) = game.play_engine().unwrap();
        let pos = result.best_move.unwrap();
        assert!(pos == Pos::new(2, 10) || pos == Pos::new(7, 10), "got {pos}");
        assert!(matches!(status, GameStatus::Won { winner: Side::White, .. }));
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(GameMode::PvP, easy());
        game.play(Pos::new(7, 7)).unwrap();
        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_suggest_does_not_play() {
        let mut game = Game::new(GameMode::PvP, easy());
        game.play(Pos::new(7, 7)).unwrap();
        let hint = game.suggest();
        assert!(hint.is_some());
        assert_eq!(game.board().stone_count(), 1);
        assert_eq!(game.to_move(), Side::White);
    }
}

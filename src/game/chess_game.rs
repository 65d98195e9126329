//! Turn-taking state machine
//!
//! [`Game`] owns the board, both players, the turn counter, captured pieces,
//! the move history and the win state. Moves go through two steps:
//!
//! 1. [`Game::submit_move`] validates a move for a player without touching
//!    the board and remembers it as pending.
//! 2. [`Game::apply_move`] applies the pending move for that player.
//!
//! [`Game::play`] does both at once.
//!
//! # States
//!
//! ```text
//! AwaitingMove(turn) --legal move--> AwaitingMove(turn + 1)
//! AwaitingMove(turn) --king taken--> Won(color)   (terminal)
//! ```
//!
//! A game is a plain value: no global state, no locking. Callers sharing a
//! game between tasks serialise access themselves.

use crate::game::board::{Board, GlyphStyle};
use crate::game::components::{MoveRecord, Piece, PieceColor, PieceType};
use crate::game::error::{GameError, GameResult, MoveRejection, MoveResult};
use crate::game::notation::{self, MoveRequest};
use crate::game::resources::{
    players, CapturedPieces, CurrentTurn, GameOverState, MoveHistory, Player,
};
use crate::game::types::BOARD_SIZE;
use serde::Serialize;
use tracing::{debug, info, warn};

/// A move accepted by `submit_move`, waiting for `apply_move`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingMove {
    player_idx: usize,
    request: MoveRequest,
}

/// What an applied move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub request: MoveRequest,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub winner: Option<PieceColor>,
}

/// Serializable summary of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub turn: u32,
    pub to_move: PieceColor,
    pub state: GameOverState,
    pub winner: Option<PieceColor>,
    pub board: Vec<String>,
    pub captured: Vec<PieceType>,
    pub material_advantage: i32,
    pub history: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: CurrentTurn,
    captured: CapturedPieces,
    game_over: GameOverState,
    history: MoveHistory,
    pending: Option<PendingMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh game: standard starting position, turn 0, White to move
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Fresh game using the given glyph style for the display buffer
    pub fn with_glyphs(glyph_style: GlyphStyle) -> Self {
        Self::with_board(Board::with_glyphs(glyph_style))
    }

    /// Game starting from an arbitrary position, White to move
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            players: players(),
            turn: CurrentTurn::default(),
            captured: CapturedPieces::default(),
            game_over: GameOverState::default(),
            history: MoveHistory::default(),
            pending: None,
        }
    }

    /// Validate `raw_move` for `player_idx` (0 = White, 1 = Black)
    ///
    /// Checks, in order: the player exists, the game is not over, it is the
    /// player's turn, the notation is well formed and in bounds, the piece on
    /// the start square accepts the move, and that piece belongs to the player.
    ///
    /// On success the move becomes the pending move for the player. A
    /// player's own earlier pending move is dropped, even when this submission
    /// is rejected; another player's pending move is left alone. The board and
    /// the turn are never modified here.
    pub fn submit_move(&mut self, player_idx: usize, raw_move: &str) -> MoveResult<MoveRequest> {
        if self.pending.is_some_and(|pending| pending.player_idx == player_idx) {
            self.pending = None;
        }

        let request = self.validate(player_idx, raw_move).map_err(|rejection| {
            debug!("[MOVE] Player {} '{}' rejected: {}", player_idx, raw_move, rejection);
            rejection
        })?;

        debug!("[MOVE] Player {} '{}' accepted", player_idx, raw_move);
        self.pending = Some(PendingMove {
            player_idx,
            request,
        });
        Ok(request)
    }

    fn validate(&self, player_idx: usize, raw_move: &str) -> MoveResult<MoveRequest> {
        let player = *self
            .players
            .get(player_idx)
            .ok_or(MoveRejection::UnknownPlayer { player_idx })?;

        if let Some(winner) = self.game_over.winner() {
            return Err(MoveRejection::GameFinished { winner });
        }

        if !self.turn.belongs_to(&player) {
            return Err(MoveRejection::WrongTurn {
                player_idx,
                turn: self.turn.number(),
                expected: self.turn.color(),
            });
        }

        let raw = notation::parse(raw_move)?;
        raw.validate_bounds()?;
        let request = raw.to_indices()?;
        let piece = notation::check_piece_legal(&self.board, &request)?;

        if piece.color() != player.color() {
            return Err(MoveRejection::WrongOwner {
                square: request.from(),
                owner: piece.color(),
                player: player.color(),
            });
        }

        Ok(request)
    }

    /// Apply the move accepted by the last `submit_move` for `player_idx`
    ///
    /// The mover is lifted off its square. A piece on the destination is
    /// captured and recorded, and a captured king ends the game in favour of
    /// the capturing side. Only then is the mover installed on the
    /// destination. The turn advances on every applied move.
    pub fn apply_move(&mut self, player_idx: usize) -> GameResult<MoveOutcome> {
        let pending = match self.pending.take() {
            Some(pending) if pending.player_idx == player_idx => pending,
            other => {
                self.pending = other;
                warn!(
                    "[GAME] apply_move for player {} without an accepted move (turn {})",
                    player_idx,
                    self.turn.number()
                );
                return Err(GameError::NoPendingMove { player_idx });
            }
        };

        let request = pending.request;
        let piece = self
            .board
            .square_mut(request.from())
            .release()
            .ok_or(MoveRejection::EmptySquare {
                square: request.from(),
            })?;

        let captured = self
            .board
            .square_mut(request.to())
            .release()
            .map(|mut taken| {
                taken.set_captured();
                taken
            });
        if let Some(taken) = captured {
            self.captured.add_capture(taken);
            info!(
                "[GAME] {:?} {:?} captured on {}",
                taken.color(),
                taken.piece_type(),
                request.to()
            );

            if taken.is_king() {
                self.game_over = GameOverState::won_by(taken.color().opponent());
                info!("[GAME] ========== KING CAPTURED ==========");
                info!("[GAME] {} on turn {}", self.game_over.message(), self.turn.number());
            }
        }

        self.board.square_mut(request.to()).occupy(piece);
        self.board.update_display();

        self.history.add_move(MoveRecord {
            piece_type: piece.piece_type(),
            piece_color: piece.color(),
            from: request.from(),
            to: request.to(),
            captured: captured.map(|taken| taken.piece_type()),
        });

        info!(
            "[MOVE] Turn {}: {:?} {:?} {}",
            self.turn.number(),
            piece.color(),
            piece.piece_type(),
            request
        );
        self.turn.advance();

        Ok(MoveOutcome {
            request,
            piece,
            captured,
            winner: self.game_over.winner(),
        })
    }

    /// Submit and apply in one call
    pub fn play(&mut self, player_idx: usize, raw_move: &str) -> GameResult<MoveOutcome> {
        self.submit_move(player_idx, raw_move)?;
        self.apply_move(player_idx)
    }

    /// Player index whose move is accepted now
    pub fn current_player_idx(&self) -> usize {
        self.turn.parity() as usize
    }

    /// Player whose move is accepted now
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_idx()]
    }

    pub fn player(&self, player_idx: usize) -> Option<&Player> {
        self.players.get(player_idx)
    }

    pub fn turn(&self) -> u32 {
        self.turn.number()
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.turn.color()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn set_glyph_style(&mut self, glyph_style: GlyphStyle) {
        self.board.set_glyph_style(glyph_style);
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn state(&self) -> GameOverState {
        self.game_over
    }

    pub fn winner(&self) -> Option<PieceColor> {
        self.game_over.winner()
    }

    pub fn white_won(&self) -> bool {
        self.game_over == GameOverState::WhiteWon
    }

    pub fn black_won(&self) -> bool {
        self.game_over == GameOverState::BlackWon
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_game_over()
    }

    /// Copy of the display buffer
    pub fn render(&self) -> [[&'static str; BOARD_SIZE]; BOARD_SIZE] {
        *self.board.display()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            turn: self.turn.number(),
            to_move: self.turn.color(),
            state: self.game_over,
            winner: self.game_over.winner(),
            board: self
                .board
                .display()
                .iter()
                .map(|row| row.concat().trim_end().to_string())
                .collect(),
            captured: self.captured.all().iter().map(Piece::piece_type).collect(),
            material_advantage: self.captured.material_advantage(),
            history: self.history.notation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Coord;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new();
        assert_eq!(game.turn(), 0);
        assert_eq!(game.side_to_move(), PieceColor::White);
        assert_eq!(game.current_player_idx(), 0);
        assert!(game.current_player().is_white());
        assert!(!game.white_won());
        assert!(!game.black_won());
        assert!(game.captured().is_empty());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_submit_does_not_mutate() {
        let mut game = Game::new();
        game.submit_move(0, "e2e3").unwrap();

        assert_eq!(game.turn(), 0);
        assert!(game.board().piece_at(at(6, 4)).is_some());
        assert!(game.board().is_empty(at(5, 4)));
    }

    #[test]
    fn test_apply_moves_piece_and_advances_turn() {
        let mut game = Game::new();
        game.submit_move(0, "e2e3").unwrap();
        let outcome = game.apply_move(0).unwrap();

        assert_eq!(outcome.piece.piece_type(), PieceType::Pawn);
        assert!(outcome.captured.is_none());
        assert_eq!(game.turn(), 1);
        assert!(game.board().is_empty(at(6, 4)));
        assert_eq!(game.render()[5][4], "P ");
        assert_eq!(game.render()[6][4], ". ");
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut game = Game::new();
        let err = game.submit_move(1, "e7e6").unwrap_err();
        assert!(matches!(err, MoveRejection::WrongTurn { player_idx: 1, turn: 0, .. }));
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_wrong_owner_rejected() {
        let mut game = Game::new();
        let err = game.submit_move(0, "e7e6").unwrap_err();
        assert!(matches!(
            err,
            MoveRejection::WrongOwner {
                owner: PieceColor::Black,
                player: PieceColor::White,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.submit_move(2, "e2e3"),
            Err(MoveRejection::UnknownPlayer { player_idx: 2 })
        );
    }

    #[test]
    fn test_apply_without_submit_fails() {
        let mut game = Game::new();
        assert!(matches!(
            game.apply_move(0),
            Err(GameError::NoPendingMove { player_idx: 0 })
        ));
    }

    #[test]
    fn test_rejected_submit_clears_pending() {
        let mut game = Game::new();
        game.submit_move(0, "e2e3").unwrap();
        assert!(game.submit_move(0, "e2e5").is_err());
        assert!(matches!(game.apply_move(0), Err(GameError::NoPendingMove { .. })));
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_out_of_turn_submit_keeps_pending() {
        //! Black submitting on White's turn is rejected without touching
        //! the move White already had accepted.
        let mut game = Game::new();
        game.submit_move(0, "e2e3").unwrap();
        assert!(matches!(
            game.submit_move(1, "e7e6"),
            Err(MoveRejection::WrongTurn { player_idx: 1, .. })
        ));

        let outcome = game.apply_move(0).unwrap();
        assert_eq!(outcome.request.to_string(), "e2e3");
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_apply_for_other_player_keeps_pending() {
        let mut game = Game::new();
        game.submit_move(0, "e2e3").unwrap();
        assert!(game.apply_move(1).is_err());
        assert!(game.apply_move(0).is_ok());
    }

    #[test]
    fn test_capture_recorded() {
        let mut board = Board::empty();
        board.place(at(4, 4), Piece::new(PieceColor::White, PieceType::Rook));
        board.place(at(1, 4), Piece::new(PieceColor::Black, PieceType::Knight));
        let mut game = Game::with_board(board);

        let outcome = game.play(0, "e4e7").unwrap();
        let captured = outcome.captured.expect("knight taken");
        assert_eq!(captured.piece_type(), PieceType::Knight);
        assert!(captured.is_captured());
        assert_eq!(game.captured().len(), 1);
        assert_eq!(game.board().occupied_count(), 1);
        assert_eq!(game.history().last_move().unwrap().captured, Some(PieceType::Knight));
        assert!(!game.is_over());
    }

    #[test]
    fn test_king_capture_wins_and_is_terminal() {
        let mut board = Board::empty();
        board.place(at(5, 4), Piece::new(PieceColor::White, PieceType::Queen));
        board.place(at(0, 4), Piece::new(PieceColor::Black, PieceType::King));
        board.place(at(7, 4), Piece::new(PieceColor::White, PieceType::King));
        let mut game = Game::with_board(board);

        let outcome = game.play(0, "e3e8").unwrap();
        assert_eq!(outcome.winner, Some(PieceColor::White));
        assert!(game.white_won());
        assert!(!game.black_won());
        assert_eq!(game.state().message(), "White Won");

        assert_eq!(
            game.submit_move(1, "e1e2"),
            Err(MoveRejection::GameFinished {
                winner: PieceColor::White
            })
        );
        assert!(game.white_won(), "win flag never resets");
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_snapshot() {
        let mut game = Game::new();
        game.play(0, "e2e3").unwrap();
        let snapshot = game.snapshot();

        assert_eq!(snapshot.turn, 1);
        assert_eq!(snapshot.to_move, PieceColor::Black);
        assert_eq!(snapshot.winner, None);
        assert_eq!(snapshot.board.len(), 8);
        assert_eq!(snapshot.board[5], ". . . . P . . .");
        assert_eq!(snapshot.history, vec!["e2e3"]);
    }
}

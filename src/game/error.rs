//! Error types for game module
//!
//! Rejections are ordinary outcomes of user input: the game state is left
//! untouched and the caller may retry. [`GameError`] additionally covers
//! callers that break the submit-then-apply protocol.

use crate::game::components::{PieceColor, PieceType};
use crate::game::types::Coord;

/// Why a submitted move was not accepted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    /// Notation is not exactly four characters
    #[error("Malformed move '{input}': expected 4 characters like 'e2e3'")]
    MalformedNotation { input: String },

    /// A file or rank character is outside a-h / 1-8
    #[error("Invalid {expected} '{found}' at position {position} in '{input}'")]
    InvalidCoordinate {
        input: String,
        position: usize,
        found: char,
        expected: &'static str,
    },

    /// Nothing to move on the source square
    #[error("No piece at {square}")]
    EmptySquare { square: Coord },

    /// Player index outside 0 and 1
    #[error("Unknown player index {player_idx}")]
    UnknownPlayer { player_idx: usize },

    /// Submission out of turn
    #[error("Player {player_idx} cannot move on turn {turn}: it is {expected:?}'s move")]
    WrongTurn {
        player_idx: usize,
        turn: u32,
        expected: PieceColor,
    },

    /// Source piece belongs to the other side
    #[error("Piece at {square} belongs to {owner:?}, not {player:?}")]
    WrongOwner {
        square: Coord,
        owner: PieceColor,
        player: PieceColor,
    },

    /// Shape, obstruction or friendly-capture violation
    #[error("Illegal move for {piece_type:?} from {from} to {to}")]
    IllegalMove {
        piece_type: PieceType,
        from: Coord,
        to: Coord,
    },

    /// A king has already been captured
    #[error("Game is over: {winner:?} won")]
    GameFinished { winner: PieceColor },
}

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The move was rejected
    #[error(transparent)]
    Rejected(#[from] MoveRejection),

    /// `apply_move` without a matching accepted `submit_move`
    #[error("No accepted move pending for player {player_idx}")]
    NoPendingMove { player_idx: usize },
}

/// Result type alias for move validation
pub type MoveResult<T> = Result<T, MoveRejection>;

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

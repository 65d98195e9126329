//! Game over state
//!
//! The only end condition is a captured king. The state starts as `Playing`
//! and moves to a terminal `WhiteWon` / `BlackWon`; it never goes back.
//!
//! ```text
//! Playing → WhiteWon | BlackWon
//! ```

use crate::game::components::PieceColor;
use serde::Serialize;

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum GameOverState {
    /// Moves are still accepted
    #[default]
    Playing,

    /// Black's king was captured
    WhiteWon,

    /// White's king was captured
    BlackWon,
}

impl GameOverState {
    /// State after `winner` captures the opposing king
    pub fn won_by(winner: PieceColor) -> Self {
        match winner {
            PieceColor::White => GameOverState::WhiteWon,
            PieceColor::Black => GameOverState::BlackWon,
        }
    }

    pub fn is_game_over(&self) -> bool {
        *self != GameOverState::Playing
    }

    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::Playing => None,
            GameOverState::WhiteWon => Some(PieceColor::White),
            GameOverState::BlackWon => Some(PieceColor::Black),
        }
    }

    /// Result message, empty while the game is running
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "",
            GameOverState::WhiteWon => "White Won",
            GameOverState::BlackWon => "Black Won",
        }
    }
}

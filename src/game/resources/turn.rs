//! Turn tracking
//!
//! The turn counter starts at 0 and increases by one per applied move.
//! Its parity selects the side to move: White on even turns, Black on odd.
//!
//! # Turn Flow
//!
//! ```text
//! turn 0: White → advance() → turn 1: Black → advance() → turn 2: White
//! ```

use crate::game::components::PieceColor;
use serde::Serialize;

/// One side of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Player {
    color: PieceColor,
    turn: u32,
}

impl Player {
    pub fn new(color: PieceColor) -> Self {
        Self {
            color,
            turn: color.turn_parity(),
        }
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn is_white(&self) -> bool {
        self.color == PieceColor::White
    }

    /// Turn parity owned by this player (0 for White, 1 for Black)
    pub fn turn(&self) -> u32 {
        self.turn
    }
}

/// Both players, indexed by player number (0 = White, 1 = Black)
pub fn players() -> [Player; 2] {
    [Player::new(PieceColor::White), Player::new(PieceColor::Black)]
}

/// Monotonic turn counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CurrentTurn {
    turn: u32,
}

impl CurrentTurn {
    pub fn number(&self) -> u32 {
        self.turn
    }

    /// `turn % 2`
    pub fn parity(&self) -> u32 {
        self.turn % 2
    }

    /// Side whose move is accepted on this turn
    pub fn color(&self) -> PieceColor {
        if self.parity() == PieceColor::White.turn_parity() {
            PieceColor::White
        } else {
            PieceColor::Black
        }
    }

    /// Whether `player` owns this turn
    pub fn belongs_to(&self, player: &Player) -> bool {
        self.parity() == player.turn()
    }

    pub fn advance(&mut self) {
        self.turn += 1;
    }
}

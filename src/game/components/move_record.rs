//! Move record used by the move history

use super::piece::{PieceColor, PieceType};
use crate::game::types::Coord;
use serde::Serialize;

/// One applied move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub piece_type: PieceType,
    pub piece_color: PieceColor,
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<PieceType>,
}

impl MoveRecord {
    /// Coordinate notation of the move, e.g. `e2e3`
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

//! Move history
//!
//! Chronological record of every applied move, one entry per ply.

use crate::game::components::MoveRecord;

#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Append a move. Called once per applied move, before the turn advances.
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Most recent move, `None` before the first move
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Number of half-moves made
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in coordinate notation, oldest first
    pub fn notation(&self) -> Vec<String> {
        self.moves.iter().map(MoveRecord::notation).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{PieceColor, PieceType};
    use crate::game::types::Coord;

    fn record(from: &str, to: &str) -> MoveRecord {
        MoveRecord {
            piece_type: PieceType::Pawn,
            piece_color: PieceColor::White,
            from: Coord::from_algebraic(from).unwrap(),
            to: Coord::from_algebraic(to).unwrap(),
            captured: None,
        }
    }

    #[test]
    fn test_empty_history() {
        let history = MoveHistory::default();
        assert!(history.is_empty());
        assert!(history.last_move().is_none());
    }

    #[test]
    fn test_add_and_last_move() {
        let mut history = MoveHistory::default();
        history.add_move(record("e2", "e3"));
        history.add_move(record("d2", "d3"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last_move().map(MoveRecord::notation), Some("d2d3".to_string()));
        assert_eq!(history.notation(), vec!["e2e3", "d2d3"]);
    }
}

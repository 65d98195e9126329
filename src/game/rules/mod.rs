//! Chess rules module - pure move legality
//!
//! Implements per-piece move validation as pure functions over a [`Board`],
//! separate from turn handling and move application in
//! [`crate::game::chess_game`].
//!
//! # Module Structure
//!
//! - `piece_moves` - Movement rules for each piece type (pawn, knight, bishop, rook, queen, king)
//!
//! [`Board`]: crate::game::board::Board

pub mod piece_moves;


pub use piece_moves::{can_move, get_possible_moves, is_valid_move};

//! Chess rules core
//!
//! Board model, per-piece move predicates, move notation and the turn-taking
//! game state machine.
//!
//! # Module Organization
//!
//! - `types` - Grid coordinates, files and ranks
//! - `components` - Piece, Square and MoveRecord values
//! - `board` - 8x8 mailbox board and its text display buffer
//! - `rules` - Movement predicates for each piece kind
//! - `notation` - Four-character coordinate notation (`e2e3`)
//! - `resources` - Turn counter, captured pieces, move history, win state
//! - `chess_game` - [`Game`], the submit/apply state machine
//! - `error` - Move rejections and game errors
//!
//! # Rules Subset
//!
//! Only piece movement shapes, path blocking, single-step pawns and king
//! capture are modelled. There is no check, castling, en passant or
//! promotion; the game ends when a king is taken.

pub mod board;
pub mod chess_game;
pub mod components;
pub mod error;
pub mod notation;
pub mod resources;
pub mod rules;
pub mod types;

pub use board::{Board, GlyphStyle};
pub use chess_game::{Game, GameSnapshot, MoveOutcome};
pub use components::{MoveRecord, Piece, PieceColor, PieceType, Square};
pub use error::{GameError, GameResult, MoveRejection, MoveResult};
pub use notation::MoveRequest;
pub use types::Coord;

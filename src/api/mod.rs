//! Flat function surface over [`Game`](crate::game::Game)
//!
//! Thin wrappers for callers that want booleans and plain arrays rather
//! than the typed [`Game`](crate::game::Game) methods.
//!
//! ## Module Organization
//!
//! - `game` - Game creation (create_game)
//! - `moves` - Move submission and application (submit_move, apply_move, play_move)
//! - `state` - Game state queries (winner, render, is_legal)

mod game;
mod moves;
mod state;

pub use game::{create_game, create_game_with_glyphs};
pub use moves::{apply_move, play_move, submit_move};
pub use state::{is_legal, legal_destinations, render, winner};

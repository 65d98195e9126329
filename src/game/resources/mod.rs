//! Per-game state owned by a [`Game`](crate::game::Game)
//!
//! # Resource Categories
//!
//! ## Turn Management
//! - [`Player`] - Side color and the turn parity it owns
//! - [`CurrentTurn`] - Monotonic turn counter
//!
//! ## Game History
//! - [`MoveHistory`] - Every applied move
//! - [`CapturedPieces`] - Captured pieces and material advantage
//!
//! ## Game Status
//! - [`GameOverState`] - Playing, or which side captured the opposing king

mod captured;
mod game_over;
mod history;
mod turn;

pub use captured::CapturedPieces;
pub use game_over::GameOverState;
pub use history::MoveHistory;
pub use turn::{players, CurrentTurn, Player};

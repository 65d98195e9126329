//! Move submission and application

use crate::game::{Game, GameResult, MoveOutcome};

/// Validate a move for `player_idx` (0 = White, 1 = Black)
///
/// # Returns
///
/// `true` when the move is accepted and pending, `false` on any rejection.
/// The board and the turn are unchanged either way. Use
/// [`Game::submit_move`] to get the rejection reason.
///
/// # Examples
///
/// ```rust
/// use chess_rules::api;
///
/// let mut game = api::create_game();
/// assert!(api::submit_move(&mut game, 0, "e2e3"));
/// assert!(!api::submit_move(&mut game, 1, "e7e6")); // not Black's turn
/// ```
pub fn submit_move(game: &mut Game, player_idx: usize, raw_move: &str) -> bool {
    game.submit_move(player_idx, raw_move).is_ok()
}

/// Apply the move last accepted by [`submit_move`] for `player_idx`
///
/// # Errors
///
/// [`GameError::NoPendingMove`](crate::game::GameError::NoPendingMove) when
/// no accepted move is pending for that player.
pub fn apply_move(game: &mut Game, player_idx: usize) -> GameResult<MoveOutcome> {
    game.apply_move(player_idx)
}

/// Submit and apply in one call
pub fn play_move(game: &mut Game, player_idx: usize, raw_move: &str) -> GameResult<MoveOutcome> {
    game.play(player_idx, raw_move)
}

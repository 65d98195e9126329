//! Chess rules engine
//!
//! Two players alternate submitting moves in four-character coordinate
//! notation (`e2e3`). Moves are checked against per-piece movement rules and
//! applied to an 8x8 board; capturing a king wins the game.
//!
//! - [`game`] - board, rules, notation and the [`Game`](game::Game) state machine
//! - [`api`] - flat functions over a game
//! - [`core`] - settings persistence and core errors

pub mod api;
pub mod core;
pub mod game;

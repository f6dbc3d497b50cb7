//! Player trait for entities that provide moves in a game.
//!
//! A player is anything that can be asked for the next move of a [`Game`]:
//! the search bot, a console user, a replay of a recorded game. The trait
//! focuses on behavior; each implementation has its own constructor.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. The bot blocks while its root search runs and a
//! console player blocks on stdin. Turn-based play needs nothing more.

use crate::game_repr::{Color, Game, GamePosition, Status};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White player won the game (Black was checkmated)
    WhiteWins,
    /// Black player won the game (White was checkmated)
    BlackWins,
    /// Side to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    /// Result of a game in its current state, if it is over
    pub fn of<P: GamePosition>(game: &Game<P>) -> Option<Self> {
        match game.outcome() {
            Status::InProgress => None,
            Status::Stalemate => Some(GameResult::Stalemate),
            Status::Checkmate => Some(match game.position().side_to_move() {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }),
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `get_move()` must be implemented.
pub trait Player<P: GamePosition> {
    /// Request the next move for the side to move in `game`.
    ///
    /// - `Some(mv)`: a move from the current position's legal set
    /// - `None`: the player cannot or will not move (no legal moves,
    ///   resignation, closed input)
    fn get_move(&mut self, game: &Game<P>) -> Option<P::Move>;

    /// Notification that the game has ended. Default: does nothing.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name of this player
    fn name(&self) -> &str {
        "Player"
    }
}

//! Move selection for two-player chess bots.
//!
//! The crate pairs a fixed-depth alpha-beta search with an opening book.
//! Board rules come from the [`game_repr`] contract, which is implemented
//! for the `chess` crate's board; the search itself is generic over it.

pub mod agent;
pub mod error;
pub mod game_repr;
pub mod opening;

pub use agent::ai::{Bot, BotConfig, SearchReport, SearchStats, SelectionSource};
pub use error::{EngineError, Result};
pub use game_repr::{
    ChessGame, ChessPosition, Color, Game, GameMove, GamePosition, MoveTag, Status, TaggedMove,
};
pub use opening::{Book, Opening, OpeningCatalog};

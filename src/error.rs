//! Error types for the bot.
//!
//! Move selection never fails; these errors come from the edges where text is
//! turned into positions, histories and opening catalogs, or where the worker
//! pool is built.

use thiserror::Error;

/// Errors that can occur while setting up games, catalogs or the bot
#[derive(Error, Debug)]
pub enum EngineError {
    /// FEN string could not be parsed into a position
    #[error("Invalid FEN: {fen}")]
    InvalidFen { fen: String },

    /// SAN move is not legal (or not parseable) at the given ply
    #[error("Illegal move '{san}' at ply {ply}")]
    IllegalMove { san: String, ply: usize },

    /// Move value is not in the current position's legal set
    #[error("Move {mv} is not legal in the current position")]
    IllegalTaggedMove { mv: String },

    /// Opening catalog line is malformed
    #[error("Bad opening catalog line '{line}': {reason}")]
    CatalogLine { line: String, reason: String },

    /// Dedicated search thread pool could not be created
    #[error("Failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, EngineError>;

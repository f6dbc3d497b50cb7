//! Game representation consumed by the bot.
//!
//! The bot never looks inside a board. It talks to the rules engine through
//! [`GamePosition`] and [`GameMove`]: enumerate legal moves, apply a move,
//! classify the status, ask whose turn it is, read the pieces and take an
//! identity digest. [`ChessPosition`] implements the contract on top of the
//! `chess` crate.

mod game;
mod moves;
mod position;


pub use game::*;
pub use moves::*;
pub use position::*;

use smallvec::SmallVec;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Fixed-size position identity used as a cache key.
///
/// Equal positions produce equal digests. Collisions between different
/// positions are possible and tolerated.
pub type Digest = u64;

/// Legal moves of one position, stack-allocated for typical move counts
pub type MoveList<M> = SmallVec<[M; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// Terminal classification of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Stalemate,
    Checkmate,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Classification tags carried by a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTag {
    /// The move gives check
    Check,
    /// The move removes an enemy piece
    Capture,
}

/// A legal transition from one position to a specific successor.
pub trait GameMove: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    fn has_tag(&self, tag: MoveTag) -> bool;
}

/// Immutable board state plus side to move, as seen by the search.
///
/// Implementations must be deterministic: applying the same move to equal
/// positions yields equal successors, and equal positions share a digest.
pub trait GamePosition: Clone + Send + Sync {
    type Move: GameMove;

    /// All legal moves for the side to move, in a stable order
    fn legal_moves(&self) -> MoveList<Self::Move>;

    /// Successor position after `mv`, which must be legal here
    fn apply(&self, mv: &Self::Move) -> Self;

    fn status(&self) -> Status;

    fn side_to_move(&self) -> Color;

    fn identity_digest(&self) -> Digest;

    /// Piece on `square` (0 = a1 .. 63 = h8)
    fn piece_on(&self, square: u8) -> Option<(Color, Type)>;
}

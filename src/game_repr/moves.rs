use super::{GameMove, MoveTag};
use chess::{Board, ChessMove, Piece};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A `chess` crate move with its ordering tags resolved.
///
/// Tags are computed once, when the move is generated from its source board.
/// Equality and hashing look at the underlying move only.
#[derive(Debug, Clone, Copy)]
pub struct TaggedMove {
    mv: ChessMove,
    capture: bool,
    check: bool,
}

impl TaggedMove {
    /// Tag `mv` against the board it is played from.
    pub fn new(board: &Board, mv: ChessMove) -> Self {
        let dest = mv.get_dest();
        // A pawn that changes file always captures, en passant included
        let capture = board.piece_on(dest).is_some()
            || (board.piece_on(mv.get_source()) == Some(Piece::Pawn)
                && mv.get_source().get_file() != dest.get_file());
        let check = board.make_move_new(mv).checkers().popcnt() > 0;

        Self { mv, capture, check }
    }

    pub fn chess_move(&self) -> ChessMove {
        self.mv
    }
}

impl GameMove for TaggedMove {
    fn has_tag(&self, tag: MoveTag) -> bool {
        match tag {
            MoveTag::Check => self.check,
            MoveTag::Capture => self.capture,
        }
    }
}

impl PartialEq for TaggedMove {
    fn eq(&self, other: &Self) -> bool {
        self.mv == other.mv
    }
}

impl Eq for TaggedMove {}

impl Hash for TaggedMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mv.hash(state);
    }
}

/// Coordinate notation, e.g. `e2e4` or `e7e8q`
impl fmt::Display for TaggedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mv)
    }
}

impl From<TaggedMove> for ChessMove {
    fn from(mv: TaggedMove) -> Self {
        mv.mv
    }
}

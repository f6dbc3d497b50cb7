use super::{Color, Digest, GamePosition, MoveList, Status, TaggedMove, Type};
use crate::error::{EngineError, Result};
use chess::{Board, BoardStatus, ChessMove, MoveGen, ALL_SQUARES};
use std::fmt;
use std::str::FromStr;

/// [`GamePosition`] over the `chess` crate's [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChessPosition {
    board: Board,
}

impl ChessPosition {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        Board::from_str(fen)
            .map(Self::new)
            .map_err(|_| EngineError::InvalidFen { fen: fen.to_string() })
    }

    /// Resolve a SAN move (`Nf3`, `exd5`, `O-O`, `e8=Q+`) against this position.
    ///
    /// Returns `None` when the text is not a legal move here.
    pub fn parse_san(&self, san: &str) -> Option<TaggedMove> {
        let san = san.trim_end_matches(&['+', '#', '!', '?'][..]);
        // `chess` reads promotions as `e8Q`, without the `=`
        let san = san.replacen('=', "", 1);
        let mv = ChessMove::from_san(&self.board, &san).ok()?;
        if !self.board.legal(mv) {
            return None;
        }
        Some(TaggedMove::new(&self.board, mv))
    }
}

impl GamePosition for ChessPosition {
    type Move = TaggedMove;

    fn legal_moves(&self) -> MoveList<TaggedMove> {
        MoveGen::new_legal(&self.board)
            .map(|mv| TaggedMove::new(&self.board, mv))
            .collect()
    }

    fn apply(&self, mv: &TaggedMove) -> Self {
        Self::new(self.board.make_move_new(mv.chess_move()))
    }

    fn status(&self) -> Status {
        match self.board.status() {
            BoardStatus::Ongoing => Status::InProgress,
            BoardStatus::Stalemate => Status::Stalemate,
            BoardStatus::Checkmate => Status::Checkmate,
        }
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn identity_digest(&self) -> Digest {
        self.board.get_hash()
    }

    fn piece_on(&self, square: u8) -> Option<(Color, Type)> {
        let square = *ALL_SQUARES.get(square as usize)?;
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((color.into(), piece.into()))
    }
}

/// FEN of the position
impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl From<chess::Color> for Color {
    fn from(color: chess::Color) -> Self {
        match color {
            chess::Color::White => Color::White,
            chess::Color::Black => Color::Black,
        }
    }
}

impl From<chess::Piece> for Type {
    fn from(piece: chess::Piece) -> Self {
        match piece {
            chess::Piece::Pawn => Type::Pawn,
            chess::Piece::Knight => Type::Knight,
            chess::Piece::Bishop => Type::Bishop,
            chess::Piece::Rook => Type::Rook,
            chess::Piece::Queen => Type::Queen,
            chess::Piece::King => Type::King,
        }
    }
}

use super::{ChessPosition, GamePosition, Status, TaggedMove};
use crate::error::{EngineError, Result};

/// Current position plus the moves that led to it.
#[derive(Debug, Clone)]
pub struct Game<P: GamePosition> {
    position: P,
    history: Vec<P::Move>,
}

/// A game played with the `chess` crate adapter
pub type ChessGame = Game<ChessPosition>;

impl<P: GamePosition> Game<P> {
    /// Start a game from `start` with an empty history.
    pub fn new(start: P) -> Self {
        Self {
            position: start,
            history: Vec::new(),
        }
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    /// Moves played so far, oldest first
    pub fn moves(&self) -> &[P::Move] {
        &self.history
    }

    /// Number of half-moves played
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Status of the current position
    pub fn outcome(&self) -> Status {
        self.position.status()
    }

    /// Play `mv`, which must be legal in the current position.
    pub fn play(&mut self, mv: P::Move) -> Result<()> {
        if !self.position.legal_moves().contains(&mv) {
            return Err(EngineError::IllegalTaggedMove { mv: mv.to_string() });
        }
        self.position = self.position.apply(&mv);
        self.history.push(mv);
        Ok(())
    }
}

impl ChessGame {
    /// Game from the standard starting position
    pub fn standard() -> Self {
        Self::new(ChessPosition::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        Ok(Self::new(ChessPosition::from_fen(fen)?))
    }

    /// Replay a SAN line such as `1. e4 e5 2. Nf3` from the starting position.
    pub fn from_san_line(line: &str) -> Result<Self> {
        let mut game = Self::standard();
        for san in san_tokens(line) {
            game.play_san(san)?;
        }
        Ok(game)
    }

    /// Play a move given in SAN, returning the resolved move.
    pub fn play_san(&mut self, san: &str) -> Result<TaggedMove> {
        let mv = self
            .position
            .parse_san(san)
            .ok_or_else(|| EngineError::IllegalMove {
                san: san.to_string(),
                ply: self.ply(),
            })?;
        self.position = self.position.apply(&mv);
        self.history.push(mv);
        Ok(mv)
    }
}

/// Split a movetext line into SAN tokens, skipping move numbers and results.
pub fn san_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
        .filter(|token| !matches!(*token, "*" | "1-0" | "0-1" | "1/2-1/2"))
        .map(|token| token.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.'))
        .filter(|token| !token.is_empty())
}

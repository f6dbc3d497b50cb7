//! Opening catalog.
//!
//! A catalog answers one question: which known openings are consistent with
//! the moves played so far. [`Book`] is the catalog for [`ChessPosition`]
//! games, loaded from an ECO table of `code<TAB>name<TAB>movetext` rows.

use crate::error::{EngineError, Result};
use crate::game_repr::{san_tokens, ChessPosition, GameMove, GamePosition, TaggedMove};
use once_cell::sync::Lazy;

/// Source of catalogued openings, queried by move prefix.
pub trait OpeningCatalog<M: GameMove>: Send + Sync {
    /// Every opening whose move sequence starts with `played`, in catalog order.
    ///
    /// Openings exactly as long as `played` are included.
    fn possible_openings(&self, played: &[M]) -> Vec<&Opening<M>>;
}

/// A named, catalogued move sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening<M> {
    eco: String,
    name: String,
    moves: Vec<M>,
}

impl<M: GameMove> Opening<M> {
    pub fn new(eco: impl Into<String>, name: impl Into<String>, moves: Vec<M>) -> Self {
        Self {
            eco: eco.into(),
            name: name.into(),
            moves,
        }
    }

    /// ECO classification code, e.g. `C50`
    pub fn eco(&self) -> &str {
        &self.eco
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn move_sequence(&self) -> &[M] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether `played` is a prefix of this opening
    pub fn continues(&self, played: &[M]) -> bool {
        self.moves.starts_with(played)
    }
}

/// Opening catalog for standard chess
#[derive(Debug, Clone, Default)]
pub struct Book {
    openings: Vec<Opening<TaggedMove>>,
}

/// Table shipped with the crate
const BUILTIN_TABLE: &str = include_str!("openings.tsv");

static BUILTIN: Lazy<Book> = Lazy::new(|| {
    Book::from_tsv(BUILTIN_TABLE).expect("built-in opening table must parse")
});

impl Book {
    /// The built-in ECO table, parsed once per process
    pub fn builtin() -> &'static Book {
        &BUILTIN
    }

    /// Parse an ECO table.
    ///
    /// Each row is `code<TAB>name<TAB>movetext`. Blank rows and rows starting
    /// with `#` are skipped. Every move is checked against the position it is
    /// played from.
    pub fn from_tsv(table: &str) -> Result<Self> {
        let mut openings = Vec::new();
        for line in table.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.splitn(3, '\t');
            let (Some(eco), Some(name), Some(movetext)) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(EngineError::CatalogLine {
                    line: line.to_string(),
                    reason: "expected three tab-separated fields".to_string(),
                });
            };
            let moves = resolve_line(movetext).map_err(|reason| EngineError::CatalogLine {
                line: line.to_string(),
                reason,
            })?;
            openings.push(Opening::new(eco.trim(), name.trim(), moves));
        }
        log::debug!("Loaded {} catalogued openings", openings.len());
        Ok(Self { openings })
    }

    /// Build an unnamed catalog from bare movetext lines such as `e4 e5 Nf3`.
    pub fn from_lines(lines: &[&str]) -> Result<Self> {
        let openings = lines
            .iter()
            .map(|line| {
                resolve_line(line)
                    .map(|moves| Opening::new("", "", moves))
                    .map_err(|reason| EngineError::CatalogLine {
                        line: line.to_string(),
                        reason,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { openings })
    }

    pub fn openings(&self) -> &[Opening<TaggedMove>] {
        &self.openings
    }

    pub fn len(&self) -> usize {
        self.openings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.openings.is_empty()
    }
}

impl OpeningCatalog<TaggedMove> for Book {
    fn possible_openings(&self, played: &[TaggedMove]) -> Vec<&Opening<TaggedMove>> {
        self.openings.iter().filter(|op| op.continues(played)).collect()
    }
}

/// Play a movetext line from the starting position, collecting its moves.
fn resolve_line(movetext: &str) -> std::result::Result<Vec<TaggedMove>, String> {
    let mut pos = ChessPosition::default();
    let mut moves = Vec::new();
    for san in san_tokens(movetext) {
        let mv = pos
            .parse_san(san)
            .ok_or_else(|| format!("illegal move '{}' at ply {}", san, moves.len()))?;
        pos = pos.apply(&mv);
        moves.push(mv);
    }
    Ok(moves)
}

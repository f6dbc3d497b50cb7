// Shared fixtures for the search test suites


use crate::game_repr::{Color, Digest, GameMove, GamePosition, MoveList, MoveTag, Status, Type};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Move of a [`TreePosition`]: the index of the child it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeMove {
    pub index: u8,
    pub check: bool,
    pub capture: bool,
}

impl TreeMove {
    pub fn quiet(index: u8) -> Self {
        Self {
            index,
            check: false,
            capture: false,
        }
    }

    pub fn tagged(index: u8, check: bool, capture: bool) -> Self {
        Self { index, check, capture }
    }
}

impl GameMove for TreeMove {
    fn has_tag(&self, tag: MoveTag) -> bool {
        match tag {
            MoveTag::Check => self.check,
            MoveTag::Capture => self.capture,
        }
    }
}

impl fmt::Display for TreeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Synthetic uniform game tree.
///
/// A node is the path of child indices from the root. Every node has
/// `branching` children and is never terminal unless built with
/// [`TreePosition::terminal`]. Material is a pseudo-random pawn balance
/// derived from the path. With `transpose` set, node identity ignores move
/// order, so permuted paths are the same position.
#[derive(Debug, Clone)]
pub struct TreePosition {
    path: Vec<u8>,
    branching: u8,
    seed: u64,
    transpose: bool,
    status: Status,
    expansions: Arc<AtomicUsize>,
}

impl TreePosition {
    pub fn new(branching: u8, seed: u64) -> Self {
        Self {
            path: Vec::new(),
            branching,
            seed,
            transpose: false,
            status: Status::InProgress,
            expansions: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn transposing(branching: u8, seed: u64) -> Self {
        Self {
            transpose: true,
            ..Self::new(branching, seed)
        }
    }

    /// Terminal leaf with `side_to_move` to move
    pub fn terminal(status: Status, side_to_move: Color) -> Self {
        let mut pos = Self::new(0, 0);
        pos.status = status;
        if side_to_move == Color::Black {
            pos.path.push(0);
        }
        pos
    }

    /// Number of `legal_moves` calls made on this tree so far
    pub fn expansions(&self) -> usize {
        self.expansions.load(Ordering::SeqCst)
    }

    fn key(&self) -> Vec<u8> {
        let mut key = self.path.clone();
        if self.transpose {
            key.sort_unstable();
        }
        key
    }

    fn hash(&self) -> u64 {
        // FNV-1a over the seed and the identity key
        let mut h: u64 = 0xcbf2_9ce4_8422_2325 ^ self.seed;
        for &b in self.key().iter() {
            h ^= u64::from(b) + 1;
            h = h.wrapping_mul(0x0100_0000_01b3);
        }
        h ^ ((self.path.len() as u64) << 56)
    }

    /// Pawn balance in White's favour, in -4..=4
    pub fn material(&self) -> i32 {
        (self.hash() % 9) as i32 - 4
    }
}

impl GamePosition for TreePosition {
    type Move = TreeMove;

    fn legal_moves(&self) -> MoveList<TreeMove> {
        self.expansions.fetch_add(1, Ordering::SeqCst);
        if self.status.is_terminal() {
            return MoveList::new();
        }
        (0..self.branching)
            .map(|i| TreeMove::tagged(i, i % 3 == 1, i % 3 == 2))
            .collect()
    }

    fn apply(&self, mv: &TreeMove) -> Self {
        let mut next = self.clone();
        next.path.push(mv.index);
        next
    }

    fn status(&self) -> Status {
        self.status
    }

    fn side_to_move(&self) -> Color {
        if self.path.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    fn identity_digest(&self) -> Digest {
        self.hash()
    }

    fn piece_on(&self, square: u8) -> Option<(Color, Type)> {
        let material = self.material();
        if (square as i32) >= material.abs() {
            return None;
        }
        if material > 0 {
            Some((Color::White, Type::Pawn))
        } else {
            Some((Color::Black, Type::Pawn))
        }
    }
}

/// Exhaustive minimax without pruning or memo
pub fn minimax<P: GamePosition>(pos: &P, max_color: Color, depth: u8, maximizing: bool) -> f64 {
    if depth == 0 {
        return crate::agent::ai::evaluate(pos, max_color);
    }
    let children = pos
        .legal_moves()
        .into_iter()
        .map(|mv| minimax(&pos.apply(&mv), max_color, depth - 1, !maximizing));
    if maximizing {
        children.fold(f64::NEG_INFINITY, f64::max)
    } else {
        children.fold(f64::INFINITY, f64::min)
    }
}

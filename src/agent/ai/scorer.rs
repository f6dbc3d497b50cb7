use super::evaluation::evaluate;
use crate::game_repr::{Color, Digest, GamePosition};
use std::collections::HashMap;

/// Per-search memo of position scores.
///
/// One scorer backs exactly one root-move search and is dropped when that
/// search returns. It is never shared between workers, so it needs no
/// locking.
///
/// Entries carry no bound type: a value stored after a cutoff is returned on
/// a later hit exactly like a fully searched one, whatever window the caller
/// holds at that point.
#[derive(Debug)]
pub struct Scorer {
    /// Scores by position digest
    cache: HashMap<Digest, f64>,
    /// Side whose advantage is positive
    max_color: Color,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
    /// Statistics: number of evaluator calls
    pub evaluations: u64,
}

impl Scorer {
    pub fn new(max_color: Color) -> Self {
        Self {
            cache: HashMap::new(),
            max_color,
            hits: 0,
            misses: 0,
            evaluations: 0,
        }
    }

    pub fn max_color(&self) -> Color {
        self.max_color
    }

    /// Look up a cached score
    pub fn probe(&mut self, digest: Digest) -> Option<f64> {
        match self.cache.get(&digest) {
            Some(&score) => {
                self.hits += 1;
                Some(score)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a score, replacing any previous entry
    pub fn store(&mut self, digest: Digest, score: f64) {
        self.cache.insert(digest, score);
    }

    /// Static evaluation of `pos` for this scorer's maximizing side
    pub fn score<P: GamePosition>(&mut self, pos: &P) -> f64 {
        self.evaluations += 1;
        evaluate(pos, self.max_color)
    }

    /// Number of cached positions
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

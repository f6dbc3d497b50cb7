// Root parallelization
//
// Every legal root move is searched by its own rayon task with its own
// scorer. Tasks share nothing but the read-only root position: no cache, no
// window tightening, no cancellation. Results are collected in move order,
// so ties go to the earliest move in search order on every run.

use super::move_ordering::generate_ordered_moves;
use super::scorer::Scorer;
use super::search::{alpha_beta_min, SCORE_BOUND, SEARCH_DEPTH};
use crate::game_repr::GamePosition;
use rayon::prelude::*;

/// Outcome of one root move's search
#[derive(Debug, Clone, Copy)]
pub struct RootScore<M> {
    pub mv: M,
    pub score: f64,
    /// Nodes visited (cache probes)
    pub nodes: u64,
    pub cache_hits: u64,
}

/// Search every legal move of `pos` in parallel.
///
/// Scores are from the perspective of the side to move at `pos`. The
/// returned list follows the ordered root move list.
pub fn search_root<P: GamePosition>(pos: &P) -> Vec<RootScore<P::Move>> {
    let moves = generate_ordered_moves(pos);
    let max_color = pos.side_to_move();

    moves
        .as_slice()
        .par_iter()
        .map(|&mv| {
            let mut scr = Scorer::new(max_color);
            let next = pos.apply(&mv);
            let score = alpha_beta_min(&mut scr, &next, -SCORE_BOUND, SCORE_BOUND, SEARCH_DEPTH);
            log::debug!("root move {} scored {:.1} ({} cached positions)", mv, score, scr.len());
            RootScore {
                mv,
                score,
                nodes: scr.hits + scr.misses,
                cache_hits: scr.hits,
            }
        })
        .collect()
}

/// Move with the strictly greatest score; the first one wins ties.
///
/// Returns `None` only for an empty list.
pub fn pick_best<M: Copy>(scores: &[RootScore<M>]) -> Option<(M, f64)> {
    let mut best: Option<(M, f64)> = None;
    for root in scores {
        match best {
            Some((_, best_score)) if root.score <= best_score => {}
            _ => best = Some((root.mv, root.score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(mv: u8, score: f64) -> RootScore<u8> {
        RootScore {
            mv,
            score,
            nodes: 0,
            cache_hits: 0,
        }
    }

    #[test]
    fn test_pick_best_takes_highest() {
        let scores = [root(1, -3.0), root(2, 4.5), root(3, 0.0)];
        assert_eq!(pick_best(&scores), Some((2, 4.5)));
    }

    #[test]
    fn test_pick_best_first_seen_wins_ties() {
        let scores = [root(7, 1.0), root(8, 2.0), root(9, 2.0)];
        assert_eq!(pick_best(&scores), Some((8, 2.0)));
    }

    #[test]
    fn test_pick_best_empty() {
        assert_eq!(pick_best::<u8>(&[]), None);
    }

    #[test]
    fn test_pick_best_accepts_lowest_bound() {
        let scores = [root(1, -SCORE_BOUND)];
        assert_eq!(pick_best(&scores), Some((1, -SCORE_BOUND)));
    }
}

// Alpha-Beta Minimax Search
//
// Two mutually recursive routines alternate by ply: `alpha_beta_max` at nodes
// where the scorer's maximizing side is to move and `alpha_beta_min` at the
// opponent's nodes. Both are fail-hard: a cutoff returns the violated bound,
// and exhausting the moves returns the (possibly tightened) bound of the
// node's own side.
//
// Every returned value is memoized in the scorer under the node's digest,
// and a hit returns it before anything else is looked at, including the
// remaining depth and the current window.

use super::move_ordering::generate_ordered_moves;
use super::scorer::Scorer;
use crate::game_repr::GamePosition;

/// Plies searched below each root move
pub const SEARCH_DEPTH: u8 = 5;

/// Initial window half-width at the root, wider than any reachable score
pub const SCORE_BOUND: f64 = 10_000.0;

/// Maximizing node.
///
/// # Arguments
/// * `scr` - Memo and maximizing side for this search
/// * `pos` - Position to search
/// * `alpha` - Best score the maximizer can already guarantee
/// * `beta` - Best score the minimizer can already guarantee
/// * `depth_left` - Remaining plies (0 = evaluate statically)
pub fn alpha_beta_max<P: GamePosition>(
    scr: &mut Scorer,
    pos: &P,
    mut alpha: f64,
    beta: f64,
    depth_left: u8,
) -> f64 {
    let hash = pos.identity_digest();
    if let Some(score) = scr.probe(hash) {
        return score;
    }

    if depth_left == 0 {
        let score = scr.score(pos);
        scr.store(hash, score);
        return score;
    }

    for mv in generate_ordered_moves(pos) {
        let next = pos.apply(&mv);
        let score = alpha_beta_min(scr, &next, alpha, beta, depth_left - 1);
        if score >= beta {
            // Beta cutoff
            scr.store(hash, beta);
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    scr.store(hash, alpha);
    alpha
}

/// Minimizing node, the mirror of [`alpha_beta_max`].
pub fn alpha_beta_min<P: GamePosition>(
    scr: &mut Scorer,
    pos: &P,
    alpha: f64,
    mut beta: f64,
    depth_left: u8,
) -> f64 {
    let hash = pos.identity_digest();
    if let Some(score) = scr.probe(hash) {
        return score;
    }

    if depth_left == 0 {
        let score = scr.score(pos);
        scr.store(hash, score);
        return score;
    }

    for mv in generate_ordered_moves(pos) {
        let next = pos.apply(&mv);
        let score = alpha_beta_max(scr, &next, alpha, beta, depth_left - 1);
        if score <= alpha {
            // Alpha cutoff
            scr.store(hash, alpha);
            return alpha;
        }
        if score < beta {
            beta = score;
        }
    }

    scr.store(hash, beta);
    beta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{ChessPosition, Color};

    #[test]
    fn test_depth_zero_is_static_eval() {
        let pos = ChessPosition::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let mut scr = Scorer::new(Color::White);
        assert_eq!(alpha_beta_max(&mut scr, &pos, -SCORE_BOUND, SCORE_BOUND, 0), 9.0);
        assert_eq!(scr.evaluations, 1);
        assert_eq!(scr.len(), 1);
    }

    #[test]
    fn test_finds_free_queen() {
        // White to move can take the undefended queen on d5
        let pos = ChessPosition::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").unwrap();
        let mut scr = Scorer::new(Color::White);
        let score = alpha_beta_max(&mut scr, &pos, -SCORE_BOUND, SCORE_BOUND, 2);
        // Rxd5 leaves a rook against a bare king
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_score_stays_inside_window() {
        let pos = ChessPosition::default();
        let mut scr = Scorer::new(Color::White);
        let score = alpha_beta_min(&mut scr, &pos, -1.0, 1.0, 2);
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn test_terminal_node_returns_window_bound() {
        // Black is mated; no moves to expand, so the node returns its bound
        let mate = ChessPosition::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let mut scr = Scorer::new(Color::White);
        assert_eq!(alpha_beta_min(&mut scr, &mate, -50.0, 50.0, 3), 50.0);
        assert_eq!(scr.evaluations, 0);
    }
}

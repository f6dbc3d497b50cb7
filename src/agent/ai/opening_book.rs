// Opening book selection

use crate::game_repr::GameMove;
use crate::opening::OpeningCatalog;

/// Next book move after `played`, if the catalog knows one.
///
/// Candidates are the catalogued openings consistent with `played`, ranked
/// longest first (catalog order among equals). Only the top candidate is
/// consulted: if it is longer than `played` its next move is returned,
/// otherwise there is no book move and the caller should search.
pub fn opening_move<M, C>(catalog: &C, played: &[M]) -> Option<M>
where
    M: GameMove,
    C: OpeningCatalog<M> + ?Sized,
{
    let mut candidates = catalog.possible_openings(played);
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));

    let best = candidates.first()?;
    best.move_sequence().get(played.len()).copied()
}

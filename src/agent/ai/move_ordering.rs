// Move ordering: checks and captures first, to make alpha-beta cut sooner

use crate::game_repr::{GameMove, GamePosition, MoveList, MoveTag};

/// Ordering predicate: `a` should be searched before `b`.
///
/// `a` comes first when it gives check and `b` does not, or when it captures
/// and `b` does not. The two rules are independent, so a checking non-capture
/// and a capturing non-check each claim to come before the other. This is not
/// a strict weak ordering and must not be fed to `slice::sort_by`.
pub fn importance_less<M: GameMove>(a: &M, b: &M) -> bool {
    if a.has_tag(MoveTag::Check) && !b.has_tag(MoveTag::Check) {
        return true;
    }
    if a.has_tag(MoveTag::Capture) && !b.has_tag(MoveTag::Capture) {
        return true;
    }
    false
}

/// Reorder `moves` in place by [`importance_less`].
///
/// Stable insertion sort: a move only moves ahead of a neighbour the
/// predicate says it beats, so the result is well defined even where the
/// predicate contradicts itself.
pub fn order_moves<M: GameMove>(moves: &mut [M]) {
    for i in 1..moves.len() {
        let mut j = i;
        while j > 0 && importance_less(&moves[j], &moves[j - 1]) {
            moves.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Generate all legal moves of `pos` in search order
pub fn generate_ordered_moves<P: GamePosition>(pos: &P) -> MoveList<P::Move> {
    let mut moves = pos.legal_moves();
    order_moves(&mut moves);
    moves
}

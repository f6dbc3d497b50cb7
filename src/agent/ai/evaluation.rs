// Position evaluation function
// Returns a score from the maximizing side's perspective (positive = good for it)

use crate::game_repr::{Color, GamePosition, Status, Type};

/// Score of a checkmate position
pub const CHECKMATE_SCORE: f64 = 1000.0;

/// Score of a stalemate position
pub const DRAW_SCORE: f64 = 0.0;

// Material values in pawns
const KING_VALUE: f64 = 200.0;
const QUEEN_VALUE: f64 = 9.0;
const ROOK_VALUE: f64 = 5.0;
const BISHOP_VALUE: f64 = 3.1;
const KNIGHT_VALUE: f64 = 3.0;
const PAWN_VALUE: f64 = 1.0;

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> f64 {
    match piece_type {
        Type::King => KING_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Pawn => PAWN_VALUE,
    }
}

/// Evaluate `pos` for `max_color`.
///
/// - Stalemate scores [`DRAW_SCORE`].
/// - Checkmate scores `+CHECKMATE_SCORE` when the mated side (the side to
///   move) is `max_color`, and `-CHECKMATE_SCORE` otherwise.
/// - Anything else is the material balance: every piece of `max_color` adds
///   its value, every enemy piece subtracts it.
pub fn evaluate<P: GamePosition>(pos: &P, max_color: Color) -> f64 {
    match pos.status() {
        Status::Stalemate => return DRAW_SCORE,
        Status::Checkmate => {
            return if pos.side_to_move() == max_color {
                CHECKMATE_SCORE
            } else {
                -CHECKMATE_SCORE
            };
        }
        Status::InProgress => {}
    }

    let mut total = 0.0;
    for square in 0..64 {
        if let Some((color, piece_type)) = pos.piece_on(square) {
            let value = piece_value(piece_type);
            if color == max_color {
                total += value;
            } else {
                total -= value;
            }
        }
    }
    total
}

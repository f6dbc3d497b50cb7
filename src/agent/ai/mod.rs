// AI Agent - Fixed-depth Alpha-Beta Minimax
//
// This module implements the move selector: an opening book lookup followed,
// on a miss, by a fixed-depth alpha-beta minimax search that runs one
// independent worker per legal root move.
//
// Components (leaf to root):
// - evaluation: material-only scoring from a maximizing side's perspective
// - move_ordering: checks and captures first
// - scorer: per-search memo of evaluated positions
// - search: mutually recursive maximize/minimize with alpha-beta cutoffs
// - root: parallel fan-out over root moves and best-score selection
// - opening_book: next move of the longest matching catalogued opening
// - bot: the facade that ties them together

mod bot;
mod evaluation;
mod move_ordering;
mod opening_book;
mod root;
mod scorer;
mod search;

#[cfg(test)]
mod tests;

pub use bot::{Bot, BotConfig, SearchReport, SearchStats, SelectionSource};
pub use evaluation::{evaluate, piece_value, CHECKMATE_SCORE, DRAW_SCORE};
pub use move_ordering::{generate_ordered_moves, importance_less, order_moves};
pub use opening_book::opening_move;
pub use root::{pick_best, search_root, RootScore};
pub use scorer::Scorer;
pub use search::{alpha_beta_max, alpha_beta_min, SCORE_BOUND, SEARCH_DEPTH};

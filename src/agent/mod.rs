pub mod player;
pub use player::*;

pub mod ai;
pub use ai::{Bot, BotConfig, SearchReport, SearchStats, SelectionSource};

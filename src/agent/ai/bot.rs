//! Bot - move selection with an opening book and parallel alpha-beta search
//!
//! The bot first asks its opening catalog for the next book move. On a miss
//! it searches every legal root move in parallel to a fixed depth and plays
//! the best-scoring one.
//!
//! # Examples
//!
//! ```no_run
//! use chess_bot::{Bot, BotConfig, ChessGame};
//!
//! let bot = Bot::new(BotConfig::default()).unwrap();
//! let game = ChessGame::from_san_line("1. e4 e5").unwrap();
//! let (mv, score) = bot.select_move(Some(&game));
//! println!("{:?} {}", mv, score);
//! ```

use super::evaluation::evaluate;
use super::opening_book::opening_move;
use super::root::{pick_best, search_root};
use crate::agent::player::Player;
use crate::error::Result;
use crate::game_repr::{ChessPosition, Game, GamePosition};
use crate::opening::{Book, OpeningCatalog};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration for the bot.
///
/// Search depth is fixed and not part of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotConfig {
    /// Consult the opening book before searching
    pub use_book: bool,
    /// Worker threads for root search (None = rayon's global pool)
    pub threads: Option<usize>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            use_book: true,
            threads: None,
        }
    }
}

impl BotConfig {
    #[must_use]
    pub fn with_book(mut self, use_book: bool) -> Self {
        self.use_book = use_book;
        self
    }

    /// Set the number of worker threads (clamped to at least one)
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    /// Number of threads root search will run on
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(rayon::current_num_threads)
    }
}

/// Where a selected move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Next move of a catalogued opening
    Book,
    /// Best root move of the search
    Search,
    /// Current position is checkmate or stalemate; no move
    Terminal,
    /// No game was given
    NoGame,
}

/// Aggregate counters of one selection
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// Root moves searched
    pub root_moves: usize,
    /// Nodes visited across all root searches
    pub nodes: u64,
    /// Nodes answered from a scorer's memo
    pub cache_hits: u64,
    pub elapsed: Duration,
}

/// Full result of one selection
#[derive(Debug, Clone, Copy)]
pub struct SearchReport<M> {
    pub best_move: Option<M>,
    /// Score from the mover's perspective
    pub score: f64,
    pub source: SelectionSource,
    pub stats: SearchStats,
}

/// Move selector combining an opening catalog with root-parallel search
pub struct Bot<P: GamePosition> {
    config: BotConfig,
    catalog: Arc<dyn OpeningCatalog<P::Move>>,
    /// Dedicated worker pool when a thread count is configured
    pool: Option<rayon::ThreadPool>,
    name: String,
}

impl Bot<ChessPosition> {
    /// Bot for standard chess using the built-in opening table
    pub fn new(config: BotConfig) -> Result<Self> {
        Self::with_catalog(config, Arc::new(Book::builtin().clone()))
    }
}

impl<P: GamePosition> Bot<P> {
    /// Bot using `catalog` as its opening book
    pub fn with_catalog(config: BotConfig, catalog: Arc<dyn OpeningCatalog<P::Move>>) -> Result<Self> {
        let pool = match config.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("search-{}", i))
                    .build()?,
            ),
            None => None,
        };

        Ok(Self {
            config,
            catalog,
            pool,
            name: "Bot".to_string(),
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Select a move for the side to move in `game`.
    ///
    /// Returns the move and its score from the mover's perspective. Book
    /// moves score 0.0. There is no move when `game` is `None` (score 0.0)
    /// or when its position is terminal (score is that position's static
    /// evaluation: ±1000.0 for checkmate, 0.0 for stalemate).
    pub fn select_move(&self, game: Option<&Game<P>>) -> (Option<P::Move>, f64) {
        let report = self.select_move_with_stats(game);
        (report.best_move, report.score)
    }

    /// Like [`Bot::select_move`], with the move's source and search counters.
    pub fn select_move_with_stats(&self, game: Option<&Game<P>>) -> SearchReport<P::Move> {
        let start = Instant::now();

        let Some(game) = game else {
            return SearchReport {
                best_move: None,
                score: 0.0,
                source: SelectionSource::NoGame,
                stats: SearchStats::default(),
            };
        };

        let pos = game.position();

        if self.config.use_book {
            // Catalog lines start from the standard position; a game set up
            // from elsewhere can be handed a move that is illegal here
            match opening_move(self.catalog.as_ref(), game.moves()) {
                Some(mv) if pos.legal_moves().contains(&mv) => {
                    log::debug!("[{}] book move {} at ply {}", self.name, mv, game.ply());
                    return SearchReport {
                        best_move: Some(mv),
                        score: 0.0,
                        source: SelectionSource::Book,
                        stats: SearchStats {
                            elapsed: start.elapsed(),
                            ..SearchStats::default()
                        },
                    };
                }
                Some(mv) => log::debug!("[{}] book move {} is illegal here, searching", self.name, mv),
                None => {}
            }
        }

        if pos.status().is_terminal() {
            let score = evaluate(pos, pos.side_to_move());
            log::debug!("[{}] no move: position is {:?}", self.name, pos.status());
            return SearchReport {
                best_move: None,
                score,
                source: SelectionSource::Terminal,
                stats: SearchStats {
                    elapsed: start.elapsed(),
                    ..SearchStats::default()
                },
            };
        }

        let scores = match &self.pool {
            Some(pool) => pool.install(|| search_root(pos)),
            None => search_root(pos),
        };

        let stats = SearchStats {
            root_moves: scores.len(),
            nodes: scores.iter().map(|r| r.nodes).sum(),
            cache_hits: scores.iter().map(|r| r.cache_hits).sum(),
            elapsed: start.elapsed(),
        };
        log::trace!(
            "[{}] cache hits {} of {} nodes",
            self.name,
            stats.cache_hits,
            stats.nodes
        );

        match pick_best(&scores) {
            Some((mv, score)) => {
                log::info!(
                    "[{}] selected {} score {:.1} ({} root moves, {} nodes, {} threads, {:.2}s)",
                    self.name,
                    mv,
                    score,
                    stats.root_moves,
                    stats.nodes,
                    self.config.effective_threads(),
                    stats.elapsed.as_secs_f64()
                );
                SearchReport {
                    best_move: Some(mv),
                    score,
                    source: SelectionSource::Search,
                    stats,
                }
            }
            // Unreachable for an in-progress position, which has legal moves
            None => SearchReport {
                best_move: None,
                score: 0.0,
                source: SelectionSource::Terminal,
                stats,
            },
        }
    }
}

impl<P: GamePosition> Player<P> for Bot<P> {
    fn get_move(&mut self, game: &Game<P>) -> Option<P::Move> {
        self.select_move(Some(game)).0
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<P: GamePosition> fmt::Debug for Bot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bot")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

//! Console game: a human plays White against the bot.
//!
//! Moves are read from stdin in standard algebraic notation (`e4`, `Nf3`,
//! `O-O`, `exd5`). `quit` or end of input resigns.
//!
//! Options:
//! - `--no-book`: never consult the opening book
//! - `--threads N`: run root search on `N` worker threads
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for per-move
//! search details.

use chess_bot::agent::player::{GameResult, Player};
use chess_bot::game_repr::Type;
use chess_bot::{Bot, BotConfig, ChessGame, ChessPosition, Color, GamePosition, SelectionSource, TaggedMove};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Console player reading SAN moves from stdin
struct HumanPlayer<R> {
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Player<ChessPosition> for HumanPlayer<R> {
    fn get_move(&mut self, game: &ChessGame) -> Option<TaggedMove> {
        loop {
            print!("{}> ", game.ply() / 2 + 1);
            io::stdout().flush().ok()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).ok()? == 0 {
                return None;
            }
            let line = line.trim();
            match line {
                "" => continue,
                "quit" | "resign" => return None,
                _ => {}
            }

            match game.position().parse_san(line) {
                Some(mv) => return Some(mv),
                None => println!("Illegal move: {}", line),
            }
        }
    }

    fn game_ended(&mut self, result: GameResult) {
        println!("Game over: {:?}", result);
    }

    fn name(&self) -> &str {
        "Human"
    }
}

struct Options {
    config: BotConfig,
}

fn parse_args() -> Result<Options, String> {
    let mut config = BotConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-book" => config = config.with_book(false),
            "--threads" => {
                let value = args.next().ok_or("--threads needs a value")?;
                let threads = value
                    .parse::<usize>()
                    .map_err(|e| format!("invalid thread count {:?}: {}", value, e))?;
                config = config.with_threads(threads);
            }
            other => return Err(format!("unknown argument {:?}", other)),
        }
    }
    Ok(Options { config })
}

fn piece_char(color: Color, piece_type: Type) -> char {
    let c = match piece_type {
        Type::King => 'k',
        Type::Queen => 'q',
        Type::Rook => 'r',
        Type::Bishop => 'b',
        Type::Knight => 'n',
        Type::Pawn => 'p',
    };
    match color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

fn print_board(pos: &ChessPosition) {
    for rank in (0..8u8).rev() {
        print!("{} ", rank + 1);
        for file in 0..8u8 {
            let c = pos
                .piece_on(rank * 8 + file)
                .map(|(color, piece_type)| piece_char(color, piece_type))
                .unwrap_or('.');
            print!(" {}", c);
        }
        println!();
    }
    println!("   a b c d e f g h");
    println!("{}", pos);
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: chess_bot [--no-book] [--threads N]");
            return ExitCode::FAILURE;
        }
    };

    let mut bot = match Bot::new(options.config) {
        Ok(bot) => bot.with_name("Black"),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Bot ready (book: {}, threads: {})",
        options.config.use_book,
        options.config.effective_threads()
    );

    let stdin = io::stdin();
    let mut human = HumanPlayer::new(stdin.lock());
    let mut game = ChessGame::standard();

    loop {
        print_board(game.position());
        if let Some(result) = GameResult::of(&game) {
            human.game_ended(result);
            bot.game_ended(result);
            break;
        }

        let mv = match game.position().side_to_move() {
            Color::White => match human.get_move(&game) {
                Some(mv) => mv,
                None => {
                    println!("White resigns");
                    break;
                }
            },
            Color::Black => {
                let report = bot.select_move_with_stats(Some(&game));
                let Some(mv) = report.best_move else {
                    break;
                };
                match report.source {
                    SelectionSource::Book => println!("{} plays {} (book)", Player::name(&bot), mv),
                    _ => println!(
                        "{} plays {} (score {:.1}, {} nodes, {:.2}s)",
                        Player::name(&bot),
                        mv,
                        report.score,
                        report.stats.nodes,
                        report.stats.elapsed.as_secs_f64()
                    ),
                }
                mv
            }
        };

        if let Err(e) = game.play(mv) {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let moves: Vec<String> = game.moves().iter().map(|m| m.to_string()).collect();
    println!("Moves: {}", moves.join(" "));
    ExitCode::SUCCESS
}

use chess_bot::agent::ai::{alpha_beta_min, generate_ordered_moves, search_root, Scorer, SCORE_BOUND};
use chess_bot::{Bot, BotConfig, ChessGame, ChessPosition, GamePosition};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ENDGAME: &str = "4k3/8/8/3n4/8/8/8/3RK3 w - - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_ordered_moves(c: &mut Criterion) {
    let pos = ChessPosition::from_fen(MIDDLEGAME).unwrap();
    c.bench_function("ordered moves middlegame", |b| {
        b.iter(|| black_box(generate_ordered_moves(&pos)))
    });
}

fn bench_single_root_move(c: &mut Criterion) {
    let pos = ChessPosition::from_fen(MIDDLEGAME).unwrap();
    let mv = pos.parse_san("Ng5").unwrap();
    let next = pos.apply(&mv);
    c.bench_function("alpha-beta depth 3 after Ng5", |b| {
        b.iter(|| {
            let mut scr = Scorer::new(pos.side_to_move());
            black_box(alpha_beta_min(&mut scr, &next, -SCORE_BOUND, SCORE_BOUND, 3))
        })
    });
}

fn bench_search_root_endgame(c: &mut Criterion) {
    let pos = ChessPosition::from_fen(ENDGAME).unwrap();
    c.bench_function("search root endgame", |b| b.iter(|| black_box(search_root(&pos))));
}

fn bench_select_move_threads(c: &mut Criterion) {
    let game = ChessGame::from_fen(ENDGAME).unwrap();
    let mut group = c.benchmark_group("select move endgame");
    group.sample_size(10);
    for threads in [1, 2, 4] {
        let bot = Bot::new(BotConfig::default().with_book(false).with_threads(threads)).unwrap();
        group.bench_function(format!("{} threads", threads), |b| {
            b.iter(|| black_box(bot.select_move(Some(&game))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ordered_moves,
    bench_single_root_move,
    bench_search_root_endgame,
    bench_select_move_threads
);
criterion_main!(benches);

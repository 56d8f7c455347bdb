//! `othello_core::engine` の性能計測（合法手生成、着手適用）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use othello_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 先頭の合法手を打ち続けて `plies` 手進めた盤面を返す。
fn board_after_plies(plies: u16) -> engine::Board {
    let mut board = engine::Board::new();

    for _ply in u16::MIN..plies {
        let Some(coordinate) = board.legal_moves().into_iter().next() else {
            break;
        };
        if board.place_disc(coordinate).is_err() {
            break;
        }
    }

    board
}

/// `Board::place_disc` を計測する。
fn bench_place_disc(criterion: &mut Criterion) {
    let square = engine::Coordinate::new(2, 3);

    criterion.bench_function("engine/place_disc_initial", |bench| {
        bench.iter_batched(
            engine::Board::new,
            |mut board| black_box(board.place_disc(square)),
            BatchSize::SmallInput,
        );
    });
}

/// `Board::legal_moves` を計測する。
fn bench_legal_moves(criterion: &mut Criterion) {
    criterion.bench_function("engine/legal_moves_initial", |bench| {
        bench.iter(|| black_box(engine::Board::new().legal_moves()));
    });

    let midgame = board_after_plies(24);
    criterion.bench_function("engine/legal_moves_midgame", |bench| {
        bench.iter(|| black_box(midgame.legal_moves()));
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_place_disc(&mut criterion);
    bench_legal_moves(&mut criterion);

    criterion.final_summary();
}

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mailbox_chess::game_state::chess_types::{Move, Position, Side, Square};
use mailbox_chess::search::board_scoring::MaterialScorer;
use mailbox_chess::search::minimax::select_move;

fn open_game() -> Position {
    let mut position = Position::new_position();
    for (from, to) in [((1, 4), (3, 4)), ((6, 4), (4, 4)), ((0, 6), (2, 5)), ((7, 1), (5, 2))] {
        position
            .make_move(Move::new(Square::at(from.0, from.1), Square::at(to.0, to.1)))
            .expect("opening moves are legal");
    }
    position
}

fn bench_select_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let scorer = MaterialScorer::default();
    for depth in 1..=3u8 {
        let mut position = open_game();
        let mut rng = StdRng::seed_from_u64(0xbe_u64);
        group.bench_with_input(BenchmarkId::from_parameter(format!("open_game_d{depth}")), &depth, |b, depth| {
            b.iter(|| {
                let outcome = select_move(&mut position, black_box(*depth), Side::White, &scorer, &mut rng)
                    .expect("search should succeed");
                black_box(outcome.map(|o| o.best_move))
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_select_move);
criterion_main!(search_benches);

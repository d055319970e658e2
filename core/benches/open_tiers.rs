use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::*;
use std::hint::black_box;

const TIERS: [(&str, BoardConfig); 4] = [
    ("classic", BoardConfig::classic()),
    ("beginner", BoardConfig::beginner()),
    ("intermediate", BoardConfig::intermediate()),
    ("expert", BoardConfig::expert()),
];

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for (name, config) in TIERS {
        let center = (config.width() / 2, config.height() / 2);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let generator = RandomMineGenerator::new(seed, SafeZone::Cell);
                black_box(generator.generate(config, center))
            });
        });
    }
    group.finish();
}

fn bench_first_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_open");
    for (name, config) in TIERS {
        let center = (config.width() / 2, config.height() / 2);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let generator = RandomMineGenerator::new(seed, SafeZone::Neighborhood);
                let mut board = Board::with_generator(config, generator);
                black_box(board.open(center))
            });
        });
    }
    group.finish();
}

fn bench_empty_cascade(c: &mut Criterion) {
    // a mine-free corner forces the cascade to visit every cell
    let size = (Coord::from(u8::MAX), Coord::from(u8::MAX));
    let layout = MineLayout::from_mine_coords(size, &[(size.0 - 1, size.1 - 1)]).unwrap();
    c.bench_function("empty_cascade", |b| {
        b.iter(|| {
            let mut board = Board::from_layout(layout.clone());
            black_box(board.open((0, 0)))
        });
    });
}

criterion_group!(benches, bench_placement, bench_first_open, bench_empty_cascade);
criterion_main!(benches);

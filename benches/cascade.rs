use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_match3::{
    available_moves, detect_matches, generate_grid, random_grid, resolve_cascade, EngineConfig,
    GameRng,
};

fn bench_detect(c: &mut Criterion) {
    let config = EngineConfig::default();
    let grid = generate_grid(&config, &mut GameRng::new(1)).unwrap();

    c.bench_function("detect_matches_10x10", |b| {
        b.iter(|| detect_matches(black_box(&grid)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut rng = GameRng::new(2);

    c.bench_function("generate_grid_10x10", |b| {
        b.iter(|| generate_grid(black_box(&config), &mut rng).unwrap())
    });
}

fn bench_cascade(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut rng = GameRng::new(3);

    c.bench_function("resolve_cascade_random_10x10", |b| {
        b.iter(|| {
            let mut grid = random_grid(config.grid_size, &config.palette, &mut rng);
            let detection = detect_matches(&grid);
            resolve_cascade(&mut grid, detection, &config, &mut rng).unwrap()
        })
    });
}

fn bench_moves(c: &mut Criterion) {
    let config = EngineConfig::default();
    let grid = generate_grid(&config, &mut GameRng::new(4)).unwrap();

    c.bench_function("available_moves_10x10", |b| {
        b.iter(|| available_moves(black_box(&grid)))
    });
}

criterion_group!(benches, bench_detect, bench_generate, bench_cascade, bench_moves);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use sportera_core::{generate_matches, settle_selection, simulate, MarketKey, SideStats};

fn bench_simulate(c: &mut Criterion) {
    let home = SideStats { attack: 4, defense: 3, form: 2, strength: Some(80) };
    let away = SideStats { attack: 2, defense: 2, form: 1, strength: Some(45) };
    c.bench_function("simulate_match", |b| {
        let mut seed = 0i64;
        b.iter(|| {
            seed += 1;
            black_box(simulate(black_box(&home), black_box(&away), seed))
        })
    });
}

fn bench_generate_matches(c: &mut Criterion) {
    c.bench_function("generate_matches_8", |b| {
        let mut seed = 0i64;
        b.iter(|| {
            seed += 1000;
            black_box(generate_matches(8, seed))
        })
    });
}

fn bench_settle_selection(c: &mut Criterion) {
    c.bench_function("settle_selection", |b| {
        let mut seed = 0i64;
        b.iter(|| {
            seed += 1;
            black_box(settle_selection(MarketKey::OneXTwo, "1", "42", seed))
        })
    });
}

criterion_group!(benches, bench_simulate, bench_generate_matches, bench_settle_selection);
criterion_main!(benches);

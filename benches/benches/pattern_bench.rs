//! # Pattern Benchmarks
//!
//! Mede a construção de padrões a partir da tabela de intents.
//!
//! Run: `cargo bench --bench pattern_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use i8me_haptics::{pattern_for, pattern_with_rng, HapticIntent};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark de intents representativos (simples, acento, composto, aleatório)
fn bench_single_intents(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_for");

    for intent in [
        HapticIntent::PrimaryTap,
        HapticIntent::CheckboxSelected,
        HapticIntent::Critical,
        HapticIntent::Sparkle,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(intent), &intent, |b, &intent| {
            b.iter(|| black_box(pattern_for(black_box(intent))))
        });
    }

    group.finish();
}

/// Benchmark do catálogo completo
fn bench_full_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    group.bench_function("all_intents", |b| {
        b.iter(|| {
            for intent in HapticIntent::ALL {
                black_box(pattern_for(intent).ok());
            }
        })
    });

    group.bench_function("sparkle_seeded_rng", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| black_box(pattern_with_rng(HapticIntent::Sparkle, &mut rng)))
    });

    group.finish();
}

criterion_group!(benches, bench_single_intents, bench_full_catalog);
criterion_main!(benches);

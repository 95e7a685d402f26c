//! # Dispatch Benchmarks
//!
//! Mede `prepare`/`play` contra o dispositivo simulado.
//!
//! Run: `cargo bench --bench dispatch_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use i8me_haptics::sim::SimulatedDevice;
use i8me_haptics::{Haptics, HapticIntent};

fn bench_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("play");

    let device = SimulatedDevice::new();
    let haptics = Haptics::new(device.clone());
    haptics.prepare();

    group.bench_function("prepared_success", |b| {
        b.iter(|| {
            haptics.play(black_box(HapticIntent::Success));
            device.reset();
        })
    });

    let idle = Haptics::new(SimulatedDevice::new());
    group.bench_function("not_prepared_noop", |b| {
        b.iter(|| idle.play(black_box(HapticIntent::Success)))
    });

    group.finish();
}

fn bench_prepare(c: &mut Criterion) {
    let haptics = Haptics::new(SimulatedDevice::new());
    c.bench_function("prepare", |b| b.iter(|| haptics.prepare()));
}

criterion_group!(benches, bench_play, bench_prepare);
criterion_main!(benches);

//! Benchmarks for dispatch against a busy pool.

use std::{hint::black_box, sync::Arc};

use criterion::{BenchmarkId, Criterion};
use saavy_cue::command::{Clip, Command};

use super::pool;
use crate::POOL_SIZES;

pub fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("cue/dispatch");

    for &size in POOL_SIZES {
        // Instance-limited command against a full pool: pure limit scan
        let mut limited = pool(size);
        let busy = Arc::new(
            Command::new("busy", Clip::new("busy", 60.0))
                .instance_limit(size as u32)
                .frame_limit(None),
        );
        for _ in 0..size {
            limited.play(&busy, 0.0);
        }
        group.bench_with_input(BenchmarkId::new("limited", size), &size, |b, _| {
            b.iter(|| black_box(limited.play(black_box(&busy), 1.0)))
        });

        // Stop-others + play on the same slot: scan, stop, reacquire
        let mut swapping = pool(size);
        let other = Arc::new(
            Command::new("other", Clip::new("other", 60.0)).frame_limit(None),
        );
        let swap = Arc::new(
            Command::new("swap", Clip::new("swap", 60.0))
                .frame_limit(None)
                .stop_others(&[&other], 0.0),
        );
        let mut now = 0.0;
        group.bench_with_input(BenchmarkId::new("stop_others", size), &size, |b, _| {
            b.iter(|| {
                now += 1.0;
                swapping.play(&other, now);
                black_box(swapping.play(black_box(&swap), now));
                swapping.stop_all(0.0);
            })
        });
    }

    group.finish();
}

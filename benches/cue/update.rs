//! Benchmarks for stepping busy voices.

use std::{hint::black_box, sync::Arc};

use criterion::{BenchmarkId, Criterion};
use saavy_cue::command::{Clip, Command, LoopPolicy};

use super::{pool, DT};
use crate::POOL_SIZES;

pub fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("cue/update");

    for &size in POOL_SIZES {
        // Every voice looping: the steady state of an ambience-heavy scene
        let mut looping = pool(size);
        let bed = Arc::new(
            Command::new("bed", Clip::new("bed", 4.0))
                .looping(LoopPolicy::Infinite)
                .frame_limit(None),
        );
        for _ in 0..size {
            looping.play(&bed, 0.0);
        }
        group.bench_with_input(BenchmarkId::new("looping", size), &size, |b, _| {
            b.iter(|| looping.update(black_box(DT)))
        });

        // Every voice fading: the worst case right after a stop-all
        let mut fading = pool(size);
        let pad = Arc::new(
            Command::new("pad", Clip::new("pad", 4.0))
                .looping(LoopPolicy::Infinite)
                .frame_limit(None),
        );
        for _ in 0..size {
            fading.play(&pad, 0.0);
        }
        fading.stop_all(1.0e6);
        group.bench_with_input(BenchmarkId::new("fading", size), &size, |b, _| {
            b.iter(|| fading.update(black_box(DT)))
        });
    }

    group.finish();
}

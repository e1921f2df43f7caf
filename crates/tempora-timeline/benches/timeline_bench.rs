//! Timeline benchmarks: point writes, point reads, range scans, reconstruction.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use tempora_core::models::{BiTemporalRecord, TemporalRange};
use tempora_core::traits::{IBitemporalEngine, ITimelineEngine};
use tempora_timeline::{BitemporalTimelineEngine, TimelineEngine, TimelineReconstructor};
use test_fixtures::{bi_record, open_range, range, t};

const N: i64 = 10_000;

fn filled_engine() -> TimelineEngine<i64> {
    let engine = TimelineEngine::new();
    for i in 0..N {
        engine.effective_as_of(t(i * 10), i).unwrap();
    }
    engine
}

fn history(buckets: i64, versions: i64) -> Vec<BiTemporalRecord<i64>> {
    let mut records = Vec::new();
    for b in 0..buckets {
        let business = range(b * 100, (b + 1) * 100);
        for v in 0..versions {
            let system = if v + 1 == versions {
                open_range(v * 10)
            } else {
                range(v * 10, (v + 1) * 10)
            };
            records.push(bi_record(business, system, b * versions + v));
        }
    }
    records.reverse();
    records
}

fn bench_effective_as_of(c: &mut Criterion) {
    c.bench_function("timeline_effective_as_of_10k", |b| {
        b.iter(|| black_box(filled_engine()));
    });
}

fn bench_get_as_of(c: &mut Criterion) {
    let engine = filled_engine();
    c.bench_function("timeline_get_as_of", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 7) % (N * 10);
            black_box(engine.get_as_of(t(i)).unwrap())
        });
    });
}

fn bench_get_in_range(c: &mut Criterion) {
    let engine = filled_engine();
    c.bench_function("timeline_get_in_range_1k", |b| {
        b.iter(|| black_box(engine.get_in_range(&range(20_000, 30_000)).unwrap()));
    });
    c.bench_function("timeline_get_in_range_forever", |b| {
        b.iter(|| black_box(engine.get_in_range(&TemporalRange::FOREVER).unwrap()));
    });
}

fn bench_bitemporal_get_as_of(c: &mut Criterion) {
    let engine = BitemporalTimelineEngine::new();
    for b in 0..100 {
        for s in 0..100 {
            engine.effective_as_of(t(b * 10), t(s * 10), b * 100 + s).unwrap();
        }
    }
    c.bench_function("bitemporal_get_as_of", |bench| {
        bench.iter(|| black_box(engine.get_as_of(t(555), t(333)).unwrap()));
    });
}

fn bench_reconstruct(c: &mut Criterion) {
    let reconstructor = TimelineReconstructor::default();
    c.bench_function("reconstruct_1k_buckets_x10", |b| {
        b.iter_batched(
            || history(1_000, 10),
            |records| black_box(reconstructor.reconstruct(records).unwrap()),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_effective_as_of,
    bench_get_as_of,
    bench_get_in_range,
    bench_bitemporal_get_as_of,
    bench_reconstruct,
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphwalk::graph::from_fn;
use graphwalk::{Graph, LazyCache};

fn bench_fill_and_replay(c: &mut Criterion) {
    c.bench_function("lazy_cache_fill_10k", |b| {
        b.iter(|| {
            let cache = LazyCache::new(0u64..10_000);
            black_box(cache.get(9_999).copied())
        });
    });

    let cache = LazyCache::new(0u64..10_000);
    assert!(cache.has_at_least(10_000));
    c.bench_function("lazy_cache_replay_10k", |b| {
        b.iter(|| black_box(cache.iter().sum::<u64>()));
    });
}

fn bench_search_lookups(c: &mut Criterion) {
    let g = from_fn(|&n: &u32| [n + 1, n + 2]);
    c.bench_function("search_result_scattered_lookups", |b| {
        b.iter(|| {
            let result = g.bfs(0);
            let mut total = 0;
            for node in [4_000, 10, 2_500, 3_999, 1] {
                total += result.cost_to(&node).unwrap_or_default();
            }
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_fill_and_replay, bench_search_lookups);
criterion_main!(benches);

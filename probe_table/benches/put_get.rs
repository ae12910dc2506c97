use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use probe_table::ProbingHashTable;

const SIZES: [i32; 3] = [1_000, 10_000, 100_000];

// spread keys out so that the home slots are not simply consecutive
fn key(i: i32) -> i32 {
    i.wrapping_mul(7919) ^ (i >> 3)
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut table = ProbingHashTable::new();
                for i in 0..n {
                    table.put(key(i), i64::from(i)).unwrap();
                }
                table
            })
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for n in SIZES {
        let mut table = ProbingHashTable::new();
        for i in 0..n {
            table.put(key(i), i64::from(i)).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &table, |b, table| {
            b.iter(|| (0..n).filter_map(|i| table.get(black_box(key(i)))).sum::<i64>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_put, bench_get);
criterion_main!(benches);

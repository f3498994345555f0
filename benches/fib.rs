use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fib::fib;

fn bench_fib(c: &mut Criterion) {
    for n in [10u32, 47, 1000] {
        c.bench_function(&format!("fib {n}"), |b| b.iter(|| fib(black_box(n))));
    }
}

criterion_group!(benches, bench_fib);
criterion_main!(benches);

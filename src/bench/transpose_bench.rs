//! Wall-clock benchmark: blocked kernels vs the naive scan.
//!
//! The graded metric is simulated misses (see the driver binary), but the
//! blocked kernels should also win on real hardware for the same reason.
//!
//! ```bash
//! cargo bench --bench transpose_bench
//! ```

use blocked_transpose::{transpose, transpose_naive};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_transpose(c: &mut Criterion) {
    // (m, n): A is n rows × m cols.
    let shapes = [(32usize, 32usize), (64, 64), (61, 67), (256, 256)];

    for (m, n) in shapes {
        let a: Vec<i32> = (0..(n * m) as i32).collect();
        let mut b = vec![0i32; m * n];

        let mut group = c.benchmark_group(format!("transpose_{}x{}", n, m));

        group.bench_function("blocked", |bencher| {
            bencher.iter(|| {
                transpose(black_box(m), black_box(n), black_box(&a), &mut b);
                black_box(&b);
            })
        });

        group.bench_function("naive", |bencher| {
            bencher.iter(|| {
                transpose_naive(black_box(m), black_box(n), black_box(&a), &mut b);
                black_box(&b);
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_transpose);
criterion_main!(benches);

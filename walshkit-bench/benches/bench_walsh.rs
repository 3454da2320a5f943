use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use walshkit::{DirectWalsh, FastWalsh, MatrixWalsh, WalshTransform};

/// In-place iterative butterfly (natural order, unscaled) as a baseline.
fn fwht_inplace(data: &mut [f64]) {
    let n = data.len();
    let mut h = 1;
    while h < n {
        for block in (0..n).step_by(h * 2) {
            for j in block..block + h {
                let a = data[j];
                let b = data[j + h];
                data[j] = a + b;
                data[j + h] = a - b;
            }
        }
        h *= 2;
    }
}

fn signal(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 31) % 17) as f64 - 8.0).collect()
}

fn bench_fast(c: &mut Criterion) {
    let mut g = c.benchmark_group("fast");
    let fast = FastWalsh::new();
    for &size in &[16usize, 256, 4096, 65536] {
        let input = signal(size);
        g.bench_with_input(BenchmarkId::new("recursive", size), &input, |b, x| {
            b.iter(|| fast.forward(&x[..]).unwrap());
        });
        g.bench_with_input(BenchmarkId::new("butterfly", size), &input, |b, x| {
            let mut data = x.clone();
            b.iter(|| {
                data.copy_from_slice(x);
                fwht_inplace(&mut data);
            });
        });
    }
    g.finish();
}

fn bench_quadratic(c: &mut Criterion) {
    let mut g = c.benchmark_group("quadratic");
    let matrix = MatrixWalsh::new();
    let direct = DirectWalsh::new();
    for &size in &[16usize, 64, 256] {
        let input = signal(size);
        g.bench_with_input(BenchmarkId::new("matrix", size), &input, |b, x| {
            b.iter(|| matrix.forward(&x[..]).unwrap());
        });
        g.bench_with_input(BenchmarkId::new("direct", size), &input, |b, x| {
            b.iter(|| direct.forward(&x[..]).unwrap());
        });
    }
    g.finish();
}

criterion_group!(benches, bench_fast, bench_quadratic);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use vexpr_rs::functor::{Max, Tanh};
use vexpr_rs::{
    assign, DenseVector, VectorAddition, VectorBinary, VectorExpression, VectorScalarMultiply,
    VectorUnary,
};

fn random_vec(rng: &mut StdRng, n: usize) -> DenseVector<f64> {
    DenseVector::from_fn(n, |_| rng.gen_range(-1.0..1.0))
}

// Fused `alpha * (s * a)` against materializing `s * a` first.
fn bench_scaled(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("scaled");
    for n in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        let a = random_vec(&mut rng, n);

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, _| {
            b.iter(|| {
                let tmp: Vec<f64> = a.as_slice().iter().map(|x| 3.0 * x).collect();
                let out: Vec<f64> = tmp.iter().map(|x| 0.5 * x).collect();
                black_box(out)
            });
        });

        group.bench_with_input(BenchmarkId::new("fused", n), &n, |b, _| {
            let mut out = DenseVector::zeros(n);
            b.iter(|| {
                if let Err(err) = assign(&mut out, &VectorScalarMultiply::new(&a, 3.0), 0.5) {
                    panic!("assign failed: {err}");
                }
                black_box(out.as_slice()[0])
            });
        });
    }
    group.finish();
}

// `a + (b + (c + d))`: one sweep per leaf, no temporaries.
fn bench_nested_sum(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("nested_sum");
    for n in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        let leaves: Vec<DenseVector<f64>> = (0..4).map(|_| random_vec(&mut rng, n)).collect();
        let expr = VectorAddition::new(
            &leaves[0],
            VectorAddition::new(
                &leaves[1],
                VectorAddition::new(&leaves[2], &leaves[3]).unwrap(),
            )
            .unwrap(),
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("assign", n), &n, |b, _| {
            let mut out = DenseVector::zeros(n);
            b.iter(|| {
                if let Err(err) = assign(&mut out, &expr, 2.0) {
                    panic!("assign failed: {err}");
                }
                black_box(out.as_slice()[0])
            });
        });

        group.bench_with_input(BenchmarkId::new("iter", n), &n, |b, _| {
            b.iter(|| black_box(expr.sum()));
        });
    }
    group.finish();
}

fn bench_unary_binary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut group = c.benchmark_group("unary_binary");
    for n in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        let a = random_vec(&mut rng, n);
        let b = random_vec(&mut rng, n);
        let expr = VectorBinary::new(VectorUnary::new(&a, Tanh), &b, Max).unwrap();

        group.bench_with_input(BenchmarkId::new("assign", n), &n, |bch, _| {
            let mut out = DenseVector::zeros(n);
            bch.iter(|| {
                if let Err(err) = assign(&mut out, &expr, 1.5) {
                    panic!("assign failed: {err}");
                }
                black_box(out.as_slice()[0])
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scaled, bench_nested_sum, bench_unary_binary);
criterion_main!(benches);

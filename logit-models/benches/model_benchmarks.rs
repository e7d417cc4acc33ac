use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use logit_core::{compute_cost, Matrix, RowVector, Vector};
use logit_models::gradient_descent::gradient_descent;
use logit_models::logistic_regression::LogisticRegression;
use std::hint::black_box;

fn make_classification_data(rows: usize, features: usize) -> (Matrix, Vector) {
    let x = Matrix::from_fn(rows, features + 1, |i, j| {
        if j == 0 {
            return 1.0;
        }
        let base = ((i + 3 * j) % 101) as f64 * 0.01;
        let class_offset = (i % 2) as f64 * 0.5;
        base + class_offset
    });
    let y = Vector::from_iterator(rows, (0..rows).map(|i| (i % 2) as f64));
    (x, y)
}

fn bench_compute_cost(c: &mut Criterion) {
    let (x, y) = make_classification_data(4_096, 2);
    let theta = RowVector::from_fn(3, |_, j| 0.1 * j as f64);

    c.bench_function("compute_cost_4096x3", |b| {
        b.iter(|| {
            let cost = compute_cost(black_box(&x), black_box(&y), black_box(&theta)).unwrap();
            black_box(cost);
        })
    });
}

fn bench_gradient_descent(c: &mut Criterion) {
    let (x, y) = make_classification_data(100, 2);

    let mut group = c.benchmark_group("gradient_descent");
    group.bench_function("100x3_iters400", |b| {
        b.iter_batched(
            || RowVector::zeros(3),
            |theta| {
                let descent = gradient_descent(theta, black_box(&x), black_box(&y), 0.01, 400).unwrap();
                black_box(descent);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_logistic_regression(c: &mut Criterion) {
    let (x, y) = make_classification_data(1_024, 8);

    let mut group = c.benchmark_group("logistic_regression");
    group.bench_function("fit_1024x9_iters200", |b| {
        b.iter_batched(
            || (x.clone(), y.clone(), LogisticRegression::new(0.1, 200)),
            |(x_local, y_local, mut model)| {
                model.fit(black_box(&x_local), black_box(&y_local)).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    let mut fitted = LogisticRegression::new(0.1, 200);
    fitted.fit(&x, &y).unwrap();
    group.bench_function("predict_1024x9", |b| {
        b.iter(|| {
            let preds = fitted.predict(black_box(&x)).unwrap();
            black_box(preds);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_cost,
    bench_gradient_descent,
    bench_logistic_regression
);
criterion_main!(benches);

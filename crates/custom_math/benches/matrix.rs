use criterion::{Criterion, criterion_group, criterion_main};
use custom_math::{Matrix4x4, Quaternion, Vector3, Vector4};
use std::hint::black_box;

fn create_trs() -> Matrix4x4 {
    Matrix4x4::trs(
        &Vector3::new(1.0, -2.0, 3.0),
        &Quaternion::euler(30.0, 45.0, 60.0),
        &Vector3::new(2.0, 2.0, 0.5),
    )
}

pub fn bench_matrix_mul_matrix(c: &mut Criterion) {
    let a = create_trs();
    let b = create_trs().transposed();
    c.bench_function("matrix_mul_matrix", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn bench_matrix_mul_vector(c: &mut Criterion) {
    let m = create_trs();
    let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
    c.bench_function("matrix_mul_vector", |bencher| {
        bencher.iter(|| black_box(&m) * black_box(v));
    });
}

pub fn bench_matrix_trs(c: &mut Criterion) {
    let position = Vector3::new(1.0, -2.0, 3.0);
    let rotation = Quaternion::euler(30.0, 45.0, 60.0);
    let scaling = Vector3::new(2.0, 2.0, 0.5);
    c.bench_function("matrix_trs", |bencher| {
        bencher.iter(|| {
            Matrix4x4::trs(
                black_box(&position),
                black_box(&rotation),
                black_box(&scaling),
            )
        });
    });
}

pub fn bench_matrix_transpose(c: &mut Criterion) {
    let m = create_trs();
    c.bench_function("matrix_transpose", |bencher| {
        bencher.iter(|| black_box(&m).transposed());
    });
}

criterion_group!(
    benches,
    bench_matrix_mul_matrix,
    bench_matrix_mul_vector,
    bench_matrix_trs,
    bench_matrix_transpose
);
criterion_main!(benches);

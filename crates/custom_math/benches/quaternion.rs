use criterion::{Criterion, criterion_group, criterion_main};
use custom_math::{Quaternion, Vector3};
use std::hint::black_box;

pub fn bench_quaternion_mul(c: &mut Criterion) {
    let a = Quaternion::euler(10.0, 20.0, 30.0);
    let b = Quaternion::euler(-40.0, 50.0, 60.0);
    c.bench_function("quaternion_mul", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn bench_quaternion_rotate_vector(c: &mut Criterion) {
    let q = Quaternion::euler(10.0, 20.0, 30.0);
    let v = Vector3::new(1.0, 2.0, 3.0);
    c.bench_function("quaternion_rotate_vector", |bencher| {
        bencher.iter(|| black_box(&q) * black_box(v));
    });
}

pub fn bench_quaternion_slerp(c: &mut Criterion) {
    let a = Quaternion::euler(10.0, 20.0, 30.0);
    let b = Quaternion::euler(-40.0, 150.0, 60.0);
    c.bench_function("quaternion_slerp", |bencher| {
        bencher.iter(|| black_box(&a).slerp(black_box(&b), black_box(0.3)));
    });
}

pub fn bench_quaternion_euler_round_trip(c: &mut Criterion) {
    let angles = Vector3::new(25.0, -70.0, 40.0);
    c.bench_function("quaternion_euler_round_trip", |bencher| {
        bencher.iter(|| Quaternion::from_euler_angles(black_box(&angles)).euler_angles());
    });
}

pub fn bench_quaternion_look_rotation(c: &mut Criterion) {
    let forward = Vector3::new(1.0, 0.5, -2.0);
    c.bench_function("quaternion_look_rotation", |bencher| {
        bencher.iter(|| Quaternion::look_rotation_with_up(black_box(&forward), &Vector3::UP));
    });
}

criterion_group!(
    benches,
    bench_quaternion_mul,
    bench_quaternion_rotate_vector,
    bench_quaternion_slerp,
    bench_quaternion_euler_round_trip,
    bench_quaternion_look_rotation
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use five_point::FivePointSolver;
use nalgebra::Point2;

fn bench_solve(c: &mut Criterion) {
    let right = [
        Point2::new(1.0 / 3.0, -4.0 / 3.0),
        Point2::new(1.0, -4.0 / 3.0),
        Point2::new(1.0 / 7.0, -1.0 / 7.0),
        Point2::new(11.0 / 16.0, -13.0 / 16.0),
        Point2::new(-2.0 / 7.0, -1.0 / 7.0),
    ];
    let left = [
        Point2::new(0.0, 0.0),
        Point2::new(0.5, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(0.5, 0.25),
        Point2::new(-0.5, 1.0),
    ];
    let solver = FivePointSolver::<f64>::default();

    c.bench_function("five_point_solve", |b| {
        b.iter(|| solver.solve(black_box(&right), black_box(&left)))
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use mouse_gesture_engine::mouse_gestures::{evaluate, GestureConfig, GestureEvaluator, Point};

fn l_stroke(samples_per_leg: usize) -> Vec<Point> {
    let leg = samples_per_leg as f32;
    let mut points: Vec<Point> = (0..=samples_per_leg)
        .map(|i| Point::new(-300.0 * i as f32 / leg, (i % 3) as f32))
        .collect();
    points.extend((1..=samples_per_leg).map(|i| Point::new(-300.0, -300.0 * i as f32 / leg)));
    points
}

fn bench_evaluate(c: &mut Criterion) {
    let config = GestureConfig::default();
    let points = l_stroke(150);
    c.bench_function("evaluate_300", |b| b.iter(|| evaluate(&points, &config)));
    c.bench_function("session_300", |b| {
        b.iter(|| {
            let mut evaluator = GestureEvaluator::new(config);
            evaluator.begin_session(points[0]);
            for &point in &points[1..] {
                evaluator.add_sample(point);
            }
            evaluator.end_session()
        })
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);

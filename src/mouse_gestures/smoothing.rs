use crate::mouse_gestures::config::GestureTuning;
use crate::mouse_gestures::trajectory::Point;

/// Number of neighbours averaged on each side of a sample for a trajectory of
/// `len` samples. `0` means the trajectory is left untouched.
pub fn smoothing_radius(len: usize, tuning: &GestureTuning) -> usize {
    if len <= tuning.min_smoothing_len {
        return 0;
    }
    let window = tuning.max_smoothing_window.min(len / 10 + 2);
    window / 2
}

/// Centred moving average over the interior samples. The first and last
/// samples are anchors and never move; near them the window shrinks evenly on
/// both sides, so evenly spaced collinear samples map onto themselves.
pub fn smooth_points(points: &[Point], tuning: &GestureTuning) -> Vec<Point> {
    let radius = smoothing_radius(points.len(), tuning);
    if radius == 0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut smoothed = Vec::with_capacity(points.len());
    smoothed.push(points[0]);
    for idx in 1..last {
        let reach = radius.min(idx).min(last - idx);
        let window = &points[idx - reach..=idx + reach];
        let count = window.len() as f32;
        let (sum_x, sum_y) = window
            .iter()
            .fold((0.0, 0.0), |(sx, sy), point| (sx + point.x, sy + point.y));
        smoothed.push(Point {
            x: sum_x / count,
            y: sum_y / count,
        });
    }
    smoothed.push(points[last]);
    smoothed
}

//! Splits a trajectory into at most two dominant-direction segments.
//!
//! Every interior sample is a candidate inflection point. The turn at a
//! sample is the angle between the vector arriving from `span` samples back
//! and the vector leaving towards `span` samples ahead. A turn counts when it
//! is sharper than `base + gain * straightness`: horizontal motion uses the
//! lower base angle, and nearly straight strokes need a larger swing.
//!
//! A stroke that splits into several segments is reported with cardinal
//! directions only. A segment spanning an undetected corner classifies as a
//! diagonal; it is reduced to the axis that turns away from the segment
//! before it. Diagonal labels survive only on single-segment strokes.

use crate::mouse_gestures::classifier::classify_segment;
use crate::mouse_gestures::config::{GestureTuning, Thresholds};
use crate::mouse_gestures::direction::{Direction, MAX_SEGMENTS};
use crate::mouse_gestures::smoothing::smoothing_radius;
use crate::mouse_gestures::trajectory::Point;

const BASE_SPAN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Vector {
    x: f32,
    y: f32,
}

impl Vector {
    fn between(from: Point, to: Point) -> Self {
        Self {
            x: to.x - from.x,
            y: to.y - from.y,
        }
    }

    fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    fn is_horizontal(self) -> bool {
        self.x.abs() > self.y.abs()
    }
}

/// Angle between two vectors in `[0, 180]` degrees; `0` if either is empty.
fn turn_angle(a: Vector, b: Vector) -> f32 {
    let lengths = a.length() * b.length();
    if lengths == 0.0 || !lengths.is_finite() {
        return 0.0;
    }
    let cos = ((a.x * b.x + a.y * b.y) / lengths).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Neighbour distance used for the turn vectors. A smoothing radius of two
/// rounds a corner over five samples, which a two-sample reach cannot see.
pub fn neighbor_span(len: usize, tuning: &GestureTuning) -> usize {
    BASE_SPAN.max(smoothing_radius(len, tuning) + 1)
}

/// Minimum number of samples between two inflection points.
pub fn min_segment_len(len: usize, tuning: &GestureTuning) -> usize {
    let proportional = (len as f32 * tuning.min_segment_fraction).floor() as usize;
    tuning.min_segment_samples.max(proportional)
}

/// A classified stretch between two boundaries of the scan.
#[derive(Debug, Clone, Copy)]
struct Segment {
    direction: Direction,
    start: Point,
    end: Point,
}

impl Segment {
    /// The segment as a cardinal direction. A diagonal keeps the axis
    /// perpendicular to `previous`, or its dominant axis when it comes first.
    fn cardinal(&self, previous: Option<Direction>) -> Direction {
        let Some((horizontal, vertical)) = self.direction.components() else {
            return self.direction;
        };
        let turn_horizontal = match previous {
            Some(prev) => !prev.is_horizontal(),
            None => (self.start.x - self.end.x).abs() > (self.start.y - self.end.y).abs(),
        };
        if turn_horizontal {
            horizontal
        } else {
            vertical
        }
    }
}

/// Indices of the inflection points of `points`, in order.
fn inflection_points(points: &[Point], straightness: f32, tuning: &GestureTuning) -> Vec<usize> {
    let len = points.len();
    let span = neighbor_span(len, tuning);
    let spacing = min_segment_len(len, tuning).max(span);
    let straightness = if straightness.is_finite() {
        straightness.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let adjustment = tuning.straightness_turn_gain * straightness;

    let mut found: Vec<usize> = Vec::new();
    for idx in 1..len.saturating_sub(1) {
        if matches!(found.last(), Some(&prev) if idx - prev < spacing) {
            continue;
        }
        let incoming = Vector::between(points[idx.saturating_sub(span)], points[idx]);
        let outgoing = Vector::between(points[idx], points[(idx + span).min(len - 1)]);
        let base = if incoming.is_horizontal() || outgoing.is_horizontal() {
            tuning.horizontal_turn_angle
        } else {
            tuning.vertical_turn_angle
        };
        if turn_angle(incoming, outgoing) > base + adjustment {
            found.push(idx);
        }
    }
    found
}

/// Dominant directions of travel, in order. Returns zero, one or two entries;
/// consecutive entries always differ and two entries are always cardinal.
pub fn segment_directions(
    points: &[Point],
    straightness: f32,
    thresholds: &Thresholds,
    tuning: &GestureTuning,
) -> Vec<Direction> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let overall = || -> Vec<Direction> {
        classify_segment(first, last, thresholds, tuning)
            .into_iter()
            .collect()
    };
    if points.len() < 3 {
        return overall();
    }

    let mut boundaries = vec![0];
    boundaries.extend(inflection_points(points, straightness, tuning));
    boundaries.push(points.len() - 1);

    let segments: Vec<Segment> = boundaries
        .windows(2)
        .filter_map(|pair| {
            let (start, end) = (points[pair[0]], points[pair[1]]);
            classify_segment(start, end, thresholds, tuning).map(|direction| Segment {
                direction,
                start,
                end,
            })
        })
        .collect();

    let Some(head) = segments.first() else {
        return overall();
    };
    if segments.iter().all(|segment| segment.direction == head.direction) {
        return vec![head.direction];
    }

    let mut kept: Vec<Direction> = Vec::with_capacity(MAX_SEGMENTS);
    for segment in &segments {
        let direction = segment.cardinal(kept.last().copied());
        if kept.last() != Some(&direction) {
            kept.push(direction);
        }
        if kept.len() == MAX_SEGMENTS {
            break;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(waypoints: &[(f32, f32)], step: f32) -> Vec<Point> {
        let mut points = vec![Point::from(waypoints[0])];
        for pair in waypoints.windows(2) {
            let (from, to) = (Point::from(pair[0]), Point::from(pair[1]));
            let length = (to.x - from.x).hypot(to.y - from.y);
            let steps = (length / step).round().max(1.0) as usize;
            for s in 1..=steps {
                let t = s as f32 / steps as f32;
                points.push(Point::new(
                    from.x + (to.x - from.x) * t,
                    from.y + (to.y - from.y) * t,
                ));
            }
        }
        points
    }

    fn segments(points: &[Point]) -> Vec<Direction> {
        let straightness = crate::mouse_gestures::trajectory::straightness(points);
        segment_directions(
            points,
            straightness,
            &Thresholds::new(20.0, 10.0),
            &GestureTuning::default(),
        )
    }

    #[test]
    fn turn_angle_between_vectors() {
        let right = Vector { x: 1.0, y: 0.0 };
        let up = Vector { x: 0.0, y: -1.0 };
        let left = Vector { x: -1.0, y: 0.0 };
        assert!((turn_angle(right, up) - 90.0).abs() < 1e-3);
        assert!((turn_angle(right, left) - 180.0).abs() < 1e-3);
        assert_eq!(turn_angle(right, Vector { x: 0.0, y: 0.0 }), 0.0);
    }

    #[test]
    fn three_sample_corner_splits() {
        let points = path(&[(0.0, 0.0), (-100.0, 0.0), (-100.0, -100.0)], 1000.0);
        assert_eq!(points.len(), 3);
        assert_eq!(segments(&points), vec![Direction::Left, Direction::Up]);
    }

    #[test]
    fn raw_dense_corner_splits() {
        let points = path(&[(0.0, 0.0), (-100.0, 0.0), (-100.0, -100.0)], 5.0);
        assert_eq!(segments(&points), vec![Direction::Left, Direction::Up]);
    }

    #[test]
    fn straight_stroke_is_one_segment() {
        let points = path(&[(0.0, 0.0), (0.0, 120.0)], 4.0);
        assert_eq!(segments(&points), vec![Direction::Down]);
    }

    #[test]
    fn short_trajectories_use_overall_displacement() {
        let pair = [Point::new(0.0, 0.0), Point::new(30.0, 0.0)];
        assert_eq!(segments(&pair), vec![Direction::Right]);
        assert!(segments(&[Point::new(0.0, 0.0), Point::new(5.0, 0.0)]).is_empty());
        assert!(segments(&[]).is_empty());
    }

    #[test]
    fn never_more_than_two_segments() {
        let points = path(
            &[(0.0, 0.0), (-100.0, 0.0), (-100.0, -100.0), (0.0, -100.0), (0.0, 0.0)],
            5.0,
        );
        let result = segments(&points);
        assert_eq!(result, vec![Direction::Left, Direction::Up]);
    }

    #[test]
    fn corner_spanning_segment_takes_the_turning_axis() {
        let segment = Segment {
            direction: Direction::UpRight,
            start: Point::new(-100.0, 0.0),
            end: Point::new(0.0, -100.0),
        };
        assert_eq!(segment.cardinal(Some(Direction::Left)), Direction::Up);
        assert_eq!(segment.cardinal(Some(Direction::Down)), Direction::Right);
        assert_eq!(segment.cardinal(None), Direction::Up);

        let coarse = [
            Point::new(0.0, 0.0),
            Point::new(-100.0, 0.0),
            Point::new(-100.0, -100.0),
            Point::new(0.0, -100.0),
        ];
        assert_eq!(segments(&coarse), vec![Direction::Left, Direction::Up]);
    }

    #[test]
    fn three_legs_stay_cardinal_at_any_spacing() {
        let legs = [(0.0, 0.0), (-100.0, 0.0), (-100.0, -100.0), (0.0, -100.0)];
        for step in [5.0, 10.0, 20.0, 30.0, 40.0, 60.0, 100.0, 1000.0] {
            assert_eq!(
                segments(&path(&legs, step)),
                vec![Direction::Left, Direction::Up],
                "sample spacing {step}"
            );
        }
    }

    #[test]
    fn single_segment_keeps_its_diagonal() {
        let points = path(&[(0.0, 0.0), (-80.0, -80.0)], 5.0);
        assert_eq!(segments(&points), vec![Direction::UpLeft]);
    }

    #[test]
    fn span_widens_with_smoothing_radius() {
        let tuning = GestureTuning::default();
        assert_eq!(neighbor_span(3, &tuning), 2);
        assert_eq!(neighbor_span(15, &tuning), 2);
        assert_eq!(neighbor_span(40, &tuning), 3);
        assert_eq!(min_segment_len(40, &tuning), 2);
        assert_eq!(min_segment_len(200, &tuning), 8);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from(value: (f32, f32)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

pub fn distance(a: Point, b: Point) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Sum of the distances between consecutive samples.
pub fn track_length(points: &[Point]) -> f32 {
    points
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum()
}

/// Start-to-end distance over path length; `0.0` for a zero-length path.
pub fn straightness(points: &[Point]) -> f32 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };
    let total = track_length(points);
    if total <= 0.0 {
        return 0.0;
    }
    (distance(*first, *last) / total).clamp(0.0, 1.0)
}

/// Samples of one gesture session, in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    pub fn starting_at(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn path_length(&self) -> f32 {
        track_length(&self.points)
    }

    pub fn direct_distance(&self) -> f32 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => distance(first, last),
            _ => 0.0,
        }
    }

    pub fn straightness(&self) -> f32 {
        straightness(&self.points)
    }
}

impl From<Vec<Point>> for Trajectory {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l_shape_metrics() {
        let trajectory = Trajectory::from(vec![
            Point::new(0.0, 0.0),
            Point::new(-100.0, 0.0),
            Point::new(-100.0, -100.0),
        ]);
        assert_eq!(trajectory.path_length(), 200.0);
        assert!((trajectory.direct_distance() - 141.421_36).abs() < 1e-3);
        assert!((trajectory.straightness() - 0.707_106_8).abs() < 1e-4);
    }

    #[test]
    fn degenerate_paths_have_zero_straightness() {
        assert_eq!(Trajectory::default().straightness(), 0.0);
        assert_eq!(Trajectory::starting_at(Point::new(3.0, 4.0)).straightness(), 0.0);
        let still = Trajectory::from(vec![Point::new(1.0, 1.0); 4]);
        assert_eq!(still.path_length(), 0.0);
        assert_eq!(still.straightness(), 0.0);
    }
}

//! Maps a displacement vector to one of the eight compass directions.
//!
//! Displacements are measured from the end of a movement back to its start
//! (`start - end`), so positive `x` is leftward travel and positive `y` is
//! upward travel on a screen whose `y` axis grows downward. With that
//! convention the sector centres are 0° = left, 90° = up, 180° = right and
//! -90° = down.

use crate::mouse_gestures::config::{GestureTuning, Thresholds};
use crate::mouse_gestures::direction::Direction;
use crate::mouse_gestures::trajectory::Point;

const SECTOR_DEGREES: f32 = 45.0;

/// Classify a `start - end` displacement, returning `None` when it is shorter
/// than the threshold of its dominant axis.
pub fn classify_displacement(
    delta_x: f32,
    delta_y: f32,
    thresholds: &Thresholds,
    tuning: &GestureTuning,
) -> Option<Direction> {
    let displacement = delta_x.hypot(delta_y);
    if displacement == 0.0 {
        return None;
    }
    let horizontal = delta_x.abs() > delta_y.abs();
    // Written negated so a NaN displacement is rejected too.
    if !(displacement >= thresholds.for_axis(horizontal)) {
        return None;
    }

    let angle = delta_y.atan2(delta_x).to_degrees();
    let sector = ((angle / SECTOR_DEGREES).round() as i32).rem_euclid(8);
    let pick = |diagonal, vertical, horizontal| {
        resolve_diagonal(
            delta_x,
            delta_y,
            tuning.diagonal_dominance_ratio,
            diagonal,
            vertical,
            horizontal,
        )
    };
    let dir = match sector {
        0 => Direction::Left,
        1 => pick(Direction::UpLeft, Direction::Up, Direction::Left),
        2 => Direction::Up,
        3 => pick(Direction::UpRight, Direction::Up, Direction::Right),
        4 => Direction::Right,
        5 => pick(Direction::DownRight, Direction::Down, Direction::Right),
        6 => Direction::Down,
        _ => pick(Direction::DownLeft, Direction::Down, Direction::Left),
    };
    Some(dir)
}

/// Classify the movement from `start` to `end`.
pub fn classify_segment(
    start: Point,
    end: Point,
    thresholds: &Thresholds,
    tuning: &GestureTuning,
) -> Option<Direction> {
    classify_displacement(start.x - end.x, start.y - end.y, thresholds, tuning)
}

/// A diagonal sector only keeps its diagonal label when neither axis
/// dominates the other by `ratio`.
fn resolve_diagonal(
    delta_x: f32,
    delta_y: f32,
    ratio: f32,
    diagonal: Direction,
    vertical: Direction,
    horizontal: Direction,
) -> Direction {
    let abs_x = delta_x.abs();
    let abs_y = delta_y.abs();
    if abs_y > abs_x * ratio {
        vertical
    } else if abs_x > abs_y * ratio {
        horizontal
    } else {
        diagonal
    }
}

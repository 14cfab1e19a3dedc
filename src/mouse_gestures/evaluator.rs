use crate::mouse_gestures::config::{GestureConfig, Thresholds};
use crate::mouse_gestures::direction::GestureDirection;
use crate::mouse_gestures::segmenter::segment_directions;
use crate::mouse_gestures::smoothing::smooth_points;
use crate::mouse_gestures::trajectory::{straightness, track_length, Point, Trajectory};

/// Result of evaluating a trajectory. A verdict is valid exactly when it
/// carries a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureVerdict {
    direction: Option<GestureDirection>,
}

impl GestureVerdict {
    pub const fn invalid() -> Self {
        Self { direction: None }
    }

    pub const fn valid(direction: GestureDirection) -> Self {
        Self {
            direction: Some(direction),
        }
    }

    pub fn direction(&self) -> Option<GestureDirection> {
        self.direction
    }

    pub fn is_valid(&self) -> bool {
        self.direction.is_some()
    }

    /// Hyphen-joined direction label, empty for an invalid verdict.
    pub fn label(&self) -> String {
        self.direction
            .map(|direction| direction.to_string())
            .unwrap_or_default()
    }
}

impl From<Option<GestureDirection>> for GestureVerdict {
    fn from(direction: Option<GestureDirection>) -> Self {
        Self { direction }
    }
}

/// Evaluate a full trajectory from scratch.
pub fn evaluate(points: &[Point], config: &GestureConfig) -> GestureVerdict {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return GestureVerdict::invalid();
    };
    if points.len() < 2 {
        return GestureVerdict::invalid();
    }

    let path_length = track_length(points);
    let horizontal_dominant = (first.x - last.x).abs() > (first.y - last.y).abs();
    let min_length = config.thresholds.for_axis(horizontal_dominant);
    if !(path_length >= min_length) {
        return GestureVerdict::invalid();
    }

    let ratio = straightness(points);
    let smoothed = smooth_points(points, &config.tuning);
    let segments = segment_directions(&smoothed, ratio, &config.thresholds, &config.tuning);
    GestureDirection::from_segments(&segments).into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// A session is open but nothing has been evaluated yet.
    Tracking,
    Valid,
    Invalid,
}

/// State of one press-to-release gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    trajectory: Trajectory,
    config: GestureConfig,
    verdict: GestureVerdict,
    evaluated: bool,
}

impl GestureSession {
    pub fn new(start: Point, config: GestureConfig) -> Self {
        Self {
            trajectory: Trajectory::starting_at(start),
            config,
            verdict: GestureVerdict::invalid(),
            evaluated: false,
        }
    }

    /// Record a sample and re-evaluate the whole trajectory.
    pub fn add_sample(&mut self, point: Point) -> GestureVerdict {
        self.trajectory.push(point);
        self.verdict = evaluate(self.trajectory.points(), &self.config);
        self.evaluated = true;
        self.verdict
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn verdict(&self) -> GestureVerdict {
        self.verdict
    }

    pub fn phase(&self) -> GesturePhase {
        match (self.evaluated, self.verdict.is_valid()) {
            (false, _) => GesturePhase::Tracking,
            (true, true) => GesturePhase::Valid,
            (true, false) => GesturePhase::Invalid,
        }
    }
}

/// Owns the active gesture session, if any.
#[derive(Debug, Clone, Default)]
pub struct GestureEvaluator {
    config: GestureConfig,
    session: Option<GestureSession>,
}

impl GestureEvaluator {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config: config.sanitized(),
            session: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Applies to sessions started after the call.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config.sanitized();
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.config.thresholds = thresholds.sanitized();
    }

    /// Discard any previous session and start a new one at `start`.
    pub fn begin_session(&mut self, start: Point) -> GestureVerdict {
        let session = GestureSession::new(start, self.config);
        let verdict = session.verdict();
        self.session = Some(session);
        verdict
    }

    /// Samples arriving without an open session are ignored.
    pub fn add_sample(&mut self, point: Point) -> GestureVerdict {
        match self.session.as_mut() {
            Some(session) => session.add_sample(point),
            None => {
                tracing::trace!(x = point.x, y = point.y, "sample outside gesture session");
                GestureVerdict::invalid()
            }
        }
    }

    /// Close the session and return its final verdict; `None` when no session
    /// was open.
    pub fn end_session(&mut self) -> Option<GestureVerdict> {
        self.session.take().map(|session| session.verdict())
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.session.as_ref().map(GestureSession::trajectory)
    }

    pub fn verdict(&self) -> GestureVerdict {
        self.session
            .as_ref()
            .map(GestureSession::verdict)
            .unwrap_or_default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.session
            .as_ref()
            .map_or(GesturePhase::Idle, GestureSession::phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mouse_gestures::direction::Direction;

    #[test]
    fn phases_follow_the_session() {
        let mut evaluator = GestureEvaluator::new(GestureConfig::with_thresholds(20.0, 10.0));
        assert_eq!(evaluator.phase(), GesturePhase::Idle);

        evaluator.begin_session(Point::new(0.0, 0.0));
        assert_eq!(evaluator.phase(), GesturePhase::Tracking);

        evaluator.add_sample(Point::new(0.0, 4.0));
        assert_eq!(evaluator.phase(), GesturePhase::Invalid);

        evaluator.add_sample(Point::new(0.0, 40.0));
        assert_eq!(evaluator.phase(), GesturePhase::Valid);
        assert_eq!(
            evaluator.verdict().direction(),
            Some(GestureDirection::Single(Direction::Down))
        );

        assert!(evaluator.end_session().is_some());
        assert_eq!(evaluator.phase(), GesturePhase::Idle);
        assert_eq!(evaluator.end_session(), None);
    }

    #[test]
    fn open_session_keeps_its_configuration() {
        let mut evaluator = GestureEvaluator::new(GestureConfig::with_thresholds(20.0, 10.0));
        evaluator.begin_session(Point::new(0.0, 0.0));
        evaluator.set_thresholds(Thresholds::new(500.0, 500.0));
        let verdict = evaluator.add_sample(Point::new(30.0, 0.0));
        assert_eq!(verdict.label(), "right");

        evaluator.begin_session(Point::new(0.0, 0.0));
        assert!(!evaluator.add_sample(Point::new(30.0, 0.0)).is_valid());
    }

    #[test]
    fn single_point_is_invalid() {
        let config = GestureConfig::with_thresholds(0.0, 0.0);
        assert!(!evaluate(&[Point::new(1.0, 1.0)], &config).is_valid());
        assert!(!evaluate(&[], &config).is_valid());
        assert!(!evaluate(&[Point::new(1.0, 1.0); 3], &config).is_valid());
    }
}

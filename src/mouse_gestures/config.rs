use serde::{Deserialize, Serialize};

pub const DEFAULT_HORIZONTAL_THRESHOLD: f32 = 50.0;
pub const DEFAULT_VERTICAL_THRESHOLD: f32 = 50.0;

/// Minimum displacement, in pixels, along the dominant axis of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    #[serde(rename = "horizontalThreshold")]
    pub horizontal: f32,
    #[serde(rename = "verticalThreshold")]
    pub vertical: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_HORIZONTAL_THRESHOLD,
            vertical: DEFAULT_VERTICAL_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
        .sanitized()
    }

    /// Negative and non-finite thresholds are clamped to zero.
    pub fn sanitized(self) -> Self {
        Self {
            horizontal: sanitize_threshold("horizontal", self.horizontal),
            vertical: sanitize_threshold("vertical", self.vertical),
        }
    }

    /// Threshold of the axis the movement is dominated by.
    pub fn for_axis(&self, horizontal_dominant: bool) -> f32 {
        if horizontal_dominant {
            self.horizontal
        } else {
            self.vertical
        }
    }
}

fn sanitize_threshold(axis: &str, value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        return value;
    }
    tracing::warn!(axis, value, "invalid gesture threshold; clamping to 0");
    0.0
}

/// Empirically tuned recognition constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureTuning {
    /// How much one axis must exceed the other before a diagonal sector
    /// collapses to the cardinal direction of that axis.
    pub diagonal_dominance_ratio: f32,
    pub horizontal_turn_angle: f32,
    pub vertical_turn_angle: f32,
    /// Degrees added to the turn threshold per unit of straightness.
    pub straightness_turn_gain: f32,
    pub min_segment_fraction: f32,
    pub min_segment_samples: usize,
    pub max_smoothing_window: usize,
    /// Trajectories with at most this many samples are left unsmoothed.
    pub min_smoothing_len: usize,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            diagonal_dominance_ratio: 1.2,
            horizontal_turn_angle: 15.0,
            vertical_turn_angle: 20.0,
            straightness_turn_gain: 50.0,
            min_segment_fraction: 0.04,
            min_segment_samples: 2,
            max_smoothing_window: 5,
            min_smoothing_len: 5,
        }
    }
}

impl GestureTuning {
    /// Non-finite values fall back to the default; out-of-range values are
    /// clamped into range.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            diagonal_dominance_ratio: sanitize_tuning(
                "diagonalDominanceRatio",
                self.diagonal_dominance_ratio,
                defaults.diagonal_dominance_ratio,
                1.0,
                f32::MAX,
            ),
            horizontal_turn_angle: sanitize_tuning(
                "horizontalTurnAngle",
                self.horizontal_turn_angle,
                defaults.horizontal_turn_angle,
                0.0,
                180.0,
            ),
            vertical_turn_angle: sanitize_tuning(
                "verticalTurnAngle",
                self.vertical_turn_angle,
                defaults.vertical_turn_angle,
                0.0,
                180.0,
            ),
            straightness_turn_gain: sanitize_tuning(
                "straightnessTurnGain",
                self.straightness_turn_gain,
                defaults.straightness_turn_gain,
                0.0,
                180.0,
            ),
            min_segment_fraction: sanitize_tuning(
                "minSegmentFraction",
                self.min_segment_fraction,
                defaults.min_segment_fraction,
                0.0,
                1.0,
            ),
            ..self
        }
    }
}

fn sanitize_tuning(name: &str, value: f32, default: f32, min: f32, max: f32) -> f32 {
    if !value.is_finite() {
        tracing::warn!(name, value, default, "invalid gesture tuning value; using default");
        return default;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::warn!(name, value, clamped, "gesture tuning value out of range; clamping");
    }
    clamped
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    pub thresholds: Thresholds,
    pub tuning: GestureTuning,
}

impl GestureConfig {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds: thresholds.sanitized(),
            tuning: GestureTuning::default(),
        }
    }

    pub fn with_thresholds(horizontal: f32, vertical: f32) -> Self {
        Self::new(Thresholds::new(horizontal, vertical))
    }

    pub fn sanitized(self) -> Self {
        Self {
            thresholds: self.thresholds.sanitized(),
            tuning: self.tuning.sanitized(),
        }
    }
}

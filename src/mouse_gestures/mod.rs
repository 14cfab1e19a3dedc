pub mod classifier;
pub mod config;
pub mod direction;
pub mod evaluator;
pub mod hint;
pub mod segmenter;
pub mod service;
pub mod smoothing;
pub mod trajectory;

pub use config::{GestureConfig, GestureTuning, Thresholds};
pub use direction::{Direction, GestureDirection};
pub use evaluator::{evaluate, GestureEvaluator, GesturePhase, GestureVerdict};
pub use service::{
    EventResponse, GestureFeedback, MouseButton, MouseGestureConfig, MouseGestureService,
    PointerEvent, TrackOutcome,
};
pub use trajectory::{Point, Trajectory};

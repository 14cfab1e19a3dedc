use crate::actions::{Action, ActionMap, GestureActionSink, LoggingActionSink};
use crate::mouse_gestures::config::GestureConfig;
use crate::mouse_gestures::direction::GestureDirection;
use crate::mouse_gestures::evaluator::{GestureEvaluator, GestureVerdict};
use crate::mouse_gestures::hint::{gesture_hint, trail_color, GestureHint, HintOptions};
use crate::mouse_gestures::trajectory::Point;
use crate::settings::GestureSettings;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MouseGestureConfig {
    pub enabled: bool,
    pub debug_logging: bool,
    pub trigger_button: MouseButton,
    /// Middle click locates the current document, unless middle is the
    /// trigger button.
    pub middle_click_locate: bool,
    pub show_trail: bool,
    pub hint: HintOptions,
    pub gesture: GestureConfig,
}

impl Default for MouseGestureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug_logging: false,
            trigger_button: MouseButton::Right,
            middle_click_locate: true,
            show_trail: true,
            hint: HintOptions::default(),
            gesture: GestureConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    ButtonDown { button: MouseButton, point: Point },
    Move { point: Point },
    ButtonUp { button: MouseButton },
    /// A completed press and release outside a gesture.
    Click { button: MouseButton },
}

/// Live state handed to the trail and hint renderers after every move.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureFeedback {
    pub verdict: GestureVerdict,
    pub action: Option<Action>,
    pub hint: Option<GestureHint>,
    /// `None` when the trail is disabled.
    pub trail_color: Option<[u8; 4]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// No session was open, or the button is not the trigger.
    Idle,
    Invalid,
    Unbound(GestureDirection),
    Dispatched(GestureDirection, Action),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventResponse {
    Ignored,
    /// A session started; the host should suppress its context menu.
    Started,
    Feedback(GestureFeedback),
    Finished(TrackOutcome),
    Clicked(Action),
}

/// Routes pointer events of the host into gesture sessions and hands
/// recognised gestures to an action sink.
pub struct MouseGestureService {
    config: MouseGestureConfig,
    evaluator: GestureEvaluator,
    actions: ActionMap,
    sink: Arc<dyn GestureActionSink>,
}

impl Default for MouseGestureService {
    fn default() -> Self {
        Self::new_with_sink(
            MouseGestureConfig::default(),
            ActionMap::default(),
            Arc::new(LoggingActionSink),
        )
    }
}

impl MouseGestureService {
    pub fn new_with_sink(
        config: MouseGestureConfig,
        actions: ActionMap,
        sink: Arc<dyn GestureActionSink>,
    ) -> Self {
        let evaluator = GestureEvaluator::new(config.gesture);
        Self {
            config,
            evaluator,
            actions,
            sink,
        }
    }

    pub fn config(&self) -> &MouseGestureConfig {
        &self.config
    }

    pub fn actions(&self) -> &ActionMap {
        &self.actions
    }

    /// Disabling the service or changing the trigger button drops an open
    /// session without a verdict; its release would never be seen.
    pub fn update_config(&mut self, config: MouseGestureConfig) {
        let trigger_changed = config.trigger_button != self.config.trigger_button;
        if (!config.enabled || trigger_changed) && self.evaluator.is_tracking() {
            tracing::debug!(
                enabled = config.enabled,
                trigger_changed,
                "mouse gesture config changed mid-session; cancelling"
            );
            self.evaluator.cancel();
        }
        self.evaluator.set_config(config.gesture);
        self.config = config;
    }

    pub fn update_actions(&mut self, actions: ActionMap) {
        self.actions = actions;
    }

    pub fn update_settings(&mut self, settings: &GestureSettings) {
        self.update_config(settings.service_config());
        self.update_actions(settings.gesture_actions.clone());
    }

    pub fn is_tracking(&self) -> bool {
        self.evaluator.is_tracking()
    }

    pub fn evaluator(&self) -> &GestureEvaluator {
        &self.evaluator
    }

    pub fn handle(&mut self, event: PointerEvent) -> EventResponse {
        match event {
            PointerEvent::ButtonDown { button, point } => {
                if self.button_down(button, point) {
                    EventResponse::Started
                } else {
                    EventResponse::Ignored
                }
            }
            PointerEvent::Move { point } => match self.pointer_move(point) {
                Some(feedback) => EventResponse::Feedback(feedback),
                None => EventResponse::Ignored,
            },
            PointerEvent::ButtonUp { button } => match self.button_up(button) {
                TrackOutcome::Idle => EventResponse::Ignored,
                outcome => EventResponse::Finished(outcome),
            },
            PointerEvent::Click { button } => match self.click(button) {
                Some(action) => EventResponse::Clicked(action),
                None => EventResponse::Ignored,
            },
        }
    }

    /// Returns whether a session was started.
    pub fn button_down(&mut self, button: MouseButton, point: Point) -> bool {
        if !self.config.enabled || button != self.config.trigger_button {
            return false;
        }
        self.evaluator.begin_session(point);
        if self.config.debug_logging {
            tracing::debug!(x = point.x, y = point.y, "mouse gesture session started");
        }
        true
    }

    pub fn pointer_move(&mut self, point: Point) -> Option<GestureFeedback> {
        if !self.evaluator.is_tracking() {
            return None;
        }
        let verdict = self.evaluator.add_sample(point);
        let action = verdict
            .direction()
            .and_then(|gesture| self.actions.resolve(gesture));
        if self.config.debug_logging {
            tracing::debug!(
                gesture = %verdict.label(),
                valid = verdict.is_valid(),
                samples = self.evaluator.trajectory().map_or(0, |t| t.len()),
                "mouse gesture verdict"
            );
        }
        Some(GestureFeedback {
            verdict,
            action,
            hint: gesture_hint(verdict, action, point, &self.config.hint),
            trail_color: self
                .config
                .show_trail
                .then(|| trail_color(verdict.is_valid() && action.is_some())),
        })
    }

    /// Returns the action run for a plain click, if any.
    pub fn click(&mut self, button: MouseButton) -> Option<Action> {
        if button != MouseButton::Middle
            || !self.config.middle_click_locate
            || self.config.trigger_button == MouseButton::Middle
        {
            return None;
        }
        let action = Action::LocateDoc;
        tracing::info!(button = ?button, action = ?action, "mouse click action");
        self.sink.dispatch_click(button, action);
        Some(action)
    }

    pub fn button_up(&mut self, button: MouseButton) -> TrackOutcome {
        if button != self.config.trigger_button {
            return TrackOutcome::Idle;
        }
        let Some(verdict) = self.evaluator.end_session() else {
            return TrackOutcome::Idle;
        };
        let Some(gesture) = verdict.direction() else {
            if self.config.debug_logging {
                tracing::debug!("mouse gesture released without a valid direction");
            }
            return TrackOutcome::Invalid;
        };
        match self.actions.resolve(gesture) {
            Some(action) => {
                tracing::info!(gesture = %gesture, action = ?action, "mouse gesture matched");
                self.sink.dispatch(gesture, action);
                TrackOutcome::Dispatched(gesture, action)
            }
            None => {
                if self.config.debug_logging {
                    tracing::debug!(gesture = %gesture, "mouse gesture has no bound action");
                }
                TrackOutcome::Unbound(gesture)
            }
        }
    }
}

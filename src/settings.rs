use crate::actions::ActionMap;
use crate::mouse_gestures::config::{GestureConfig, GestureTuning, Thresholds};
use crate::mouse_gestures::hint::HintOptions;
use crate::mouse_gestures::service::{MouseButton, MouseGestureConfig};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "mouse_gesture_settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GestureSettings {
    /// Master switch. When `false` no gesture session is ever started.
    #[serde(default = "default_true")]
    pub enable_gestures: bool,
    /// Draw the pointer trail while a gesture is in progress.
    #[serde(default = "default_true")]
    pub show_gesture_track: bool,
    /// Show the action hint next to the pointer.
    #[serde(default = "default_true")]
    pub show_gesture_tooltip: bool,
    /// Suppress the hint for recognised gestures that have no action.
    #[serde(default = "default_true")]
    pub hide_no_action_tooltip: bool,
    /// Log every verdict at debug level.
    #[serde(default)]
    pub debug_mode: bool,
    /// Prefix hints with the direction name, e.g. `left → up: Close tab`.
    #[serde(default)]
    pub show_direction_in_tooltip: bool,
    #[serde(default = "default_trigger_button")]
    pub trigger_button: MouseButton,
    /// Middle click reveals the current document in the file tree.
    #[serde(default = "default_true")]
    pub middle_click_locate: bool,
    /// Minimum displacement per dominant axis, in pixels.
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub tuning: GestureTuning,
    #[serde(default)]
    pub gesture_actions: ActionMap,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            enable_gestures: true,
            show_gesture_track: true,
            show_gesture_tooltip: true,
            hide_no_action_tooltip: true,
            debug_mode: false,
            show_direction_in_tooltip: false,
            trigger_button: default_trigger_button(),
            middle_click_locate: true,
            thresholds: Thresholds::default(),
            tuning: GestureTuning::default(),
            gesture_actions: ActionMap::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_trigger_button() -> MouseButton {
    MouseButton::Right
}

impl GestureSettings {
    /// Missing or empty files yield the defaults; malformed JSON is an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut settings: Self = serde_json::from_str(&content)?;
        settings.thresholds = settings.thresholds.sanitized();
        settings.tuning = settings.tuning.sanitized();
        Ok(settings)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            thresholds: self.thresholds,
            tuning: self.tuning,
        }
        .sanitized()
    }

    pub fn service_config(&self) -> MouseGestureConfig {
        MouseGestureConfig {
            enabled: self.enable_gestures,
            debug_logging: self.debug_mode,
            trigger_button: self.trigger_button,
            middle_click_locate: self.middle_click_locate,
            show_trail: self.show_gesture_track,
            hint: HintOptions {
                show_hint: self.show_gesture_tooltip,
                hide_no_action: self.hide_no_action_tooltip,
                show_direction: self.show_direction_in_tooltip,
            },
            gesture: self.gesture_config(),
        }
    }
}

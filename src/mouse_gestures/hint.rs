use crate::actions::Action;
use crate::mouse_gestures::direction::GestureDirection;
use crate::mouse_gestures::evaluator::GestureVerdict;
use crate::mouse_gestures::trajectory::Point;

pub const HINT_OFFSET: (f32, f32) = (15.0, 15.0);
pub const TRAIL_COLOR_ACTIVE: [u8; 4] = [0x4c, 0xaf, 0x50, 0xff];
pub const TRAIL_COLOR_IDLE: [u8; 4] = [0x9e, 0x9e, 0x9e, 0xff];
const NO_ACTION_SUFFIX: &str = "No Action";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintOptions {
    pub show_hint: bool,
    pub hide_no_action: bool,
    pub show_direction: bool,
}

impl Default for HintOptions {
    fn default() -> Self {
        Self {
            show_hint: true,
            hide_no_action: true,
            show_direction: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Action,
    /// Recognised gesture without a bound action.
    Unbound,
}

/// Text shown next to the pointer while a gesture is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureHint {
    pub text: String,
    pub kind: HintKind,
    pub position: Point,
}

/// `"left"`, or `"left → up"` for a composite gesture.
pub fn direction_name(gesture: GestureDirection) -> String {
    match gesture {
        GestureDirection::Single(dir) => dir.to_string(),
        GestureDirection::Composite(first, second) => format!("{first} → {second}"),
    }
}

pub fn gesture_hint(
    verdict: GestureVerdict,
    action: Option<Action>,
    pointer: Point,
    options: &HintOptions,
) -> Option<GestureHint> {
    if !options.show_hint {
        return None;
    }
    let gesture = verdict.direction()?;
    let position = Point::new(pointer.x + HINT_OFFSET.0, pointer.y + HINT_OFFSET.1);

    match action.filter(|action| action.is_bound()) {
        Some(action) => {
            let text = if options.show_direction {
                format!("{}: {}", direction_name(gesture), action.label())
            } else {
                action.label().to_string()
            };
            Some(GestureHint {
                text,
                kind: HintKind::Action,
                position,
            })
        }
        None if options.hide_no_action => None,
        None => Some(GestureHint {
            text: format!("{} ({NO_ACTION_SUFFIX})", direction_name(gesture)),
            kind: HintKind::Unbound,
            position,
        }),
    }
}

pub fn trail_color(valid_with_action: bool) -> [u8; 4] {
    if valid_with_action {
        TRAIL_COLOR_ACTIVE
    } else {
        TRAIL_COLOR_IDLE
    }
}

use crate::mouse_gestures::direction::{Direction, GestureDirection};
use crate::mouse_gestures::service::MouseButton;
use serde::{Deserialize, Serialize};

/// Host actions a gesture can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    NoAction,
    ScrollTop,
    ScrollBottom,
    SwitchLeft,
    SwitchRight,
    LocateDoc,
    CloseTab,
    CloseAllTabs,
    CloseOtherTabs,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::NoAction => "No action",
            Action::ScrollTop => "Scroll to top",
            Action::ScrollBottom => "Scroll to bottom",
            Action::SwitchLeft => "Switch to left tab",
            Action::SwitchRight => "Switch to right tab",
            Action::LocateDoc => "Locate document",
            Action::CloseTab => "Close tab",
            Action::CloseAllTabs => "Close all tabs",
            Action::CloseOtherTabs => "Close other tabs",
        }
    }

    pub fn is_bound(self) -> bool {
        self != Action::NoAction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureBinding {
    pub gesture: GestureDirection,
    pub action: Action,
}

/// Ordered gesture to action bindings. Unlisted gestures have no action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionMap {
    bindings: Vec<GestureBinding>,
}

impl Default for ActionMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(Direction::Left.into(), Action::SwitchLeft);
        map.bind(Direction::Right.into(), Action::SwitchRight);
        map.bind(Direction::Up.into(), Action::ScrollTop);
        map.bind(Direction::Down.into(), Action::ScrollBottom);
        for first in Direction::CARDINALS {
            for second in Direction::CARDINALS {
                if first != second {
                    map.bind(GestureDirection::Composite(first, second), Action::NoAction);
                }
            }
        }
        map
    }
}

impl ActionMap {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn bindings(&self) -> &[GestureBinding] {
        &self.bindings
    }

    /// Bind `gesture`, replacing any existing binding for it.
    pub fn bind(&mut self, gesture: GestureDirection, action: Action) {
        match self.bindings.iter_mut().find(|b| b.gesture == gesture) {
            Some(binding) => binding.action = action,
            None => self.bindings.push(GestureBinding { gesture, action }),
        }
    }

    pub fn unbind(&mut self, gesture: GestureDirection) -> Option<Action> {
        let idx = self.bindings.iter().position(|b| b.gesture == gesture)?;
        Some(self.bindings.remove(idx).action)
    }

    /// The action to run for `gesture`, or `None` when it is unbound or bound
    /// to [`Action::NoAction`].
    pub fn resolve(&self, gesture: GestureDirection) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.gesture == gesture)
            .map(|b| b.action)
            .filter(|action| action.is_bound())
    }
}

impl FromIterator<(GestureDirection, Action)> for ActionMap {
    fn from_iter<T: IntoIterator<Item = (GestureDirection, Action)>>(iter: T) -> Self {
        let mut map = Self::empty();
        for (gesture, action) in iter {
            map.bind(gesture, action);
        }
        map
    }
}

/// Receives the actions resolved from finished gestures and plain clicks.
pub trait GestureActionSink: Send + Sync {
    fn dispatch(&self, gesture: GestureDirection, action: Action);
    fn dispatch_click(&self, button: MouseButton, action: Action);
}

/// Sink that only logs what would have been run.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActionSink;

impl GestureActionSink for LoggingActionSink {
    fn dispatch(&self, gesture: GestureDirection, action: Action) {
        tracing::info!(gesture = %gesture, action = ?action, "mouse gesture action");
    }

    fn dispatch_click(&self, button: MouseButton, action: Action) {
        tracing::info!(button = ?button, action = ?action, "mouse click action");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_the_four_cardinals() {
        let map = ActionMap::default();
        assert_eq!(map.resolve(Direction::Left.into()), Some(Action::SwitchLeft));
        assert_eq!(map.resolve(Direction::Down.into()), Some(Action::ScrollBottom));
        assert_eq!(
            map.resolve(GestureDirection::Composite(Direction::Left, Direction::Up)),
            None
        );
        assert_eq!(map.resolve(Direction::UpLeft.into()), None);
        assert_eq!(map.bindings().len(), 16);
    }

    #[test]
    fn bind_replaces_and_unbind_removes() {
        let gesture = GestureDirection::Composite(Direction::Down, Direction::Right);
        let mut map = ActionMap::default();
        map.bind(gesture, Action::CloseTab);
        assert_eq!(map.resolve(gesture), Some(Action::CloseTab));
        assert_eq!(map.bindings().len(), 16);
        assert_eq!(map.unbind(gesture), Some(Action::CloseTab));
        assert_eq!(map.resolve(gesture), None);
        assert_eq!(map.unbind(gesture), None);
    }

    #[test]
    fn serializes_as_binding_list() {
        let map: ActionMap = [(
            GestureDirection::Composite(Direction::Left, Direction::Up),
            Action::CloseOtherTabs,
        )]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"[{"gesture":["left","up"],"action":"closeOtherTabs"}]"#
        );
        let back: ActionMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}

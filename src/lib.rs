pub mod actions;
pub mod logging;
pub mod mouse_gestures;
pub mod settings;

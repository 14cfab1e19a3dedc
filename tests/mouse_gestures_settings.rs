use mouse_gesture_engine::actions::Action;
use mouse_gesture_engine::mouse_gestures::{Direction, GestureDirection, MouseButton};
use mouse_gesture_engine::settings::GestureSettings;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let settings = GestureSettings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings, GestureSettings::default());
    assert_eq!(settings.trigger_button, MouseButton::Right);
    assert_eq!(settings.thresholds.horizontal, 50.0);
}

#[test]
fn settings_round_trip_through_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    let mut settings = GestureSettings::default();
    settings.debug_mode = true;
    settings.thresholds.horizontal = 35.0;
    settings.tuning.diagonal_dominance_ratio = 1.5;
    settings.gesture_actions.bind(
        GestureDirection::Composite(Direction::Right, Direction::Down),
        Action::CloseAllTabs,
    );
    settings.save(path).unwrap();

    let loaded = GestureSettings::load(path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(
        loaded
            .gesture_actions
            .resolve(GestureDirection::Composite(Direction::Right, Direction::Down)),
        Some(Action::CloseAllTabs)
    );
}

#[test]
fn partial_file_fills_defaults_and_clamps_thresholds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
            "enableGestures": false,
            "thresholds": { "horizontalThreshold": -10, "verticalThreshold": 25 }
        }"#,
    )
    .unwrap();

    let settings = GestureSettings::load(path.to_str().unwrap()).unwrap();
    assert!(!settings.enable_gestures);
    assert!(settings.show_gesture_tooltip);
    assert_eq!(settings.thresholds.horizontal, 0.0);
    assert_eq!(settings.thresholds.vertical, 25.0);
    assert_eq!(
        settings.gesture_actions.resolve(Direction::Up.into()),
        Some(Action::ScrollTop)
    );

    let config = settings.service_config();
    assert!(!config.enabled);
    assert_eq!(config.gesture.thresholds.vertical, 25.0);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(GestureSettings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn out_of_range_tuning_is_clamped_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
            "tuning": {
                "straightnessTurnGain": -5,
                "diagonalDominanceRatio": 0.2,
                "minSegmentFraction": 3.0,
                "verticalTurnAngle": 25
            },
            "middleClickLocate": false
        }"#,
    )
    .unwrap();

    let settings = GestureSettings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.tuning.straightness_turn_gain, 0.0);
    assert_eq!(settings.tuning.diagonal_dominance_ratio, 1.0);
    assert_eq!(settings.tuning.min_segment_fraction, 1.0);
    assert_eq!(settings.tuning.vertical_turn_angle, 25.0);
    assert!(!settings.middle_click_locate);
    assert!(!settings.service_config().middle_click_locate);
}

use anyhow::{bail, Context};
use mouse_gesture_engine::actions::LoggingActionSink;
use mouse_gesture_engine::mouse_gestures::{
    EventResponse, MouseGestureService, Point, PointerEvent,
};
use mouse_gesture_engine::settings::{GestureSettings, SETTINGS_FILE};
use std::sync::Arc;

/// Replays a recorded gesture through the recogniser:
/// `gesture_replay <samples.json> [settings.json]`.
fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(samples_path) = args.next() else {
        bail!("usage: gesture_replay <samples.json> [settings.json]");
    };
    let settings_path = args.next().unwrap_or_else(|| SETTINGS_FILE.to_string());

    let settings = GestureSettings::load(&settings_path)
        .with_context(|| format!("failed to load settings from {settings_path}"))?;
    mouse_gesture_engine::logging::init(settings.debug_mode, None);

    let content = std::fs::read_to_string(&samples_path)
        .with_context(|| format!("failed to read samples from {samples_path}"))?;
    let samples: Vec<Point> = serde_json::from_str(&content)?;
    let Some((&start, moves)) = samples.split_first() else {
        bail!("{samples_path} contains no samples");
    };

    let config = settings.service_config();
    let trigger = config.trigger_button;
    let mut service = MouseGestureService::new_with_sink(
        config,
        settings.gesture_actions.clone(),
        Arc::new(LoggingActionSink),
    );

    service.handle(PointerEvent::ButtonDown {
        button: trigger,
        point: start,
    });
    for &point in moves {
        if let EventResponse::Feedback(feedback) = service.handle(PointerEvent::Move { point }) {
            tracing::debug!(
                x = point.x,
                y = point.y,
                gesture = %feedback.verdict.label(),
                "replayed sample"
            );
        }
    }
    let verdict = service.evaluator().verdict();
    let outcome = service.handle(PointerEvent::ButtonUp { button: trigger });

    println!("samples: {}", samples.len());
    println!(
        "gesture: {}",
        if verdict.is_valid() {
            verdict.label()
        } else {
            "<invalid>".to_string()
        }
    );
    println!("outcome: {outcome:?}");
    Ok(())
}

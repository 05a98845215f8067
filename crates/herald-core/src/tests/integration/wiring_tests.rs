use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::event::dispatcher::EventDispatcher;
use crate::tests::integration::common::{counting_listener, recording_listener, RecorderSubscriber};
use crate::wiring::{HandlerMap, WiringManifest};

// A manifest, a subscriber, and a direct registration all feed the same
// registry; dispatch interleaves them purely by priority.
#[test]
fn test_manifest_and_subscriber_share_one_registry() {
    let mut dispatcher = EventDispatcher::new();
    let trail = Arc::new(Mutex::new(Vec::new()));

    // Subscriber pins "open" at -5.
    let subscriber = RecorderSubscriber::new(&trail);
    dispatcher.add_subscriber(&subscriber).unwrap();

    // Manifest adds "render" at 10 and "deliver" with an auto priority.
    let manifest = WiringManifest::from_json(
        r#"{
            "bindings": [
                {"event": "report.ready", "handler": "render", "priority": 10},
                {"event": "report.ready", "handler": "deliver"}
            ]
        }"#,
    )
    .unwrap();
    let mut handlers = HandlerMap::new();
    handlers.insert("render", recording_listener("render", &trail));
    handlers.insert("deliver", recording_listener("deliver", &trail));
    manifest.apply(&handlers, &mut dispatcher).unwrap();

    // Direct registration lands after everything at 50.
    dispatcher
        .add_listener_at("report.ready", recording_listener("archive", &trail), 50)
        .unwrap();

    // deliver's auto priority is 11 (one past the manifest's 10), so the
    // full order is open (-5), render (10), deliver (11), archive (50).
    assert_eq!(dispatcher.priorities("report.ready"), vec![-5, 10, 11, 50]);

    dispatcher.dispatch("report.ready");

    assert_eq!(
        *trail.lock().unwrap(),
        vec!["open", "render", "deliver", "archive"]
    );
}

// Handles returned by manifest application feed straight back into the
// registry's removal calls.
#[test]
fn test_removal_after_manifest_apply() {
    let mut dispatcher = EventDispatcher::new();
    let counter = Arc::new(AtomicU32::new(0));

    let mut handlers = HandlerMap::new();
    handlers.insert("tick", counting_listener(&counter));
    let manifest = WiringManifest::from_json(
        r#"{"bindings": [{"event": "clock.tick", "handler": "tick"}]}"#,
    )
    .unwrap();

    let ids = manifest.apply(&handlers, &mut dispatcher).unwrap();
    dispatcher.dispatch("clock.tick");
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    assert!(dispatcher.remove_listener("clock.tick", ids[0]).unwrap());
    dispatcher.dispatch("clock.tick");
    assert_eq!(
        counter.load(Ordering::SeqCst),
        1,
        "Removed listener must not run again"
    );
}

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::error::{Error, Result};
use crate::event::{Event, EventDispatcher, EventKind, EventRef, Listener};
use crate::tests::integration::common::recording_listener;

struct SessionOpened;

impl EventKind for SessionOpened {
    const NAME: &'static str = "session.opened";
}

#[test]
fn test_typed_kind_flow_end_to_end() {
    let mut dispatcher = EventDispatcher::new();
    let trail = Arc::new(Mutex::new(Vec::new()));

    dispatcher
        .add_listener(
            EventRef::of::<SessionOpened>(),
            recording_listener("audit", &trail),
        )
        .unwrap();

    let mut event = Event::of::<SessionOpened>();
    event.set("user", json!("mallory"));
    let event = dispatcher.dispatch(event);

    assert_eq!(event.name(), Some("session.opened"));
    assert_eq!(event.get("user"), Some(&json!("mallory")));
    assert_eq!(*trail.lock().unwrap(), vec!["audit"]);
}

#[test]
fn test_subsystem_errors_convert_into_the_top_level_error() {
    fn register(dispatcher: &mut EventDispatcher) -> Result<()> {
        let noop: Listener = Arc::new(|_event: &mut Event| {});
        dispatcher.add_listener_at("boot", Arc::clone(&noop), 0)?;
        dispatcher.add_listener_at("boot", noop, 0)?;
        Ok(())
    }

    let mut dispatcher = EventDispatcher::new();
    let err = register(&mut dispatcher).unwrap_err();

    assert!(matches!(err, Error::EventSystem(_)));
    assert_eq!(
        format!("{}", err),
        "Event system error: the event \"boot\" already has a listener with priority 0"
    );
}

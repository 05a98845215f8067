use serde_json::json;

use crate::event::{Event, EventKind, EventRef};

struct CacheFlush;

impl EventKind for CacheFlush {
    const NAME: &'static str = "cache.flush";
}

#[test]
fn test_event_construction() {
    let event = Event::new();
    assert_eq!(event.name(), None);
    assert!(event.payload().is_empty());

    let event = Event::named("user.created");
    assert_eq!(event.name(), Some("user.created"));

    let event: Event = "user.created".into();
    assert_eq!(event.name(), Some("user.created"));
}

#[test]
fn test_event_kind_default_name() {
    let event = Event::of::<CacheFlush>();
    assert_eq!(event.name(), Some("cache.flush"));

    // An explicit name wins over the kind's declared one.
    let mut event = Event::of::<CacheFlush>();
    event.set_name("cache.flush.all");
    assert_eq!(event.name(), Some("cache.flush.all"));
}

#[test]
fn test_event_payload_access() {
    let mut event = Event::named("user.created");

    event.set("id", json!(42));
    event.set("admin", json!(false));
    assert_eq!(event.get("id"), Some(&json!(42)));

    event.set("admin", json!(true));
    assert_eq!(event.get("admin"), Some(&json!(true)));

    assert_eq!(event.take("id"), Some(json!(42)));
    assert_eq!(event.get("id"), None);
    assert_eq!(event.payload().len(), 1);
}

#[test]
fn test_event_ref_resolution() {
    assert_eq!(
        EventRef::from("user.created"),
        EventRef::Name("user.created".to_string())
    );
    assert_eq!(EventRef::of::<CacheFlush>(), EventRef::from("cache.flush"));

    let named = Event::named("user.created");
    assert_eq!(EventRef::from(&named), EventRef::from("user.created"));

    let unnamed = Event::new();
    assert_eq!(EventRef::from(&unnamed), EventRef::Unnamed);
}

#[test]
fn test_event_serde_round_trip() {
    let mut event = Event::named("user.created");
    event.set("id", json!(42));

    let encoded = serde_json::to_string(&event).unwrap();
    let decoded: Event = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, event);
}

#[cfg(test)]
mod types_tests;

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::event::{Event, EventDispatcher};

    #[test]
    fn test_event_dispatch() {
        let mut dispatcher = EventDispatcher::new();
        let called = Arc::new(Mutex::new(false));
        let called_clone = called.clone();

        dispatcher
            .add_listener(
                "test_event",
                Arc::new(move |_event: &mut Event| {
                    let mut called = called_clone.lock().unwrap();
                    *called = true;
                }),
            )
            .unwrap();

        dispatcher.dispatch("test_event");

        assert!(*called.lock().unwrap(), "Listener should have been called");
    }

    #[test]
    fn test_dispatch_returns_named_event() {
        let dispatcher = EventDispatcher::new();
        let event = dispatcher.dispatch("test_event");
        assert_eq!(event.name(), Some("test_event"));
    }
}

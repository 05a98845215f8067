#![cfg(test)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::event::{Event, Listener};
use crate::subscriber::error::SubscriberError;
use crate::subscriber::{EventSubscriptions, HandlerSpec, Subscriber};

// ===== SHARED LISTENERS =====

/// Listener counting its invocations
pub fn counting_listener(counter: &Arc<AtomicU32>) -> Listener {
    let counter = Arc::clone(counter);
    Arc::new(move |_event: &mut Event| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

/// Listener recording its label into a shared trail
pub fn recording_listener(label: &'static str, trail: &Arc<Mutex<Vec<&'static str>>>) -> Listener {
    let trail = Arc::clone(trail);
    Arc::new(move |_event: &mut Event| {
        trail.lock().unwrap().push(label);
    })
}

// ===== MOCK SUBSCRIBERS =====

/// Subscriber registering one "open" handler for "report.ready" at -5,
/// recording into the shared trail like the plain listeners above.
pub struct RecorderSubscriber {
    trail: Arc<Mutex<Vec<&'static str>>>,
}

impl RecorderSubscriber {
    pub fn new(trail: &Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            trail: Arc::clone(trail),
        }
    }
}

impl Subscriber for RecorderSubscriber {
    fn subscribed_events(&self) -> Result<EventSubscriptions, SubscriberError> {
        Ok(EventSubscriptions::new().on("report.ready", HandlerSpec::handler_at("open", -5)))
    }

    fn handler(&self, name: &str) -> Option<Listener> {
        match name {
            "open" => Some(recording_listener("open", &self.trail)),
            _ => None,
        }
    }
}

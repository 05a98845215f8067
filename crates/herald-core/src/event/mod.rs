pub mod dispatcher;
pub mod error;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::event::error::EventSystemError;

/// Type for listener registration handles
pub type ListenerId = u64;

/// Ordering key for listener invocation; lower values run first
pub type Priority = i32;

/// Callable invoked with the event being dispatched.
///
/// Shared rather than boxed so the same handler can be bound under several
/// event names and handed out of a wiring handler map without re-wrapping.
pub type Listener = Arc<dyn Fn(&mut Event) + Send + Sync>;

/// Static default naming for event kinds.
///
/// An event constructed via [`Event::of`] carries the kind's declared name;
/// a name set explicitly on the instance wins over the declared one.
pub trait EventKind {
    /// Canonical event name for this kind
    const NAME: &'static str;
}

/// Named unit of information dispatched to listeners.
///
/// Carries an optional canonical name and an arbitrary payload map that
/// listeners may write to; [`dispatcher::EventDispatcher::dispatch`] hands
/// the event back to the producer after every listener has run, so those
/// writes are visible to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    name: Option<String>,
    #[serde(default)]
    payload: Map<String, Value>,
}

impl Event {
    /// Create an event with no name assigned yet
    pub fn new() -> Self {
        Self {
            name: None,
            payload: Map::new(),
        }
    }

    /// Create an event carrying `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            payload: Map::new(),
        }
    }

    /// Create an event named after the kind `K`
    pub fn of<K: EventKind>() -> Self {
        Self::named(K::NAME)
    }

    /// Get the canonical name, if one has been assigned
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Assign or replace the canonical name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Get a payload field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Set a payload field, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.payload.insert(key.into(), value);
    }

    /// Remove and return a payload field
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.payload.remove(key)
    }

    /// Get the whole payload map
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Get the whole payload map mutably
    pub fn payload_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.payload
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        Event::named(name)
    }
}

impl From<String> for Event {
    fn from(name: String) -> Self {
        Event::named(name)
    }
}

/// Reference to an event, used at registration and removal time.
///
/// Either a resolved canonical name, or `Unnamed` when taken from an
/// [`Event`] whose name was never set. Resolving an `Unnamed` reference
/// fails with [`EventSystemError::InvalidEventReference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRef {
    /// Resolved canonical name
    Name(String),
    /// Taken from an event with no name assigned
    Unnamed,
}

impl EventRef {
    /// Reference the event kind `K` by its declared name
    pub fn of<K: EventKind>() -> Self {
        EventRef::Name(K::NAME.to_string())
    }

    pub(crate) fn resolve(self) -> Result<String, EventSystemError> {
        match self {
            EventRef::Name(name) => Ok(name),
            EventRef::Unnamed => Err(EventSystemError::InvalidEventReference),
        }
    }
}

impl From<&str> for EventRef {
    fn from(name: &str) -> Self {
        EventRef::Name(name.to_string())
    }
}

impl From<String> for EventRef {
    fn from(name: String) -> Self {
        EventRef::Name(name)
    }
}

impl From<&Event> for EventRef {
    fn from(event: &Event) -> Self {
        match event.name() {
            Some(name) => EventRef::Name(name.to_string()),
            None => EventRef::Unnamed,
        }
    }
}

/// Re-export important types
pub use dispatcher::EventDispatcher;

// Test module declaration
#[cfg(test)]
mod tests;

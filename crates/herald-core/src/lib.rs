// Subsystem modules
pub mod error;
pub mod event;
pub mod subscriber;
pub mod wiring;

// Re-export key public types/traits for easier use by the binary and
// downstream code.
pub use error::{Error, Result};
pub use event::error::EventSystemError;
pub use event::{Event, EventDispatcher, EventKind, EventRef, Listener, ListenerId, Priority};
pub use subscriber::{
    EventSubscriptions, HandlerBinding, HandlerSpec, Subscriber, SubscriberError,
};
pub use wiring::{BindingSpec, HandlerMap, ManifestFormat, Wiring, WiringError, WiringManifest};

// Integration test module declaration
#[cfg(test)]
mod tests;

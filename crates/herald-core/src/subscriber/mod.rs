pub mod adapter;
pub mod error;

use crate::event::{Listener, Priority};

pub use error::SubscriberError;

/// One handler reference inside a subscription declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerBinding {
    /// Name the subscriber resolves to a bound callable
    pub handler: String,
    /// Explicit priority; `None` lets the registry assign the next one
    pub priority: Option<Priority>,
}

impl HandlerBinding {
    /// Binding with an auto-assigned priority
    pub fn auto(handler: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            priority: None,
        }
    }

    /// Binding at an explicit priority
    pub fn at(handler: impl Into<String>, priority: Priority) -> Self {
        Self {
            handler: handler.into(),
            priority: Some(priority),
        }
    }
}

/// Shape of a subscriber's declaration for one event name.
///
/// The registry assigns the priority for [`HandlerSpec::Handler`];
/// [`HandlerSpec::Each`] registers several handlers in one go, each with
/// its own optional priority, and must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerSpec {
    /// A single handler, priority assigned by the registry
    Handler(String),
    /// A single handler at an explicit priority
    HandlerAt(String, Priority),
    /// Several handlers, each with its own optional priority
    Each(Vec<HandlerBinding>),
}

impl HandlerSpec {
    /// Single handler with an auto-assigned priority
    pub fn handler(name: impl Into<String>) -> Self {
        HandlerSpec::Handler(name.into())
    }

    /// Single handler at an explicit priority
    pub fn handler_at(name: impl Into<String>, priority: Priority) -> Self {
        HandlerSpec::HandlerAt(name.into(), priority)
    }

    /// Several handlers, each with its own optional priority
    pub fn each(bindings: impl IntoIterator<Item = HandlerBinding>) -> Self {
        HandlerSpec::Each(bindings.into_iter().collect())
    }
}

/// Ordered declaration of a subscriber's event handlers.
///
/// Declaration order is registration order, which matters for the
/// fail-fast behavior of batch registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSubscriptions {
    entries: Vec<(String, HandlerSpec)>,
}

impl EventSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `spec` for `event`, keeping declaration order
    pub fn on(mut self, event: impl Into<String>, spec: HandlerSpec) -> Self {
        self.entries.push((event.into(), spec));
        self
    }

    /// Iterate declared entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HandlerSpec)> {
        self.entries
            .iter()
            .map(|(event, spec)| (event.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Capability for objects that declare multiple named listeners in one
/// registration call.
///
/// `subscribed_events` is the declaration; the default body fails with
/// [`SubscriberError::Unimplemented`], so a concrete subscriber must
/// override it. `handler` resolves a declared handler name to a bound
/// callable at registration time; the mediator keeps only the callables it
/// extracts, never the subscriber itself.
pub trait Subscriber: Send + Sync {
    /// Declared event subscriptions
    fn subscribed_events(&self) -> Result<EventSubscriptions, SubscriberError> {
        Err(SubscriberError::Unimplemented)
    }

    /// Resolve a declared handler name to a bound callable
    fn handler(&self, name: &str) -> Option<Listener>;
}

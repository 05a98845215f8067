pub mod error;
pub mod manifest;

use std::collections::HashMap;
use std::fmt;

use crate::event::dispatcher::EventDispatcher;
use crate::event::{Listener, ListenerId, Priority};

pub use error::WiringError;
pub use manifest::{BindingSpec, ManifestFormat, WiringManifest};

/// Name-to-callable table the composition root hands to manifest
/// application. Listeners are shared, so looking one up clones the handle,
/// not the callable.
#[derive(Default)]
pub struct HandlerMap {
    handlers: HashMap<String, Listener>,
}

impl fmt::Debug for HandlerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerMap")
            .field("handler_count", &self.handlers.len())
            .finish()
    }
}

impl HandlerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callable under `name`, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, listener: Listener) {
        self.handlers.insert(name.into(), listener);
    }

    /// Look up a callable by name
    pub fn get(&self, name: &str) -> Option<Listener> {
        self.handlers.get(name).cloned()
    }

    /// Whether a callable is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Code-first startup registration table.
///
/// The composition root builds the table once, then applies it to a
/// dispatcher in a single call, replacing any scatter of ad-hoc
/// registration calls across modules.
#[derive(Default)]
pub struct Wiring {
    bindings: Vec<(String, Listener, Option<Priority>)>,
}

impl fmt::Debug for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wiring")
            .field("binding_count", &self.bindings.len())
            .finish()
    }
}

impl Wiring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `listener` to `event` with an auto-assigned priority
    pub fn bind(mut self, event: impl Into<String>, listener: Listener) -> Self {
        self.bindings.push((event.into(), listener, None));
        self
    }

    /// Bind `listener` to `event` at an explicit priority
    pub fn bind_at(
        mut self,
        event: impl Into<String>,
        listener: Listener,
        priority: Priority,
    ) -> Self {
        self.bindings.push((event.into(), listener, Some(priority)));
        self
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Feed every binding into `dispatcher`, in declaration order.
    ///
    /// Fails fast on the first rejected binding; earlier bindings stay
    /// registered. Returns the handles that were registered.
    pub fn apply(self, dispatcher: &mut EventDispatcher) -> Result<Vec<ListenerId>, WiringError> {
        let mut ids = Vec::with_capacity(self.bindings.len());
        for (event, listener, priority) in self.bindings {
            let id = match priority {
                Some(priority) => dispatcher.add_listener_at(event.as_str(), listener, priority)?,
                None => dispatcher.add_listener(event.as_str(), listener)?,
            };
            ids.push(id);
        }
        log::debug!("Applied wiring table: {} binding(s)", ids.len());
        Ok(ids)
    }
}

// Test module declaration
#[cfg(test)]
mod tests;

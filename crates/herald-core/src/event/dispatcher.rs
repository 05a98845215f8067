use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::event::error::EventSystemError;
use crate::event::{Event, EventRef, Listener, ListenerId, Priority};

/// A single registration: the handle it was issued under and the callable.
pub(crate) struct RegisteredListener {
    pub(crate) id: ListenerId,
    pub(crate) callback: Listener,
}

impl fmt::Debug for RegisteredListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredListener")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Priority-ordered listener registry and synchronous dispatcher.
///
/// Listeners are stored per event name in a map keyed by priority, so the
/// ascending invocation order falls out of iteration and an occupied
/// priority is a plain key lookup. Registration and removal take
/// `&mut self`; dispatch takes `&self` and never touches the registry.
///
/// The dispatcher carries no synchronization of its own. Registration and
/// dispatch from several threads need a caller-supplied lock around the
/// whole value.
pub struct EventDispatcher {
    listeners: HashMap<String, BTreeMap<Priority, RegisteredListener>>,
    next_listener_id: ListenerId,
}

// Manual Debug implementation for EventDispatcher
impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listener_count: usize = self.listeners.values().map(|entry| entry.len()).sum();
        f.debug_struct("EventDispatcher")
            .field("event_name_count", &self.listeners.len())
            .field("listener_count", &listener_count)
            .field("next_listener_id", &self.next_listener_id)
            .finish()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            next_listener_id: 1,
        }
    }

    /// Register `listener` for `event` with an auto-assigned priority.
    ///
    /// The assigned priority is one past the highest currently registered
    /// for that name, or 0 when the name has no listeners. Returns the
    /// handle to remove this registration later.
    pub fn add_listener(
        &mut self,
        event: impl Into<EventRef>,
        listener: Listener,
    ) -> Result<ListenerId, EventSystemError> {
        let event_name = event.into().resolve()?;
        let priority = self.next_priority(&event_name)?;
        Ok(self.insert(event_name, priority, listener))
    }

    /// Register `listener` for `event` at an explicit priority.
    ///
    /// Fails with [`EventSystemError::PriorityConflict`] when the priority
    /// is already occupied for that name, leaving the registry unchanged.
    pub fn add_listener_at(
        &mut self,
        event: impl Into<EventRef>,
        listener: Listener,
        priority: Priority,
    ) -> Result<ListenerId, EventSystemError> {
        let event_name = event.into().resolve()?;
        if let Some(entry) = self.listeners.get(&event_name) {
            if entry.contains_key(&priority) {
                return Err(EventSystemError::PriorityConflict {
                    event_name,
                    priority,
                });
            }
        }
        Ok(self.insert(event_name, priority, listener))
    }

    /// Remove the registration holding `id` for `event`.
    ///
    /// Returns whether a listener was removed; an unknown name or id is a
    /// no-op. The name's entry is dropped when its last listener goes, so
    /// auto-assigned numbering restarts at 0 for a name emptied this way.
    pub fn remove_listener(
        &mut self,
        event: impl Into<EventRef>,
        id: ListenerId,
    ) -> Result<bool, EventSystemError> {
        let event_name = event.into().resolve()?;
        let Some(entry) = self.listeners.get_mut(&event_name) else {
            return Ok(false);
        };
        let Some(priority) = entry
            .iter()
            .find(|(_, registered)| registered.id == id)
            .map(|(priority, _)| *priority)
        else {
            return Ok(false);
        };
        entry.remove(&priority);
        if entry.is_empty() {
            self.listeners.remove(&event_name);
        }
        log::debug!(
            "Removed listener {} for '{}' (priority {})",
            id,
            event_name,
            priority
        );
        Ok(true)
    }

    /// Remove every listener registered for `event`.
    ///
    /// Returns whether the name had any listeners to drop.
    pub fn remove_listeners(&mut self, event: impl Into<EventRef>) -> Result<bool, EventSystemError> {
        let event_name = event.into().resolve()?;
        let removed = self.listeners.remove(&event_name);
        if let Some(entry) = &removed {
            log::debug!("Removed all {} listener(s) for '{}'", entry.len(), event_name);
        }
        Ok(removed.is_some())
    }

    /// Dispatch `event` to every listener registered for its name, in
    /// ascending priority order, and hand the event back.
    ///
    /// A raw name builds a fresh [`Event`] carrying it. Every listener
    /// receives the same event mutably, so the returned value carries all
    /// listener-made writes. A name with no listeners, or an event with no
    /// name, performs no calls and returns the event unchanged.
    ///
    /// A panicking listener unwinds through this call; listeners after it
    /// do not run, and listeners before it are not rolled back.
    pub fn dispatch(&self, event: impl Into<Event>) -> Event {
        let mut event = event.into();
        let Some(entry) = event.name().and_then(|name| self.listeners.get(name)) else {
            return event;
        };
        log::trace!(
            "Dispatching '{}' to {} listener(s)",
            event.name().unwrap_or_default(),
            entry.len()
        );
        for registered in entry.values() {
            (registered.callback)(&mut event);
        }
        event
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: impl Into<EventRef>) -> usize {
        match event.into() {
            EventRef::Name(name) => self.listeners.get(&name).map_or(0, BTreeMap::len),
            EventRef::Unnamed => 0,
        }
    }

    /// Whether any listener is registered for `event`
    pub fn has_listeners(&self, event: impl Into<EventRef>) -> bool {
        self.listener_count(event) > 0
    }

    /// Occupied priorities for `event`, ascending
    pub fn priorities(&self, event: impl Into<EventRef>) -> Vec<Priority> {
        match event.into() {
            EventRef::Name(name) => self
                .listeners
                .get(&name)
                .map(|entry| entry.keys().copied().collect())
                .unwrap_or_default(),
            EventRef::Unnamed => Vec::new(),
        }
    }

    /// Names with at least one registered listener, sorted
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.listeners.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn next_priority(&self, event_name: &str) -> Result<Priority, EventSystemError> {
        match self
            .listeners
            .get(event_name)
            .and_then(|entry| entry.keys().next_back())
        {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| EventSystemError::PriorityExhausted {
                    event_name: event_name.to_string(),
                }),
            None => Ok(0),
        }
    }

    fn insert(&mut self, event_name: String, priority: Priority, callback: Listener) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        log::debug!(
            "Registered listener {} for '{}' at priority {}",
            id,
            event_name,
            priority
        );
        self.listeners
            .entry(event_name)
            .or_default()
            .insert(priority, RegisteredListener { id, callback });
        id
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

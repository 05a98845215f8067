//! Batch-registration adapter translating a subscriber's declaration into
//! individual registry calls. The adapter performs no storage of its own;
//! the registry ends up holding the bound callables, never the subscriber.

use crate::event::dispatcher::EventDispatcher;
use crate::event::{Listener, ListenerId};
use crate::subscriber::error::SubscriberError;
use crate::subscriber::{HandlerSpec, Subscriber};

impl EventDispatcher {
    /// Register every handler `subscriber` declares.
    ///
    /// Entries are processed in declaration order and fail fast: listeners
    /// registered by earlier entries of the same call stay registered when
    /// a later entry is rejected. Returns the handles it registered.
    pub fn add_subscriber(
        &mut self,
        subscriber: &dyn Subscriber,
    ) -> Result<Vec<ListenerId>, SubscriberError> {
        let subscriptions = subscriber.subscribed_events()?;
        let mut ids = Vec::new();
        for (event_name, spec) in subscriptions.iter() {
            match spec {
                HandlerSpec::Handler(handler) => {
                    let listener = resolve(subscriber, event_name, handler)?;
                    ids.push(self.add_listener(event_name, listener)?);
                }
                HandlerSpec::HandlerAt(handler, priority) => {
                    let listener = resolve(subscriber, event_name, handler)?;
                    ids.push(self.add_listener_at(event_name, listener, *priority)?);
                }
                HandlerSpec::Each(bindings) => {
                    if bindings.is_empty() {
                        return Err(SubscriberError::InvalidDeclaration {
                            event_name: event_name.to_string(),
                        });
                    }
                    for binding in bindings {
                        let listener = resolve(subscriber, event_name, &binding.handler)?;
                        let id = match binding.priority {
                            Some(priority) => {
                                self.add_listener_at(event_name, listener, priority)?
                            }
                            None => self.add_listener(event_name, listener)?,
                        };
                        ids.push(id);
                    }
                }
            }
        }
        log::debug!("Registered {} listener(s) from subscriber", ids.len());
        Ok(ids)
    }
}

fn resolve(
    subscriber: &dyn Subscriber,
    event_name: &str,
    handler: &str,
) -> Result<Listener, SubscriberError> {
    subscriber
        .handler(handler)
        .ok_or_else(|| SubscriberError::UnknownHandler {
            event_name: event_name.to_string(),
            handler: handler.to_string(),
        })
}

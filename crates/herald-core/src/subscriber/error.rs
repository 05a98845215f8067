//! # Herald Core Subscriber Errors
//!
//! Defines error types specific to subscriber batch registration.
//!
//! This module includes [`SubscriberError`], covering malformed
//! subscription declarations, handler names a subscriber cannot resolve,
//! and registry errors surfacing through the adapter.
use crate::event::error::EventSystemError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error("subscriber does not implement subscribed_events()")]
    Unimplemented,

    #[error("invalid subscription declaration for event \"{event_name}\": empty handler list")]
    InvalidDeclaration { event_name: String },

    #[error("subscriber declares unknown handler \"{handler}\" for event \"{event_name}\"")]
    UnknownHandler {
        event_name: String,
        handler: String,
    },

    #[error("event system error: {0}")]
    Event(#[from] EventSystemError),
}

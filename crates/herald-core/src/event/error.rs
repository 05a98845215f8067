//! # Herald Core Event System Errors
//!
//! Defines error types specific to the Herald event system.
//!
//! This module includes [`EventSystemError`], the primary enum encompassing
//! errors that can occur while resolving event references or mutating the
//! listener registry, such as priority conflicts between registrations.
use crate::event::Priority;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventSystemError {
    #[error("event reference does not resolve to a name")]
    InvalidEventReference,

    #[error("the event \"{event_name}\" already has a listener with priority {priority}")]
    PriorityConflict {
        event_name: String,
        priority: Priority,
    },

    #[error("auto-assignable priorities for event \"{event_name}\" are exhausted")]
    PriorityExhausted { event_name: String },
}

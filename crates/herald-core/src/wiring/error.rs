//! # Herald Core Wiring Errors
//!
//! Defines error types specific to startup wiring tables and manifests.
//!
//! This module includes [`WiringError`], covering manifest parse failures,
//! shape problems caught by validation, handler names missing from the
//! composition root's handler map, and registry errors surfacing while a
//! table or manifest is applied.
use crate::event::error::EventSystemError;
use crate::event::Priority;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("wiring manifest binding {index} has an empty event name")]
    EmptyEventName { index: usize },

    #[error("wiring manifest binding {index} has an empty handler name")]
    EmptyHandlerName { index: usize },

    #[error("wiring manifest binds event \"{event_name}\" twice at priority {priority}")]
    DuplicateBinding {
        event_name: String,
        priority: Priority,
    },

    #[error("wiring manifest references unknown handler \"{handler}\"")]
    UnknownHandler { handler: String },

    #[error("failed to parse {format} wiring manifest: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("event system error: {0}")]
    Event(#[from] EventSystemError),
}

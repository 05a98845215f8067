//! # Herald Core Errors
//!
//! Defines the top-level error type for the Herald mediator.
//!
//! This module includes [`Error`], aggregating the typed errors of the
//! event, subscriber, and wiring subsystems, and the crate-wide
//! [`Result`] alias. Subsystem errors convert in via `From`, so callers
//! mixing subsystems can use `?` against a single error type.
use std::result::Result as StdResult;

use crate::event::error::EventSystemError;
use crate::subscriber::error::SubscriberError;
use crate::wiring::error::WiringError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Specific, typed event system error
    #[error("Event system error: {0}")]
    EventSystem(#[from] EventSystemError),

    /// Specific, typed subscriber registration error
    #[error("Subscriber error: {0}")]
    Subscriber(#[from] SubscriberError),

    /// Specific, typed wiring error
    #[error("Wiring error: {0}")]
    Wiring(#[from] WiringError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

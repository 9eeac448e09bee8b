//! Error types for event handling.

use thiserror::Error;
use wherehows_urn::UrnError;

/// Errors that can occur when handling dataset events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event record could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The identifier could not be turned into a dataset URN.
    #[error(transparent)]
    Urn(#[from] UrnError),
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Serialization(err.to_string())
    }
}

//! Error types for dataset URN encoding and decoding.

use thiserror::Error;

/// Errors that can occur when encoding or decoding dataset URNs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrnError {
    /// A required input was absent.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// The input does not have the `scheme:///path` shape.
    #[error("not a well-formed dataset URN '{urn}': {reason}")]
    Malformed { urn: String, reason: &'static str },
}

impl UrnError {
    /// Returns true if this error indicates a required input was absent.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, UrnError::MissingField { .. })
    }

    /// Returns true if this error indicates the URN had the wrong shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, UrnError::Malformed { .. })
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        UrnError::MissingField { field }
    }
}

//! # wherehows-events
//!
//! Dataset identifier records as they arrive on metadata events.
//!
//! A [`DatasetIdentifier`] names a dataset by origin, platform URN, and
//! platform-native name. It implements
//! [`DatasetIdentity`](wherehows_urn::DatasetIdentity), so it can be encoded
//! directly into a canonical [`DatasetUrn`](wherehows_urn::DatasetUrn).

mod error;
mod identifier;

pub use error::EventError;
pub use identifier::{DataOrigin, DatasetIdentifier};

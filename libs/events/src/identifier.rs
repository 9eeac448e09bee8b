//! The dataset identifier record carried by metadata events.

use serde::{Deserialize, Serialize};
use wherehows_urn::{DatasetIdentity, DatasetUrn};

use crate::error::EventError;

/// Deployment environment a dataset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataOrigin {
    Dev,
    Ei,
    #[default]
    Prod,
    Corp,
}

impl std::fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DataOrigin::Dev => "dev",
            DataOrigin::Ei => "ei",
            DataOrigin::Prod => "prod",
            DataOrigin::Corp => "corp",
        };
        write!(f, "{}", s)
    }
}

/// Identifies a dataset by origin, platform, and platform-native name.
///
/// Upstream producers may omit the platform URN or native name; encoding
/// such a record fails with a missing-field error rather than at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DatasetIdentifier {
    /// Environment the dataset was observed in.
    pub data_origin: DataOrigin,

    /// Platform URN, e.g. `urn:li:dataPlatform:hdfs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_platform_urn: Option<String>,

    /// Native name, e.g. `schema.table` or `/data/abc/test`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,
}

impl DatasetIdentifier {
    /// Creates an identifier with no platform or name set.
    pub fn new(data_origin: DataOrigin) -> Self {
        Self {
            data_origin,
            ..Self::default()
        }
    }

    /// Sets the platform URN.
    pub fn with_platform_urn(mut self, urn: impl Into<String>) -> Self {
        self.data_platform_urn = Some(urn.into());
        self
    }

    /// Sets the native name.
    pub fn with_native_name(mut self, name: impl Into<String>) -> Self {
        self.native_name = Some(name.into());
        self
    }

    /// Decodes an identifier from its JSON event form.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes an identifier from an already-parsed event payload.
    pub fn from_value(value: serde_json::Value) -> Result<Self, EventError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encodes this identifier into its canonical dataset URN.
    pub fn to_dataset_urn(&self) -> Result<DatasetUrn, EventError> {
        Ok(wherehows_urn::encode(self)?)
    }
}

impl DatasetIdentity for DatasetIdentifier {
    fn platform_urn(&self) -> Option<&str> {
        self.data_platform_urn.as_deref()
    }

    fn native_name(&self) -> Option<&str> {
        self.native_name.as_deref()
    }
}

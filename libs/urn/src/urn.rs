//! The canonical dataset URN type.

use crate::decode::{decode_path, split_scheme, DecodedUrn, SCHEME_SEPARATOR};
use crate::error::UrnError;

/// A canonical WhereHows dataset URN of the form `scheme:///path`.
///
/// Parsing only checks for the `:///` separator; scheme and path may be
/// empty. The string form is what gets persisted and used as a key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetUrn {
    value: String,
    scheme_len: usize,
}

impl DatasetUrn {
    /// Parses a URN from a string.
    pub fn parse(s: &str) -> Result<Self, UrnError> {
        let (scheme, _) = split_scheme(s)?;
        Ok(Self {
            value: s.to_string(),
            scheme_len: scheme.len(),
        })
    }

    /// Joins a scheme and a path. The scheme must not contain `:///`.
    pub(crate) fn from_parts(scheme: &str, path: &str) -> Self {
        let mut value = String::with_capacity(scheme.len() + SCHEME_SEPARATOR.len() + path.len());
        value.push_str(scheme);
        value.push_str(SCHEME_SEPARATOR);
        value.push_str(path);
        Self {
            value,
            scheme_len: scheme.len(),
        }
    }

    /// The platform token before `:///`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.value[..self.scheme_len]
    }

    /// Everything after `:///`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.value[self.scheme_len + SCHEME_SEPARATOR.len()..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Decodes into scheme, parent paths, and leaf name.
    #[must_use]
    pub fn decode(&self) -> DecodedUrn {
        decode_path(self.scheme(), self.path())
    }
}

impl std::fmt::Display for DatasetUrn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::str::FromStr for DatasetUrn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DatasetUrn {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<DatasetUrn> for String {
    fn from(urn: DatasetUrn) -> Self {
        urn.value
    }
}

impl serde::Serialize for DatasetUrn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> serde::Deserialize<'de> for DatasetUrn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

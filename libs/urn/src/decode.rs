//! Dataset URN decoding.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::UrnError;

/// Separator between the scheme and the path of a dataset URN.
pub const SCHEME_SEPARATOR: &str = ":///";

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// The components of a decoded dataset URN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedUrn {
    /// Platform token, e.g. `hdfs`.
    pub scheme: String,
    /// Path of the grandparent container.
    pub parent_path: String,
    /// Path of the immediate parent container.
    pub full_parent_path: String,
    /// Leaf dataset name.
    pub name: String,
}

impl DecodedUrn {
    /// Returns `[scheme, parent_path, full_parent_path, name]`.
    #[must_use]
    pub fn into_parts(self) -> [String; 4] {
        [self.scheme, self.parent_path, self.full_parent_path, self.name]
    }
}

impl From<DecodedUrn> for [String; 4] {
    fn from(decoded: DecodedUrn) -> Self {
        decoded.into_parts()
    }
}

/// Decodes a canonical dataset URN into its components.
///
/// `scheme:///s0/s1/.../name` yields the scheme, the parent path, the full
/// parent path, and the leaf name. The parent paths depend on the number of
/// directory segments before the name:
///
/// | depth | parent_path      | full_parent_path  |
/// |-------|------------------|-------------------|
/// | 0     | `""`             | `""`              |
/// | 1     | `"/s0"`          | `"s0"`            |
/// | n ≥ 2 | `"/s0/.../sn-2"` | `"/s0/.../sn-1"`  |
///
/// At depth 1 the full parent path is a bare group token with no leading
/// slash. Groupings downstream are keyed on these exact strings, so the
/// three cases are kept separate.
///
/// Fails with [`UrnError::MissingField`] on empty input and
/// [`UrnError::Malformed`] when the `:///` separator is missing.
pub fn decode(urn: &str) -> Result<DecodedUrn, UrnError> {
    let (scheme, path) = split_scheme(urn)?;
    Ok(decode_path(scheme, path))
}

/// Splits a URN at the first `:///`.
pub(crate) fn split_scheme(urn: &str) -> Result<(&str, &str), UrnError> {
    if urn.is_empty() {
        return Err(UrnError::missing("urn"));
    }

    urn.split_once(SCHEME_SEPARATOR).ok_or_else(|| {
        debug!(urn, "Rejecting dataset URN without scheme separator");
        UrnError::Malformed {
            urn: urn.to_string(),
            reason: "missing ':///' separator",
        }
    })
}

pub(crate) fn decode_path(scheme: &str, path: &str) -> DecodedUrn {
    // split always yields at least one segment
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    let depth = segments.len() - 1;
    let name = segments[depth];

    let (parent_path, full_parent_path) = match depth {
        0 => (String::new(), String::new()),
        1 => (format!("/{}", segments[0]), segments[0].to_string()),
        n => (
            format!("/{}", segments[..n - 1].join("/")),
            format!("/{}", segments[..n].join("/")),
        ),
    };

    trace!(scheme, depth, name, "Decoded dataset URN");

    DecodedUrn {
        scheme: scheme.to_string(),
        parent_path,
        full_parent_path,
        name: name.to_string(),
    }
}

//! Entity extraction from colon-delimited URNs.
//!
//! Upstream identifiers such as `urn:li:dataPlatform:oracle` name their entity
//! in the final segment; everything before the last `:` is ignored.

/// Separator between URN segments.
pub const ENTITY_SEPARATOR: char = ':';

/// Returns the substring after the last `:`, or the whole string if there is none.
#[must_use]
pub fn urn_entity(urn: &str) -> &str {
    match urn.rsplit_once(ENTITY_SEPARATOR) {
        Some((_, entity)) => entity,
        None => urn,
    }
}

/// Extracts the trailing entity from an optional URN.
///
/// An absent URN yields `None`; this is not an error.
#[must_use]
pub fn extract_entity(urn: Option<&str>) -> Option<&str> {
    urn.map(urn_entity)
}

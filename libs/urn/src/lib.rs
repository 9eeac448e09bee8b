//! # wherehows-urn
//!
//! Canonical dataset URNs for WhereHows metadata.
//!
//! ## URN Format
//!
//! Every dataset, whatever its platform, is keyed by a single string of the
//! form `{scheme}:///{path}`:
//!
//! - `oracle:///orc/test` (native name `orc.test`)
//! - `hdfs:///data/abc/test` (native name `/data/abc/test`)
//! - `kafka:///test` (native name `test`)
//!
//! The scheme is the last segment of the upstream platform URN
//! (`urn:li:dataPlatform:oracle` → `oracle`). Dots in the native name become
//! slashes and one leading slash is dropped.
//!
//! ## Decoding
//!
//! [`decode`] recovers `[scheme, parent_path, full_parent_path, name]` for
//! display and grouping. The parent paths depend on directory depth; see
//! [`decode()`] for the exact table.
//!
//! All operations are pure functions over borrowed strings.

mod decode;
mod encode;
mod entity;
mod error;
mod macros;
mod strings;
mod urn;

pub use decode::{decode, DecodedUrn, PATH_SEPARATOR, SCHEME_SEPARATOR};
pub use encode::{encode, encode_parts, DatasetIdentity, NATIVE_NAME_SEPARATOR};
pub use entity::{extract_entity, urn_entity, ENTITY_SEPARATOR};
pub use error::UrnError;
pub use strings::{coalesce, to_string_or_none, trim_to_length};
pub use urn::DatasetUrn;

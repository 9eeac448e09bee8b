//! Dataset URN encoding.
//!
//! Dot-separated native names (`schema.table`) and slash-separated ones
//! (`/data/abc/test`) are unified into one slash-delimited path behind the
//! platform scheme: `oracle:///orc/test`, `hdfs:///data/abc/test`.

use tracing::trace;

use crate::decode::PATH_SEPARATOR;
use crate::entity::{extract_entity, urn_entity};
use crate::error::UrnError;
use crate::urn::DatasetUrn;

/// Separator used by dotted native names.
pub const NATIVE_NAME_SEPARATOR: char = '.';

/// The fields the encoder reads from a dataset identifier record.
pub trait DatasetIdentity {
    /// Colon-delimited platform URN, e.g. `urn:li:dataPlatform:oracle`.
    fn platform_urn(&self) -> Option<&str>;

    /// Platform-native dataset name, dotted or slash-delimited.
    fn native_name(&self) -> Option<&str>;
}

impl<T: DatasetIdentity + ?Sized> DatasetIdentity for &T {
    fn platform_urn(&self) -> Option<&str> {
        (**self).platform_urn()
    }

    fn native_name(&self) -> Option<&str> {
        (**self).native_name()
    }
}

/// Encodes a dataset identifier into its canonical URN.
pub fn encode<I: DatasetIdentity + ?Sized>(identifier: &I) -> Result<DatasetUrn, UrnError> {
    let scheme = extract_entity(identifier.platform_urn())
        .ok_or_else(|| UrnError::missing("platform_urn"))?;
    let native_name = identifier
        .native_name()
        .ok_or_else(|| UrnError::missing("native_name"))?;

    let urn = DatasetUrn::from_parts(scheme, &native_path(native_name));
    trace!(urn = %urn, "Encoded dataset URN");
    Ok(urn)
}

/// Encodes a platform URN and native name directly into the URN string.
#[must_use]
pub fn encode_parts(platform_urn: &str, native_name: &str) -> String {
    DatasetUrn::from_parts(urn_entity(platform_urn), &native_path(native_name)).into_string()
}

/// Replaces every `.` with `/` and drops at most one leading `/`.
fn native_path(native_name: &str) -> String {
    let mut path = native_name.replace(NATIVE_NAME_SEPARATOR, "/");
    if path.starts_with(PATH_SEPARATOR) {
        path.remove(0);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use proptest::prelude::*;
    use rstest::rstest;

    struct Identifier {
        platform_urn: Option<&'static str>,
        native_name: Option<&'static str>,
    }

    impl DatasetIdentity for Identifier {
        fn platform_urn(&self) -> Option<&str> {
            self.platform_urn
        }

        fn native_name(&self) -> Option<&str> {
            self.native_name
        }
    }

    fn identifier(platform_urn: &'static str, native_name: &'static str) -> Identifier {
        Identifier {
            platform_urn: Some(platform_urn),
            native_name: Some(native_name),
        }
    }

    #[rstest]
    #[case("urn:li:dataPlatform:oracle", "orc.test", "oracle:///orc/test")]
    #[case("urn:li:dataPlatform:teradata", "tera.test", "teradata:///tera/test")]
    #[case("urn:li:dataPlatform:hdfs", "/data/abc/test", "hdfs:///data/abc/test")]
    #[case("urn:li:dataPlatform:kafka", "test", "kafka:///test")]
    #[case("urn:li:dataPlatform:hdfs", "//data/test", "hdfs:////data/test")]
    #[case("urn:li:dataPlatform:hive", ".db.table", "hive:///db/table")]
    #[case("hdfs", "/data/abc/v1.2", "hdfs:///data/abc/v1/2")]
    fn test_encode(
        #[case] platform_urn: &'static str,
        #[case] native_name: &'static str,
        #[case] expected: &str,
    ) {
        let urn = encode(&identifier(platform_urn, native_name)).unwrap();
        assert_eq!(urn.as_str(), expected);
        assert_eq!(encode_parts(platform_urn, native_name), expected);
    }

    #[test]
    fn test_encode_missing_platform_urn() {
        let id = Identifier {
            platform_urn: None,
            native_name: Some("orc.test"),
        };
        assert_eq!(
            encode(&id).unwrap_err(),
            UrnError::MissingField {
                field: "platform_urn"
            }
        );
    }

    #[test]
    fn test_encode_missing_native_name() {
        let id = Identifier {
            platform_urn: Some("urn:li:dataPlatform:oracle"),
            native_name: None,
        };
        assert_eq!(
            encode(&id).unwrap_err(),
            UrnError::MissingField {
                field: "native_name"
            }
        );
    }

    #[test]
    fn test_encode_empty_native_name_still_parses() {
        let urn = encode(&identifier("urn:li:dataPlatform:kafka", "")).unwrap();
        assert_eq!(urn.as_str(), "kafka:///");
        assert_eq!(DatasetUrn::parse(urn.as_str()).unwrap(), urn);
    }

    proptest! {
        #[test]
        fn roundtrip_preserves_scheme_and_name(
            scheme in "[a-z][a-z0-9]{0,9}",
            dirs in prop::collection::vec("[a-z0-9_]{1,8}", 0..6),
            name in "[a-z0-9_]{1,8}",
            dotted in any::<bool>(),
        ) {
            let mut segments = dirs.clone();
            segments.push(name.clone());
            let native_name = if dotted {
                segments.join(".")
            } else {
                format!("/{}", segments.join("/"))
            };
            let platform_urn = format!("urn:li:dataPlatform:{scheme}");

            let urn = encode_parts(&platform_urn, &native_name);
            let decoded = decode(&urn).unwrap();

            prop_assert_eq!(&decoded.scheme, &scheme);
            prop_assert_eq!(&decoded.name, &name);
            if dirs.len() >= 2 {
                prop_assert_eq!(decoded.full_parent_path, format!("/{}", dirs.join("/")));
            }
        }
    }
}

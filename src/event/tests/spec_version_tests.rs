//! Unit tests for spec versions.

use crate::event::{domain::SpecVersion, error::ParseSpecVersionError};
use rstest::rstest;

#[rstest]
#[case("1.0", SpecVersion::V10)]
#[case("0.3", SpecVersion::V03)]
fn parses_known_versions(#[case] input: &str, #[case] expected: SpecVersion) {
    assert_eq!(SpecVersion::try_from(input), Ok(expected));
}

#[rstest]
#[case("2.0")]
#[case("")]
#[case("v1")]
#[case(" 1.0")]
#[case("1.0 ")]
fn rejects_unknown_versions(#[case] input: &str) {
    assert_eq!(
        SpecVersion::try_from(input),
        Err(ParseSpecVersionError(input.to_owned()))
    );
}

#[rstest]
fn default_is_v1() {
    assert_eq!(SpecVersion::default(), SpecVersion::V10);
}

#[rstest]
#[case(SpecVersion::V10, "dataschema")]
#[case(SpecVersion::V03, "schemaurl")]
fn schema_attribute_name(#[case] version: SpecVersion, #[case] expected: &str) {
    assert_eq!(version.data_schema_attribute(), expected);
    assert!(version.is_attribute(expected));
}

#[rstest]
fn display_matches_wire_form() {
    assert_eq!(SpecVersion::V03.to_string(), "0.3");
    assert_eq!(SpecVersion::V10.to_string(), "1.0");
}

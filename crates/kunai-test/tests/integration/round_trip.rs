//! Tests for normalization and serializer round trips across crates.

use kunai_test::component::rfc::rfc::vcard::{import, serialize_all};

use super::helpers::*;

/// ## Summary
/// Test that normalized output imports to the same records.
#[test_log::test]
fn normalized_output_reimports_identically() {
    let original = import(&blob(5, &[2]));
    let run = run_normalize(&blob(5, &[2]));
    let reimported = import(&run.output);

    assert!(reimported.is_clean());
    assert_eq!(original.records, reimported.records);
}

/// ## Summary
/// Test that normalizing twice changes nothing.
#[test_log::test]
fn normalize_is_idempotent() {
    let input = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Doe;John;;;\r\n\
FN:John Doe\r\n\
ORG:Example\\, Inc.;Sales;\r\n\
TEL;HOME;VOICE:555-1234\r\n\
EMAIL;TYPE=\"internet,pref\":john@example.com\r\n\
NOTE:A note long enough to need folding once it is written back out by the serializer\r\n\
END:VCARD\r\n";

    let once = run_normalize(input).output;
    let twice = run_normalize(&once).output;

    assert_eq!(once, twice);
    assert!(once.contains("TEL;TYPE=HOME;TYPE=VOICE:555-1234\r\n"));
    assert!(once.contains("ORG:Example\\, Inc.;Sales\r\n"));
    assert!(once.contains("\r\n "));
}

/// ## Summary
/// Test that the serializer output matches what `normalize` writes.
#[test_log::test]
fn serialize_all_matches_normalize() {
    let input = blob(3, &[]);
    let outcome = import(&input);

    assert_eq!(serialize_all(&outcome.records), run_normalize(&input).output);
}

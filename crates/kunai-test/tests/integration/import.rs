//! Tests for bulk import through the command-line operations.
//!
//! Verifies splitting, per-card fault isolation and JSON output.

use kunai_test::component::app::import::Summary;
use kunai_test::component::rfc::rfc::vcard::{
    BatchOutcome, CardSource, ParseErrorKind, PropertyName, import, parse_batch,
};

use super::helpers::*;

/// ## Summary
/// Test that one bad card among many is skipped and the rest are kept in order.
#[test_log::test]
fn bad_cards_are_isolated() {
    let outcome: BatchOutcome = import(&blob(10, &[3, 7]));

    assert_eq!(outcome.total(), 10);
    assert_eq!(outcome.records.len(), 8);

    let uids: Vec<_> = outcome.records.iter().filter_map(|r| r.uid()).collect();
    assert_eq!(
        uids,
        vec![
            "contact-0",
            "contact-1",
            "contact-2",
            "contact-4",
            "contact-5",
            "contact-6",
            "contact-8",
            "contact-9"
        ]
    );

    let rejected: Vec<_> = outcome.rejected.iter().map(|r| r.index).collect();
    assert_eq!(rejected, vec![3, 7]);
    assert!(
        outcome
            .rejected
            .iter()
            .all(|r| r.error.kind == ParseErrorKind::MissingValue)
    );
}

/// ## Summary
/// Test that every card of a blob is listed by `split`, with its resource name.
#[test_log::test]
fn split_lists_resource_names() {
    let run = run_split(&blob(3, &[1]));

    assert_eq!(
        run.output,
        "0\tcontact-0.vcf\t7\n1\t-\t5\n2\tcontact-2.vcf\t7\n"
    );
}

/// ## Summary
/// Test that `parse` emits a JSON array of the surviving records.
#[test_log::test]
fn parse_emits_json_records() {
    let run = run_parse(&blob(4, &[0]));

    assert_eq!(
        run.summary,
        Some(Summary {
            parsed: 3,
            rejected: 1
        })
    );

    let value: serde_json::Value = serde_json::from_str(&run.output).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first["href"], "");
    assert_eq!(first["etag"], "");
    assert_eq!(first["properties"]["UID"][0]["value"], "contact-1");
    assert_eq!(first["properties"]["N"][0]["values"]["given_names"], "Contact 1");
    assert_eq!(first["properties"]["TEL"][0]["values"]["number"], "+1 555 0001");
    assert_eq!(first["properties"]["TEL"][0]["params"][0]["value"], "cell");
}

/// ## Summary
/// Test that cards fetched from a server keep their href and etag.
#[test_log::test]
fn fetched_cards_keep_locators() {
    let outcome = parse_batch(vec![
        CardSource::new("/addressbooks/me/a.vcf", "\"1-a\"", good_card(1)),
        CardSource::new("/addressbooks/me/b.vcf", "\"1-b\"", bad_card(2)),
        CardSource::new("/addressbooks/me/c.vcf", "\"1-c\"", good_card(3)),
    ]);

    assert_eq!(outcome.records[0].href, "/addressbooks/me/a.vcf");
    assert_eq!(outcome.records[1].etag, "\"1-c\"");
    assert_eq!(outcome.rejected[0].href, "/addressbooks/me/b.vcf");
    assert_eq!(
        outcome.records[1].first_text(&PropertyName::Fn),
        Some("Contact 3")
    );
}

/// ## Summary
/// Test that noise between and around cards is ignored.
#[test_log::test]
fn noise_outside_cards_is_ignored() {
    let blob = format!(
        "exported by some tool\r\n\r\n{}garbage line\r\n{}BEGIN:VCARD\r\nFN:unterminated\r\n",
        good_card(0),
        good_card(1)
    );
    let outcome = import(&blob);

    assert!(outcome.is_clean());
    assert_eq!(outcome.records.len(), 2);
}

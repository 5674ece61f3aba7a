#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building import blobs with a known mix of good and bad cards
//! - Running the command-line operations against an in-memory sink

use kunai_test::component::app::import::{self, Summary};
use kunai_test::component::rfc::rfc::vcard::Parser;

pub use tracing;

/// A well-formed card with a UID, full name and one phone number.
#[must_use]
pub fn good_card(n: usize) -> String {
    format!(
        "BEGIN:VCARD\r\n\
         VERSION:4.0\r\n\
         UID:contact-{n}\r\n\
         FN:Contact {n}\r\n\
         N:Number;Contact {n};;\r\n\
         TEL;TYPE=cell:+1 555 {n:04}\r\n\
         END:VCARD\r\n"
    )
}

/// A card with a truncated ADR line, which is always rejected.
#[must_use]
pub fn bad_card(n: usize) -> String {
    format!(
        "BEGIN:VCARD\r\n\
         VERSION:4.0\r\n\
         FN:Broken {n}\r\n\
         ADR;TYPE=home\r\n\
         END:VCARD\r\n"
    )
}

/// Builds a blob of `count` cards where every index in `bad` is a rejected
/// card.
#[must_use]
pub fn blob(count: usize, bad: &[usize]) -> String {
    (0..count)
        .map(|i| if bad.contains(&i) { bad_card(i) } else { good_card(i) })
        .collect()
}

/// Output and summary of one command run.
pub struct Run {
    pub output: String,
    pub summary: Option<Summary>,
}

/// ## Summary
/// Runs `kunai split` over a blob.
pub fn run_split(blob: &str) -> Run {
    let mut out = Vec::new();
    import::split(&Parser::new(), blob, &mut out).expect("split failed");
    Run {
        output: String::from_utf8(out).expect("split output is UTF-8"),
        summary: None,
    }
}

/// ## Summary
/// Runs `kunai parse` over a blob, compact JSON.
pub fn run_parse(blob: &str) -> Run {
    let mut out = Vec::new();
    let summary = import::parse(&Parser::new(), blob, false, &mut out).expect("parse failed");
    Run {
        output: String::from_utf8(out).expect("parse output is UTF-8"),
        summary: Some(summary),
    }
}

/// ## Summary
/// Runs `kunai normalize` over a blob.
pub fn run_normalize(blob: &str) -> Run {
    let mut out = Vec::new();
    let summary = import::normalize(&Parser::new(), blob, &mut out).expect("normalize failed");
    Run {
        output: String::from_utf8(out).expect("normalize output is UTF-8"),
        summary: Some(summary),
    }
}

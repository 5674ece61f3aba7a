//! The `split`, `parse` and `normalize` commands.
//!
//! Each command reads an import blob and writes its result to any
//! [`Write`] sink, so the binary and the tests drive the same code.

use std::io::Write;

use kunai_rfc::rfc::vcard::build::{serialize_all, to_json};
use kunai_rfc::rfc::vcard::{BatchOutcome, Parser, split_cards};

use crate::error::AppResult;

/// One line of `kunai split` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitEntry {
    /// Position of the card in the blob.
    pub index: usize,
    /// `<UID>.vcf`, when the card parses and has a UID.
    pub resource_name: Option<String>,
    /// Number of physical lines in the card, markers included.
    pub line_count: usize,
}

/// Counts reported after a `parse` or `normalize` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub parsed: usize,
    pub rejected: usize,
}

impl From<&BatchOutcome> for Summary {
    fn from(outcome: &BatchOutcome) -> Self {
        Self {
            parsed: outcome.records.len(),
            rejected: outcome.rejected.len(),
        }
    }
}

/// ## Summary
/// Splits a blob and describes each card found.
#[must_use]
#[tracing::instrument(skip_all, fields(input_len = blob.len()))]
pub fn list_cards(parser: &Parser, blob: &str) -> Vec<SplitEntry> {
    split_cards(blob)
        .iter()
        .enumerate()
        .map(|(index, card)| SplitEntry {
            index,
            resource_name: parser
                .parse(card, "", "")
                .ok()
                .and_then(|record| record.resource_name()),
            line_count: card.lines().count(),
        })
        .collect()
}

/// ## Summary
/// Writes one `<index>\t<resource name or ->\t<line count>` line per card.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn split(parser: &Parser, blob: &str, out: &mut impl Write) -> AppResult<usize> {
    let entries = list_cards(parser, blob);

    for entry in &entries {
        writeln!(
            out,
            "{}\t{}\t{}",
            entry.index,
            entry.resource_name.as_deref().unwrap_or("-"),
            entry.line_count
        )?;
    }

    Ok(entries.len())
}

/// ## Summary
/// Imports a blob and writes the parsed records as a JSON array.
///
/// ## Errors
/// Returns an error if encoding or writing fails.
pub fn parse(parser: &Parser, blob: &str, pretty: bool, out: &mut impl Write) -> AppResult<Summary> {
    let outcome = parser.import(blob);

    let json = to_json(&outcome.records, pretty)?;
    writeln!(out, "{json}")?;

    Ok(report(&outcome))
}

/// ## Summary
/// Imports a blob and writes every parsed card back as vCard text.
///
/// ## Errors
/// Returns an error if writing fails.
pub fn normalize(parser: &Parser, blob: &str, out: &mut impl Write) -> AppResult<Summary> {
    let outcome = parser.import(blob);

    out.write_all(serialize_all(&outcome.records).as_bytes())?;

    Ok(report(&outcome))
}

fn report(outcome: &BatchOutcome) -> Summary {
    let summary = Summary::from(outcome);
    if summary.rejected > 0 {
        tracing::warn!(
            parsed = summary.parsed,
            rejected = summary.rejected,
            "Import finished with rejected cards"
        );
    } else {
        tracing::info!(parsed = summary.parsed, "Import finished");
    }
    summary
}

//! Batch parsing with per-card fault isolation.

use serde::{Deserialize, Serialize};

use super::error::ParseError;
use super::parser::Parser;
use super::splitter::split_cards;
use crate::rfc::vcard::core::{ShapeProvider, VCardRecord};

/// One card as delivered by the transport: its locator, version token and
/// raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSource {
    pub href: String,
    pub etag: String,
    pub text: String,
}

impl CardSource {
    #[must_use]
    pub fn new(href: impl Into<String>, etag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            etag: etag.into(),
            text: text.into(),
        }
    }

    /// A card with no locator, as produced by splitting an import blob.
    #[must_use]
    pub fn unlocated(text: impl Into<String>) -> Self {
        Self::new("", "", text)
    }
}

/// A card that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCard {
    /// Position of the card in the input sequence.
    pub index: usize,
    pub href: String,
    pub error: ParseError,
}

/// The result of parsing a batch of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Parsed records, in input order.
    pub records: Vec<VCardRecord>,
    /// Cards that were skipped, in input order.
    pub rejected: Vec<RejectedCard>,
}

impl BatchOutcome {
    /// Total number of cards seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl<S: ShapeProvider> Parser<S> {
    /// Parses every source independently. A card that fails is recorded in
    /// [`BatchOutcome::rejected`] and does not stop the rest of the batch.
    #[must_use]
    #[tracing::instrument(skip_all)]
    pub fn parse_batch<I>(&self, sources: I) -> BatchOutcome
    where
        I: IntoIterator<Item = CardSource>,
    {
        let mut outcome = BatchOutcome::default();

        for (index, source) in sources.into_iter().enumerate() {
            match self.parse(&source.text, &source.href, &source.etag) {
                Ok(record) => outcome.records.push(record),
                Err(error) => {
                    tracing::warn!(index, href = %source.href, error = %error, "Skipping card");
                    outcome.rejected.push(RejectedCard {
                        index,
                        href: source.href,
                        error,
                    });
                }
            }
        }

        tracing::debug!(
            parsed = outcome.records.len(),
            rejected = outcome.rejected.len(),
            "Batch parsed"
        );

        outcome
    }

    /// Splits an import blob into cards and parses each one. Imported cards
    /// have an empty href and etag.
    #[must_use]
    pub fn import(&self, blob: &str) -> BatchOutcome {
        self.parse_batch(split_cards(blob).into_iter().map(CardSource::unlocated))
    }
}

/// Parses a batch with the standard schema. See [`Parser::parse_batch`].
#[must_use]
pub fn parse_batch<I>(sources: I) -> BatchOutcome
where
    I: IntoIterator<Item = CardSource>,
{
    Parser::new().parse_batch(sources)
}

/// Splits and parses an import blob with the standard schema. See
/// [`Parser::import`].
#[must_use]
pub fn import(blob: &str) -> BatchOutcome {
    Parser::new().import(blob)
}

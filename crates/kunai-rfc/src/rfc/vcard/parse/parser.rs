//! vCard card parser.
//!
//! Converts one card's text into a [`VCardRecord`]. Parsing is permissive:
//! unknown properties, lines without a colon and unbalanced quotes all
//! degrade to best-effort values. A card is only rejected when the record it
//! would produce is structurally invalid.

use kunai_core::config::{DEFAULT_QUOTE_RETRY_LIMIT, ParserConfig};

use super::error::{ParseError, ParseResult};
use super::lexer::{LogicalLine, parse_content_line, split_lines};
use super::values::{clean_up, split_structured};
use crate::rfc::vcard::core::{
    Occurrence, OccurrenceValue, PropertyName, Shape, ShapeProvider, StandardSchema,
    StructuredValue, VCardRecord,
};

/// Tunables for [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How many times the header/value boundary may be moved past a colon
    /// found inside a quoted parameter.
    pub quote_retry_limit: u8,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            quote_retry_limit: DEFAULT_QUOTE_RETRY_LIMIT,
        }
    }
}

impl From<&ParserConfig> for ParserOptions {
    fn from(config: &ParserConfig) -> Self {
        Self {
            quote_retry_limit: config.quote_retry_limit,
        }
    }
}

/// A vCard parser bound to a property schema.
#[derive(Debug, Clone, Default)]
pub struct Parser<S = StandardSchema> {
    schema: S,
    options: ParserOptions,
}

impl Parser<StandardSchema> {
    /// Creates a parser over the standard schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ShapeProvider> Parser<S> {
    /// Creates a parser over a custom schema.
    #[must_use]
    pub fn with_schema(schema: S) -> Self {
        Self {
            schema,
            options: ParserOptions::default(),
        }
    }

    /// Replaces the parser options.
    #[must_use]
    pub fn options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the schema this parser consults.
    #[must_use]
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Parses one card.
    ///
    /// `href` and `etag` are attached to the record as given.
    ///
    /// ## Errors
    /// Returns an error if a structured property has no value, or if the
    /// resulting record breaks a structural invariant.
    #[tracing::instrument(skip(self, card_text, etag), fields(input_len = card_text.len()))]
    pub fn parse(&self, card_text: &str, href: &str, etag: &str) -> ParseResult<VCardRecord> {
        let mut record = VCardRecord::with_location(href, etag);

        let lines = split_lines(card_text);
        tracing::trace!(count = lines.len(), "Split logical lines");

        for line in &lines {
            self.parse_line(line, &mut record)?;
        }

        record
            .validate(&self.schema)
            .map_err(|violation| ParseError::invalid_record(violation.to_string()))?;

        tracing::debug!(properties = record.len(), "vCard parsed");

        Ok(record)
    }

    fn parse_line(&self, line: &LogicalLine, record: &mut VCardRecord) -> ParseResult<()> {
        let content = parse_content_line(&line.text, self.options.quote_retry_limit);
        let name = PropertyName::parse(content.name);

        let value = match self.schema.shape_of(&name) {
            Shape::Structural => return Ok(()),
            Shape::Opaque => {
                if content.value.is_none() {
                    tracing::warn!(line = line.line, name = %name, "Property line has no value");
                }
                OccurrenceValue::Text(content.value.map(clean_value).unwrap_or_default())
            }
            Shape::Structured(shape) => {
                let raw = content
                    .value
                    .ok_or_else(|| ParseError::missing_value(line.line, name.as_str()))?;
                OccurrenceValue::Fields(StructuredValue::from_components(
                    shape,
                    split_structured(raw).into_iter().map(clean_value),
                ))
            }
        };

        record.push(
            name,
            Occurrence {
                params: content.params,
                value,
            },
        );

        Ok(())
    }
}

fn clean_value(raw: &str) -> String {
    clean_up(raw).trim().to_string()
}

/// Parses one card with the standard schema and default options.
///
/// ## Errors
/// See [`Parser::parse`].
pub fn parse(card_text: &str, href: &str, etag: &str) -> ParseResult<VCardRecord> {
    Parser::new().parse(card_text, href, etag)
}

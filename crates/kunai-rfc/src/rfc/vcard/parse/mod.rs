//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::core::PropertyName;
//! use kunai_rfc::rfc::vcard::parse::{import, parse};
//!
//! let record = parse("BEGIN:VCARD\nFN:Jane Doe\nN:Doe;Jane\nEND:VCARD\n", "/ab/1.vcf", "\"7\"").unwrap();
//! assert_eq!(record.formatted_name(), Some("Jane Doe"));
//! assert_eq!(record.first(&PropertyName::N).unwrap().field("given_names"), Some("Jane"));
//!
//! let outcome = import("BEGIN:VCARD\nFN:A\nEND:VCARD\nBEGIN:VCARD\nFN:B\nEND:VCARD\n");
//! assert_eq!(outcome.records.len(), 2);
//! ```
//!
//! ## Features
//!
//! - Splits bulk import text into cards
//! - Handles line folding/unfolding
//! - Tolerates quoted colons in parameters
//! - Maps structured values (N, ADR, TEL, ORG) to named fields
//! - Isolates bad cards in a batch

mod batch;
mod error;
mod lexer;
mod parser;
mod splitter;
mod values;

pub use batch::{BatchOutcome, CardSource, RejectedCard, import, parse_batch};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, LogicalLine, parse_content_line, split_lines};
pub use parser::{Parser, ParserOptions, parse};
pub use splitter::{BEGIN_VCARD, END_VCARD, split_cards};
pub use values::{clean_up, split_structured, split_unquoted, unquote};

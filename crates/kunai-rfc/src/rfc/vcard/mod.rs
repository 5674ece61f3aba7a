//! vCard implementation (RFC 6350 subset).
//!
//! This module provides types, parsing, and serialization for the vCard
//! bodies exchanged with a `CardDAV` (RFC 6352) address book.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let record = parse(input, "/contacts/john.vcf", "\"42\"").unwrap();
//! assert_eq!(record.formatted_name(), Some("John Doe"));
//! assert_eq!(record.etag, "\"42\"");
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::{Occurrence, PropertyName, VCardRecord, serialize};
//!
//! let mut record = VCardRecord::new();
//! record.push(PropertyName::Fn, Occurrence::text("Jane Doe"));
//! record.push(PropertyName::Email, Occurrence::text("jane@example.com"));
//!
//! let output = serialize(&record);
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Round-Trip Fidelity
//!
//! Serialized output parses back to the same properties. Property order is
//! the order of first appearance in the source; lines are never sorted.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCardRecord`, `Occurrence`, `PropertyName`, schema)
//! - [`parse`] - Splitting, parsing and batch import
//! - [`build`] - Serialization and line folding

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::{serialize, serialize_all};
pub use self::core::{
    Occurrence, OccurrenceValue, Parameter, Params, PropertyName, Shape, ShapeProvider,
    StandardSchema, StructuredValue, VCardRecord,
};
pub use parse::{
    BatchOutcome, CardSource, ParseError, ParseErrorKind, ParseResult, Parser, ParserOptions,
    import, parse, parse_batch, split_cards,
};

//! vCard serialization.
//!
//! - Escape: text and parameter value escaping
//! - Fold: content line folding at 75 octets
//! - Serializer: whole-card output
//! - JSON: records as JSON for tooling

mod escape;
mod fold;
mod json;
mod serializer;

pub use escape::{escape_param_value, escape_text, needs_quoting};
pub use fold::{CRLF, fold_line, push_folded};
pub use json::{from_json, to_json};
pub use serializer::{property_line, serialize, serialize_all, serialize_with};

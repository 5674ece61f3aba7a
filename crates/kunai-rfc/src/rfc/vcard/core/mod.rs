//! Core vCard types: property names, parameters, occurrences, records and
//! the property schema.

mod name;
mod occurrence;
mod parameter;
mod record;
pub mod schema;

pub use name::{ExtensionName, PropertyName, names};
pub use occurrence::{Occurrence, OccurrenceValue, StructuredValue};
pub use parameter::{Parameter, Params, types};
pub use record::{RecordViolation, VCardRecord};
pub use schema::{Shape, ShapeProvider, StandardSchema, StructuredShape};

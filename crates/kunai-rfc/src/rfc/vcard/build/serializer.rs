//! vCard serializer.
//!
//! Writes a [`VCardRecord`] back to vCard text. The output re-parses to the
//! same properties.

use super::escape::{escape_param_value, escape_text};
use super::fold::{CRLF, push_folded};
use crate::rfc::vcard::core::{
    Occurrence, OccurrenceValue, PropertyName, Shape, ShapeProvider, StandardSchema,
    StructuredValue, VCardRecord,
};
use crate::rfc::vcard::parse::{BEGIN_VCARD, END_VCARD};

/// Serializes one record with the standard schema.
#[must_use]
pub fn serialize(record: &VCardRecord) -> String {
    serialize_with(record, &StandardSchema)
}

/// Serializes several records back to back with the standard schema.
#[must_use]
pub fn serialize_all<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a VCardRecord>,
{
    let mut out = String::new();
    for record in records {
        write_record(&mut out, record, &StandardSchema);
    }
    out
}

/// Serializes one record, consulting `schema` for how many structured
/// fields must always be written.
#[must_use]
#[tracing::instrument(skip_all, fields(properties = record.len()))]
pub fn serialize_with(record: &VCardRecord, schema: &impl ShapeProvider) -> String {
    let mut out = String::new();
    write_record(&mut out, record, schema);
    out
}

fn write_record(out: &mut String, record: &VCardRecord, schema: &impl ShapeProvider) {
    out.push_str(BEGIN_VCARD);
    out.push_str(CRLF);

    for (name, occurrences) in record.iter() {
        let required = match schema.shape_of(name) {
            Shape::Structural => {
                tracing::warn!(name = %name, "Structural property in record, not written");
                continue;
            }
            Shape::Structured(shape) => Some(shape.required_fields),
            Shape::Opaque => None,
        };

        for occurrence in occurrences {
            push_folded(out, &property_line(name, occurrence, required));
        }
    }

    out.push_str(END_VCARD);
    out.push_str(CRLF);
}

/// Formats one occurrence as an unfolded content line.
///
/// `required_fields` is the number of leading structured fields that are
/// always written. With `None`, every field up to the last non-empty one is
/// written.
#[must_use]
pub fn property_line(
    name: &PropertyName,
    occurrence: &Occurrence,
    required_fields: Option<usize>,
) -> String {
    let mut line = String::from(name.as_str());

    for param in &occurrence.params {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        line.push_str(&escape_param_value(&param.value));
    }

    line.push(':');
    match &occurrence.value {
        OccurrenceValue::Text(text) => line.push_str(&escape_text(text)),
        OccurrenceValue::Fields(fields) => {
            line.push_str(&structured_text(fields, required_fields.unwrap_or(0)));
        }
    }

    line
}

/// Joins structured fields with `;`.
///
/// A field ending in a backslash gets a trailing space when another field
/// follows, so the backslash cannot escape the separator. Readers trim
/// fields, which drops the space again.
fn structured_text(fields: &StructuredValue, required_fields: usize) -> String {
    let values: Vec<&str> = fields.iter().map(|(_, value)| value).collect();
    let last_non_empty = values.iter().rposition(|v| !v.is_empty()).map_or(0, |i| i + 1);
    let keep = last_non_empty.max(required_fields).min(values.len());

    values[..keep]
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let mut field = escape_text(v);
            if i + 1 < keep && field.ends_with('\\') {
                field.push(' ');
            }
            field
        })
        .collect::<Vec<_>>()
        .join(";")
}

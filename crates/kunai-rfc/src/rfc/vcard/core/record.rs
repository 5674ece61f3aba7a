//! The parsed form of one card.

use indexmap::IndexMap;
use kunai_core::error::CoreError;
use kunai_core::util::resource_name::resource_file_name;
use serde::{Deserialize, Serialize};

use super::name::PropertyName;
use super::occurrence::{Occurrence, OccurrenceValue};
use super::schema::{Shape, ShapeProvider};
use crate::error::RfcResult;

/// A broken record invariant, reported by [`VCardRecord::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordViolation {
    /// A property name is empty.
    EmptyName,
    /// A property name contains a character that cannot be written back
    /// into a header.
    UnrepresentableName(String),
    /// A property is present with no occurrences.
    NoOccurrences(String),
    /// A structured property holds an opaque value, or fields that differ
    /// from the schema.
    ShapeMismatch(String),
    /// A structural marker was recorded as a property.
    StructuralProperty(String),
}

impl std::fmt::Display for RecordViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "empty property name"),
            Self::UnrepresentableName(name) => {
                write!(f, "property name {name:?} cannot be serialized")
            }
            Self::NoOccurrences(name) => write!(f, "property {name} has no occurrences"),
            Self::ShapeMismatch(name) => {
                write!(f, "property {name} does not match its schema shape")
            }
            Self::StructuralProperty(name) => {
                write!(f, "structural marker {name} recorded as a property")
            }
        }
    }
}

/// One parsed vCard.
///
/// `href` and `etag` are passed through from the transport untouched. The
/// etag keeps its surrounding quotes because it is echoed back verbatim in
/// `If-Match` headers.
///
/// Properties keep the order in which each name first appeared, and the
/// occurrences of one name keep source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VCardRecord {
    pub href: String,
    pub etag: String,
    pub properties: IndexMap<PropertyName, Vec<Occurrence>>,
}

impl VCardRecord {
    /// Creates an empty record with no locator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record bound to a resource.
    #[must_use]
    pub fn with_location(href: impl Into<String>, etag: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            etag: etag.into(),
            properties: IndexMap::new(),
        }
    }

    /// Appends an occurrence, creating the property on first use.
    pub fn push(&mut self, name: PropertyName, occurrence: Occurrence) {
        self.properties.entry(name).or_default().push(occurrence);
    }

    /// Returns all occurrences of a property, in source order.
    #[must_use]
    pub fn get(&self, name: &PropertyName) -> &[Occurrence] {
        self.properties.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns the first occurrence of a property.
    #[must_use]
    pub fn first(&self, name: &PropertyName) -> Option<&Occurrence> {
        self.get(name).first()
    }

    /// Returns the opaque value of the first occurrence of a property.
    #[must_use]
    pub fn first_text(&self, name: &PropertyName) -> Option<&str> {
        self.first(name).and_then(Occurrence::as_text)
    }

    /// Returns the formatted name (FN).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first_text(&PropertyName::Fn)
    }

    /// Returns the UID.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.first_text(&PropertyName::Uid)
    }

    #[must_use]
    pub fn contains(&self, name: &PropertyName) -> bool {
        self.properties.contains_key(name)
    }

    /// Iterates over properties in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyName, &[Occurrence])> {
        self.properties.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct property names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Removes one occurrence of a property and returns it.
    ///
    /// Removing the last occurrence removes the property itself, so no name
    /// is ever left with an empty sequence.
    pub fn remove_occurrence(&mut self, name: &PropertyName, index: usize) -> Option<Occurrence> {
        let occurrences = self.properties.get_mut(name)?;
        if index >= occurrences.len() {
            return None;
        }
        let removed = occurrences.remove(index);
        if occurrences.is_empty() {
            self.properties.shift_remove(name);
        }
        Some(removed)
    }

    /// Removes every occurrence of a property that matches `predicate`.
    /// Returns how many were removed.
    pub fn remove_where<F>(&mut self, name: &PropertyName, mut predicate: F) -> usize
    where
        F: FnMut(&Occurrence) -> bool,
    {
        let Some(occurrences) = self.properties.get_mut(name) else {
            return 0;
        };
        let before = occurrences.len();
        occurrences.retain(|o| !predicate(o));
        let removed = before - occurrences.len();
        if occurrences.is_empty() {
            self.properties.shift_remove(name);
        }
        removed
    }

    /// Collection member name derived from the UID, e.g. `abc-123.vcf`.
    #[must_use]
    pub fn resource_name(&self) -> Option<String> {
        self.try_resource_name().ok()
    }

    /// Like [`Self::resource_name`], but reports why no name is available.
    ///
    /// ## Errors
    /// Returns an error if the record has no UID or the UID is blank.
    pub fn try_resource_name(&self) -> RfcResult<String> {
        let uid = self
            .uid()
            .ok_or_else(|| CoreError::InvalidInput("card has no UID".to_string()))?;
        Ok(resource_file_name(uid)?)
    }

    /// Checks the structural invariants of the record against a schema.
    ///
    /// ## Errors
    /// Returns the first violation found.
    pub fn validate(&self, schema: &impl ShapeProvider) -> Result<(), RecordViolation> {
        for (name, occurrences) in &self.properties {
            let raw = name.as_str();
            if raw.is_empty() {
                return Err(RecordViolation::EmptyName);
            }
            if raw.chars().any(|c| c == '"' || c.is_control()) {
                return Err(RecordViolation::UnrepresentableName(raw.to_string()));
            }
            if occurrences.is_empty() {
                return Err(RecordViolation::NoOccurrences(raw.to_string()));
            }

            match schema.shape_of(name) {
                Shape::Structural => {
                    return Err(RecordViolation::StructuralProperty(raw.to_string()));
                }
                Shape::Opaque => {
                    if occurrences
                        .iter()
                        .any(|o| !matches!(o.value, OccurrenceValue::Text(_)))
                    {
                        return Err(RecordViolation::ShapeMismatch(raw.to_string()));
                    }
                }
                Shape::Structured(shape) => {
                    let conforms = occurrences
                        .iter()
                        .all(|o| o.as_fields().is_some_and(|f| f.matches_shape(shape)));
                    if !conforms {
                        return Err(RecordViolation::ShapeMismatch(raw.to_string()));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::occurrence::StructuredValue;
    use crate::rfc::vcard::core::schema::{self, StandardSchema};

    fn sample() -> VCardRecord {
        let mut record = VCardRecord::with_location("/book/jane.vcf", "\"abc\"");
        record.push(PropertyName::Fn, Occurrence::text("Jane Doe"));
        record.push(PropertyName::Uid, Occurrence::text("jane/1 a"));
        record.push(PropertyName::Member, Occurrence::text("urn:uuid:1"));
        record.push(PropertyName::Member, Occurrence::text("urn:uuid:2"));
        record
    }

    #[test]
    fn accessors() {
        let record = sample();
        assert_eq!(record.formatted_name(), Some("Jane Doe"));
        assert_eq!(record.uid(), Some("jane/1 a"));
        assert_eq!(record.get(&PropertyName::Member).len(), 2);
        assert!(record.get(&PropertyName::Email).is_empty());
        assert_eq!(record.etag, "\"abc\"");
    }

    #[test]
    fn resource_name_from_uid() {
        assert_eq!(sample().resource_name().as_deref(), Some("jane_1_a.vcf"));
        assert_eq!(VCardRecord::new().resource_name(), None);
        assert!(matches!(
            VCardRecord::new().try_resource_name(),
            Err(crate::error::RfcError::CoreError(CoreError::InvalidInput(_)))
        ));
    }

    #[test]
    fn removing_last_occurrence_drops_property() {
        let mut record = sample();
        let removed = record.remove_occurrence(&PropertyName::Member, 0).unwrap();
        assert_eq!(removed.as_text(), Some("urn:uuid:1"));
        assert!(record.contains(&PropertyName::Member));

        record.remove_occurrence(&PropertyName::Member, 0).unwrap();
        assert!(!record.contains(&PropertyName::Member));
        assert!(record.remove_occurrence(&PropertyName::Member, 0).is_none());
    }

    #[test]
    fn remove_where_filters_members() {
        let mut record = sample();
        let removed = record.remove_where(&PropertyName::Member, |o| {
            o.as_text() == Some("urn:uuid:2")
        });
        assert_eq!(removed, 1);
        assert_eq!(record.get(&PropertyName::Member).len(), 1);
        assert!(record.validate(&StandardSchema).is_ok());
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        let mut record = sample();
        record.push(
            PropertyName::N,
            Occurrence::structured(StructuredValue::from_components(&schema::N, ["Doe"])),
        );
        assert_eq!(record.validate(&StandardSchema), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_sequence() {
        let mut record = sample();
        record.properties.insert(PropertyName::Note, Vec::new());
        assert_eq!(
            record.validate(&StandardSchema),
            Err(RecordViolation::NoOccurrences("NOTE".into()))
        );
    }

    #[test]
    fn validate_rejects_opaque_structured_property() {
        let mut record = VCardRecord::new();
        record.push(PropertyName::Adr, Occurrence::text("123 Main St"));
        assert_eq!(
            record.validate(&StandardSchema),
            Err(RecordViolation::ShapeMismatch("ADR".into()))
        );
    }

    #[test]
    fn validate_rejects_bad_names() {
        let mut record = VCardRecord::new();
        record.push(PropertyName::from(""), Occurrence::text("x"));
        assert_eq!(record.validate(&StandardSchema), Err(RecordViolation::EmptyName));

        let mut record = VCardRecord::new();
        record.push(PropertyName::from("X-\"Q\""), Occurrence::text("x"));
        assert!(matches!(
            record.validate(&StandardSchema),
            Err(RecordViolation::UnrepresentableName(_))
        ));
    }

    #[test]
    fn json_boundary_keeps_order_and_etag_quotes() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with(r#"{"href":"/book/jane.vcf","etag":"\"abc\"","properties":{"FN""#));

        let back: VCardRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}

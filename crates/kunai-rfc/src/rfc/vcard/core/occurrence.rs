//! One appearance of a property within a card.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::parameter::{Parameter, Params};
use super::schema::StructuredShape;

/// Named fields of a structured value, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredValue(IndexMap<String, String>);

impl StructuredValue {
    /// Builds a value holding every field of `shape`, taking components in
    /// order and defaulting missing ones to the empty string. Components past
    /// the last field are dropped.
    #[must_use]
    pub fn from_components<I, S>(shape: &StructuredShape, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut components = components.into_iter();
        Self(
            shape
                .fields
                .iter()
                .map(|field| {
                    let value = components.next().map(Into::into).unwrap_or_default();
                    ((*field).to_string(), value)
                })
                .collect(),
        )
    }

    /// Returns the value of a field, if the field exists.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Replaces a field's value. Returns `false` if the field is unknown.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.0.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Iterates over `(field, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether the field names are exactly those of `shape`, in order.
    #[must_use]
    pub fn matches_shape(&self, shape: &StructuredShape) -> bool {
        self.0.len() == shape.fields.len()
            && self.0.keys().zip(shape.fields).all(|(k, f)| k == f)
    }
}

/// The value of one occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccurrenceValue {
    /// Opaque single value.
    #[serde(rename = "value")]
    Text(String),
    /// Structured value keyed by schema field names.
    #[serde(rename = "values")]
    Fields(StructuredValue),
}

/// One instance of a property: its parameters and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub params: Params,
    #[serde(flatten)]
    pub value: OccurrenceValue,
}

impl Occurrence {
    /// Creates an opaque occurrence with no parameters.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            params: Params::new(),
            value: OccurrenceValue::Text(value.into()),
        }
    }

    /// Creates a structured occurrence with no parameters.
    #[must_use]
    pub fn structured(value: StructuredValue) -> Self {
        Self {
            params: Params::new(),
            value: OccurrenceValue::Fields(value),
        }
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Parameter::new(name, value));
        self
    }

    /// Returns the opaque value, if this occurrence has one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            OccurrenceValue::Text(s) => Some(s),
            OccurrenceValue::Fields(_) => None,
        }
    }

    /// Returns the structured fields, if this occurrence has them.
    #[must_use]
    pub fn as_fields(&self) -> Option<&StructuredValue> {
        match &self.value {
            OccurrenceValue::Fields(fields) => Some(fields),
            OccurrenceValue::Text(_) => None,
        }
    }

    /// Returns a single structured field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.as_fields().and_then(|f| f.get(name))
    }
}

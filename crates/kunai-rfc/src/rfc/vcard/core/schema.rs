//! Property shapes.
//!
//! The schema tells the parser how to read the value of each property: not
//! at all (structural markers), as one opaque string, or as a `;`-separated
//! list of named fields. Extending coverage means adding a table entry here.

use super::name::PropertyName;

/// Field layout of a structured property.
#[derive(Debug, PartialEq, Eq)]
pub struct StructuredShape {
    /// Field names, in the order the components appear in the value.
    pub fields: &'static [&'static str],
    /// Number of leading components always written when serializing, even
    /// if empty. Trailing empty components past this count are omitted.
    pub required_fields: usize,
}

impl StructuredShape {
    /// Returns the position of a field name, if it belongs to this shape.
    #[must_use]
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

/// How a property's value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `BEGIN`/`END` markers. Never recorded as properties.
    Structural,
    /// A single free-text value.
    Opaque,
    /// A `;`-separated value with named fields.
    Structured(&'static StructuredShape),
}

/// Lookup service consulted by the parser and serializer for every property.
pub trait ShapeProvider {
    /// Returns the shape of the named property.
    fn shape_of(&self, name: &PropertyName) -> Shape;
}

impl<T: ShapeProvider + ?Sized> ShapeProvider for &T {
    fn shape_of(&self, name: &PropertyName) -> Shape {
        (**self).shape_of(name)
    }
}

/// Address (ADR): post office box through country.
pub const ADR: StructuredShape = StructuredShape {
    fields: &[
        "po_box",
        "extended_address",
        "street_address",
        "locality",
        "state",
        "postal_code",
        "country",
    ],
    required_fields: 7,
};

/// Telephone (TEL): number with optional extension.
pub const TEL: StructuredShape = StructuredShape {
    fields: &["number", "extension"],
    required_fields: 1,
};

/// Structured name (N).
pub const N: StructuredShape = StructuredShape {
    fields: &[
        "family_name",
        "given_names",
        "honorific_prefixes",
        "honorific_suffixes",
    ],
    required_fields: 4,
};

/// Organization (ORG): name followed by up to ten units.
pub const ORG: StructuredShape = StructuredShape {
    fields: &[
        "organization_name",
        "organizational_unit_1",
        "organizational_unit_2",
        "organizational_unit_3",
        "organizational_unit_4",
        "organizational_unit_5",
        "organizational_unit_6",
        "organizational_unit_7",
        "organizational_unit_8",
        "organizational_unit_9",
        "organizational_unit_10",
    ],
    required_fields: 1,
};

/// The canonical property table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSchema;

impl ShapeProvider for StandardSchema {
    fn shape_of(&self, name: &PropertyName) -> Shape {
        match name {
            PropertyName::Begin | PropertyName::End => Shape::Structural,
            PropertyName::Adr => Shape::Structured(&ADR),
            PropertyName::Tel => Shape::Structured(&TEL),
            PropertyName::N => Shape::Structured(&N),
            PropertyName::Org => Shape::Structured(&ORG),
            _ => Shape::Opaque,
        }
    }
}

//! vCard parameter types.

use serde::{Deserialize, Serialize};

/// A single `name=value` parameter segment of a property header.
///
/// Comma-separated multi-values are not split: `TYPE=home,work` is one
/// parameter whose value is `home,work`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, as it appeared in the source.
    pub name: String,
    /// Parameter value, with any enclosing double quotes removed.
    pub value: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new(types::TYPE, value)
    }

    /// Returns whether the parameter name matches (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// The parameters of one property occurrence, in order of appearance.
///
/// Every `;`-separated segment is its own entry, so a header such as
/// `EMAIL;TYPE=PREF;TYPE=INTERNET` yields two `TYPE` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Vec<Parameter>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, param: Parameter) {
        self.0.push(param);
    }

    /// Returns the value of the first parameter with the given name
    /// (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.is_named(name))
            .map(|p| p.value.as_str())
    }

    /// Returns every value recorded under the given name (case-insensitive).
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |p| p.is_named(name))
            .map(|p| p.value.as_str())
    }

    /// Returns whether any TYPE parameter carries the given value
    /// (case-insensitive).
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_all(types::TYPE)
            .any(|v| v.eq_ignore_ascii_case(type_value))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Parameter> for Params {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Common parameter names and TYPE values as constants.
pub mod types {
    pub const TYPE: &str = "TYPE";

    pub const HOME: &str = "HOME";
    pub const WORK: &str = "WORK";
    pub const PREF: &str = "PREF";
    pub const INTERNET: &str = "INTERNET";
    pub const CELL: &str = "CELL";
    pub const FAX: &str = "FAX";
    pub const VOICE: &str = "VOICE";
}

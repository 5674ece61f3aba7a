//! vCard property names.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The name of a vCard property.
///
/// Names are case-sensitive and keep the spelling they had in the source:
/// `FN` maps to [`PropertyName::Fn`] while `fn` is an extension name.
/// Unknown names are wrapped in an [`ExtensionName`], which only
/// [`PropertyName::parse`] (and the `From` impls) can create, so a known
/// name never ends up inside [`PropertyName::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyName {
    Begin,
    End,
    Fn,
    N,
    Adr,
    Tel,
    Email,
    Org,
    Kind,
    Uid,
    Note,
    Url,
    Photo,
    Member,
    Nickname,
    Title,
    Class,
    Rev,
    Version,
    /// Any name not listed above, including `X-` extensions.
    Other(ExtensionName),
}

/// The spelling of a property name outside the known set.
///
/// Only [`PropertyName::parse`] creates one, so a known name such as `FN`
/// never ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionName(String);

impl ExtensionName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PropertyName {
    /// Classifies a raw property name.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            names::BEGIN => Self::Begin,
            names::END => Self::End,
            names::FN => Self::Fn,
            names::N => Self::N,
            names::ADR => Self::Adr,
            names::TEL => Self::Tel,
            names::EMAIL => Self::Email,
            names::ORG => Self::Org,
            names::KIND => Self::Kind,
            names::UID => Self::Uid,
            names::NOTE => Self::Note,
            names::URL => Self::Url,
            names::PHOTO => Self::Photo,
            names::MEMBER => Self::Member,
            names::NICKNAME => Self::Nickname,
            names::TITLE => Self::Title,
            names::CLASS => Self::Class,
            names::REV => Self::Rev,
            names::VERSION => Self::Version,
            other => Self::Other(ExtensionName(other.to_string())),
        }
    }

    /// Returns the name as written in vCard text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Begin => names::BEGIN,
            Self::End => names::END,
            Self::Fn => names::FN,
            Self::N => names::N,
            Self::Adr => names::ADR,
            Self::Tel => names::TEL,
            Self::Email => names::EMAIL,
            Self::Org => names::ORG,
            Self::Kind => names::KIND,
            Self::Uid => names::UID,
            Self::Note => names::NOTE,
            Self::Url => names::URL,
            Self::Photo => names::PHOTO,
            Self::Member => names::MEMBER,
            Self::Nickname => names::NICKNAME,
            Self::Title => names::TITLE,
            Self::Class => names::CLASS,
            Self::Rev => names::REV,
            Self::Version => names::VERSION,
            Self::Other(name) => name.as_str(),
        }
    }

    /// Returns whether this is an extension or otherwise unlisted name.
    #[must_use]
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<&str> for PropertyName {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for PropertyName {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PropertyName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PropertyName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// Common property names as constants.
pub mod names {
    // Structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";

    // Identification
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const KIND: &str = "KIND";

    // Addressing and communications
    pub const ADR: &str = "ADR";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";

    // Organizational
    pub const TITLE: &str = "TITLE";
    pub const ORG: &str = "ORG";
    pub const MEMBER: &str = "MEMBER";

    // Explanatory
    pub const NOTE: &str = "NOTE";
    pub const REV: &str = "REV";
    pub const UID: &str = "UID";
    pub const URL: &str = "URL";

    // Security
    pub const CLASS: &str = "CLASS";
}

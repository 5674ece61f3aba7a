//! vCard parsing and serialization for the Kunai CardDAV client.

pub mod error;
pub mod rfc;

//! Text formats spoken by `CardDAV` address books.

pub mod vcard;

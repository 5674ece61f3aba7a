//! Resource naming for imported cards.
//!
//! ## Summary
//! Each imported card is stored under a file name derived from its `UID`, so
//! re-importing the same card targets the same resource.

/// File extension used for vCard resources in an address-book collection.
pub const VCARD_EXTENSION: &str = ".vcf";

/// Derive a collection member name from a card UID.
///
/// Path separators and spaces are replaced with underscores and the `.vcf`
/// extension is appended. Surrounding whitespace is ignored.
///
/// Examples:
/// - "abc-123" -> "abc-123.vcf"
/// - "urn:uuid:1/2 3" -> "urn:uuid:1_2_3.vcf"
///
/// ## Errors
/// Returns [`CoreError::InvalidInput`](crate::error::CoreError::InvalidInput)
/// if the UID is blank.
pub fn resource_file_name(uid: &str) -> crate::error::CoreResult<String> {
    let uid = uid.trim();
    if uid.is_empty() {
        return Err(crate::error::CoreError::InvalidInput(
            "cannot derive a resource name from an empty UID".to_string(),
        ));
    }

    let stem = uid
        .chars()
        .map(|c| if c == '/' || c == ' ' { '_' } else { c })
        .collect::<String>();

    Ok(format!("{stem}{VCARD_EXTENSION}"))
}

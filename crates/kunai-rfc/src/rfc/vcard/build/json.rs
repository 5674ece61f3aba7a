//! JSON rendering of parsed records.

use crate::error::RfcResult;
use crate::rfc::vcard::core::VCardRecord;

/// Renders records as a JSON array.
///
/// Quote characters in values and etags are escaped by the JSON encoder.
///
/// ## Errors
/// Returns an error if encoding fails.
pub fn to_json(records: &[VCardRecord], pretty: bool) -> RfcResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Reads records back from the JSON produced by [`to_json`].
///
/// ## Errors
/// Returns an error if the input is not a JSON array of records.
pub fn from_json(json: &str) -> RfcResult<Vec<VCardRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RfcError;
    use crate::rfc::vcard::parse::parse;

    #[test]
    fn compact_and_pretty_agree() {
        let records = vec![parse("FN:A\nTEL:1;2\n", "/a.vcf", "\"x\"").unwrap()];

        let compact = to_json(&records, false).unwrap();
        let pretty = to_json(&records, true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(from_json(&compact).unwrap(), records);
        assert_eq!(from_json(&pretty).unwrap(), records);
    }

    #[test]
    fn structured_values_are_keyed_by_field() {
        let records = vec![parse("TEL;TYPE=cell:555;9\n", "", "").unwrap()];
        let value: serde_json::Value = serde_json::from_str(&to_json(&records, false).unwrap()).unwrap();

        let tel = &value[0]["properties"]["TEL"][0];
        assert_eq!(tel["values"]["number"], "555");
        assert_eq!(tel["values"]["extension"], "9");
        assert_eq!(tel["params"][0]["name"], "TYPE");
        assert_eq!(tel["params"][0]["value"], "cell");
    }

    #[test]
    fn bad_json_is_a_serialization_error() {
        assert!(matches!(
            from_json("{not json"),
            Err(RfcError::SerializationError(_))
        ));
    }
}

//! Value and parameter escaping for written cards.

/// Escapes `,` and `;` in a text value with a backslash.
///
/// Other characters, including backslashes and newlines, are written as-is.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, ',' | ';') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Returns `true` if a parameter value must be written inside double quotes.
#[must_use]
pub fn needs_quoting(value: &str) -> bool {
    value.contains([':', ';', ','])
}

/// Formats a parameter value, double-quoting it when it contains `:`, `;`
/// or `,`.
#[must_use]
pub fn escape_param_value(value: &str) -> String {
    if needs_quoting(value) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

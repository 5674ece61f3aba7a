//! vCard value helpers.

/// Cleans up an escaped vCard string.
///
/// A run of one or more backslashes followed by `,` collapses to `,`, and a
/// run followed by `;` collapses to `;`. Any other backslash is kept as is.
#[must_use]
pub fn clean_up(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending_backslashes = 0usize;

    for c in s.chars() {
        match c {
            '\\' => pending_backslashes += 1,
            ',' | ';' => {
                pending_backslashes = 0;
                result.push(c);
            }
            _ => {
                result.extend(std::iter::repeat_n('\\', pending_backslashes));
                pending_backslashes = 0;
                result.push(c);
            }
        }
    }
    result.extend(std::iter::repeat_n('\\', pending_backslashes));

    result
}

/// Splits a structured value on semicolons not escaped by a backslash.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_backslash = false;

    for (i, c) in s.char_indices() {
        if c == '\\' {
            prev_backslash = !prev_backslash;
            continue;
        }

        if c == ';' && !prev_backslash {
            parts.push(&s[start..i]);
            start = i + 1;
        }

        prev_backslash = false;
    }

    parts.push(&s[start..]);
    parts
}

/// Splits on `delimiter` wherever it is not inside a double-quoted run.
#[must_use]
pub fn split_unquoted(s: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Removes one pair of enclosing double quotes, if present.
#[must_use]
pub fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

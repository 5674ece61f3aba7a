//! vCard lexer for line unfolding and content line splitting.

use super::values::{clean_up, split_unquoted, unquote};
use crate::rfc::vcard::core::{Parameter, Params, types};

/// A logical line after unfolding, with the 1-based number of its first
/// physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub line: usize,
    pub text: String,
}

/// Splits card text into logical lines, merging folded continuations.
///
/// A physical line that starts with a space or tab continues the previous
/// logical line; that single whitespace character is removed before the
/// rest is appended. A trailing `\r` is dropped from every physical line.
/// Blank logical lines are skipped.
#[must_use]
pub fn split_lines(input: &str) -> Vec<LogicalLine> {
    let mut lines: Vec<LogicalLine> = Vec::new();

    for (index, raw) in input.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(continuation) = raw.strip_prefix([' ', '\t'])
            && let Some(prev) = lines.last_mut()
        {
            prev.text.push_str(continuation);
            continue;
        }

        lines.push(LogicalLine {
            line: index + 1,
            text: raw.to_string(),
        });
    }

    lines.retain(|l| !l.text.trim().is_empty());
    lines
}

/// A content line split into header and value, before schema lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine<'a> {
    /// Property name, as written.
    pub name: &'a str,
    /// Parameters from the header, cleaned up.
    pub params: Params,
    /// Raw text after the header/value separator, or `None` if the line has
    /// no separator at all.
    pub value: Option<&'a str>,
}

/// Splits a logical line into its property name, parameters and raw value.
///
/// Format: `name[;param=value]*[:value]`
///
/// The separator is the first colon whose header side holds an even number
/// of double quotes. Each colon that lands inside a quoted parameter moves
/// the boundary one colon further, up to `quote_retry_limit` times, after
/// which the current colon is used regardless.
#[must_use]
pub fn parse_content_line(line: &str, quote_retry_limit: u8) -> ContentLine<'_> {
    let (header, value) = match find_value_separator(line, quote_retry_limit) {
        Some(pos) => (&line[..pos], Some(&line[pos + 1..])),
        None => (line, None),
    };

    let mut segments = split_unquoted(header, ';').into_iter();
    let name = segments.next().unwrap_or_default();
    let params = segments
        .filter(|segment| !segment.is_empty())
        .map(parse_parameter)
        .collect();

    ContentLine {
        name,
        params,
        value,
    }
}

/// Finds the colon separating the header from the value.
fn find_value_separator(line: &str, quote_retry_limit: u8) -> Option<usize> {
    let mut colons = line.match_indices(':').map(|(i, _)| i);
    let mut pos = colons.next()?;
    let mut retries = 0u8;

    while line[..pos].matches('"').count() % 2 == 1 && retries < quote_retry_limit {
        let Some(next) = colons.next() else {
            tracing::trace!(line = %line, "Unbalanced quotes in header, keeping first split");
            break;
        };
        pos = next;
        retries += 1;
    }

    Some(pos)
}

/// Parses one `name=value` header segment.
///
/// A segment without `=` is a bare vCard 2.1 type such as `HOME` and is
/// recorded as `TYPE=HOME`. One pair of enclosing double quotes is removed
/// from a value; the serializer quotes it again when it holds `:`, `;` or `,`.
fn parse_parameter(segment: &str) -> Parameter {
    match segment.split_once('=') {
        Some((name, value)) => Parameter::new(clean_up(name), clean_up(unquote(value))),
        None => Parameter::new(types::TYPE, clean_up(segment)),
    }
}

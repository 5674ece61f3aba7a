//! Splitting bulk text into individual cards.

use crate::rfc::vcard::core::names;

/// Literal line that opens a card.
pub const BEGIN_VCARD: &str = const_str::concat!(names::BEGIN, ":VCARD");
/// Literal line that closes a card.
pub const END_VCARD: &str = const_str::concat!(names::END, ":VCARD");

/// Splits a blob of concatenated vCards into one text block per card.
///
/// Each block runs from a `BEGIN:VCARD` line to the next `END:VCARD` line
/// and ends with a newline. Lines outside a block are discarded, and a block
/// that is never closed produces nothing.
///
/// Every line is trimmed. The one exception is a folded continuation: a line
/// indented by exactly one space or tab more than the block's `BEGIN:VCARD`
/// line keeps a single leading space, so unfolding still sees it.
#[must_use]
#[tracing::instrument(skip(blob), fields(input_len = blob.len()))]
pub fn split_cards(blob: &str) -> Vec<String> {
    let mut cards = Vec::new();
    // Open buffer plus the indentation of its BEGIN line.
    let mut current: Option<(String, &str)> = None;

    for raw in blob.lines() {
        let trimmed = raw.trim();

        if trimmed == BEGIN_VCARD {
            if current.is_some() {
                tracing::debug!("BEGIN:VCARD inside an open card, discarding the open card");
            }
            let indent = &raw[..raw.len() - raw.trim_start().len()];
            let mut buffer = String::from(BEGIN_VCARD);
            buffer.push('\n');
            current = Some((buffer, indent));
        } else if trimmed == END_VCARD {
            if let Some((mut buffer, _)) = current.take() {
                buffer.push_str(END_VCARD);
                buffer.push('\n');
                cards.push(buffer);
            }
        } else if let Some((buffer, indent)) = current.as_mut() {
            let line = raw.trim_end();
            match fold_continuation(line, *indent) {
                Some(rest) => {
                    buffer.push(' ');
                    buffer.push_str(rest);
                }
                None => buffer.push_str(line.trim_start()),
            }
            buffer.push('\n');
        }
    }

    if current.is_some() {
        tracing::debug!("Input ended inside an unterminated card, dropping it");
    }

    tracing::debug!(count = cards.len(), "Split cards");

    cards
}

/// Returns the text of a folded continuation line, without its indentation
/// and fold marker.
fn fold_continuation<'a>(line: &'a str, indent: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(indent)?.strip_prefix([' ', '\t'])?;
    (!rest.is_empty() && !rest.starts_with([' ', '\t'])).then_some(rest)
}

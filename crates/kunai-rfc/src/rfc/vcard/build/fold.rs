//! vCard line folding.

/// Maximum line length in octets (not characters) per RFC 6350.
const MAX_LINE_OCTETS: usize = 75;

/// Line terminator used for written cards.
pub const CRLF: &str = "\r\n";

/// Appends `line` to `out` followed by CRLF, folding it so that no physical
/// line exceeds 75 octets.
///
/// Continuation lines start with a single space, which counts toward their
/// length. Folds only fall on UTF-8 character boundaries, and never next to
/// whitespace: importers trim physical lines, so a fold is moved back until
/// both sides of it are non-blank. A run of whitespace too long to move
/// around is folded in place.
pub fn push_folded(out: &mut String, line: &str) {
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();
        if current_len + char_len > MAX_LINE_OCTETS {
            let carried = carry_back(out, current_len, c);
            out.push_str(CRLF);
            out.push(' ');
            current_len = 1;
            for moved in carried.chars().rev() {
                out.push(moved);
                current_len += moved.len_utf8();
            }
        }
        out.push(c);
        current_len += char_len;
    }

    out.push_str(CRLF);
}

/// Pops characters off the physical line being written until the fold point
/// has non-whitespace on both sides. Returns the popped characters in
/// reverse order, or nothing if no such point exists on this line.
fn carry_back(out: &mut String, current_len: usize, next: char) -> String {
    let mut carried = String::new();
    let mut remaining = current_len;
    let mut first_after = next;
    // The carried text, the fold marker and `next` must fit on the new line.
    let max_carry = MAX_LINE_OCTETS - 1 - next.len_utf8();

    while remaining > 1 {
        let Some(last) = out.chars().next_back() else {
            break;
        };
        if !last.is_whitespace() && !first_after.is_whitespace() {
            return carried;
        }
        if carried.len() + last.len_utf8() > max_carry {
            break;
        }
        out.pop();
        carried.push(last);
        remaining -= last.len_utf8();
        first_after = last;
    }

    // No clean fold point: put everything back and fold in place.
    out.extend(carried.chars().rev());
    String::new()
}

/// Folds a single line, without a trailing line terminator.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    push_folded(&mut out, line);
    out.truncate(out.len() - CRLF.len());
    out
}

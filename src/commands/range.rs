//! Address-range recognition for ex command lines.
//!
//! A range is one address or two addresses joined by `,` or `;`. An address is
//! one of:
//! - `.` for the current line
//! - `$` for the last line
//! - `%` for the whole buffer (only as a complete single-address range)
//! - an unsigned line number
//! - a search pattern `/pat/` or `?pat?`, optionally followed directly by a
//!   second pattern (`/foo//bar/`)
//!
//! and may carry one signed offset (`+N` or `-N`). Search patterns end at the
//! first matching delimiter.
//!
//! The matched range is returned verbatim. Turning it into line numbers is the
//! job of whoever executes the command.

/// Kind of address recognized at the start of a range component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Address {
    CurrentLine,
    LastLine,
    WholeBuffer,
    LineNumber,
    Search,
}

/// Returns the longest prefix of `text` that forms a range, if any.
pub fn match_range(text: &str) -> Option<&str> {
    range_end(text.as_bytes()).map(|end| &text[..end])
}

/// Returns true when the whole of `text` is a range and nothing else.
pub fn is_only_range(text: &str) -> bool {
    range_end(text.as_bytes()) == Some(text.len())
}

/// Byte offset where the range starting at 0 ends.
///
/// Every token the grammar consumes is ASCII, so the returned offset always
/// lies on a char boundary.
fn range_end(bytes: &[u8]) -> Option<usize> {
    let (kind, end) = address(bytes, 0)?;
    let first = offset(bytes, end).unwrap_or(end);

    // `%` already names every line; it never takes a second address.
    if kind == Address::WholeBuffer {
        return Some(first);
    }

    let Some(second_start) = separator(bytes, first) else {
        return Some(first);
    };

    match address(bytes, second_start) {
        Some((Address::WholeBuffer, _)) | None => Some(first),
        Some((_, end)) => Some(offset(bytes, end).unwrap_or(end)),
    }
}

/// Recognizes a single address at `pos`, without its offset.
fn address(bytes: &[u8], pos: usize) -> Option<(Address, usize)> {
    match *bytes.get(pos)? {
        b'.' => Some((Address::CurrentLine, pos + 1)),
        b'$' => Some((Address::LastLine, pos + 1)),
        b'%' => Some((Address::WholeBuffer, pos + 1)),
        b'/' | b'?' => {
            let end = search_pattern(bytes, pos)?;
            let end = search_pattern(bytes, end).unwrap_or(end);
            Some((Address::Search, end))
        }
        b'0'..=b'9' => Some((Address::LineNumber, digits(bytes, pos)?)),
        _ => None,
    }
}

/// Recognizes `/.../` or `?...?` at `pos`, stopping at the first closing
/// delimiter. An unterminated pattern is not an address.
fn search_pattern(bytes: &[u8], pos: usize) -> Option<usize> {
    let delimiter = match bytes.get(pos) {
        Some(&b @ (b'/' | b'?')) => b,
        _ => return None,
    };
    let body = bytes.get(pos + 1..)?;
    let close = body.iter().position(|&b| b == delimiter)?;
    Some(pos + 1 + close + 1)
}

/// Recognizes a signed offset `+N` or `-N` at `pos`.
fn offset(bytes: &[u8], pos: usize) -> Option<usize> {
    match bytes.get(pos) {
        Some(b'+' | b'-') => digits(bytes, pos + 1),
        _ => None,
    }
}

/// Recognizes a `,` or `;` separator at `pos`.
fn separator(bytes: &[u8], pos: usize) -> Option<usize> {
    match bytes.get(pos) {
        Some(b',' | b';') => Some(pos + 1),
        _ => None,
    }
}

/// Recognizes one or more ASCII digits at `pos`.
fn digits(bytes: &[u8], pos: usize) -> Option<usize> {
    let count = bytes
        .get(pos..)?
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (count > 0).then_some(pos + count)
}

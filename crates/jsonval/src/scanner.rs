//! Grammar scanner: classifies the next value in a byte buffer and finds where it ends.
//!
//! The scanner never builds values. Given a buffer and a start offset it returns
//! the value's [`ValueType`] and the inclusive byte range covering exactly its
//! text, validating grammar on the way:
//!
//! - **Literals**: `true`, `false`, `null`, matched in full and case-sensitively
//! - **Numbers**: the exact JSON number grammar (no `+`, no leading zeros,
//!   digits required after `.` and after the exponent marker)
//! - **Strings**: the first `"` not escaped by an odd run of backslashes
//! - **Containers**: a depth counter over the container's own brackets, with
//!   strings skipped whole so their contents never affect the depth
//!
//! All functions take `bytes` as a prefix slice of the original text, so every
//! offset they return or report is an offset into that text. Callers bound a
//! nested scan by passing a shorter prefix (e.g. everything before a
//! container's closing bracket).

use crate::error::{JsonError, Result};
use crate::value::ValueType;

/// The location and type of one scanned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    /// Type of the value, decided by its first character.
    pub kind: ValueType,
    /// Offset of the value's first byte.
    pub start: usize,
    /// Offset of the value's last byte (inclusive).
    pub end: usize,
}

/// JSON insignificant whitespace: space, tab, line feed, carriage return.
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes allowed to directly follow a number or literal.
pub fn is_delimiter(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b',' | b']' | b'}')
}

/// Offset of the first non-whitespace byte at or after `from`, or `bytes.len()`.
pub fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() && is_whitespace(bytes[i]) {
        i += 1;
    }
    i
}

/// Skip leading whitespace at `from`, then classify and scan the value found there.
pub fn scan_value(bytes: &[u8], from: usize) -> Result<Scanned> {
    let start = skip_whitespace(bytes, from);
    if start >= bytes.len() {
        return Err(JsonError::malformed(
            start,
            "unexpected end of input, expected a value",
        ));
    }

    let (kind, end) = match bytes[start] {
        b't' => (ValueType::Bool, scan_literal(bytes, start, b"true")?),
        b'f' => (ValueType::Bool, scan_literal(bytes, start, b"false")?),
        b'n' => (ValueType::Null, scan_literal(bytes, start, b"null")?),
        b'-' | b'0'..=b'9' => scan_number(bytes, start)?,
        b'"' => (ValueType::String, scan_string(bytes, start)?),
        b'{' => (ValueType::Object, scan_container(bytes, start, b'{', b'}')?),
        b'[' => (ValueType::Array, scan_container(bytes, start, b'[', b']')?),
        other => {
            return Err(JsonError::malformed(
                start,
                format!("unable to determine type of value starting with {}", describe(other)),
            ))
        }
    };

    Ok(Scanned { kind, start, end })
}

/// Match `literal` at `start` in full; the byte after it must be a delimiter or end of input.
fn scan_literal(bytes: &[u8], start: usize, literal: &[u8]) -> Result<usize> {
    let end = start + literal.len();
    if !bytes[start..].starts_with(literal) {
        return Err(JsonError::malformed(
            start,
            "unable to determine type, invalid literal",
        ));
    }
    if let Some(&next) = bytes.get(end) {
        if !is_delimiter(next) {
            return Err(JsonError::malformed(
                end,
                format!("unexpected {} after literal", describe(next)),
            ));
        }
    }
    Ok(end - 1)
}

/// Scan a number at `start`, returning its type (Integer or Double) and inclusive end.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`, followed by
/// a delimiter or end of input.
pub fn scan_number(bytes: &[u8], start: usize) -> Result<(ValueType, usize)> {
    let mut i = start;
    let mut kind = ValueType::Integer;

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    match bytes.get(i) {
        Some(b'0') => {
            i += 1;
            if bytes.get(i).is_some_and(u8::is_ascii_digit) {
                return Err(JsonError::malformed(i - 1, "leading zeros are not allowed"));
            }
        }
        Some(b'1'..=b'9') => i = skip_digits(bytes, i),
        _ => {
            return Err(JsonError::malformed(i, "expected a digit in number"));
        }
    }

    if bytes.get(i) == Some(&b'.') {
        kind = ValueType::Double;
        i += 1;
        let after = skip_digits(bytes, i);
        if after == i {
            return Err(JsonError::malformed(i, "expected a digit after decimal point"));
        }
        i = after;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        kind = ValueType::Double;
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let after = skip_digits(bytes, i);
        if after == i {
            return Err(JsonError::malformed(i, "expected a digit in exponent"));
        }
        i = after;
    }

    if let Some(&next) = bytes.get(i) {
        if !is_delimiter(next) {
            return Err(JsonError::malformed(
                i,
                format!("unexpected {} after number", describe(next)),
            ));
        }
    }

    Ok((kind, i - 1))
}

fn skip_digits(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Find the closing quote of the string opening at `start`.
///
/// A backslash always consumes the byte after it, so a `"` preceded by an odd
/// run of backslashes never terminates the string.
pub fn scan_string(bytes: &[u8], start: usize) -> Result<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Ok(i),
            _ => i += 1,
        }
    }
    Err(JsonError::malformed(start, "unterminated string"))
}

/// Find the bracket closing the container opening at `start`.
///
/// Only `open`/`close` move the depth counter; brackets of the other kind are
/// checked later, when the container's interior is parsed.
pub fn scan_container(bytes: &[u8], start: usize, open: u8, close: u8) -> Result<usize> {
    let mut depth: i64 = 0;
    let mut i = start;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' {
            i = scan_string(bytes, i)?;
        } else if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Ok(i);
            }
        }
        i += 1;
    }
    let what = if open == b'{' { "object" } else { "array" };
    Err(JsonError::malformed(start, format!("unterminated {what}")))
}

/// Human-readable rendering of a byte for error messages.
pub(crate) fn describe(b: u8) -> String {
    if b.is_ascii_graphic() || b == b' ' {
        format!("'{}'", b as char)
    } else {
        format!("byte 0x{b:02x}")
    }
}

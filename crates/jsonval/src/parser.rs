//! Recursive-descent parser: JSON text → [`Value`].
//!
//! The parser drives the [`scanner`](crate::scanner): every value is first
//! classified and bounded by a scan, then materialized.
//!
//! - Containers recurse into their interior. The interior is passed to the
//!   scanner as a prefix slice ending before the closing bracket, so a nested
//!   scan can never run past its parent.
//! - Entries are separated by top-level commas; after each entry the next
//!   non-whitespace byte must be `,` or the end of the interior.
//! - Strings are unquoted and their escapes validated and substituted.
//! - Numbers and literals are converted to their typed payload.
//!
//! There is no recovery: the first violation is returned and no partial tree
//! escapes.

use crate::error::{JsonError, Result};
use crate::options::ParseOptions;
use crate::scanner::{describe, scan_string, scan_value, skip_whitespace, Scanned};
use crate::value::{Array, Object, Value, ValueType};
use crate::{debug, trace};

/// Parse JSON text into a [`Value`] with the default [`ParseOptions`].
///
/// # Example
/// ```
/// use jsonval::{parse, Value};
/// let value = parse(r#"{"k":1,"v":[1,2,3]}"#).unwrap();
/// assert_eq!(value.get("k").unwrap(), &Value::Integer(1));
/// assert_eq!(value.get("v").unwrap().len(), 3);
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse JSON text into a [`Value`], bounding nesting depth by `options.max_depth`.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    debug!(len = text.len(), max_depth = options.max_depth, "parsing JSON text");
    let parser = Parser {
        text,
        bytes: text.as_bytes(),
        max_depth: options.max_depth,
    };
    parser.parse_document().inspect_err(|_err| {
        debug!(error = %_err, "parse failed");
    })
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    max_depth: usize,
}

impl Parser<'_> {
    fn parse_document(&self) -> Result<Value> {
        let start = skip_whitespace(self.bytes, 0);
        if start == self.bytes.len() {
            return Err(JsonError::malformed(start, "empty input"));
        }

        let scanned = scan_value(self.bytes, start)?;
        let value = self.materialize(scanned, 0)?;

        let rest = skip_whitespace(self.bytes, scanned.end + 1);
        if rest < self.bytes.len() {
            return Err(JsonError::malformed(rest, "unexpected trailing characters"));
        }
        debug!(kind = %scanned.kind, "parsed JSON text");
        Ok(value)
    }

    /// Turn a scanned span into a value. `depth` is the number of containers
    /// enclosing the span.
    fn materialize(&self, scanned: Scanned, depth: usize) -> Result<Value> {
        let Scanned { kind, start, end } = scanned;
        match kind {
            ValueType::Null => Ok(Value::Null),
            ValueType::Bool => Ok(Value::Bool(self.bytes[start] == b't')),
            ValueType::Integer => parse_integer(&self.text[start..=end], start),
            ValueType::Double => parse_double(&self.text[start..=end], start),
            ValueType::String => unescape(&self.text[start + 1..end], start + 1).map(Value::String),
            ValueType::Object => self.parse_object(scanned, depth + 1),
            ValueType::Array => self.parse_array(scanned, depth + 1),
        }
    }

    fn check_depth(&self, depth: usize, offset: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(JsonError::malformed(
                offset,
                format!("nesting depth exceeds the limit of {}", self.max_depth),
            ));
        }
        Ok(())
    }

    fn parse_array(&self, scanned: Scanned, depth: usize) -> Result<Value> {
        self.check_depth(depth, scanned.start)?;
        trace!(offset = scanned.start, depth, "entering array");

        // Everything between the brackets; `interior.len()` is the offset of `]`.
        let interior = &self.bytes[..scanned.end];
        let mut items = Array::new();

        let mut i = skip_whitespace(interior, scanned.start + 1);
        if i == interior.len() {
            return Ok(Value::Array(items));
        }

        loop {
            let element = scan_value(interior, i)?;
            items.push(self.materialize(element, depth)?);

            i = skip_whitespace(interior, element.end + 1);
            match interior.get(i) {
                None => return Ok(Value::Array(items)),
                Some(b',') => i += 1,
                Some(&other) => {
                    return Err(JsonError::malformed(
                        i,
                        format!("expected ',' or ']' in array but found {}", describe(other)),
                    ))
                }
            }
        }
    }

    fn parse_object(&self, scanned: Scanned, depth: usize) -> Result<Value> {
        self.check_depth(depth, scanned.start)?;
        trace!(offset = scanned.start, depth, "entering object");

        // Everything between the braces; `interior.len()` is the offset of `}`.
        let interior = &self.bytes[..scanned.end];
        let mut map = Object::new();

        let mut i = skip_whitespace(interior, scanned.start + 1);
        if i == interior.len() {
            return Ok(Value::Object(map));
        }

        loop {
            let (key, after_key) = self.parse_key(interior, i)?;

            i = skip_whitespace(interior, after_key);
            match interior.get(i) {
                Some(b':') => i += 1,
                Some(&other) => {
                    return Err(JsonError::malformed(
                        i,
                        format!("expected ':' after object key but found {}", describe(other)),
                    ))
                }
                None => {
                    return Err(JsonError::malformed(i, "expected ':' after object key"));
                }
            }

            let entry = scan_value(interior, i)?;
            let value = self.materialize(entry, depth)?;
            map.insert(key, value);

            i = skip_whitespace(interior, entry.end + 1);
            match interior.get(i) {
                None => return Ok(Value::Object(map)),
                Some(b',') => i = skip_whitespace(interior, i + 1),
                Some(&other) => {
                    return Err(JsonError::malformed(
                        i,
                        format!("expected ',' or '}}' in object but found {}", describe(other)),
                    ))
                }
            }
        }
    }

    /// Parse the quoted key at `i`, returning it with the offset just past its closing quote.
    fn parse_key(&self, interior: &[u8], i: usize) -> Result<(String, usize)> {
        match interior.get(i) {
            Some(b'"') => {}
            Some(&other) => {
                return Err(JsonError::malformed(
                    i,
                    format!("expected '\"' to start an object key but found {}", describe(other)),
                ))
            }
            None => return Err(JsonError::malformed(i, "expected an object key")),
        }
        let close = scan_string(interior, i)?;
        let key = unescape(&self.text[i + 1..close], i + 1)?;
        Ok((key, close + 1))
    }
}

fn parse_integer(raw: &str, offset: usize) -> Result<Value> {
    raw.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| JsonError::malformed(offset, format!("integer {raw} is out of range")))
}

fn parse_double(raw: &str, offset: usize) -> Result<Value> {
    match raw.parse::<f64>() {
        Ok(d) if d.is_finite() => Ok(Value::Double(d)),
        _ => Err(JsonError::malformed(
            offset,
            format!("number {raw} is out of range"),
        )),
    }
}

/// Validate and substitute escapes in the raw contents of a string (quotes excluded).
/// `offset` is where `raw` begins in the source text.
pub(crate) fn unescape(raw: &str, offset: usize) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((pos, c)) = chars.next() {
        match c {
            '\\' => {
                let (_, escaped) = chars
                    .next()
                    .ok_or_else(|| JsonError::malformed(offset + pos, "unterminated escape sequence"))?;
                out.push(match escaped {
                    '"' => '"',
                    '\\' => '\\',
                    '/' => '/',
                    'b' => '\u{08}',
                    'f' => '\u{0c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => {
                        return Err(JsonError::malformed(
                            offset + pos,
                            format!("invalid escape sequence '\\{}'", other.escape_default()),
                        ))
                    }
                });
            }
            '"' => {
                return Err(JsonError::malformed(offset + pos, "unescaped '\"' in string"));
            }
            c if (c as u32) < 0x20 => {
                return Err(JsonError::malformed(
                    offset + pos,
                    format!("unescaped control character U+{:04X} in string", c as u32),
                ));
            }
            c => out.push(c),
        }
    }
    Ok(out)
}

//! Serializer: [`Value`] → minimal JSON text.
//!
//! Output has no insignificant whitespace. Object entries are written in
//! insertion order, so `serialize(&parse(text)?)` keeps the key order of `text`.
//!
//! # Example
//! ```
//! use jsonval::{serialize, Value};
//! let value: Value = vec![Value::from(1), Value::from("two"), Value::Null].into();
//! assert_eq!(serialize(&value), r#"[1,"two",null]"#);
//! ```

use crate::value::Value;

/// Serialize a value to a new string. Never fails.
///
/// Control characters other than `\b \f \n \r \t` are written as `\u00xx`.
/// [`parse`](crate::parse) does not accept `\u` escapes, so a string holding
/// such a character (one built in code or deserialized through serde) does not
/// read back. Strings produced by `parse` never contain one.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    serialize_into(value, &mut out);
    out
}

/// Serialize a value, appending to `out`.
pub fn serialize_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Double(d) => encode_double(*d, out),
        Value::String(s) => encode_string(s, out),
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                serialize_into(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_string(key, out);
                out.push(':');
                serialize_into(item, out);
            }
            out.push('}');
        }
    }
}

/// Shortest representation that reads back to the same `f64`.
///
/// `Debug` formatting always keeps a `.0` or an exponent (`1.0`, `1e300`), so
/// the text re-parses as a Double rather than an Integer. Non-finite values
/// have no JSON form and are written as `null`.
fn encode_double(d: f64, out: &mut String) {
    if d.is_finite() {
        out.push_str(&format!("{d:?}"));
    } else {
        out.push_str("null");
    }
}

fn encode_string(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

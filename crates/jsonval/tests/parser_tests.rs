use jsonval::{parse, parse_with_options, JsonError, ParseOptions, Value, ValueType};

/// Helper: assert that parsing fails with a malformed-input error.
fn assert_malformed(text: &str) {
    match parse(text) {
        Err(JsonError::Malformed { .. }) => {}
        other => panic!("expected malformed error for {text:?}, got {other:?}"),
    }
}

fn assert_parses(text: &str) {
    if let Err(err) = parse(text) {
        panic!("expected {text:?} to parse, got {err}");
    }
}

// ============================================================================
// Scalars (root-level)
// ============================================================================

#[test]
fn parse_null() {
    assert_eq!(parse("null").unwrap(), Value::Null);
}

#[test]
fn parse_bools() {
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
}

#[test]
fn parse_string() {
    let value = parse("\"hello\"").unwrap();
    assert!(value.is_string());
    assert_eq!(value.to_str().unwrap(), "hello");
}

#[test]
fn parse_integers() {
    assert_eq!(parse("0").unwrap(), Value::Integer(0));
    assert_eq!(parse("42").unwrap(), Value::Integer(42));
    assert_eq!(parse("-123").unwrap(), Value::Integer(-123));
    assert_eq!(parse("-0").unwrap(), Value::Integer(0));
    assert_eq!(parse("9223372036854775807").unwrap(), Value::Integer(i64::MAX));
    assert_eq!(parse("-9223372036854775808").unwrap(), Value::Integer(i64::MIN));
}

#[test]
fn parse_doubles() {
    assert_eq!(parse("2.5").unwrap(), Value::Double(2.5));
    assert_eq!(parse("1.23e-3").unwrap(), Value::Double(0.00123));
    assert_eq!(parse("123E3").unwrap(), Value::Double(123000.0));
    assert_eq!(parse("123e+3").unwrap(), Value::Double(123000.0));
    assert_eq!(parse("1.23E3").unwrap(), Value::Double(1230.0));
    assert_eq!(parse("0.5").unwrap(), Value::Double(0.5));
    assert_eq!(parse("-0.0").unwrap().value_type(), ValueType::Double);
}

#[test]
fn parse_surrounding_whitespace() {
    assert_eq!(parse(" \t\r\n 7 \n").unwrap(), Value::Integer(7));
}

// ============================================================================
// Number grammar
// ============================================================================

#[test]
fn reject_invalid_numbers() {
    for text in [
        "0123", "+123", ".123", "123e", "123.45.67", "123e2e3", "123e+", "123E+", "123E3E",
        "123e3e", "1.23E3E2", "-", "+-123", "12+-34", "123+-456", "1.", "-.5", "00",
    ] {
        assert_malformed(text);
    }
}

#[test]
fn reject_numbers_with_trailing_letters() {
    assert_malformed("123abc");
    assert_malformed("123eabc");
    assert_malformed(r#"{"key": 123abc}"#);
    assert_malformed(r#"{"key": 1.3.2ghg}"#);
}

#[test]
fn reject_numbers_inside_containers() {
    for bad in ["0123", "+123", ".123", "123e", "123.45.67", "123e2e3", "+-123"] {
        assert_malformed(&format!(r#"{{"key": {bad}}}"#));
        assert_malformed(&format!("[{bad}]"));
    }
}

#[test]
fn accept_valid_numbers_inside_containers() {
    for good in ["-123", "123e+3", "123e-3", "123E3", "123E-3", "1.23E3", "0", "0.0"] {
        assert_parses(&format!(r#"{{"key": {good}}}"#));
    }
}

#[test]
fn reject_integer_overflow() {
    assert_malformed("9223372036854775808");
    assert_malformed("-9223372036854775809");
}

#[test]
fn reject_double_overflow() {
    assert_malformed("1e400");
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn reject_literal_capitalization() {
    for text in ["TRUE", "True", "FALSE", "False", "NULL", "Null"] {
        assert_malformed(text);
    }
}

#[test]
fn reject_literal_prefixes() {
    assert_malformed("truefoo");
    assert_malformed("nul");
    assert_malformed("[falsey]");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn parse_escapes() {
    assert_eq!(parse("\"a\\nb\"").unwrap(), Value::from("a\nb"));
    assert_eq!(
        parse(r#""q\"b\\s\/f\bb\ff\nn\rr\tt""#).unwrap(),
        Value::from("q\"b\\s/f\u{08}b\u{0c}f\nn\rr\tt")
    );
}

#[test]
fn accept_valid_escapes_in_object_values() {
    for escape in [r#"\""#, r"\\", r"\/", r"\b", r"\f", r"\n", r"\r", r"\t"] {
        assert_parses(&format!(r#"{{"key": "value{escape}tail"}}"#));
    }
}

#[test]
fn reject_invalid_escapes() {
    assert_malformed("\"a\\qb\"");
    assert_malformed(r#"{"key": "value\xinvalid"}"#);
    assert_malformed(r#"{"key": "value\u12"}"#);
    assert_malformed(r#"{"key": "value\ invalid"}"#);
    assert_malformed(r#"{"key": "value\invalid"}"#);
}

#[test]
fn reject_raw_control_characters() {
    assert_malformed("\"a\nb\"");
    for raw in ['\u{08}', '\u{0c}', '\n', '\r', '\t', '\u{00}', '\u{1f}'] {
        assert_malformed(&format!("{{\"key\": \"value{raw}x\"}}"));
    }
}

#[test]
fn reject_unescaped_quote() {
    assert_malformed(r#"{"key": "value"quote"}"#);
}

#[test]
fn accept_unescaped_slash_and_punctuation() {
    assert_eq!(parse(r#""value/slash""#).unwrap(), Value::from("value/slash"));
    assert_parses(r#"{"key": "value#hashtag"}"#);
    assert_parses(r#"{"key": "value@email.com"}"#);
    assert_parses(r#"{"key": "value!$%^&*()"}"#);
}

#[test]
fn parse_unicode_text() {
    assert_eq!(parse("\"caf\u{e9} \u{4f60}\u{597d}\"").unwrap(), Value::from("caf\u{e9} \u{4f60}\u{597d}"));
}

#[test]
fn reject_unterminated_string() {
    assert_malformed("\"abc");
    assert_malformed("\"abc\\\"");
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn parse_object_with_nested_array() {
    let value = parse("{\"k\":1,\"v\":[1,2,3]}").unwrap();
    assert!(value.is_object());
    assert_eq!(value.get("k").unwrap(), &Value::Integer(1));
    assert_eq!(
        value.get("v").unwrap(),
        &Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
    );
}

#[test]
fn parse_object_with_whitespace() {
    let value = parse("{ \"key\" : \"value\" ,\n \"number\" :42 }").unwrap();
    assert_eq!(value.get("key").unwrap().to_str().unwrap(), "value");
    assert_eq!(value.get("number").unwrap().to_int().unwrap(), 42);
}

#[test]
fn parse_array_of_mixed_values() {
    let value = parse("[1, 2.5, true, null, \"s\", [], {}]").unwrap();
    let arr = value.to_array().unwrap();
    assert_eq!(arr.len(), 7);
    assert_eq!(arr[0], Value::Integer(1));
    assert_eq!(arr[1], Value::Double(2.5));
    assert_eq!(arr[2], Value::Bool(true));
    assert_eq!(arr[3], Value::Null);
    assert_eq!(arr[4], Value::from("s"));
    assert_eq!(arr[5], Value::array());
    assert_eq!(arr[6], Value::object());
}

#[test]
fn parse_nested_structures() {
    let value = parse(r#"{"array": [1, 2, {"key": "value"}], "bool": true}"#).unwrap();
    let arr = value.get("array").unwrap();
    assert!(arr.is_array());
    assert_eq!(arr.at(0).unwrap().to_int().unwrap(), 1);
    assert_eq!(arr.at(2).unwrap().get("key").unwrap().to_str().unwrap(), "value");
    assert!(value.get("bool").unwrap().to_bool().unwrap());
}

#[test]
fn parse_empty_containers() {
    assert_eq!(parse("{}").unwrap(), Value::object());
    assert_eq!(parse("[]").unwrap(), Value::array());
    assert_eq!(parse("{ \n }").unwrap(), Value::object());
    assert_eq!(parse("[ \t ]").unwrap(), Value::array());
    assert_eq!(parse("[[],[[]]]").unwrap().at(1).unwrap().len(), 1);
}

#[test]
fn parse_brackets_inside_strings() {
    let value = parse(r#"{"a": "}]{[", "b": ["]", "}"], "c\"}": 1}"#).unwrap();
    assert_eq!(value.get("a").unwrap().to_str().unwrap(), "}]{[");
    assert_eq!(value.get("b").unwrap().len(), 2);
    assert_eq!(value.get("c\"}").unwrap(), &Value::Integer(1));
}

#[test]
fn parse_escaped_keys() {
    let value = parse(r#"{"a\nb": 1}"#).unwrap();
    assert_eq!(value.get("a\nb").unwrap(), &Value::Integer(1));
    assert_malformed(r#"{"a\qb": 1}"#);
}

#[test]
fn parse_preserves_key_order() {
    let value = parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = value.to_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn duplicate_keys_keep_last_value() {
    let value = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    assert_eq!(value.len(), 2);
    assert_eq!(value.get("a").unwrap(), &Value::Integer(3));
}

#[test]
fn reject_trailing_commas() {
    assert_malformed("[1,2,3,]");
    assert_malformed("[1, 2, 3,]");
    assert_malformed(r#"{"a":1,}"#);
    assert_malformed(r#"{"key": "value",}"#);
}

#[test]
fn reject_missing_values_and_separators() {
    assert_malformed(r#"{"key": [1, 2, , 3]}"#);
    assert_malformed(r#"{"valid": 1, "invalid": }"#);
    assert_malformed("[,1]");
    assert_malformed("[1 2]");
    assert_malformed(r#"{"a" 1}"#);
    assert_malformed(r#"{"a":1 "b":2}"#);
    assert_malformed(r#"{"a"}"#);
    assert_malformed(r#"{"a":}"#);
    assert_malformed(r#"{,}"#);
    assert_malformed("[1:2]");
}

#[test]
fn reject_missing_quotes() {
    assert_malformed(r#"{key: "value"}"#);
    assert_malformed(r#"{"key": value}"#);
    assert_malformed(r#"{1: "value"}"#);
}

#[test]
fn reject_missing_braces() {
    assert_malformed(r#"{"key": "value""#);
    assert_malformed(r#""key": "value"}"#);
    assert_malformed("[1, 2");
    assert_malformed("1, 2]");
}

#[test]
fn reject_mismatched_brackets() {
    assert_malformed(r#"[{"key": "value"]}"#);
    assert_malformed(r#"{["key": "value"}]"#);
    assert_malformed("[}");
    assert_malformed("{]");
}

#[test]
fn reject_invalid_characters() {
    assert_malformed(r##"{#"key": "value"}"##);
    assert_malformed("[1, #]");
}

// ============================================================================
// Boundary
// ============================================================================

#[test]
fn reject_empty_and_garbage() {
    assert_malformed("");
    assert_malformed("   ");
    assert_malformed("\n");
    assert_malformed("garbage");
}

#[test]
fn reject_trailing_characters() {
    assert_malformed("{\"k\":1}}");
    assert_malformed("[1] [2]");
    assert_malformed("null x");
    assert_malformed("\"a\" \"b\"");
}

#[test]
fn error_offsets_point_at_the_problem() {
    match parse("[1, 2, x]") {
        Err(JsonError::Malformed { offset, .. }) => assert_eq!(offset, 7),
        other => panic!("unexpected result: {other:?}"),
    }
    match parse("{\"k\":1}  }") {
        Err(JsonError::Malformed { offset, message }) => {
            assert_eq!(offset, 9);
            assert!(message.contains("trailing"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

// ============================================================================
// Nesting depth
// ============================================================================

fn nested_arrays(depth: usize) -> String {
    format!("{}{}", "[".repeat(depth), "]".repeat(depth))
}

#[test]
fn depth_limit_accepts_up_to_limit() {
    let opts = ParseOptions::new().with_max_depth(4);
    assert!(parse_with_options(&nested_arrays(4), &opts).is_ok());
    assert!(parse_with_options("1", &ParseOptions::new().with_max_depth(0)).is_ok());
}

#[test]
fn depth_limit_rejects_deeper_input() {
    let opts = ParseOptions::new().with_max_depth(4);
    let err = parse_with_options(&nested_arrays(5), &opts).unwrap_err();
    assert!(err.is_malformed());

    let err = parse_with_options(r#"{"a":{"b":{"c":[1]}}}"#, &ParseOptions::new().with_max_depth(3))
        .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn default_depth_limit_guards_pathological_input() {
    assert!(parse(&nested_arrays(128)).is_ok());
    assert!(parse(&nested_arrays(100_000)).unwrap_err().is_malformed());
}

#[test]
fn from_str_parses() {
    let value: Value = "[true]".parse().unwrap();
    assert_eq!(value, Value::Array(vec![Value::Bool(true)]));
    assert!("[true".parse::<Value>().is_err());
}

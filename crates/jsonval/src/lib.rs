//! # jsonval
//!
//! An owned JSON value model with a strict, hand-written parser and a minimal serializer.
//!
//! [`Value`] is a tagged union over Bool, Integer (`i64`), Double (`f64`),
//! String, Object and Array, plus Null. Every variant owns its payload, so a
//! value tree is a plain ownership tree: clone to deep-copy, [`Value::take`] to
//! move out, drop to release.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonval::{parse, serialize, Value};
//!
//! // text → Value
//! let mut value = parse(r#"{ "name": "Alice", "scores": [95, 87.5] }"#).unwrap();
//! assert_eq!(value.get("name").unwrap().to_str().unwrap(), "Alice");
//! assert_eq!(value.get("scores").unwrap().at(1).unwrap(), &Value::Double(87.5));
//!
//! // mutate
//! *value.entry("active").unwrap() = Value::from(true);
//!
//! // Value → text (minimal, insertion-ordered)
//! assert_eq!(
//!     serialize(&value),
//!     r#"{"name":"Alice","scores":[95,87.5],"active":true}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, `ValueType`, typed extraction and keyed/indexed access
//! - [`scanner`]: token classification and boundary scanning
//! - [`parser`]: JSON text → `Value`
//! - [`serializer`]: `Value` → JSON text
//! - [`options`]: parser configuration (nesting depth bound)
//! - [`error`]: `JsonError` (malformed input, type mismatch, out of range)
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for `Value`
//! - `tracing`: debug/trace logging from the parser

/// Trace-level logging macro that forwards to `tracing::trace!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

/// Trace-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Debug-level logging macro that forwards to `tracing::debug!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Debug-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use debug;
#[allow(unused_imports)]
pub(crate) use trace;

pub mod error;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod serializer;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{JsonError, Result};
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options};
pub use serializer::{serialize, serialize_into};
pub use value::{Array, Object, Value, ValueType};

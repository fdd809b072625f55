//! Error types for parsing and for typed access to values.

use crate::value::ValueType;
use thiserror::Error;

/// Errors that can occur while parsing JSON text or accessing a [`Value`](crate::Value).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input text does not conform to the JSON grammar.
    /// `offset` is the byte offset where the problem was detected.
    #[error("malformed JSON at offset {offset}: {message}")]
    Malformed { offset: usize, message: String },

    /// A typed extraction or keyed/indexed access hit the wrong variant.
    #[error("type mismatch: expected {expected} but the value is {actual}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },

    /// A keyed or indexed access found no such entry.
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl JsonError {
    pub(crate) fn malformed(offset: usize, message: impl Into<String>) -> Self {
        JsonError::Malformed {
            offset,
            message: message.into(),
        }
    }

    /// Returns true for grammar violations.
    pub fn is_malformed(&self) -> bool {
        matches!(self, JsonError::Malformed { .. })
    }

    /// Returns true for wrong-variant access.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, JsonError::TypeMismatch { .. })
    }

    /// Returns true for missing keys and out-of-bounds indices.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, JsonError::OutOfRange(_))
    }
}

/// Convenience alias used throughout jsonval.
pub type Result<T> = std::result::Result<T, JsonError>;

//! The JSON value model.
//!
//! [`Value`] is a closed sum type: exactly one variant is live at a time and it
//! exclusively owns its payload. Cloning deep-copies the payload, [`Value::take`]
//! moves it out and leaves `Null` behind, and dropping releases it once.
//! Containers hold owned values, so every tree is a strict ownership tree.
//!
//! Objects keep keys in insertion order (`IndexMap`); equality between objects
//! ignores that order.

use crate::error::{JsonError, Result};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Mapping from key to value, in insertion order.
pub type Object = IndexMap<String, Value>;

/// Ordered sequence of values.
pub type Array = Vec<Value>;

/// The tag of a [`Value`], used for type checks and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Integer,
    Double,
    String,
    Object,
    Array,
    Null,
}

impl ValueType {
    /// Display name of the tag (`"Bool"`, `"Integer"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "Bool",
            ValueType::Integer => "Integer",
            ValueType::Double => "Double",
            ValueType::String => "String",
            ValueType::Object => "Object",
            ValueType::Array => "Array",
            ValueType::Null => "Null",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single JSON value.
///
/// Integers and doubles are kept apart: `1` parses to `Integer(1)` and `1.0`
/// to `Double(1.0)`, and the two are not equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Object(Object),
    Array(Array),
    #[default]
    Null,
}

impl Value {
    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Object::new())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Array::new())
    }

    /// The active variant's tag.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Integer(_) => ValueType::Integer,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
            Value::Object(_) => ValueType::Object,
            Value::Array(_) => ValueType::Array,
            Value::Null => ValueType::Null,
        }
    }

    /// Display name of the active variant's tag.
    pub fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Number of elements, entries or bytes for arrays, objects and strings.
    /// Scalars and `Null` report 0.
    pub fn len(&self) -> usize {
        match self {
            Value::String(s) => s.len(),
            Value::Object(map) => map.len(),
            Value::Array(arr) => arr.len(),
            _ => 0,
        }
    }

    /// True for `Null` and for empty strings, objects and arrays.
    /// Booleans and numbers are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Array(arr) => arr.is_empty(),
            Value::Bool(_) | Value::Integer(_) | Value::Double(_) => false,
        }
    }

    /// Moves the payload out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    fn mismatch(&self, expected: ValueType) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            actual: self.value_type(),
        }
    }

    // --- typed extraction ---

    pub fn to_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(ValueType::Bool)),
        }
    }

    pub fn to_int(&self) -> Result<i64> {
        match self {
            Value::Integer(n) => Ok(*n),
            _ => Err(self.mismatch(ValueType::Integer)),
        }
    }

    /// Only `Double` converts; an `Integer` is a type mismatch, not a widening.
    pub fn to_double(&self) -> Result<f64> {
        match self {
            Value::Double(d) => Ok(*d),
            _ => Err(self.mismatch(ValueType::Double)),
        }
    }

    pub fn to_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(ValueType::String)),
        }
    }

    pub fn to_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(ValueType::String)),
        }
    }

    pub fn to_object(&self) -> Result<&Object> {
        match self {
            Value::Object(map) => Ok(map),
            _ => Err(self.mismatch(ValueType::Object)),
        }
    }

    pub fn to_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(map) => Ok(map),
            _ => Err(self.mismatch(ValueType::Object)),
        }
    }

    pub fn to_array(&self) -> Result<&Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            _ => Err(self.mismatch(ValueType::Array)),
        }
    }

    pub fn to_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            _ => Err(self.mismatch(ValueType::Array)),
        }
    }

    // --- keyed / indexed access ---

    /// Look up `key` in an object. A missing key is `OutOfRange`.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.to_object()?
            .get(key)
            .ok_or_else(|| missing_key(key))
    }

    /// Mutable lookup of an existing key. A missing key is `OutOfRange`;
    /// use [`Value::entry`] to insert on demand.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.to_object_mut()?
            .get_mut(key)
            .ok_or_else(|| missing_key(key))
    }

    /// Mutable lookup that inserts `Null` under `key` if it is absent.
    pub fn entry(&mut self, key: impl Into<String>) -> Result<&mut Value> {
        Ok(self.to_object_mut()?.entry(key.into()).or_default())
    }

    /// Element `index` of an array. Out of bounds is `OutOfRange`.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let arr = self.to_array()?;
        let len = arr.len();
        arr.get(index).ok_or_else(|| out_of_bounds(index, len))
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let arr = self.to_array_mut()?;
        let len = arr.len();
        arr.get_mut(index).ok_or_else(|| out_of_bounds(index, len))
    }

    /// Insert into an object, returning the value previously stored under `key`.
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        Ok(self.to_object_mut()?.insert(key.into(), value.into()))
    }

    /// Append to an array.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        self.to_array_mut()?.push(value.into());
        Ok(())
    }
}

fn missing_key(key: &str) -> JsonError {
    JsonError::OutOfRange(format!("no entry for key \"{key}\""))
}

fn out_of_bounds(index: usize, len: usize) -> JsonError {
    JsonError::OutOfRange(format!("index {index} out of bounds for array of length {len}"))
}

// --- constructors ---

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<f32> for Value {
    fn from(d: f32) -> Self {
        Value::Double(f64::from(d))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Writes the minimal JSON text of the value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::serialize(self))
    }
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}

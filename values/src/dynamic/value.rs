use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
};
use core::fmt;

use crate::{Sequence, Timestamp};

use super::{ArrayRef, RecordRef};

/// A dynamically typed element.
///
/// Primitive variants (`Null` through `Date`) are plain data. `Array` and
/// `Record` are handles to shared storage: cloning the `Value` clones the
/// handle, so both clones observe the same nested sequence or record. This is
/// what lets copy-producing operations choose between a shallow copy (clone)
/// and a deep copy ([`crate::deep_copy`]).
///
/// # Example
///
/// ```
/// use arrkit_values::{Kind, Value, seq};
///
/// let v = Value::from("42");
/// assert_eq!(v.kind(), Kind::Str);
///
/// let nested = Value::array(seq![1, 2]);
/// let alias = nested.clone();
/// alias.as_array().unwrap().borrow_mut().push(Value::from(3));
/// assert_eq!(nested.as_array().unwrap().borrow().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(Timestamp),
    Array(ArrayRef),
    Record(RecordRef),
}

/// Runtime kind of a [`Value`].
///
/// `Int` and `Float` share the [`Kind::Number`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    Str,
    Date,
    Array,
    Record,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::Str => "string",
            Kind::Date => "date",
            Kind::Array => "array",
            Kind::Record => "record",
        }
    }

    /// Whether values of this kind are handles to shared storage.
    pub fn is_structured(self) -> bool {
        matches!(self, Kind::Array | Kind::Record)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Wrap a sequence in a fresh shared handle.
    pub fn array(sequence: Sequence) -> Self {
        Value::Array(ArrayRef::new(sequence))
    }

    /// Build a record from `(field, value)` pairs in a fresh shared handle.
    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        let map: BTreeMap<String, Value> = fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Record(RecordRef::new(map))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) | Value::Float(_) => Kind::Number,
            Value::Str(_) => Kind::Str,
            Value::Date(_) => Kind::Date,
            Value::Array(_) => Kind::Array,
            Value::Record(_) => Kind::Record,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The numeric value of an `Int` or `Float`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Timestamp> {
        match self {
            Value::Date(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Whether two values are the same shared handle.
    ///
    /// Always `false` for primitives.
    pub fn same_handle(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Structural equality.
///
/// Numbers compare numerically across `Int` and `Float` (NaN is never
/// equal), dates by instant, and structured values by contents. This is the
/// equality Rust code (and tests) use; array operations compare elements
/// through an `Equivalence` policy instead.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_number() == other.as_number()
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Timestamp> for Value {
    fn from(t: Timestamp) -> Self {
        Value::Date(t)
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Value::array(sequence)
    }
}

impl From<ArrayRef> for Value {
    fn from(array: ArrayRef) -> Self {
        Value::Array(array)
    }
}

impl From<RecordRef> for Value {
    fn from(record: RecordRef) -> Self {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// Shared handles are `Rc`-based: values never cross threads.
static_assertions::assert_impl_all!(Value: Clone, fmt::Debug, fmt::Display);
static_assertions::assert_not_impl_any!(Value: Send, Sync);

//! Deep copying of values.
//!
//! [`deep_copy`] clones a value structurally, one strategy per variant:
//!
//! - primitives (null, bool, numbers, strings) are copied by value;
//! - dates are copied as dates, keeping their instant;
//! - arrays and records are rebuilt element by element into fresh handles,
//!   so the copy shares no storage with the original at any depth.
//!
//! # Example
//!
//! ```
//! use arrkit_values::{Value, deep_copy, seq};
//!
//! let original = Value::array(seq![1, Value::array(seq![2])]);
//! let copy = deep_copy(&original);
//!
//! assert_eq!(copy, original);
//! assert!(!copy.same_handle(&original));
//! ```
//!
//! Structured values must be acyclic; copying an array that contains itself
//! does not terminate.

use alloc::{collections::BTreeMap, string::String};

use crate::{ArrayRef, RecordRef, Value};

/// Copy a value so that no nested storage is shared with `value`.
pub fn deep_copy(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Int(i) => Value::Int(*i),
        Value::Float(x) => Value::Float(*x),
        Value::Str(s) => Value::Str(s.clone()),
        Value::Date(t) => Value::Date(*t),
        Value::Array(array) => Value::Array(ArrayRef::new(array.borrow().deep_copy())),
        Value::Record(record) => {
            let fields: BTreeMap<String, Value> = record
                .borrow()
                .iter()
                .map(|(name, field)| (name.clone(), deep_copy(field)))
                .collect();
            Value::Record(RecordRef::new(fields))
        }
    }
}

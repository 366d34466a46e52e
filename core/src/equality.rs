//! Element equality policies.
//!
//! Every search, count and removal compares elements through an
//! [`Equivalence`]. Two policies are provided:
//!
//! - [`Loose`] (the default): cross-kind comparison with numeric coercion,
//!   so `2`, `2.0`, `"2"` and `" 2 "` are all equal.
//! - [`Strict`]: no coercion between kinds; integers and floats still form
//!   one number kind.
//!
//! Under both policies arrays and records are equal only to themselves (the
//! same shared handle), and dates are equal when they denote the same
//! instant.
//!
//! Any `Fn(&Value, &Value) -> bool` is also an `Equivalence`:
//!
//! ```
//! use arrkit_core::{Arrays, ArrayOptions};
//! use arrkit_values::{Value, seq};
//!
//! let case_insensitive = |a: &Value, b: &Value| match (a.as_str(), b.as_str()) {
//!     (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
//!     _ => false,
//! };
//! let arrays = Arrays::with_equivalence(case_insensitive, ArrayOptions::default());
//! assert_eq!(arrays.count(&seq!["a", "A", "b"], &Value::from("a")), 2);
//! ```

use arrkit_values::Value;

use crate::coerce::{primitive_string, to_number};

/// An equality predicate over elements.
///
/// Implementations must be reflexive for non-NaN primitives and symmetric;
/// transitivity is not required (loose equality is not transitive).
pub trait Equivalence {
    fn equivalent(&self, a: &Value, b: &Value) -> bool;
}

impl<F> Equivalence for F
where
    F: Fn(&Value, &Value) -> bool,
{
    fn equivalent(&self, a: &Value, b: &Value) -> bool {
        self(a, b)
    }
}

/// Coercive equality (number/string/bool cross-comparison).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loose;

/// Kind-preserving equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strict;

impl Equivalence for Loose {
    fn equivalent(&self, a: &Value, b: &Value) -> bool {
        loose_eq(a, b)
    }
}

impl Equivalence for Strict {
    fn equivalent(&self, a: &Value, b: &Value) -> bool {
        strict_eq(a, b)
    }
}

/// Loose equality.
///
/// - `null` equals only `null`.
/// - Numbers compare numerically (NaN equals nothing).
/// - A number and a string compare after converting the string with
///   [`string_to_number`](crate::coerce::string_to_number).
/// - A boolean converts to `0`/`1` and the comparison is retried.
/// - A date equals only a date with the same instant.
/// - Two structured values are equal only if they are the same handle.
/// - A structured value against a primitive compares its primitive string
///   form against the primitive.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    use Value::*;

    match (a, b) {
        (Null, Null) => true,
        (Null, _) | (_, Null) => false,

        (Int(x), Int(y)) => x == y,
        (Int(_) | Float(_), Int(_) | Float(_)) => to_number(a) == to_number(b),
        (Str(x), Str(y)) => x == y,
        (Bool(x), Bool(y)) => x == y,
        (Date(x), Date(y)) => x == y,
        (Date(_), _) | (_, Date(_)) => false,

        (Int(_) | Float(_), Str(_)) | (Str(_), Int(_) | Float(_)) => to_number(a) == to_number(b),

        (Bool(x), other) | (other, Bool(x)) => loose_eq(&Int(*x as i64), other),

        (Array(_) | Record(_), Array(_) | Record(_)) => a.same_handle(b),
        (Array(_) | Record(_), primitive) | (primitive, Array(_) | Record(_)) => {
            let structured = if a.kind().is_structured() { a } else { b };
            loose_eq(&Str(primitive_string(structured)), primitive)
        }
    }
}

/// Strict equality: same kind and same value, structured values by handle.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    use Value::*;

    match (a, b) {
        (Null, Null) => true,
        (Bool(x), Bool(y)) => x == y,
        (Int(x), Int(y)) => x == y,
        (Int(_) | Float(_), Int(_) | Float(_)) => a.as_number() == b.as_number(),
        (Str(x), Str(y)) => x == y,
        (Date(x), Date(y)) => x == y,
        (Array(_), Array(_)) | (Record(_), Record(_)) => a.same_handle(b),
        _ => false,
    }
}

#[cfg(test)]
#[path = "equality_test.rs"]
mod equality_test;

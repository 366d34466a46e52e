//! arrkit - array utilities over dynamically typed sequences
//!
//! # Overview
//!
//! arrkit operates on [`Sequence`]s of [`Value`]s: numbers, strings, booleans,
//! null, dates, and nested arrays and records. Common use cases include:
//!
//! - Searching and counting with numeric-string-aware equality
//! - Summing and squaring loosely typed input
//! - Positional edits (append, prepend, insert, remove) on a shared buffer
//!
//! # Quick Start
//!
//! ```
//! use arrkit::{Arrays, Value, seq};
//!
//! let arrays = Arrays::new();
//!
//! // Loose equality: "2" and 2.0 both match 2
//! let s = seq![1, "2", 2.0, 3];
//! assert_eq!(arrays.count(&s, &Value::from(2)), 2);
//! assert_eq!(arrays.find_all_occurrences(&s, &Value::from(2)), vec![1, 2]);
//!
//! // Numeric coercion: non-numeric elements count as 0
//! assert_eq!(arrays.sum_coerced(&seq!["3", "2", 4, "x"]), 9);
//!
//! // In-place edits hand back the same sequence
//! let mut s = seq![1, 2, 4];
//! arrays.insert_at(&mut s, Value::from(3), 2)?;
//! assert_eq!(s, seq![1, 2, 3, 4]);
//! # Ok::<(), arrkit::Error>(())
//! ```
//!
//! # Edge Cases
//!
//! Removing from an empty sequence and inserting outside `0..=len` are
//! rejected by default. [`ArrayOptions`] selects the lenient behaviour:
//!
//! ```
//! use arrkit::{ArrayOptions, Arrays, EmptyPolicy, Error, IndexPolicy, Value, seq};
//!
//! let mut empty = seq![];
//! assert_eq!(
//!     Arrays::new().truncate(&mut empty).unwrap_err(),
//!     Error::EmptySequence { operation: "truncate" }
//! );
//!
//! let lenient = Arrays::with_options(ArrayOptions {
//!     empty: EmptyPolicy::Ignore,
//!     index: IndexPolicy::Clamp,
//! });
//! assert!(lenient.truncate(&mut empty).is_ok());
//! lenient.insert_at(&mut empty, Value::from("z"), 99).unwrap();
//! assert_eq!(empty, seq!["z"]);
//! ```
//!
//! # Dynamic Calls
//!
//! The same operations are available by name through the `Array` package,
//! taking and returning [`Value`]s:
//!
//! ```
//! use arrkit::{Arrays, Package, Value, build_array_package, seq};
//!
//! let package: Package = build_array_package();
//! let s = Value::array(seq![1, 2, 2, 3]);
//!
//! let result = package
//!     .call("RemoveInPlace", &Arrays::new(), &[s.clone(), Value::from(2)])
//!     .unwrap();
//! assert!(result.same_handle(&s));
//! assert_eq!(s, Value::array(seq![1, 3]));
//! ```

// Re-export public API from arrkit_core
pub use arrkit_core::{
    ArrayOptions, ArrayOptionsOverride, Arrays, EmptyPolicy, Equivalence, Error, IndexPolicy,
    Loose, NativeFunction, Package, Result, Strict, build_array_package,
};
pub use arrkit_core::{coerce, equality, stdlib};

// Re-export the value model
pub use arrkit_values::{
    self as values, ArrayRef, Kind, RecordRef, Sequence, Timestamp, Value, deep_copy, record, seq,
};

//! Array utilities over dynamically typed sequences.
//!
//! - [`Arrays`]: the operations, parameterized by an element
//!   [`Equivalence`](equality::Equivalence) and [`ArrayOptions`].
//! - [`coerce`]: the numeric coercions used by the summing and squaring
//!   operations and by loose equality.
//! - [`stdlib`]: the operations as named native functions over [`Value`]s.

#![deny(unsafe_code)]

pub mod api;
pub mod arrays;
pub mod coerce;
pub mod equality;
pub mod stdlib;

pub use api::{ArrayOptions, ArrayOptionsOverride, EmptyPolicy, Error, IndexPolicy, Result};
pub use arrays::Arrays;
pub use equality::{Equivalence, Loose, Strict};
pub use stdlib::{NativeFunction, Package, build_array_package};

pub use arrkit_values as values;
pub use arrkit_values::{Sequence, Value};

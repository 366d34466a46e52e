//! Dynamically typed values.

mod array;
mod display;
mod value;

pub use array::{ArrayRef, RecordRef};
pub use display::number_to_string;
pub use value::{Kind, Value};

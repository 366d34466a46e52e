//! Construction macros for sequences and records.
//!
//! # Example
//!
//! ```
//! use arrkit_values::{Value, record, seq};
//!
//! let s = seq![1, "2", 3.5, true];
//! assert_eq!(s.len(), 4);
//!
//! let r = record! { "name" => "Ada", "born" => 1815 };
//! assert_eq!(r.as_record().unwrap().get("born"), Some(Value::Int(1815)));
//! ```

/// Build a [`Sequence`](crate::Sequence), converting each element with
/// `Value::from`.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Sequence::from($crate::shim::vec![$($crate::Value::from($item)),+])
    };
}

/// Build a [`Value::Record`](crate::Value::Record) from `field => value`
/// pairs, converting each value with `Value::from`.
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::record::<&str>([])
    };
    ($($field:expr => $value:expr),+ $(,)?) => {
        $crate::Value::record([$(($field, $crate::Value::from($value))),+])
    };
}

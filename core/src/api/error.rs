//! Error types reported by array operations.
//!
//! Only precondition violations are errors. Non-numeric elements met during
//! numeric coercion are recovered as zero and never reach this type.

use arrkit_values::{Kind, SequenceError};

/// Result alias used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by [`Arrays`](crate::Arrays) and the `Array` package.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `truncate`/`curtail` on a zero-length sequence under
    /// [`EmptyPolicy::Reject`](crate::EmptyPolicy::Reject).
    #[error("{operation}: cannot remove an element from an empty sequence")]
    EmptySequence { operation: &'static str },

    /// Insertion position outside `0..=len` under
    /// [`IndexPolicy::Reject`](crate::IndexPolicy::Reject).
    #[error("{operation}: index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        operation: &'static str,
        index: i128,
        len: usize,
    },

    /// An argument of the wrong kind was passed through the dynamic package.
    #[error("{operation}: argument {position} must be {expected}, found {found}")]
    WrongKind {
        operation: &'static str,
        position: usize,
        expected: Kind,
        found: Kind,
    },

    /// Wrong number of arguments passed through the dynamic package.
    #[error("{operation}: expected {expected} argument(s), found {found}")]
    Arity {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

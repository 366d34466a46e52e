//! Value model for arrkit.
//!
//! - [`Value`]: a dynamically typed element (numbers, strings, dates, nested
//!   arrays and records).
//! - [`Sequence`]: the owned buffer array operations work on, with explicit
//!   shift routines for positional edits.
//! - [`deep_copy`]: per-variant structural cloning.
//! - [`Timestamp`]: the temporal value.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// Lets the exported macros refer to `vec!` without the caller importing alloc.
#[doc(hidden)]
pub mod shim {
    pub use alloc::vec;
}

mod macros;

pub mod copy;
pub mod dynamic;
pub mod sequence;
pub mod timestamp;

pub use copy::deep_copy;
pub use dynamic::{ArrayRef, Kind, RecordRef, Value, number_to_string};
pub use sequence::{Sequence, SequenceError};
pub use timestamp::Timestamp;

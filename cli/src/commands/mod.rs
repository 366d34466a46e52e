//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod eval;
pub mod list;

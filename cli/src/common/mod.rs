//! Common utilities shared across CLI commands.

pub mod error;
pub mod json;

pub use error::CliResult;

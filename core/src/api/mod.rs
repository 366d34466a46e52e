//! Public configuration and error types.

pub mod error;
pub mod options;

pub use error::{Error, Result};
pub use options::{ArrayOptions, ArrayOptionsOverride, EmptyPolicy, IndexPolicy};

//! Native function packages.
//!
//! A [`Package`] is a named table of [`NativeFunction`]s that take and
//! return dynamic [`Value`]s, so the array operations can be called by name
//! with positional arguments (this is what the `arrkit` CLI does). Functions
//! are registered with `register_*_functions`, and `build_*_package` creates
//! a package holding them.
//!
//! - Array: the array utility operations of [`Arrays`]

use core::fmt;

use arrkit_values::Value;

use crate::{
    api::{Error, Result},
    arrays::Arrays,
    equality::{Equivalence, Loose},
};

pub mod array;

pub use array::{build_array_package, register_array_functions};

/// Signature shared by every native function.
pub type NativeFn<E> = fn(&Arrays<E>, &[Value]) -> Result<Value>;

/// A native function with the metadata needed to list and call it.
pub struct NativeFunction<E = Loose> {
    pub name: &'static str,
    pub arity: usize,
    /// One-line description shown by `arrkit list`.
    pub summary: &'static str,
    pub ptr: NativeFn<E>,
}

impl<E: Equivalence> NativeFunction<E> {
    /// Add this function to `package`.
    ///
    /// # Panics
    ///
    /// Panics if `package` already has a function with the same name.
    pub fn register(self, package: Package<E>) -> Package<E> {
        package.bind(self)
    }

    /// Check the argument count, then run the function.
    pub fn call(&self, arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
        if args.len() != self.arity {
            tracing::debug!(function = self.name, expected = self.arity, found = args.len(), "Arity mismatch");
            return Err(Error::Arity {
                operation: self.name,
                expected: self.arity,
                found: args.len(),
            });
        }
        (self.ptr)(arrays, args)
    }
}

impl<E> Clone for NativeFunction<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for NativeFunction<E> {}

impl<E> fmt::Debug for NativeFunction<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A named collection of native functions, kept in registration order.
pub struct Package<E = Loose> {
    name: &'static str,
    functions: Vec<NativeFunction<E>>,
}

impl<E: Equivalence> Package<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            functions: Vec::new(),
        }
    }

    /// Builder-style registration.
    ///
    /// # Panics
    ///
    /// Panics on a duplicate function name. This indicates a bug in the
    /// package definition.
    pub fn bind(mut self, function: NativeFunction<E>) -> Self {
        assert!(
            self.get(function.name).is_none(),
            "duplicate binding `{}` in package `{}`",
            function.name,
            self.name
        );
        self.functions.push(function);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, name: &str) -> Option<&NativeFunction<E>> {
        self.functions.iter().find(|function| function.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NativeFunction<E>> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look up `name` and call it with `args`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownFunction`] if no function is registered under `name`,
    /// otherwise whatever the function reports.
    pub fn call(&self, name: &str, arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
        let function = self.get(name).ok_or_else(|| {
            tracing::debug!(package = self.name, function = name, "Unknown function");
            Error::UnknownFunction(name.to_string())
        })?;
        tracing::trace!(package = self.name, function = name, args = args.len(), "Calling native function");
        function.call(arrays, args)
    }
}

impl<E> fmt::Debug for Package<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Package")
            .field("name", &self.name)
            .field("functions", &self.functions)
            .finish()
    }
}

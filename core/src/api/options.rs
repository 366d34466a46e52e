//! Configuration for the edge-case policies of array operations.
//!
//! Follows the options/override split: [`ArrayOptions`] is a complete set of
//! settings, [`ArrayOptionsOverride`] names only the settings a caller wants
//! to change.
//!
//! ```
//! use arrkit_core::{ArrayOptions, ArrayOptionsOverride, EmptyPolicy, IndexPolicy};
//!
//! let mut options = ArrayOptions::default();
//! options.override_with(&ArrayOptionsOverride {
//!     index: Some(IndexPolicy::Clamp),
//!     ..Default::default()
//! });
//!
//! assert_eq!(options.empty, EmptyPolicy::Reject);
//! assert_eq!(options.index, IndexPolicy::Clamp);
//! ```

/// What `truncate` and `curtail` do with an empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EmptyPolicy {
    /// Report [`Error::EmptySequence`](crate::Error::EmptySequence).
    #[default]
    Reject,
    /// Leave the sequence empty and succeed.
    Ignore,
}

/// What `insert_at` does with a position outside `0..=len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IndexPolicy {
    /// Report [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange).
    #[default]
    Reject,
    /// Clamp the position into `0..=len`.
    Clamp,
}

/// Edge-case policies applied by [`Arrays`](crate::Arrays).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArrayOptions {
    pub empty: EmptyPolicy,
    pub index: IndexPolicy,
}

/// Partial [`ArrayOptions`]; `None` keeps the current setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayOptionsOverride {
    pub empty: Option<EmptyPolicy>,
    pub index: Option<IndexPolicy>,
}

impl ArrayOptions {
    /// Apply every setting present in `overrides`.
    pub fn override_with(&mut self, overrides: &ArrayOptionsOverride) {
        if let Some(empty) = overrides.empty {
            self.empty = empty;
        }
        if let Some(index) = overrides.index {
            self.index = index;
        }
    }

    /// Builder-style variant of [`ArrayOptions::override_with`].
    pub fn with_override(mut self, overrides: &ArrayOptionsOverride) -> Self {
        self.override_with(overrides);
        self
    }
}

//! The array utility namespace.
//!
//! [`Arrays`] bundles an element [`Equivalence`] with the [`ArrayOptions`]
//! that decide the edge cases, and exposes every array operation as a method.
//! Operations fall into three groups:
//!
//! - read-only queries (`linear_find`, `sum_coerced`, `count`,
//!   `find_all_occurrences`);
//! - copy-producing operations returning a fresh [`Sequence`]
//!   (`remove_copy`, `concat`, `find_duplicates`, `square_coerced`);
//! - in-place operations that mutate the sequence they are given and hand
//!   the same sequence back (`remove_in_place`, `append`, `truncate`,
//!   `prepend`, `curtail`, `insert_at`).
//!
//! # Example
//!
//! ```
//! use arrkit_core::Arrays;
//! use arrkit_values::{Value, seq};
//!
//! let arrays = Arrays::new();
//! let mut s = seq![1, 2, 2, 3];
//!
//! assert_eq!(arrays.count(&s, &Value::from("2")), 2);
//! arrays.remove_in_place(&mut s, &Value::from(2));
//! assert_eq!(s, seq![1, 3]);
//! ```

use arrkit_values::{Sequence, Value, deep_copy};

use crate::{
    api::{ArrayOptions, EmptyPolicy, Error, IndexPolicy, Result},
    coerce::coerce_to_int,
    equality::{Equivalence, Loose},
};

/// Array operations parameterized by an element equality policy.
#[derive(Debug, Clone, Default)]
pub struct Arrays<E = Loose> {
    equivalence: E,
    options: ArrayOptions,
}

impl Arrays<Loose> {
    /// Loose equality and default (rejecting) options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ArrayOptions) -> Self {
        Self {
            equivalence: Loose,
            options,
        }
    }
}

impl<E: Equivalence> Arrays<E> {
    pub fn with_equivalence(equivalence: E, options: ArrayOptions) -> Self {
        Self {
            equivalence,
            options,
        }
    }

    pub fn options(&self) -> &ArrayOptions {
        &self.options
    }

    pub fn equivalence(&self) -> &E {
        &self.equivalence
    }

    fn matches(&self, element: &Value, item: &Value) -> bool {
        self.equivalence.equivalent(element, item)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Index of the first element equal to `item`, scanning every element
    /// from the front. Sortedness is never assumed.
    pub fn linear_find(&self, seq: &Sequence, item: &Value) -> Option<usize> {
        seq.iter().position(|element| self.matches(element, item))
    }

    /// Sum of every element coerced with
    /// [`coerce_to_int`](crate::coerce::coerce_to_int).
    ///
    /// Non-numeric elements count as `0`. The sum saturates at the bounds of
    /// `i64`.
    pub fn sum_coerced(&self, seq: &Sequence) -> i64 {
        let mut recovered = 0usize;
        let sum = seq.iter().fold(0i64, |acc, element| {
            let coerced = coerce_to_int(element);
            recovered += coerced.recovered as usize;
            acc.saturating_add(coerced.value)
        });
        if recovered > 0 {
            tracing::debug!(recovered, len = seq.len(), "sum_coerced: non-numeric elements counted as zero");
        }
        sum
    }

    /// Number of elements equal to `item`.
    pub fn count(&self, seq: &Sequence, item: &Value) -> usize {
        seq.iter().filter(|element| self.matches(element, item)).count()
    }

    /// Every index holding an element equal to `target`, ascending.
    pub fn find_all_occurrences(&self, seq: &Sequence, target: &Value) -> Vec<usize> {
        seq.iter()
            .enumerate()
            .filter(|(_, element)| self.matches(element, target))
            .map(|(index, _)| index)
            .collect()
    }

    // ========================================================================
    // Copy-producing operations
    // ========================================================================

    /// A new sequence holding a deep copy of every element not equal to
    /// `item`. `seq` is left untouched.
    ///
    /// Each kept element is copied according to its own kind, so dates stay
    /// dates and nested arrays get fresh storage.
    pub fn remove_copy(&self, seq: &Sequence, item: &Value) -> Sequence {
        seq.iter()
            .filter(|element| !self.matches(element, item))
            .map(deep_copy)
            .collect()
    }

    /// `first` followed by `second`. Elements are cloned shallowly: nested
    /// arrays and records are shared with the inputs.
    pub fn concat(&self, first: &Sequence, second: &Sequence) -> Sequence {
        let mut result = Sequence::with_capacity(first.len() + second.len());
        result.extend(first.iter().cloned());
        result.extend(second.iter().cloned());
        result
    }

    /// Each value that occurs more than once, reported once, in the order in
    /// which its first repeat is met.
    ///
    /// Membership is checked by linear scans through the equivalence, so any
    /// [`Equivalence`] works, including non-transitive ones. The element
    /// reported is the one found at the first repeat.
    pub fn find_duplicates(&self, seq: &Sequence) -> Sequence {
        let mut seen_once: Vec<&Value> = Vec::new();
        let mut repeated = Sequence::new();

        for element in seq {
            if !seen_once.iter().any(|seen| self.matches(seen, element)) {
                seen_once.push(element);
            } else if !repeated.iter().any(|found| self.matches(found, element)) {
                repeated.push(element.clone());
            }
        }
        repeated
    }

    /// A new sequence of every element coerced with
    /// [`coerce_to_int`](crate::coerce::coerce_to_int) and squared.
    ///
    /// Squares saturate at `i64::MAX`.
    pub fn square_coerced(&self, seq: &Sequence) -> Sequence {
        let mut recovered = 0usize;
        let squares = seq
            .iter()
            .map(|element| {
                let coerced = coerce_to_int(element);
                recovered += coerced.recovered as usize;
                Value::Int(coerced.value.saturating_mul(coerced.value))
            })
            .collect();
        if recovered > 0 {
            tracing::debug!(recovered, len = seq.len(), "square_coerced: non-numeric elements counted as zero");
        }
        squares
    }

    // ========================================================================
    // In-place operations
    // ========================================================================

    /// Remove every element equal to `item`, shifting later elements left.
    pub fn remove_in_place<'s>(&self, seq: &'s mut Sequence, item: &Value) -> &'s mut Sequence {
        let removed = seq.retain_shifting(|element| !self.matches(element, item));
        tracing::trace!(removed, len = seq.len(), "remove_in_place");
        seq
    }

    pub fn append<'s>(&self, seq: &'s mut Sequence, item: Value) -> &'s mut Sequence {
        seq.push(item);
        seq
    }

    /// Remove the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if `seq` is empty and the empty policy is
    /// [`EmptyPolicy::Reject`].
    pub fn truncate<'s>(&self, seq: &'s mut Sequence) -> Result<&'s mut Sequence> {
        match seq.pop() {
            Some(_) => Ok(seq),
            None => self.on_empty("truncate", seq),
        }
    }

    /// Write `item` at index 0, shifting every element one slot right.
    pub fn prepend<'s>(&self, seq: &'s mut Sequence, item: Value) -> &'s mut Sequence {
        // In bounds: 0 <= len always holds.
        let _ = seq.shift_right_from(0, item);
        seq
    }

    /// Remove the first element, shifting every other element one slot left.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if `seq` is empty and the empty policy is
    /// [`EmptyPolicy::Reject`].
    pub fn curtail<'s>(&self, seq: &'s mut Sequence) -> Result<&'s mut Sequence> {
        if seq.is_empty() {
            return self.on_empty("curtail", seq);
        }
        seq.shift_left_onto(0)?;
        Ok(seq)
    }

    /// Write `item` at `index`, shifting elements at `index..` one slot
    /// right. `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len` and the index policy is
    /// [`IndexPolicy::Reject`]. Under [`IndexPolicy::Clamp`] such an index
    /// appends.
    pub fn insert_at<'s>(
        &self,
        seq: &'s mut Sequence,
        item: Value,
        index: usize,
    ) -> Result<&'s mut Sequence> {
        let position = self.insert_position(index as i128, seq.len())?;
        seq.shift_right_from(position, item)?;
        Ok(seq)
    }

    /// Resolve a possibly negative insertion index against `len` using the
    /// index policy. `i128` holds both `usize` and `i64` indices unchanged.
    pub(crate) fn insert_position(&self, index: i128, len: usize) -> Result<usize> {
        match usize::try_from(index) {
            Ok(position) if position <= len => return Ok(position),
            _ => {}
        }

        match self.options.index {
            IndexPolicy::Reject => {
                tracing::debug!(index, len, "insert_at: index rejected");
                Err(Error::IndexOutOfRange {
                    operation: "insert_at",
                    index,
                    len,
                })
            }
            IndexPolicy::Clamp => {
                let position = if index < 0 { 0 } else { len };
                tracing::debug!(index, len, position, "insert_at: index clamped");
                Ok(position)
            }
        }
    }

    fn on_empty<'s>(
        &self,
        operation: &'static str,
        seq: &'s mut Sequence,
    ) -> Result<&'s mut Sequence> {
        match self.options.empty {
            EmptyPolicy::Reject => {
                tracing::debug!(operation, "Rejected removal from an empty sequence");
                Err(Error::EmptySequence { operation })
            }
            EmptyPolicy::Ignore => {
                tracing::debug!(operation, "Removal from an empty sequence ignored");
                Ok(seq)
            }
        }
    }
}

#[cfg(test)]
#[path = "arrays_test.rs"]
mod arrays_test;

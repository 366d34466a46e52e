//! The owned, ordered buffer that every array operation works on.
//!
//! A [`Sequence`] keeps its length consistent at all times: there are no
//! holes, and every slot in `[0, len)` holds a [`Value`]. Positional edits go
//! through two explicit shift routines whose iteration direction never
//! overwrites data that has not been moved yet:
//!
//! - [`Sequence::shift_right_from`] walks from the highest index down (used
//!   by insertions).
//! - [`Sequence::shift_left_onto`] walks from the lowest index up (used by
//!   removals).

use alloc::vec::Vec;
use core::slice;

use crate::Value;

/// Errors raised by the bounds-checked shift routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// An ordered, growable list of dynamically typed values.
///
/// Cloning a `Sequence` is shallow: structured elements (arrays, records)
/// keep pointing at the same shared storage. Use [`Sequence::deep_copy`] for
/// an independent copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    items: Vec<Value>,
}

impl Sequence {
    pub const fn new() -> Self {
        Sequence { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    /// Write `value` at position `len`, growing the sequence by one.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Open a slot at `index` and write `value` into it.
    ///
    /// Every element at a position `>= index` moves one slot to the right.
    /// The move starts at the (new) highest index and walks down to
    /// `index + 1`, so no element is overwritten before it has moved.
    ///
    /// `index == len` is allowed and behaves like [`Sequence::push`].
    pub fn shift_right_from(&mut self, index: usize, value: Value) -> Result<(), SequenceError> {
        let len = self.len();
        if index > len {
            return Err(SequenceError::IndexOutOfRange { index, len });
        }

        // The new tail slot receives the old last element on the first step.
        self.items.push(value);
        let mut i = len;
        while i > index {
            self.items.swap(i, i - 1);
            i -= 1;
        }
        Ok(())
    }

    /// Close the slot at `index`, returning the element that occupied it.
    ///
    /// Every element after `index` moves one slot to the left. The move
    /// starts at `index` and walks up, then the duplicated trailing slot is
    /// dropped so the length shrinks by one.
    pub fn shift_left_onto(&mut self, index: usize) -> Result<Value, SequenceError> {
        let len = self.len();
        if index >= len {
            return Err(SequenceError::IndexOutOfRange { index, len });
        }

        for i in index..len - 1 {
            self.items.swap(i, i + 1);
        }
        // The removed element has bubbled up into the trailing slot.
        self.items
            .pop()
            .ok_or(SequenceError::IndexOutOfRange { index, len })
    }

    /// Keep only the elements for which `keep` returns `true`.
    ///
    /// Removal goes through [`Sequence::shift_left_onto`]; the cursor only
    /// advances past elements that are kept, so consecutive matches are all
    /// visited.
    pub fn retain_shifting(&mut self, mut keep: impl FnMut(&Value) -> bool) -> usize {
        let mut removed = 0;
        let mut i = 0;
        while i < self.len() {
            if keep(&self.items[i]) {
                i += 1;
            } else {
                // In bounds: i < len was just checked.
                let _ = self.shift_left_onto(i);
                removed += 1;
            }
        }
        removed
    }

    /// A copy where every structured element is independently duplicated.
    pub fn deep_copy(&self) -> Sequence {
        self.items.iter().map(crate::deep_copy).collect()
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(items: Vec<Value>) -> Self {
        Sequence { items }
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for Sequence {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Sequence {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl core::ops::Index<usize> for Sequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

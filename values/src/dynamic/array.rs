use alloc::{
    collections::BTreeMap,
    rc::Rc,
    string::String,
};
use core::{
    cell::{BorrowError, Ref, RefCell, RefMut},
    fmt,
};

use crate::{Sequence, Value};

/// A shared, mutable handle to a nested [`Sequence`].
///
/// Two handles are the *same* array when they point at the same storage
/// ([`ArrayRef::ptr_eq`]); that is the identity loose equality uses for
/// structured values.
#[derive(Clone, Default)]
pub struct ArrayRef(Rc<RefCell<Sequence>>);

impl ArrayRef {
    pub fn new(sequence: Sequence) -> Self {
        ArrayRef(Rc::new(RefCell::new(sequence)))
    }

    /// Immutably borrow the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, Sequence> {
        self.0.borrow()
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, Sequence>, BorrowError> {
        self.0.try_borrow()
    }

    /// Mutably borrow the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Sequence> {
        self.0.borrow_mut()
    }

    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A shallow snapshot of the current contents.
    pub fn to_sequence(&self) -> Sequence {
        self.0.borrow().clone()
    }
}

impl PartialEq for ArrayRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(seq) => f.debug_tuple("ArrayRef").field(&*seq).finish(),
            Err(_) => f.write_str("ArrayRef(<borrowed>)"),
        }
    }
}

/// A shared, mutable handle to a record (string keys, sorted).
#[derive(Clone, Default)]
pub struct RecordRef(Rc<RefCell<BTreeMap<String, Value>>>);

impl RecordRef {
    pub fn new(fields: BTreeMap<String, Value>) -> Self {
        RecordRef(Rc::new(RefCell::new(fields)))
    }

    pub fn borrow(&self) -> Ref<'_, BTreeMap<String, Value>> {
        self.0.borrow()
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, BTreeMap<String, Value>>, BorrowError> {
        self.0.try_borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, BTreeMap<String, Value>> {
        self.0.borrow_mut()
    }

    pub fn ptr_eq(&self, other: &RecordRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Clone of the field's value (shallow for structured values).
    pub fn get(&self, field: &str) -> Option<Value> {
        self.0.borrow().get(field).cloned()
    }

    pub fn insert(&self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.borrow_mut().insert(field.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(fields) => f.debug_tuple("RecordRef").field(&*fields).finish(),
            Err(_) => f.write_str("RecordRef(<borrowed>)"),
        }
    }
}

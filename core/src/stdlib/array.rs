//! `Array` package: the array operations over dynamic values.
//!
//! Sequences are passed as [`Value::Array`] handles. In-place functions
//! mutate the sequence behind the handle and return that same handle, so the
//! caller observes the change through every other copy of it. Copy-producing
//! functions return a new handle.
use arrkit_values::{ArrayRef, Kind, Sequence, Value};

use super::{NativeFunction, Package};
use crate::{
    api::{Error, Result},
    arrays::Arrays,
    equality::Equivalence,
};

// ============================================================================
// Argument Helpers
// ============================================================================

fn expect_array<'v>(operation: &'static str, args: &'v [Value], position: usize) -> Result<&'v ArrayRef> {
    let value = &args[position];
    value.as_array().ok_or_else(|| wrong_kind(operation, position, Kind::Array, value))
}

/// Read an integer argument. Finite floats truncate toward zero.
fn expect_index(operation: &'static str, args: &[Value], position: usize) -> Result<i64> {
    match &args[position] {
        Value::Int(i) => Ok(*i),
        Value::Float(x) if x.is_finite() => Ok(x.trunc() as i64),
        other => Err(wrong_kind(operation, position, Kind::Number, other)),
    }
}

fn wrong_kind(operation: &'static str, position: usize, expected: Kind, found: &Value) -> Error {
    tracing::debug!(operation, position, %expected, found = %found.kind(), "Argument of the wrong kind");
    Error::WrongKind {
        operation,
        // Reported 1-based.
        position: position + 1,
        expected,
        found: found.kind(),
    }
}

/// Run `edit` on a snapshot of the sequence and store the result back.
///
/// Element comparisons may need to read other handles, including this one,
/// so no mutable borrow is held while `edit` runs. On error the sequence is
/// left as it was.
fn edit_in_place(array: &ArrayRef, edit: impl FnOnce(&mut Sequence) -> Result<()>) -> Result<Value> {
    let mut seq = array.to_sequence();
    edit(&mut seq)?;
    *array.borrow_mut() = seq;
    Ok(Value::Array(array.clone()))
}

fn index_value(index: Option<usize>) -> Value {
    match index {
        Some(index) => Value::from(index),
        None => Value::Int(-1),
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Index of the first element equal to the item, or `-1`.
///
/// # Examples
/// - `LinearFind([5, 7, 7], 7)` → `1`
/// - `LinearFind([5, "7"], 7)` → `1`
/// - `LinearFind([5], 9)` → `-1`
fn array_linear_find<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 2);
    let array = expect_array("LinearFind", args, 0)?;
    let seq = array.borrow();
    Ok(index_value(arrays.linear_find(&seq, &args[1])))
}

/// Sum of the elements coerced to integers.
///
/// # Examples
/// - `SumCoerced(["3", "2", 4, "x"])` → `9`
fn array_sum_coerced<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 1);
    let array = expect_array("SumCoerced", args, 0)?;
    let seq = array.borrow();
    Ok(Value::Int(arrays.sum_coerced(&seq)))
}

fn array_count<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 2);
    let array = expect_array("Count", args, 0)?;
    let seq = array.borrow();
    Ok(Value::from(arrays.count(&seq, &args[1])))
}

/// # Examples
/// - `FindAllOccurrences([1, 2, 1, 3, 1], 1)` → `[0, 2, 4]`
/// - `FindAllOccurrences([1, 2], 5)` → `[]`
fn array_find_all_occurrences<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 2);
    let array = expect_array("FindAllOccurrences", args, 0)?;
    let indices = arrays.find_all_occurrences(&array.borrow(), &args[1]);
    Ok(Value::array(indices.into_iter().map(Value::from).collect()))
}

// ============================================================================
// Copy-producing Functions
// ============================================================================

/// Deep copy without the elements equal to the item.
///
/// # Examples
/// - `RemoveCopy([1, 2, "2", 3], 2)` → `[1, 3]`
fn array_remove_copy<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 2);
    let array = expect_array("RemoveCopy", args, 0)?;
    let result = arrays.remove_copy(&array.borrow(), &args[1]);
    Ok(Value::array(result))
}

/// # Examples
/// - `Concat([1, 2], [3, 4])` → `[1, 2, 3, 4]`
/// - `Concat([], [])` → `[]`
fn array_concat<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 2);
    let first = expect_array("Concat", args, 0)?;
    let second = expect_array("Concat", args, 1)?;
    let result = arrays.concat(&first.borrow(), &second.borrow());
    Ok(Value::array(result))
}

/// # Examples
/// - `FindDuplicates([1, 2, 2, 3, 3, 3, 4])` → `[2, 3]`
fn array_find_duplicates<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 1);
    let array = expect_array("FindDuplicates", args, 0)?;
    let result = arrays.find_duplicates(&array.borrow());
    Ok(Value::array(result))
}

/// # Examples
/// - `SquareCoerced(["2", "3", 4])` → `[4, 9, 16]`
fn array_square_coerced<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 1);
    let array = expect_array("SquareCoerced", args, 0)?;
    let result = arrays.square_coerced(&array.borrow());
    Ok(Value::array(result))
}

// ============================================================================
// In-place Functions
// ============================================================================

/// # Examples
/// - `RemoveInPlace([1, 2, 2, 3], 2)` → `[1, 3]` (same handle)
fn array_remove_in_place<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 2);
    let array = expect_array("RemoveInPlace", args, 0)?;
    edit_in_place(array, |seq| {
        arrays.remove_in_place(seq, &args[1]);
        Ok(())
    })
}

fn array_append<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 2);
    let array = expect_array("Append", args, 0)?;
    edit_in_place(array, |seq| {
        arrays.append(seq, args[1].clone());
        Ok(())
    })
}

/// # Edge Cases
///
/// - Empty sequence: error under the reject policy, no-op under ignore.
fn array_truncate<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 1);
    let array = expect_array("Truncate", args, 0)?;
    edit_in_place(array, |seq| arrays.truncate(seq).map(drop))
}

fn array_prepend<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 2);
    let array = expect_array("Prepend", args, 0)?;
    edit_in_place(array, |seq| {
        arrays.prepend(seq, args[1].clone());
        Ok(())
    })
}

/// # Edge Cases
///
/// - Empty sequence: error under the reject policy, no-op under ignore.
fn array_curtail<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 1);
    let array = expect_array("Curtail", args, 0)?;
    edit_in_place(array, |seq| arrays.curtail(seq).map(drop))
}

/// Insert the item at the index.
///
/// # Edge Cases
///
/// - Index equal to the length appends.
/// - Index above the length or negative: error under the reject policy;
///   under the clamp policy negative indices insert at 0 and large ones
///   append.
///
/// # Examples
/// - `InsertAt([1, 2, 4], 3, 2)` → `[1, 2, 3, 4]`
fn array_insert_at<E: Equivalence>(arrays: &Arrays<E>, args: &[Value]) -> Result<Value> {
    debug_assert_eq!(args.len(), 3);
    let array = expect_array("InsertAt", args, 0)?;
    let index = expect_index("InsertAt", args, 2)?;
    edit_in_place(array, |seq| {
        let position = arrays.insert_position(index.into(), seq.len())?;
        arrays.insert_at(seq, args[1].clone(), position).map(drop)
    })
}

// ============================================================================
// Package Registration
// ============================================================================

/// Registers all functions from the Array package into `package`.
pub fn register_array_functions<E: Equivalence>(mut package: Package<E>) -> Package<E> {
    // Queries
    package = NativeFunction {
        name: "LinearFind",
        arity: 2,
        summary: "Index of the first element equal to the item, or -1",
        ptr: array_linear_find,
    }
    .register(package);

    package = NativeFunction {
        name: "SumCoerced",
        arity: 1,
        summary: "Sum of the elements coerced to integers (non-numeric counts as 0)",
        ptr: array_sum_coerced,
    }
    .register(package);

    // Copy-producing
    package = NativeFunction {
        name: "RemoveCopy",
        arity: 2,
        summary: "Deep copy without the elements equal to the item",
        ptr: array_remove_copy,
    }
    .register(package);

    // In-place
    package = NativeFunction {
        name: "RemoveInPlace",
        arity: 2,
        summary: "Remove every element equal to the item",
        ptr: array_remove_in_place,
    }
    .register(package);

    package = NativeFunction {
        name: "Append",
        arity: 2,
        summary: "Add the item at the end",
        ptr: array_append,
    }
    .register(package);

    package = NativeFunction {
        name: "Truncate",
        arity: 1,
        summary: "Remove the last element",
        ptr: array_truncate,
    }
    .register(package);

    package = NativeFunction {
        name: "Prepend",
        arity: 2,
        summary: "Add the item at the front",
        ptr: array_prepend,
    }
    .register(package);

    package = NativeFunction {
        name: "Curtail",
        arity: 1,
        summary: "Remove the first element",
        ptr: array_curtail,
    }
    .register(package);

    package = NativeFunction {
        name: "Concat",
        arity: 2,
        summary: "First sequence followed by the second (shallow)",
        ptr: array_concat,
    }
    .register(package);

    package = NativeFunction {
        name: "InsertAt",
        arity: 3,
        summary: "Insert the item at the index",
        ptr: array_insert_at,
    }
    .register(package);

    package = NativeFunction {
        name: "Count",
        arity: 2,
        summary: "Number of elements equal to the item",
        ptr: array_count,
    }
    .register(package);

    package = NativeFunction {
        name: "FindDuplicates",
        arity: 1,
        summary: "Each repeated value once, in order of first repeat",
        ptr: array_find_duplicates,
    }
    .register(package);

    package = NativeFunction {
        name: "SquareCoerced",
        arity: 1,
        summary: "Each element coerced to an integer and squared",
        ptr: array_square_coerced,
    }
    .register(package);

    package = NativeFunction {
        name: "FindAllOccurrences",
        arity: 2,
        summary: "Every index holding an element equal to the target",
        ptr: array_find_all_occurrences,
    }
    .register(package);

    package
}

/// Creates the package named "Array" holding every Array function.
pub fn build_array_package<E: Equivalence>() -> Package<E> {
    register_array_functions(Package::new("Array"))
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;

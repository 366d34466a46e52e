//! Tests for the Array package

use super::build_array_package;
use crate::{
    api::{ArrayOptions, EmptyPolicy, Error, IndexPolicy},
    arrays::Arrays,
    equality::{Loose, Strict},
    stdlib::Package,
};
use arrkit_values::{Kind, Timestamp, Value, seq};
use pretty_assertions::assert_eq;

fn package() -> Package<Loose> {
    build_array_package()
}

/// Calls an Array function with loose equality and default options.
fn call(name: &str, args: &[Value]) -> Result<Value, Error> {
    package().call(name, &Arrays::new(), args)
}

#[test]
fn test_array_package_builds() {
    let package = package();
    assert_eq!(package.name(), "Array");

    let names: Vec<&str> = package.iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec![
            "LinearFind",
            "SumCoerced",
            "RemoveCopy",
            "RemoveInPlace",
            "Append",
            "Truncate",
            "Prepend",
            "Curtail",
            "Concat",
            "InsertAt",
            "Count",
            "FindDuplicates",
            "SquareCoerced",
            "FindAllOccurrences",
        ]
    );
    assert!(package.iter().all(|f| !f.summary.is_empty()));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_linear_find() {
    let s = Value::array(seq![5, "7", 7]);
    assert_eq!(call("LinearFind", &[s.clone(), Value::from(7)]), Ok(Value::Int(1)));
    assert_eq!(call("LinearFind", &[s, Value::from(9)]), Ok(Value::Int(-1)));
}

#[test]
fn test_sum_and_count() {
    let s = Value::array(seq!["3", "2", 4, "x"]);
    assert_eq!(call("SumCoerced", &[s]), Ok(Value::Int(9)));

    let s = Value::array(seq![1, 2, 2, 3]);
    assert_eq!(call("Count", &[s, Value::from(2)]), Ok(Value::Int(2)));
}

#[test]
fn test_find_all_occurrences() {
    let s = Value::array(seq![1, 2, 1, 3, 1]);
    let result = call("FindAllOccurrences", &[s, Value::from(1)]).unwrap();
    assert_eq!(result, Value::array(seq![0, 2, 4]));
}

// ============================================================================
// Copy-producing
// ============================================================================

#[test]
fn test_copy_producing_return_new_handles() {
    let s = Value::array(seq![1, 2, 2, 3]);

    let copy = call("RemoveCopy", &[s.clone(), Value::from(2)]).unwrap();
    assert_eq!(copy, Value::array(seq![1, 3]));
    assert!(!copy.same_handle(&s));
    assert_eq!(s, Value::array(seq![1, 2, 2, 3]));

    let dups = call("FindDuplicates", &[s.clone()]).unwrap();
    assert_eq!(dups, Value::array(seq![2]));

    let squares = call("SquareCoerced", &[Value::array(seq!["2", "3", 4])]).unwrap();
    assert_eq!(squares, Value::array(seq![4, 9, 16]));
}

#[test]
fn test_concat() {
    let a = Value::array(seq![1, 2]);
    let b = Value::array(seq![3, 4]);
    let result = call("Concat", &[a.clone(), b.clone()]).unwrap();
    assert_eq!(result, Value::array(seq![1, 2, 3, 4]));
    assert_eq!(a, Value::array(seq![1, 2]));

    let doubled = call("Concat", &[a.clone(), a]).unwrap();
    assert_eq!(doubled, Value::array(seq![1, 2, 1, 2]));
}

#[test]
fn test_remove_copy_keeps_dates() {
    let when = Timestamp::from_millis(1_000);
    let s = Value::array(seq![when, "x"]);
    let result = call("RemoveCopy", &[s, Value::from("x")]).unwrap();
    assert_eq!(result.as_array().unwrap().borrow()[0].as_date(), Some(when));
}

// ============================================================================
// In-place
// ============================================================================

#[test]
fn test_in_place_preserve_identity() {
    let s = Value::array(seq![1, 2, 2, 3]);

    let result = call("RemoveInPlace", &[s.clone(), Value::from(2)]).unwrap();
    assert!(result.same_handle(&s));
    assert_eq!(s, Value::array(seq![1, 3]));

    call("Append", &[s.clone(), Value::from(4)]).unwrap();
    call("Prepend", &[s.clone(), Value::from(0)]).unwrap();
    assert_eq!(s, Value::array(seq![0, 1, 3, 4]));

    call("Truncate", &[s.clone()]).unwrap();
    call("Curtail", &[s.clone()]).unwrap();
    assert_eq!(s, Value::array(seq![1, 3]));

    let result = call("InsertAt", &[s.clone(), Value::from(2), Value::from(1)]).unwrap();
    assert!(result.same_handle(&s));
    assert_eq!(s, Value::array(seq![1, 2, 3]));
}

#[test]
fn test_remove_in_place_item_is_the_array() {
    let inner = Value::array(seq![1]);
    let s = Value::array(seq![inner.clone(), 2]);
    call("RemoveInPlace", &[s.clone(), inner]).unwrap();
    assert_eq!(s, Value::array(seq![2]));

    // Comparing an element against the sequence itself reads it while it
    // is being edited.
    let s = Value::array(seq!["x", 1]);
    call("RemoveInPlace", &[s.clone(), s.clone()]).unwrap();
    assert_eq!(s, Value::array(seq!["x", 1]));
}

#[test]
fn test_empty_policy() {
    let empty = Value::array(seq![]);
    assert_eq!(
        call("Truncate", &[empty.clone()]),
        Err(Error::EmptySequence {
            operation: "truncate"
        })
    );

    let arrays = Arrays::with_options(ArrayOptions {
        empty: EmptyPolicy::Ignore,
        ..Default::default()
    });
    let result = package().call("Curtail", &arrays, &[empty.clone()]).unwrap();
    assert!(result.same_handle(&empty));
    assert_eq!(empty, Value::array(seq![]));
}

#[test]
fn test_insert_at_index_policy() {
    let s = Value::array(seq![1, 2]);
    for index in [-1i64, 3] {
        assert_eq!(
            call("InsertAt", &[s.clone(), Value::from(9), Value::from(index)]),
            Err(Error::IndexOutOfRange {
                operation: "insert_at",
                index: index.into(),
                len: 2
            })
        );
    }
    assert_eq!(s, Value::array(seq![1, 2]));

    let arrays = Arrays::with_options(ArrayOptions {
        index: IndexPolicy::Clamp,
        ..Default::default()
    });
    let package = package();
    package
        .call("InsertAt", &arrays, &[s.clone(), Value::from("a"), Value::from(-5)])
        .unwrap();
    package
        .call("InsertAt", &arrays, &[s.clone(), Value::from("z"), Value::from(50)])
        .unwrap();
    assert_eq!(s, Value::array(seq!["a", 1, 2, "z"]));
}

#[test]
fn test_insert_at_float_index_truncates() {
    let s = Value::array(seq![1, 3]);
    call("InsertAt", &[s.clone(), Value::from(2), Value::from(1.7)]).unwrap();
    assert_eq!(s, Value::array(seq![1, 2, 3]));
}

// ============================================================================
// Argument Validation
// ============================================================================

#[test]
fn test_wrong_kind() {
    assert_eq!(
        call("Count", &[Value::from("abc"), Value::from("a")]),
        Err(Error::WrongKind {
            operation: "Count",
            position: 1,
            expected: Kind::Array,
            found: Kind::Str
        })
    );
    assert_eq!(
        call("Concat", &[Value::array(seq![]), Value::Null]),
        Err(Error::WrongKind {
            operation: "Concat",
            position: 2,
            expected: Kind::Array,
            found: Kind::Null
        })
    );
    assert_eq!(
        call("InsertAt", &[Value::array(seq![]), Value::Null, Value::from("0")]),
        Err(Error::WrongKind {
            operation: "InsertAt",
            position: 3,
            expected: Kind::Number,
            found: Kind::Str
        })
    );
}

#[test]
fn test_arity() {
    assert_eq!(
        call("Append", &[Value::array(seq![])]),
        Err(Error::Arity {
            operation: "Append",
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_strict_package() {
    let package: Package<Strict> = build_array_package();
    let arrays = Arrays::with_equivalence(Strict, ArrayOptions::default());
    let s = Value::array(seq![1, "1", 1.0]);
    assert_eq!(package.call("Count", &arrays, &[s, Value::from(1)]), Ok(Value::Int(2)));
}

//! Integration tests for the public API.
//!
//! These tests only use what the crate exports: the typed `Arrays` methods
//! and the dynamic `Array` package.

use arrkit_core::values::{Timestamp, record, seq};
use arrkit_core::{
    ArrayOptions, ArrayOptionsOverride, Arrays, EmptyPolicy, Error, IndexPolicy, Loose, Package,
    Sequence, Strict, Value, build_array_package,
};
use pretty_assertions::assert_eq;

#[test]
fn test_typed_and_dynamic_agree() {
    let arrays = Arrays::new();
    let package: Package = build_array_package();
    let s = seq![1, "2", 2, 3, 2.0, "x"];
    let handle = Value::array(s.clone());
    let two = Value::from(2);

    assert_eq!(
        package.call("Count", &arrays, &[handle.clone(), two.clone()]),
        Ok(Value::from(arrays.count(&s, &two)))
    );
    assert_eq!(
        package.call("SumCoerced", &arrays, &[handle.clone()]),
        Ok(Value::Int(arrays.sum_coerced(&s)))
    );
    assert_eq!(
        package.call("RemoveCopy", &arrays, &[handle.clone(), two.clone()]),
        Ok(Value::array(arrays.remove_copy(&s, &two)))
    );
    assert_eq!(
        package.call("FindDuplicates", &arrays, &[handle.clone()]),
        Ok(Value::array(arrays.find_duplicates(&s)))
    );
}

#[test]
fn test_mixed_workflow() {
    let arrays = Arrays::new();
    let launch = Timestamp::from_ymd_hms_milli(1969, 7, 20, 20, 17, 40, 0).unwrap();
    let mut log = seq![launch, "boot", record! { "id" => 7 }];

    arrays.prepend(&mut log, Value::from("start"));
    arrays.append(&mut log, Value::from("end"));
    arrays.insert_at(&mut log, Value::from(0), 2).unwrap();
    assert_eq!(log.len(), 6);
    assert_eq!(arrays.linear_find(&log, &Value::from("0")), Some(2));

    let without_boot = arrays.remove_copy(&log, &Value::from("boot"));
    assert_eq!(without_boot.len(), 5);
    assert_eq!(without_boot[1].as_date(), Some(launch));

    arrays.curtail(&mut log).unwrap();
    arrays.truncate(&mut log).unwrap();
    assert_eq!(log.first(), Some(&Value::Date(launch)));
    assert_eq!(log.len(), 4);
}

#[test]
fn test_options_override() {
    let options = ArrayOptions::default().with_override(&ArrayOptionsOverride {
        empty: Some(EmptyPolicy::Ignore),
        index: Some(IndexPolicy::Clamp),
    });
    let arrays = Arrays::with_options(options);
    let mut s = Sequence::new();

    assert!(arrays.truncate(&mut s).is_ok());
    arrays.insert_at(&mut s, Value::from(1), 10).unwrap();
    assert_eq!(s, seq![1]);

    let rejecting = Arrays::<Loose>::new();
    let mut empty = Sequence::new();
    assert!(matches!(rejecting.curtail(&mut empty), Err(Error::EmptySequence { .. })));
}

#[test]
fn test_error_messages() {
    let arrays = Arrays::new();
    let err = arrays.truncate(&mut Sequence::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "truncate: cannot remove an element from an empty sequence"
    );

    let err = arrays
        .insert_at(&mut seq![1], Value::Null, 5)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "insert_at: index 5 is out of range for a sequence of length 1"
    );

    let package: Package = build_array_package();
    let err = package
        .call("Count", &arrays, &[Value::from(1), Value::from(1)])
        .unwrap_err();
    assert_eq!(err.to_string(), "Count: argument 1 must be array, found number");

    let err = package.call("Nope", &arrays, &[]).unwrap_err();
    assert_eq!(err.to_string(), "unknown function `Nope`");
}

#[test]
fn test_strict_namespace() {
    let arrays = Arrays::with_equivalence(Strict, ArrayOptions::default());
    let s = seq![1, "1", 1];
    assert_eq!(arrays.find_all_occurrences(&s, &Value::from(1)), vec![0, 2]);
    assert_eq!(arrays.find_all_occurrences(&s, &Value::from("1")), vec![1]);
}

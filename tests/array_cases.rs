//! Table-driven cases for the `Array` package.

#[macro_use]
mod cases;

use arrkit::{Error, Kind, Timestamp, Value, record, seq};

fn array(items: arrkit::Sequence) -> Value {
    Value::array(items)
}

test_case! {
    name: linear_find_first_match,
    call: "LinearFind",
    args: [array(seq![4, "7", 7, 7]), 7],
    loose: { 1 },
    strict: { 2 },
}

test_case! {
    name: linear_find_absent,
    call: "LinearFind",
    args: [array(seq![4, 5]), "x"],
    loose: { -1 },
}

test_case! {
    name: sum_coerced_mixed,
    call: "SumCoerced",
    args: [array(seq!["3", "2", 4, "x"])],
    loose: { 9 },
    strict: { 9 },
}

test_case! {
    name: sum_coerced_prefixes,
    call: "SumCoerced",
    args: [array(seq!["10px", " 5", "0x10", 2.9, "-1e5", Value::Null, array(seq![7, 8])])],
    loose: { 39 },
}

test_case! {
    name: remove_copy_dates,
    call: "RemoveCopy",
    args: [array(seq![Timestamp::from_millis(0), 1, "1"]), 1],
    loose: { seq![Timestamp::from_millis(0)] },
    strict: { seq![Timestamp::from_millis(0), "1"] },
}

test_case! {
    name: remove_copy_date_target,
    call: "RemoveCopy",
    args: [array(seq![Timestamp::from_millis(5), 5]), Timestamp::from_millis(5)],
    loose: { seq![5] },
}

test_case! {
    name: remove_in_place_adjacent,
    call: "RemoveInPlace",
    args: [array(seq![1, 2, 2, 3]), 2],
    loose: { seq![1, 3] },
}

test_case! {
    name: append,
    call: "Append",
    args: [array(seq![1, 2]), 3],
    loose: { seq![1, 2, 3] },
}

test_case! {
    name: truncate,
    call: "Truncate",
    args: [array(seq![1, 2, 3])],
    loose: { seq![1, 2] },
}

test_case! {
    name: truncate_empty,
    call: "Truncate",
    args: [array(seq![])],
    loose: { Err(Error::EmptySequence { operation: "truncate" }) },
    lenient: { seq![] },
}

test_case! {
    name: prepend,
    call: "Prepend",
    args: [array(seq![1, 2]), 0],
    loose: { seq![0, 1, 2] },
}

test_case! {
    name: curtail,
    call: "Curtail",
    args: [array(seq![1, 2, 3])],
    loose: { seq![2, 3] },
}

test_case! {
    name: curtail_empty,
    call: "Curtail",
    args: [array(seq![])],
    loose: { Err(Error::EmptySequence { operation: "curtail" }) },
    lenient: { seq![] },
}

test_case! {
    name: concat,
    call: "Concat",
    args: [array(seq![1, 2]), array(seq![3, 4])],
    loose: { seq![1, 2, 3, 4] },
}

test_case! {
    name: insert_at_middle,
    call: "InsertAt",
    args: [array(seq![1, 2, 4]), 3, 2],
    loose: { seq![1, 2, 3, 4] },
}

test_case! {
    name: insert_at_past_end,
    call: "InsertAt",
    args: [array(seq![1, 2]), 9, 5],
    loose: { Err(Error::IndexOutOfRange { index: 5, len: 2, .. }) },
    lenient: { seq![1, 2, 9] },
}

test_case! {
    name: insert_at_negative,
    call: "InsertAt",
    args: [array(seq![1, 2]), 9, -2],
    loose: { Err(Error::IndexOutOfRange { index: -2, .. }) },
    lenient: { seq![9, 1, 2] },
}

test_case! {
    name: count_loose_and_strict,
    call: "Count",
    args: [array(seq![1, 2, 2, "2", 2.0, true]), 2],
    loose: { 4 },
    strict: { 3 },
}

test_case! {
    name: count_booleans,
    call: "Count",
    args: [array(seq![1, "1", true, 2]), true],
    loose: { 3 },
    strict: { 1 },
}

test_case! {
    name: find_duplicates,
    call: "FindDuplicates",
    args: [array(seq![1, 2, 2, 3, 3, 3, 4])],
    loose: { seq![2, 3] },
}

test_case! {
    name: find_duplicates_cross_kind,
    call: "FindDuplicates",
    args: [array(seq!["1", 1, 1.0, "a", "a"])],
    loose: { seq![1, "a"] },
    strict: { seq![1.0, "a"] },
}

test_case! {
    name: square_coerced,
    call: "SquareCoerced",
    args: [array(seq!["2", "3", 4])],
    loose: { seq![4, 9, 16] },
}

test_case! {
    name: find_all_occurrences,
    call: "FindAllOccurrences",
    args: [array(seq![1, 2, 1, 3, 1]), 1],
    loose: { seq![0, 2, 4] },
}

test_case! {
    name: find_all_occurrences_none,
    call: "FindAllOccurrences",
    args: [array(seq![1, 2]), 5],
    loose: { seq![] },
}

test_case! {
    name: records_by_identity,
    call: "Count",
    args: [array(seq![record! { "a" => 1 }, "[object Object]"]), record! { "a" => 1 }],
    loose: { 1 },
    strict: { 0 },
}

test_case! {
    name: wrong_kind,
    call: "SumCoerced",
    args: [42],
    loose: {
        Err(Error::WrongKind { expected: Kind::Array, found: Kind::Number, position: 1, .. })
    },
}

test_case! {
    name: result_is_array,
    call: "RemoveCopy",
    args: [array(seq!["keep", "drop"]), "drop"],
    loose: { Ok(v) if v.as_array().is_some_and(|a| a.len() == 1) },
}

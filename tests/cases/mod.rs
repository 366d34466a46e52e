// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                let expected: arrkit::Value = $expected.into();
                pretty_assertions::assert_eq!(expected, actual, "< expected / got >");
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] loose, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_loose() {
            let arrays = arrkit::Arrays::new();
            let result = package::<arrkit::Loose>().call(function(), &arrays, &args());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] strict, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_strict() {
            let arrays = arrkit::Arrays::with_equivalence(arrkit::Strict, Default::default());
            let result = package::<arrkit::Strict>().call(function(), &arrays, &args());
            assert_case!(result, $expected);
        }
    };

    // Loose equality with the empty and index policies relaxed
    ([$($attrs:meta)*] lenient, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_lenient() {
            let arrays = arrkit::Arrays::with_options(arrkit::ArrayOptions {
                empty: arrkit::EmptyPolicy::Ignore,
                index: arrkit::IndexPolicy::Clamp,
            });
            let result = package::<arrkit::Loose>().call(function(), &arrays, &args());
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, then the call, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        call: $function:literal,
        args: [$($arg:expr),* $(,)?],
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            fn function() -> &'static str {
                $function
            }

            // Values hold shared handles, so every test builds its own.
            fn args() -> Vec<arrkit::Value> {
                vec![$(arrkit::Value::from($arg)),*]
            }

            fn package<E: arrkit::Equivalence>() -> arrkit::Package<E> {
                arrkit::build_array_package()
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}

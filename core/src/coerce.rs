//! Numeric coercion.
//!
//! Two conversions are provided, matching the two ways a dynamically typed
//! element can be read as a number:
//!
//! - [`coerce_to_int`]: leading-numeric-prefix parsing. The element's string
//!   form is scanned for an optional sign and the longest run of digits
//!   (`0x`/`0X` switches to hexadecimal). Anything that yields no digits
//!   coerces to `0`. Used by `sum_coerced` and `square_coerced`.
//! - [`to_number`]: whole-value conversion. A string must be entirely
//!   numeric (after trimming whitespace) or the result is NaN. Used by loose
//!   equality.
//!
//! # Examples
//!
//! ```
//! use arrkit_core::coerce::{coerce_to_int, to_number};
//! use arrkit_values::Value;
//!
//! assert_eq!(coerce_to_int(&Value::from("12px")).value, 12);
//! assert_eq!(coerce_to_int(&Value::from("x")).value, 0);
//! assert_eq!(coerce_to_int(&Value::from(-3.9)).value, -3);
//!
//! assert_eq!(to_number(&Value::from(" 12 ")), 12.0);
//! assert!(to_number(&Value::from("12px")).is_nan());
//! ```

use arrkit_values::{Value, number_to_string};

/// Outcome of [`coerce_to_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coerced {
    pub value: i64,
    /// `true` when the element had no numeric prefix and `value` is the
    /// substituted zero.
    pub recovered: bool,
}

// ============================================================================
// Leading-prefix integer coercion
// ============================================================================

/// Coerce an element to an integer by parsing its leading numeric prefix.
///
/// Never fails: elements without a numeric prefix become `0` with
/// [`Coerced::recovered`] set. Digit runs that overflow `i64` saturate.
pub fn coerce_to_int(value: &Value) -> Coerced {
    let parsed = match value {
        Value::Int(i) => Some(*i),
        Value::Float(x) => parse_int_prefix(&number_to_string(*x)),
        Value::Str(s) => parse_int_prefix(s),
        Value::Array(_) => parse_int_prefix(&primitive_string(value)),
        // "null", "true"/"false", "Wed, ..." and "[object Object]" have no
        // numeric prefix.
        Value::Null | Value::Bool(_) | Value::Date(_) | Value::Record(_) => None,
    };

    match parsed {
        Some(value) => Coerced {
            value,
            recovered: false,
        },
        None => {
            tracing::trace!(kind = %value.kind(), "Non-numeric element coerced to zero");
            Coerced {
                value: 0,
                recovered: true,
            }
        }
    }
}

/// Parse an optional sign and the longest digit run at the start of `s`.
///
/// Leading whitespace is skipped. A `0x`/`0X` prefix after the sign selects
/// base 16. Returns `None` when no digit follows.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(is_js_whitespace);

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut magnitude: i128 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        seen_digit = true;
        magnitude = magnitude
            .saturating_mul(radix as i128)
            .saturating_add(d as i128);
    }

    if !seen_digit {
        return None;
    }

    let signed = if negative { -magnitude } else { magnitude };
    Some(signed.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
}

// ============================================================================
// Whole-value numeric conversion
// ============================================================================

/// Convert an element to a number the way loose equality does.
///
/// `null` is `0`, booleans are `0`/`1`, dates are their millisecond
/// timestamp, strings go through [`string_to_number`], and structured values
/// through their primitive string form.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Int(i) => *i as f64,
        Value::Float(x) => *x,
        Value::Str(s) => string_to_number(s),
        Value::Date(t) => t.as_millis() as f64,
        Value::Array(_) | Value::Record(_) => string_to_number(&primitive_string(value)),
    }
}

/// Convert a whole string to a number, or NaN.
///
/// Surrounding whitespace is ignored and the empty string is `0`. Accepts
/// decimal literals with optional sign, fraction and exponent, `Infinity`
/// with optional sign, and unsigned `0x`/`0o`/`0b` integer literals.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_literal(&s[2..], radix);
    }

    // `f64::from_str` also accepts "inf", "nan" and "infinity"; only plain
    // decimal syntax is numeric here.
    let decimal_syntax = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_syntax {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

// ============================================================================
// Primitive string form
// ============================================================================

/// The string an element turns into when it must be read as a primitive.
///
/// Arrays join their elements' string forms with `,` (null elements
/// contribute nothing), records become `[object Object]`, dates use the UTC
/// string form.
pub fn primitive_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(x) => number_to_string(*x),
        Value::Str(s) => s.clone(),
        Value::Date(t) => t.to_utc_string(),
        Value::Array(array) => {
            // A sequence under mutation cannot be read; it renders as empty.
            let Ok(seq) = array.try_borrow() else {
                return String::new();
            };
            let parts: Vec<String> = seq
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => primitive_string(other),
                })
                .collect();
            parts.join(",")
        }
        Value::Record(_) => "[object Object]".to_string(),
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

#[cfg(test)]
#[path = "coerce_test.rs"]
mod coerce_test;

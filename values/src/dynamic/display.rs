//! Human-readable rendering of values.
//!
//! Output follows what a JavaScript console prints: numbers without a
//! trailing `.0`, exponent notation outside `[1e-6, 1e21)`, quoted strings,
//! ISO-8601 dates, `[a, b]` arrays and `{k: v}` records.

use alloc::string::String;
use core::fmt::{self, Write};

use super::Value;

/// Render a number the way JavaScript's `Number.prototype.toString` does.
///
/// ```
/// use arrkit_values::number_to_string;
///
/// assert_eq!(number_to_string(2.0), "2");
/// assert_eq!(number_to_string(0.5), "0.5");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(1.5e-7), "1.5e-7");
/// assert_eq!(number_to_string(f64::NAN), "NaN");
/// ```
pub fn number_to_string(x: f64) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_number(&mut out, x);
    out
}

pub(crate) fn write_number(out: &mut impl Write, x: f64) -> fmt::Result {
    if x.is_nan() {
        return out.write_str("NaN");
    }
    if x.is_infinite() {
        return out.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if x == 0.0 {
        return out.write_str("0");
    }

    let magnitude = if x < 0.0 { -x } else { x };
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let mut exp = String::new();
        write!(exp, "{:e}", x)?;
        match exp.split_once('e') {
            Some((mantissa, power)) if power.starts_with('-') => {
                write!(out, "{}e{}", mantissa, power)
            }
            Some((mantissa, power)) => write!(out, "{}e+{}", mantissa, power),
            None => out.write_str(&exp),
        }
    } else {
        write!(out, "{}", x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write_number(f, *x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Date(t) => write!(f, "{}", t),
            Value::Array(array) => {
                // A sequence that is being mutated (possibly one containing
                // itself) is shown as a placeholder instead of panicking.
                let Ok(seq) = array.try_borrow() else {
                    return f.write_str("[...]");
                };
                f.write_str("[")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Record(record) => {
                let Ok(fields) = record.try_borrow() else {
                    return f.write_str("{...}");
                };
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {}: {}", name, value)?;
                }
                f.write_str(" }")
            }
        }
    }
}

impl fmt::Display for crate::Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

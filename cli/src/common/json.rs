//! JSON argument decoding.
//!
//! Each command-line argument is one JSON document. Objects of the form
//! `{"$date": <millis>}` decode to dates; every other object decodes to a
//! record.

use arrkit_values::{Sequence, Timestamp, Value};

use super::error::{CliError, CliResult};

/// Key marking an object as a date.
pub const DATE_KEY: &str = "$date";

/// Decode the argument at `position` (1-based, for error messages).
pub fn parse_argument(position: usize, text: &str) -> CliResult<Value> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|source| CliError::Json { position, source })?;
    from_json(position, json)
}

fn from_json(position: usize, json: serde_json::Value) -> CliResult<Value> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => {
            let seq = items
                .into_iter()
                .map(|item| from_json(position, item))
                .collect::<CliResult<Sequence>>()?;
            Value::array(seq)
        }
        serde_json::Value::Object(mut fields) => {
            if fields.len() == 1
                && let Some(millis) = fields.remove(DATE_KEY)
            {
                return date(position, &millis);
            }
            let fields = fields
                .into_iter()
                .map(|(name, value)| Ok((name, from_json(position, value)?)))
                .collect::<CliResult<Vec<_>>>()?;
            Value::record(fields)
        }
    })
}

fn date(position: usize, millis: &serde_json::Value) -> CliResult<Value> {
    match millis.as_i64() {
        Some(millis) => Ok(Value::Date(Timestamp::from_millis(millis))),
        None => Err(CliError::Argument {
            position,
            message: format!("`{DATE_KEY}` must be an integer number of milliseconds, found {millis}"),
        }),
    }
}

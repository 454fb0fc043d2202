//! Result rendering for stdout

use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// Placeholder printed for an empty memory slot
pub const NIL: &str = "nil";

/// Render one result line
///
/// Text mode prints the value alone; JSON mode prints
/// `{"operation": ..., "result": ...}` with `null` for an absent value.
/// JSON has no infinities or NaN, so non-finite numbers go out as their text
/// form (`"inf"`, `"-inf"`, `"NaN"`) and `null` keeps meaning "empty".
pub fn format_result<T>(operation: &str, result: Option<&T>, json: bool) -> String
where
    T: Serialize + Display,
{
    if json {
        let value = result.map_or(Value::Null, |value| {
            match serde_json::to_value(value) {
                Ok(Value::Null) | Err(_) => Value::String(value.to_string()),
                Ok(encoded) => encoded,
            }
        });
        serde_json::json!({
            "operation": operation,
            "result": value,
        })
        .to_string()
    } else {
        result.map_or_else(|| NIL.to_string(), |value| value.to_string())
    }
}

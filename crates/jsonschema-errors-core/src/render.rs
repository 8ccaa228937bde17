//! Turning JSON values into message text.

use serde_json::{Number, Value};

/// Placeholder for a value the message needs but the inputs do not carry.
pub const UNKNOWN: &str = "unknown";

/// Render a value for interpolation into a message.
///
/// Strings are inserted raw and integral floats lose their fraction. Floats
/// at or above `1e21`, or below `1e-6`, use exponent notation. Arrays are
/// joined with `", "` and objects fall back to compact JSON.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None => UNKNOWN.to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| value_text(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(obj @ Value::Object(_)) => obj.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => exponent_text(f),
        Some(f) if f.fract() == 0.0 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Exponent notation with an explicit sign on positive exponents (`1e+21`).
fn exponent_text(f: f64) -> String {
    let text = format!("{f:e}");
    if text.contains("e-") {
        text
    } else {
        text.replacen('e', "e+", 1)
    }
}

/// The observed type of `data`, as named in `INVALID_TYPE` messages.
///
/// Numbers whose rendered text is all digits are `integer`; any other
/// number, including negatives, is `number`.
pub fn observed_type(data: Option<&Value>) -> &'static str {
    match data {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(n)) => {
            let text = number_text(n);
            if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                "integer"
            } else {
                "number"
            }
        }
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Length of a string (in characters) or array, as text.
pub fn length_text(data: Option<&Value>) -> String {
    match data {
        Some(Value::String(s)) => s.chars().count().to_string(),
        Some(Value::Array(items)) => items.len().to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Number of properties of an object, as text.
pub fn property_count_text(data: Option<&Value>) -> String {
    match data {
        Some(Value::Object(map)) => map.len().to_string(),
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(Some(&json!(-1))), "-1");
        assert_eq!(value_text(Some(&json!(4.5))), "4.5");
        assert_eq!(value_text(Some(&json!(4.0))), "4");
        assert_eq!(value_text(Some(&json!(1e20))), "100000000000000000000");
        assert_eq!(value_text(Some(&json!(1e21))), "1e+21");
        assert_eq!(value_text(Some(&json!(-2.5e22))), "-2.5e+22");
        assert_eq!(value_text(Some(&json!(1.5e-7))), "1.5e-7");
        assert_eq!(value_text(Some(&json!("abc"))), "abc");
        assert_eq!(value_text(Some(&json!(["a", 1, null]))), "a, 1, null");
        assert_eq!(value_text(Some(&json!({ "k": 1 }))), "{\"k\":1}");
        assert_eq!(value_text(None), UNKNOWN);
    }

    #[test]
    fn test_observed_type_refines_numbers_and_arrays() {
        assert_eq!(observed_type(Some(&json!(4))), "integer");
        assert_eq!(observed_type(Some(&json!(4.0))), "integer");
        assert_eq!(observed_type(Some(&json!(4.5))), "number");
        assert_eq!(observed_type(Some(&json!(1e21))), "number");
        assert_eq!(observed_type(Some(&json!(1e20))), "integer");
        assert_eq!(observed_type(Some(&json!(-3))), "number");
        assert_eq!(observed_type(Some(&json!([1, 2]))), "array");
        assert_eq!(observed_type(Some(&json!({}))), "object");
        assert_eq!(observed_type(Some(&json!(null))), "null");
        assert_eq!(observed_type(Some(&json!(true))), "boolean");
        assert_eq!(observed_type(None), "missing");
    }

    #[test]
    fn test_lengths_count_characters() {
        assert_eq!(length_text(Some(&json!("héllo"))), "5");
        assert_eq!(length_text(Some(&json!([1, 2, 3]))), "3");
        assert_eq!(length_text(Some(&json!(12))), UNKNOWN);
        assert_eq!(property_count_text(Some(&json!({ "a": 1, "b": 2 }))), "2");
        assert_eq!(property_count_text(None), UNKNOWN);
    }
}

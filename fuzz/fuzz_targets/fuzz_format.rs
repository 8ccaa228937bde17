#![no_main]

use jsonschema_errors_core::{format_value, FormatOptions};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

// Input: a JSON array `[schema, data, result]`. Errors are fine, panics are not.
fuzz_target!(|data: &[u8]| {
    let Ok(Value::Array(parts)) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let [schema, data, result] = parts.as_slice() else {
        return;
    };
    let _ = format_value(schema, data, Some(result), &FormatOptions::default());
});

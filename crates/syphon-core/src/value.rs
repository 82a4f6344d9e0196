//! Coercions between JSON values and the string/boolean view form controls have of them.

use serde_json::Value;

/// Render a value the way a form control displays it.
///
/// Strings are taken verbatim, numbers and booleans use their literal form,
/// `null` renders as `"null"`, arrays are comma-joined and objects collapse to
/// `"[object Object]"`.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => number_string(f),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // nested nulls render empty inside a joined list
                Value::Null => String::new(),
                other => display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Largest integer an f64 holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Number-to-string as a browser does it: `2.0` is `"2"`, `1e21` is `"1e+21"`.
fn number_string(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        return (f as i64).to_string();
    }
    ryu_js::Buffer::new().format(f).to_string()
}

/// Loose truthiness used when a non-boolean lands on a checked-state.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether `needle` appears in `haystack` when both sides are compared as display strings.
pub fn contains_display(haystack: &[Value], needle: &str) -> bool {
    haystack.iter().any(|item| display_string(item) == needle)
}

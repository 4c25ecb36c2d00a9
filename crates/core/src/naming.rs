//! Helpers for turning type identifiers and key values into channel and
//! event name segments.

use serde_json::Value;

/// Separators that split namespace segments in a type identifier.
///
/// Rust paths use `::`; identifiers coming from other systems commonly use
/// a backslash.
const NAMESPACE_SEPARATORS: [&str; 2] = ["::", "\\"];

/// Replace every namespace separator in `identifier` with `.`.
///
/// `app::notifications::OrderShipped` and `App\Notifications\OrderShipped`
/// become `app.notifications.OrderShipped` and `App.Notifications.OrderShipped`.
/// Already dotted identifiers are returned unchanged.
pub fn dotted(identifier: &str) -> String {
    NAMESPACE_SEPARATORS
        .iter()
        .fold(identifier.to_string(), |acc, sep| acc.replace(sep, "."))
}

/// Render a primary key value as a channel name segment.
///
/// Strings are used bare; every other JSON value uses its JSON text, so
/// `123` renders as `123` and `"abc"` as `abc`.
pub fn key_segment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Short name of a JSON value's kind, used in type-mismatch errors.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

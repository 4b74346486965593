//! Input sanitization helpers.
//!
//! Every string field that crosses the HTTP boundary goes through these
//! functions before it reaches a value object constructor. Sanitization is
//! pure: raw input in, cleaned string or rejection out.

use serde_json::Value;

use super::error::ValidationError;

/// Remove angle-bracket markup from a string.
///
/// Everything between `<` and the matching `>` is dropped, including nested
/// brackets, so `<b>hi</b>` becomes `hi` and `<script>x</script>` becomes `x`.
pub fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth: usize = 0;
    for ch in raw.chars() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Strip markup and trim surrounding whitespace.
pub fn sanitize(raw: &str) -> String {
    strip_markup(raw).trim().to_string()
}

/// Extract a required string field from an untyped JSON body.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidType`] when the field is absent or is
/// not a JSON string.
pub fn required_field<'a>(body: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::InvalidType(field.to_string()))
}

//! Parse-or-default boundary for raw form fields
//!
//! The form presents every numeric input as free text, and empty or mangled
//! fields must behave as if the user had typed the field's default (usually 0).
//! This is the only anomaly class in the system and it is absorbed here, at the
//! boundary, so the engine itself never sees an invalid number and never has to
//! raise.

use tracing::debug;

/// Parse a raw form field, falling back to `default` for anything unusable
///
/// Unusable covers: empty or whitespace-only text, text that does not parse as
/// a number, and values that parse but are negative or non-finite. The form's
/// quantities are all non-negative, so a negative entry is treated the same as
/// a malformed one.
#[must_use]
pub fn parse_field_or(raw: &str, default: f64) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        Ok(v) => {
            debug!(raw = trimmed, value = v, default, "out-of-range field coerced to default");
            default
        }
        Err(_) => {
            debug!(raw = trimmed, default, "unparseable field coerced to default");
            default
        }
    }
}

/// Parse a raw form field, defaulting to zero
#[inline]
#[must_use]
pub fn parse_field(raw: &str) -> f64 {
    parse_field_or(raw, 0.0)
}

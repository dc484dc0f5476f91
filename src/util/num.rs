/// Renders non-finite values the way programs see them.
fn format_non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Formats a number for program output.
///
/// Integral values are written without a fractional part; all other values
/// use the fewest digits that still round-trip to the same `f64`. Exponent
/// notation is never used.
///
/// ## Parameters
/// - `value`: The number to render.
///
/// ## Returns
/// The display text of `value`.
///
/// ## Example
/// ```
/// use lox::util::num::format_number;
///
/// assert_eq!(format_number(6.0), "6");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    format_non_finite(value).map_or_else(|| value.to_string(), str::to_string)
}

/// Formats a number the way literals are echoed back.
///
/// Integral values keep exactly one fractional digit (`42` becomes `42.0`);
/// fractional values drop trailing zeros (`1234.1200` becomes `1234.12`).
///
/// ## Parameters
/// - `value`: The number to render.
///
/// ## Returns
/// The literal text of `value`.
///
/// ## Example
/// ```
/// use lox::util::num::format_literal;
///
/// assert_eq!(format_literal(42.0), "42.0");
/// assert_eq!(format_literal(1234.12), "1234.12");
/// assert_eq!(format_literal(0.0), "0.0");
/// ```
#[must_use]
pub fn format_literal(value: f64) -> String {
    if let Some(text) = format_non_finite(value) {
        return text.to_string();
    }
    if value.fract() == 0.0 {
        format!("{value}.0")
    } else {
        value.to_string()
    }
}

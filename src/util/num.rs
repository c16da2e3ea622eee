/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Scale factor for the fixed 6-decimal rounding tolerance.
const TOLERANCE_SCALE: f64 = 1e6;

/// Rounds a value to 6 decimal places and coerces it to an integral `f64`
/// when the rounded value is an integer.
///
/// This eliminates floating-point noise such as `0.1 + 0.2` producing
/// `0.30000000000000004`, while preserving genuinely fractional results
/// like `1.5`. Values at or beyond [`MAX_SAFE_INT`] in magnitude (and
/// non-finite values) are returned unchanged, since they carry no
/// fractional part to round and scaling them would overflow.
///
/// # Parameters
/// - `value`: The raw computed value.
///
/// # Returns
/// The canonical form of `value`.
///
/// # Example
/// ```
/// use bodmas::util::num::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2), 0.3);
/// assert_eq!(format_number(5.0000001), 5.0);
/// assert_eq!(format_number(1.5), 1.5);
/// ```
#[must_use]
pub fn format_number(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= MAX_SAFE_INT {
        return value;
    }

    let rounded = (value * TOLERANCE_SCALE).round() / TOLERANCE_SCALE;
    if rounded == 0.0 {
        // Collapse -0.0 so it renders as plain 0.
        return 0.0;
    }

    if rounded.fract() == 0.0 {
        rounded.trunc()
    } else {
        rounded
    }
}

/// Whether a value is an integer after canonical rounding.
///
/// # Example
/// ```
/// use bodmas::util::num::is_integer;
///
/// assert!(is_integer(4.0));
/// assert!(!is_integer(4.5));
/// ```
#[must_use]
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && format_number(value).fract() == 0.0
}

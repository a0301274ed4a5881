/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` in magnitude round to the nearest representable
/// double, which is how mixed integer/float arithmetic is defined here.
///
/// ## Example
/// ```
/// use shunt::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero into an `i64`.
///
/// Out-of-range values saturate at `i64::MIN`/`i64::MAX` and `NaN` becomes
/// `0`. Integer exponentiation relies on this to narrow its floating result.
///
/// ## Example
/// ```
/// use shunt::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(8.999), 8);
/// assert_eq!(f64_to_i64_truncated(-2.5), -2);
/// assert_eq!(f64_to_i64_truncated(f64::INFINITY), i64::MAX);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_truncated(value: f64) -> i64 {
    value as i64
}

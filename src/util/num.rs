/// Largest `n` whose factorial is finite as an `f64` (`170! ≈ 7.26e306`).
pub const MAX_FINITE_FACTORIAL: u64 = 170;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Truncates an `f64` towards zero and converts it to a `u64`, if the
/// truncated value is finite, non-negative and exactly representable.
///
/// `-0.5` truncates to `0` and therefore succeeds.
///
/// ## Errors
/// Returns `Err(error)` for NaN, infinities, values that truncate below zero
/// and values above `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use treecalc::util::num::f64_to_u64_truncated;
///
/// assert_eq!(f64_to_u64_truncated(5.9, ()), Ok(5));
/// assert_eq!(f64_to_u64_truncated(-0.5, ()), Ok(0));
/// assert!(f64_to_u64_truncated(-1.0, ()).is_err());
/// assert!(f64_to_u64_truncated(f64::NAN, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn f64_to_u64_truncated<E>(value: f64, error: E) -> Result<u64, E> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > MAX_SAFE_U64_INT as f64 {
        return Err(error);
    }
    Ok(truncated as u64)
}

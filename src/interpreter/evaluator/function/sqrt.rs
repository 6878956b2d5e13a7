use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Computes the square root of a non-negative value.
///
/// `-0.0` is not negative and yields `-0.0`, as `f64::sqrt` defines.
///
/// # Errors
/// `NegativeSqrt` when `x` is below zero.
///
/// # Example
/// ```
/// use treecalc::{error::EvalError, interpreter::evaluator::function::sqrt::sqrt};
///
/// assert_eq!(sqrt(144.0), Ok(12.0));
/// assert_eq!(sqrt(-1.0), Err(EvalError::NegativeSqrt));
/// ```
pub fn sqrt(x: f64) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(EvalError::NegativeSqrt);
    }
    Ok(x.sqrt())
}

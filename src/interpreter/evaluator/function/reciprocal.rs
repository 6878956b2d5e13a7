use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, function::builtin},
};

/// Cotangent of `x` radians, `1 / tan(x)`.
///
/// # Errors
/// `CotUndefined` when `tan(x)` is exactly zero.
///
/// # Example
/// ```
/// use treecalc::{error::EvalError, interpreter::evaluator::function::reciprocal::cot};
///
/// assert!((cot(std::f64::consts::FRAC_PI_4).unwrap() - 1.0).abs() < 1e-12);
/// assert_eq!(cot(0.0), Err(EvalError::CotUndefined));
/// ```
pub fn cot(x: f64) -> EvalResult<f64> {
    let tan = builtin::tan(x);
    if tan == 0.0 {
        return Err(EvalError::CotUndefined);
    }
    Ok(1.0 / tan)
}

/// Hyperbolic cotangent, `1 / tanh(x)`; positive infinity where `tanh(x)` is
/// zero.
#[must_use]
pub fn coth(x: f64) -> f64 {
    reciprocal_or_infinity(builtin::tanh(x))
}

/// Hyperbolic secant, `1 / cosh(x)`. `cosh` is never zero.
#[must_use]
pub fn sech(x: f64) -> f64 {
    1.0 / builtin::cosh(x)
}

/// Hyperbolic cosecant, `1 / sinh(x)`; positive infinity where `sinh(x)` is
/// zero.
#[must_use]
pub fn csch(x: f64) -> f64 {
    reciprocal_or_infinity(builtin::sinh(x))
}

/// `1 / denominator`, with a zero denominator of either sign mapped to
/// positive infinity.
fn reciprocal_or_infinity(denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::INFINITY
    } else {
        1.0 / denominator
    }
}

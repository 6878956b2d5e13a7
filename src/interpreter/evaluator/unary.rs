use crate::{
    ast::Node,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::{MAX_FINITE_FACTORIAL, f64_to_u64_truncated},
};

impl Node {
    /// Evaluates the factorial of a value.
    ///
    /// The operand is truncated towards zero first, so `5.9!` is `5!` and
    /// `-0.5!` is `0!`. The product is computed iteratively; `0!` and `1!` are
    /// `1`. Operands past [`MAX_FINITE_FACTORIAL`] overflow to positive
    /// infinity without iterating, and a NaN operand yields NaN.
    ///
    /// # Parameters
    /// - `value`: The operand.
    ///
    /// # Returns
    /// `n!` for `n = trunc(value)`.
    ///
    /// # Errors
    /// `NegativeFactorial` when the truncated operand is below zero.
    ///
    /// # Example
    /// ```
    /// use treecalc::{ast::Node, error::EvalError};
    ///
    /// assert_eq!(Node::eval_factorial(5.0), Ok(120.0));
    /// assert_eq!(Node::eval_factorial(0.0), Ok(1.0));
    /// assert_eq!(Node::eval_factorial(-3.0), Err(EvalError::NegativeFactorial));
    /// ```
    pub fn eval_factorial(value: f64) -> EvalResult<f64> {
        if value.is_nan() {
            return Ok(f64::NAN);
        }
        if value.trunc() < 0.0 {
            return Err(EvalError::NegativeFactorial);
        }

        let Ok(n) = f64_to_u64_truncated(value, ()) else {
            return Ok(f64::INFINITY);
        };
        if n > MAX_FINITE_FACTORIAL {
            return Ok(f64::INFINITY);
        }

        // Every factor is at most `MAX_FINITE_FACTORIAL`, well inside the
        // exactly representable integers.
        #[allow(clippy::cast_precision_loss)]
        let product: f64 = (2..=n).map(|factor| factor as f64).product();
        Ok(product)
    }
}

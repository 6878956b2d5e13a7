use crate::{ast::Node, error::EvalError, interpreter::evaluator::core::EvalResult};

impl Node {
    /// Evaluates a checked scalar division.
    ///
    /// A divisor of exactly `0.0` (or `-0.0`) is an error instead of an
    /// infinity. Tiny non-zero divisors still divide normally.
    ///
    /// # Errors
    /// `DivisionByZero` when `right` is zero.
    ///
    /// # Example
    /// ```
    /// use treecalc::{ast::Node, error::EvalError};
    ///
    /// assert_eq!(Node::eval_div(3.0, 2.0), Ok(1.5));
    /// assert_eq!(Node::eval_div(1.0, 0.0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn eval_div(left: f64, right: f64) -> EvalResult<f64> {
        if right == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(left / right)
    }
}

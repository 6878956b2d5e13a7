use tracing::trace;

use crate::{ast::Node, error::EvalError, interpreter::evaluator::function};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl Node {
    /// Evaluates the tree and returns its value.
    ///
    /// This is the main entry point for evaluation. Children are evaluated
    /// first, left before right, then the node's own operator or function is
    /// applied. The first error aborts the traversal; there are no partial
    /// results.
    ///
    /// Evaluation is pure: the same tree always yields the same result.
    ///
    /// # Errors
    /// - `DivisionByZero` when a divisor evaluates to exactly `0.0`.
    /// - `CotUndefined` when `cot` is taken where `tan` is zero.
    /// - `NegativeSqrt` for the square root of a negative value.
    /// - `NegativeFactorial` for the factorial of a negative value.
    ///
    /// # Example
    /// ```
    /// use treecalc::{error::EvalError, parse};
    ///
    /// let tree = parse("(3.5 + 3.2) * 2").unwrap();
    /// assert!((tree.evaluate().unwrap() - 13.4).abs() < 1e-12);
    ///
    /// let tree = parse("1 / (2 - 2)").unwrap();
    /// assert_eq!(tree.evaluate(), Err(EvalError::DivisionByZero));
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Constant(value) => Ok(*value),
            Self::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                let value = Self::eval_binary(*op, left, right)?;
                trace!(%op, left, right, value, "evaluated binary node");
                Ok(value)
            },
            Self::Unary { function, operand } => {
                let operand = operand.evaluate()?;
                let value = function::core::apply(*function, operand)?;
                trace!(%function, operand, value, "evaluated unary node");
                Ok(value)
            },
        }
    }
}

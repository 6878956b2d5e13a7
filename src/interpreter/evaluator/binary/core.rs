use crate::{
    ast::{BinaryOperator, Node},
    interpreter::evaluator::core::EvalResult,
};

impl Node {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// Addition, subtraction and multiplication cannot fail and are applied
    /// directly. Division goes through [`Node::eval_div`] for its zero check
    /// and exponentiation through [`Node::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use treecalc::ast::{BinaryOperator, Node};
    ///
    /// assert_eq!(Node::eval_binary(BinaryOperator::Add, 3.0, 4.0), Ok(7.0));
    /// assert_eq!(Node::eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => Self::eval_div(left, right),
            BinaryOperator::Pow => Ok(Self::eval_pow(left, right)),
        }
    }
}
